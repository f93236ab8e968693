//! Board-agnostic core logic for the joystick dimmer firmware
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (analog input, PWM output, display surface)
//! - Button debouncing and the handler that mutates shared mode state
//! - Lock-free mode state shared between button and loop contexts
//! - Joystick sampling and axis-to-brightness / axis-to-position mapping
//! - Incremental marker rendering
//! - The per-frame control loop
//! - Compile-time configuration types

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod control;
pub mod input;
pub mod joystick;
pub mod render;
pub mod state;
pub mod traits;

#[cfg(test)]
mod testing;
