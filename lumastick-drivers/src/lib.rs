//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lumastick-core for external components:
//!
//! - Displays (SSD1306 128x64 OLED over I2C)

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod display;
