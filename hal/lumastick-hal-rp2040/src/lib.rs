//! RP2040-specific HAL for the Lumastick firmware
//!
//! Implements the `lumastick-core` hardware traits on top of `embassy-rp`:
//!
//! - ADC channel mapping and a blocking joystick ADC (`AnalogInput`)
//! - PWM slice wrapper driving up to two LED channels (`PwmOutput`)

#![cfg_attr(not(test), no_std)]

pub mod adc;
pub mod pwm;

pub use adc::{joystick_channel_index, AdcChannel, JoystickAdc};
pub use pwm::{LedPwm, SlotTable};
