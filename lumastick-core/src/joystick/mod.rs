//! Joystick sampling and axis mapping
//!
//! - [`AnalogSampler`] reads both axes from the shared ADC
//! - [`brightness`] turns axis deflection into an LED duty
//! - [`map_x`] / [`map_y`] turn axis readings into marker coordinates

pub mod brightness;
pub mod position;
pub mod sampler;

pub use brightness::brightness;
pub use position::{map_x, map_y};
pub use sampler::{AnalogSampler, Axis, AxisSample};
