//! Hardware abstraction traits
//!
//! These traits define the interface between the application logic
//! and hardware-specific implementations.

pub mod analog;
pub mod display;
pub mod pwm;

pub use analog::{AnalogError, AnalogInput};
pub use display::{DisplayError, DisplaySurface};
pub use pwm::{LedChannel, PwmOutput};
