//! Embassy async tasks
//!
//! The control loop and the button handler run independently and only
//! meet in the lock-free state in `crate::shared`.

pub mod button;
pub mod control;

pub use button::button_task;
pub use control::{control_task, Display, Leds};
