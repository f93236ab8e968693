//! Mode state shared between the button handler and the control loop

pub mod mode;

pub use mode::{ModeChange, ModeSnapshot, ModeState};
