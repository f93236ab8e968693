//! Configuration types
//!
//! Everything here is fixed at compile time. Geometry and ADC constants are
//! properties of the board; [`LoopConfig`] carries the per-deployment
//! timing values that the firmware build script generates from `board.toml`.

pub mod geometry;
pub mod timing;

pub use geometry::*;
pub use timing::*;
