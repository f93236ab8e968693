//! Marker rendering

pub mod renderer;

pub use renderer::{RenderState, Renderer};
