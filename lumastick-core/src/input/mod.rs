//! Button input: debouncing and edge handling

pub mod debounce;
pub mod handler;

pub use debounce::{DebounceGate, DebounceTable};
pub use handler::ButtonHandler;

/// Physical button that raised an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonSource {
    /// Board button A, toggles red/blue brightness output
    Mode,
    /// Joystick push-button, toggles the green indicator
    Indicator,
}

impl ButtonSource {
    /// Number of button sources
    pub const COUNT: usize = 2;

    /// All sources, in table order
    pub const ALL: [ButtonSource; Self::COUNT] = [ButtonSource::Mode, ButtonSource::Indicator];

    /// Index into per-source tables
    pub const fn index(self) -> usize {
        match self {
            ButtonSource::Mode => 0,
            ButtonSource::Indicator => 1,
        }
    }
}
