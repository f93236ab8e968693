//! Lock-free mode flags
//!
//! Written by the button handler, read by the control loop. Every field is
//! a single atomic word, so the loop sees either the value before a toggle
//! or the value after it, never a mix. No locks are involved: the writer
//! may preempt the reader at any point and must never wait on it.

use portable_atomic::{AtomicBool, AtomicU32, Ordering};

/// Result of an accepted button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeChange {
    /// Red/blue brightness output was switched on or off
    PwmToggled { enabled: bool },
    /// Green indicator LED was switched; `presses` counts accepted presses
    IndicatorToggled { on: bool, presses: u32 },
}

/// Point-in-time copy of the mode flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModeSnapshot {
    pub pwm_enabled: bool,
    pub indicator_on: bool,
    pub press_count: u32,
}

impl Default for ModeSnapshot {
    fn default() -> Self {
        Self {
            pwm_enabled: true,
            indicator_on: false,
            press_count: 0,
        }
    }
}

/// Shared mode flags
///
/// Intended to live in a `static`. Mutation is crate-private and only
/// reachable through [`ButtonHandler`](crate::input::ButtonHandler), which
/// calls it after the debounce gate has admitted an edge.
#[derive(Debug)]
pub struct ModeState {
    pwm_enabled: AtomicBool,
    indicator_on: AtomicBool,
    press_count: AtomicU32,
}

impl Default for ModeState {
    fn default() -> Self {
        Self::new()
    }
}

impl ModeState {
    /// Create the power-on state: PWM enabled, indicator off, no presses
    pub const fn new() -> Self {
        Self {
            pwm_enabled: AtomicBool::new(true),
            indicator_on: AtomicBool::new(false),
            press_count: AtomicU32::new(0),
        }
    }

    /// Whether red/blue brightness output is enabled
    pub fn pwm_enabled(&self) -> bool {
        self.pwm_enabled.load(Ordering::Acquire)
    }

    /// Whether the green indicator is on
    pub fn indicator_on(&self) -> bool {
        self.indicator_on.load(Ordering::Acquire)
    }

    /// Number of accepted indicator-button presses since boot
    pub fn press_count(&self) -> u32 {
        self.press_count.load(Ordering::Acquire)
    }

    /// Read all flags
    ///
    /// Each field is individually consistent. A toggle landing between two
    /// loads shows up in the later fields only, which is harmless because
    /// the fields are independent of each other.
    pub fn snapshot(&self) -> ModeSnapshot {
        ModeSnapshot {
            pwm_enabled: self.pwm_enabled(),
            indicator_on: self.indicator_on(),
            press_count: self.press_count(),
        }
    }

    /// Flip the PWM flag, returning the new value
    pub(crate) fn toggle_pwm(&self) -> bool {
        !self.pwm_enabled.fetch_xor(true, Ordering::AcqRel)
    }

    /// Flip the indicator flag and count the press
    ///
    /// Returns the new indicator value and the new press count.
    pub(crate) fn toggle_indicator(&self) -> (bool, u32) {
        let on = !self.indicator_on.fetch_xor(true, Ordering::AcqRel);
        let presses = self.press_count.fetch_add(1, Ordering::AcqRel).wrapping_add(1);
        (on, presses)
    }
}
