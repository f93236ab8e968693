//! State shared between tasks
//!
//! Both buttons feed the same mode state; the control loop only reads it.
//! Everything here is lock-free so neither task can stall the other.

use lumastick_core::input::DebounceTable;
use lumastick_core::state::ModeState;
use portable_atomic::{AtomicBool, Ordering};

use crate::config::LOOP_CONFIG;

/// PWM enable and indicator toggles
pub static MODE: ModeState = ModeState::new();

/// Debounce gates for the mode and joystick buttons
pub static GATES: DebounceTable = DebounceTable::new(LOOP_CONFIG.debounce_window_ms);

/// Last observed level of the joystick button (pulled up, high = released)
static JOYSTICK_BUTTON_HIGH: AtomicBool = AtomicBool::new(true);

pub fn set_joystick_button_level(high: bool) {
    JOYSTICK_BUTTON_HIGH.store(high, Ordering::Release);
}

pub fn joystick_button_level() -> bool {
    JOYSTICK_BUTTON_HIGH.load(Ordering::Acquire)
}
