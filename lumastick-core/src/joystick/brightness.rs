//! Axis deflection to LED duty

use crate::config::{AXIS_CENTER, BRIGHTNESS_DIVISOR, DEADZONE_HIGH, DEADZONE_LOW};

/// Map a raw axis reading to a PWM duty (0-255)
///
/// Readings strictly inside (1940, 2200) count as centered and give 0.
/// Outside that band the duty is `|raw - 2048| / 16`, truncated, so full
/// deflection gives 128 at raw 0 and 127 at raw 4095. The band is not
/// symmetric around 2048 and the extremes differ by one; both are kept
/// as-is for compatibility with existing boards.
///
/// `enabled = false` forces 0 regardless of `raw`.
pub fn brightness(raw: u16, enabled: bool) -> u8 {
    if !enabled || (raw > DEADZONE_LOW && raw < DEADZONE_HIGH) {
        return 0;
    }
    let duty = raw.abs_diff(AXIS_CENTER) / BRIGHTNESS_DIVISOR;
    u8::try_from(duty).unwrap_or(u8::MAX)
}
