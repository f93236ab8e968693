//! Axis reading to marker coordinate

use crate::config::{ADC_MAX, MAX_MARKER_X, MAX_MARKER_Y};

/// Marker column for a raw X reading (0 at raw 0, WIDTH - 8 at raw 4095)
pub fn map_x(raw: u16) -> i32 {
    i32::from(raw.min(ADC_MAX)) * MAX_MARKER_X / i32::from(ADC_MAX)
}

/// Marker row for a raw Y reading
///
/// Inverted: pushing the stick up raises the reading and moves the marker
/// toward row 0.
pub fn map_y(raw: u16) -> i32 {
    MAX_MARKER_Y - i32::from(raw.min(ADC_MAX)) * MAX_MARKER_Y / i32::from(ADC_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, MARKER_SIZE};
    use proptest::prelude::*;

    #[test]
    fn test_corners() {
        assert_eq!(map_x(0), 0);
        assert_eq!(map_x(ADC_MAX), DISPLAY_WIDTH - MARKER_SIZE);
        assert_eq!(map_y(0), DISPLAY_HEIGHT - MARKER_SIZE);
        assert_eq!(map_y(ADC_MAX), 0);
    }

    #[test]
    fn test_center() {
        // 2048 * 120 / 4095 = 60, the centered column
        assert_eq!(map_x(2048), 60);
        // 56 - 2048 * 56 / 4095 = 56 - 28
        assert_eq!(map_y(2048), 28);
    }

    proptest! {
        #[test]
        fn prop_marker_stays_on_screen(raw in 0u16..=ADC_MAX) {
            prop_assert!((0..=MAX_MARKER_X).contains(&map_x(raw)));
            prop_assert!((0..=MAX_MARKER_Y).contains(&map_y(raw)));
        }

        #[test]
        fn prop_y_is_inverted(a in 0u16..=ADC_MAX, b in 0u16..=ADC_MAX) {
            prop_assume!(a <= b);
            prop_assert!(map_x(a) <= map_x(b));
            prop_assert!(map_y(a) >= map_y(b));
        }
    }
}
