//! Button edge handler
//!
//! Bound to the shared debounce table, the shared mode state and the
//! green LED output when the firmware starts. Each edge is either dropped
//! by the gate or turned into exactly one mode change. The handler does
//! not touch the renderer or the analog sampler and never blocks.

use crate::state::{ModeChange, ModeState};
use crate::traits::{LedChannel, PwmOutput};

use super::{ButtonSource, DebounceTable};

/// Green LED duty while the indicator is on
const INDICATOR_ON_DUTY: u8 = 255;

/// Handles debounced button edges
pub struct ButtonHandler<'a, P> {
    gates: &'a DebounceTable,
    mode: &'a ModeState,
    indicator_led: P,
}

impl<'a, P: PwmOutput> ButtonHandler<'a, P> {
    /// Bind the handler and bring the green LED in line with the mode state
    pub fn new(gates: &'a DebounceTable, mode: &'a ModeState, mut indicator_led: P) -> Self {
        indicator_led.set_duty(LedChannel::Green, indicator_duty(mode.indicator_on()));
        indicator_led.set_enabled(LedChannel::Green, true);
        Self {
            gates,
            mode,
            indicator_led,
        }
    }

    /// Process a rising edge from `source` observed at `timestamp_ms`
    ///
    /// Returns `None` if the edge was rejected as a bounce.
    pub fn on_edge(&mut self, source: ButtonSource, timestamp_ms: u32) -> Option<ModeChange> {
        if !self.gates.admit(source, timestamp_ms) {
            return None;
        }

        let change = match source {
            ButtonSource::Mode => ModeChange::PwmToggled {
                enabled: self.mode.toggle_pwm(),
            },
            ButtonSource::Indicator => {
                let (on, presses) = self.mode.toggle_indicator();
                self.indicator_led
                    .set_duty(LedChannel::Green, indicator_duty(on));
                ModeChange::IndicatorToggled { on, presses }
            }
        };

        Some(change)
    }

    /// Shared mode state this handler writes to
    pub fn mode(&self) -> &ModeState {
        self.mode
    }
}

fn indicator_duty(on: bool) -> u8 {
    if on {
        INDICATOR_ON_DUTY
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPwm;

    #[test]
    fn test_new_sets_green_off_and_enabled() {
        let gates = DebounceTable::new(200);
        let mode = ModeState::new();
        let handler = ButtonHandler::new(&gates, &mode, RecordingPwm::new());

        assert_eq!(handler.indicator_led.duty(LedChannel::Green), Some(0));
        assert!(handler.indicator_led.enabled(LedChannel::Green));
    }

    #[test]
    fn test_indicator_bounce_counted_once() {
        let gates = DebounceTable::new(200);
        let mode = ModeState::new();
        let mut handler = ButtonHandler::new(&gates, &mode, RecordingPwm::new());

        assert_eq!(
            handler.on_edge(ButtonSource::Indicator, 0),
            Some(ModeChange::IndicatorToggled { on: true, presses: 1 })
        );
        assert_eq!(handler.on_edge(ButtonSource::Indicator, 150), None);

        assert_eq!(mode.press_count(), 1);
        assert!(mode.indicator_on());
        assert_eq!(handler.indicator_led.duty(LedChannel::Green), Some(255));
    }

    #[test]
    fn test_mode_button_toggles_twice() {
        let gates = DebounceTable::new(200);
        let mode = ModeState::new();
        let mut handler = ButtonHandler::new(&gates, &mode, RecordingPwm::new());

        assert_eq!(
            handler.on_edge(ButtonSource::Mode, 0),
            Some(ModeChange::PwmToggled { enabled: false })
        );
        assert_eq!(
            handler.on_edge(ButtonSource::Mode, 250),
            Some(ModeChange::PwmToggled { enabled: true })
        );
        assert!(mode.pwm_enabled());
        // Mode button never drives the indicator LED or the counter
        assert_eq!(handler.indicator_led.duty(LedChannel::Green), Some(0));
        assert_eq!(mode.press_count(), 0);
    }

    #[test]
    fn test_indicator_off_drives_zero_duty() {
        let gates = DebounceTable::new(200);
        let mode = ModeState::new();
        let mut handler = ButtonHandler::new(&gates, &mode, RecordingPwm::new());

        handler.on_edge(ButtonSource::Indicator, 0);
        assert_eq!(
            handler.on_edge(ButtonSource::Indicator, 300),
            Some(ModeChange::IndicatorToggled { on: false, presses: 2 })
        );
        assert_eq!(handler.indicator_led.duty(LedChannel::Green), Some(0));
    }

    #[test]
    fn test_buttons_debounced_separately() {
        let gates = DebounceTable::new(500);
        let mode = ModeState::new();
        let mut handler = ButtonHandler::new(&gates, &mode, RecordingPwm::new());

        assert!(handler.on_edge(ButtonSource::Mode, 100).is_some());
        assert!(handler.on_edge(ButtonSource::Indicator, 120).is_some());
        assert!(handler.on_edge(ButtonSource::Mode, 400).is_none());
        assert!(handler.on_edge(ButtonSource::Mode, 600).is_some());
        assert_eq!(handler.mode().snapshot().press_count, 1);
    }
}
