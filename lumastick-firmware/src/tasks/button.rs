//! Button task
//!
//! Waits on both buttons at once. Each rising edge is timestamped and passed
//! through the debounce gate of its source; accepted edges toggle the mode
//! state and are logged.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use lumastick_core::input::{ButtonHandler, ButtonSource};
use lumastick_core::state::ModeChange;

use super::Leds;
use crate::shared;

/// Button task
///
/// The joystick button is watched on both edges so the control loop can
/// trace its level; only the rising edge counts as a press.
#[embassy_executor::task]
pub async fn button_task(
    mut mode_button: Input<'static>,
    mut joystick_button: Input<'static>,
    mut handler: ButtonHandler<'static, Leds>,
) {
    info!("Button task started");

    shared::set_joystick_button_level(joystick_button.is_high());

    loop {
        let edge = select(
            mode_button.wait_for_rising_edge(),
            joystick_button.wait_for_any_edge(),
        )
        .await;
        let now_ms = Instant::now().as_millis() as u32;

        let source = match edge {
            Either::First(()) => ButtonSource::Mode,
            Either::Second(()) => {
                let high = joystick_button.is_high();
                shared::set_joystick_button_level(high);
                if !high {
                    continue;
                }
                ButtonSource::Indicator
            }
        };

        match handler.on_edge(source, now_ms) {
            Some(ModeChange::PwmToggled { enabled }) => {
                info!("PWM {}", if enabled { "enabled" } else { "disabled" });
            }
            Some(ModeChange::IndicatorToggled { on, presses }) => {
                info!(
                    "Indicator {} (presses: {})",
                    if on { "on" } else { "off" },
                    presses
                );
            }
            None => trace!("Bounce on {} at {} ms", source, now_ms),
        }
    }
}
