//! Control loop task
//!
//! Runs one frame, then sleeps for the configured interval. Backend errors
//! are logged once when they start and once when they clear; the loop keeps
//! running either way.

use defmt::*;
use embassy_rp::i2c::{Blocking, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_time::Timer;

use lumastick_core::control::ControlLoop;
use lumastick_drivers::display::Ssd1306;
use lumastick_hal_rp2040::{JoystickAdc, LedPwm};

use crate::shared;

/// OLED on I2C1
pub type Display = Ssd1306<I2c<'static, I2C1, Blocking>>;

/// LED PWM slice
pub type Leds = LedPwm<'static>;

/// Control loop task
#[embassy_executor::task]
pub async fn control_task(mut control: ControlLoop<'static, JoystickAdc<'static>, Leds, Display>) {
    let interval_ms = control.config().frame_interval_ms as u64;
    info!("Control task started ({} ms frames)", interval_ms);

    let mut faulted = false;

    loop {
        match control.step() {
            Ok(frame) => {
                if faulted {
                    info!("Control loop recovered");
                    faulted = false;
                }
                trace!(
                    "x={} y={} red={} blue={} marker=({}, {}) joystick_button={}",
                    frame.sample.x,
                    frame.sample.y,
                    frame.red_duty,
                    frame.blue_duty,
                    frame.marker_x,
                    frame.marker_y,
                    shared::joystick_button_level()
                );
            }
            Err(e) => {
                if !faulted {
                    warn!("Frame failed: {:?}", e);
                    faulted = true;
                }
            }
        }

        Timer::after_millis(interval_ms).await;
    }
}
