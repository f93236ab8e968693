//! Lumastick - Joystick LED Dimmer Firmware
//!
//! A two-axis joystick sets the brightness of the red (X) and blue (Y)
//! LEDs and moves an 8x8 marker across a 128x64 OLED. Board button A
//! toggles the red/blue output on and off, the joystick button toggles
//! the green indicator LED.
//!
//! Pin assignments (BitDogLab carrier on a Raspberry Pi Pico):
//! - GPIO5: button A (pull-up)
//! - GPIO22: joystick button (pull-up)
//! - GPIO26 / ADC0: joystick Y
//! - GPIO27 / ADC1: joystick X
//! - GPIO11: green LED (PWM5 B)
//! - GPIO12: blue LED (PWM6 A)
//! - GPIO13: red LED (PWM6 B)
//! - GPIO14 / GPIO15: I2C1 SDA / SCL, SSD1306 at 0x3C, 400 kHz

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig};
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{Config as I2cConfig, I2c};
use embassy_rp::pwm::Pwm;
use {defmt_rtt as _, panic_probe as _};

use lumastick_core::control::ControlLoop;
use lumastick_core::input::ButtonHandler;
use lumastick_core::joystick::AnalogSampler;
use lumastick_core::traits::{DisplaySurface, LedChannel};
use lumastick_drivers::display::{Ssd1306, SSD1306_ADDR};
use lumastick_hal_rp2040::{JoystickAdc, LedPwm};

use crate::config::LOOP_CONFIG;
use crate::shared::{GATES, MODE};

mod config;
mod shared;
mod tasks;

/// I2C bus speed for the display
const DISPLAY_I2C_HZ: u32 = 400_000;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Lumastick firmware starting...");
    info!(
        "Loop config: debounce={}ms frame={}ms border={}",
        LOOP_CONFIG.debounce_window_ms, LOOP_CONFIG.frame_interval_ms, LOOP_CONFIG.border_overlay
    );

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // LEDs: counters wrap at 255, outputs start dark
    let green = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, LedPwm::slice_config());
    let green = LedPwm::new(green, None, Some(LedChannel::Green));

    let red_blue = Pwm::new_output_ab(
        p.PWM_SLICE6,
        p.PIN_12,
        p.PIN_13,
        LedPwm::slice_config(),
    );
    let red_blue = LedPwm::new(red_blue, Some(LedChannel::Blue), Some(LedChannel::Red));
    info!("PWM initialized");

    // Buttons
    let mode_button = Input::new(p.PIN_5, Pull::Up);
    let joystick_button = Input::new(p.PIN_22, Pull::Up);

    // Joystick ADC
    let adc = Adc::new_blocking(p.ADC, AdcConfig::default());
    let vertical = Channel::new_pin(p.PIN_26, Pull::None);
    let horizontal = Channel::new_pin(p.PIN_27, Pull::None);
    let sampler = AnalogSampler::new(JoystickAdc::new(adc, vertical, horizontal));
    info!("ADC initialized");

    // Display
    let mut i2c_config = I2cConfig::default();
    i2c_config.frequency = DISPLAY_I2C_HZ;
    let i2c = I2c::new_blocking(p.I2C1, p.PIN_15, p.PIN_14, i2c_config);
    let mut display = Ssd1306::new(i2c, SSD1306_ADDR);
    match display.init() {
        Ok(()) => {
            display.clear();
            if let Err(e) = display.flush() {
                warn!("Display flush failed: {:?}", e);
            }
            info!("Display initialized");
        }
        Err(e) => error!("Display init failed: {:?}", e),
    }

    let handler = ButtonHandler::new(&GATES, &MODE, green);
    let control = ControlLoop::new(sampler, red_blue, display, &MODE, LOOP_CONFIG);

    spawner.spawn(unwrap!(tasks::button_task(mode_button, joystick_button, handler)));
    spawner.spawn(unwrap!(tasks::control_task(control)));

    info!("All tasks spawned, firmware running");
}
