//! PWM LED outputs
//!
//! Each RP2040 PWM slice has one counter and two compare outputs (A and B).
//! The counter wraps at 255 so an 8-bit duty maps straight onto the compare
//! value. The slice only has one enable bit, so disabling a single channel
//! forces its compare to zero and the slice keeps running while any mapped
//! channel is enabled.
//!
//! Board wiring (BitDogLab):
//! - GPIO11: green, slice 5 B
//! - GPIO12: blue, slice 6 A
//! - GPIO13: red, slice 6 B

use embassy_rp::pwm::{Config, Pwm};
use lumastick_core::config::PWM_TOP;
use lumastick_core::traits::{LedChannel, PwmOutput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SlotState {
    channel: Option<LedChannel>,
    duty: u8,
    enabled: bool,
}

impl SlotState {
    const fn new(channel: Option<LedChannel>) -> Self {
        Self {
            channel,
            duty: 0,
            enabled: false,
        }
    }

    fn compare(&self) -> u16 {
        if self.enabled {
            self.duty as u16
        } else {
            0
        }
    }
}

/// Duty and enable state of the two outputs of one slice
///
/// Everything the slice registers need, without touching the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTable {
    slots: [SlotState; 2],
}

impl SlotTable {
    /// Table with LEDs on output A and/or B, all dark and disabled
    pub const fn new(a: Option<LedChannel>, b: Option<LedChannel>) -> Self {
        Self {
            slots: [SlotState::new(a), SlotState::new(b)],
        }
    }

    fn slot_mut(&mut self, channel: LedChannel) -> Option<&mut SlotState> {
        self.slots.iter_mut().find(|s| s.channel == Some(channel))
    }

    /// Store the duty of `channel`; returns `false` if it is not mapped here
    pub fn set_duty(&mut self, channel: LedChannel, duty: u8) -> bool {
        match self.slot_mut(channel) {
            Some(slot) => {
                slot.duty = duty;
                true
            }
            None => false,
        }
    }

    /// Store the enable flag of `channel`; returns `false` if it is not mapped here
    pub fn set_enabled(&mut self, channel: LedChannel, enabled: bool) -> bool {
        match self.slot_mut(channel) {
            Some(slot) => {
                slot.enabled = enabled;
                true
            }
            None => false,
        }
    }

    /// Compare values for outputs A and B
    pub fn compares(&self) -> (u16, u16) {
        (self.slots[0].compare(), self.slots[1].compare())
    }

    /// Slice enable bit: any mapped output enabled
    pub fn slice_enabled(&self) -> bool {
        self.slots.iter().any(|s| s.channel.is_some() && s.enabled)
    }
}

/// One PWM slice driving up to two LED channels
pub struct LedPwm<'d> {
    pwm: Pwm<'d>,
    config: Config,
    table: SlotTable,
}

impl<'d> LedPwm<'d> {
    /// Wrap a slice with LEDs on output A and/or B
    ///
    /// The slice is reprogrammed immediately with top = 255, both compares
    /// at zero and the counter stopped.
    pub fn new(pwm: Pwm<'d>, a: Option<LedChannel>, b: Option<LedChannel>) -> Self {
        let mut led = Self {
            pwm,
            config: Self::slice_config(),
            table: SlotTable::new(a, b),
        };
        led.apply();
        led
    }

    /// Slice configuration used for every LED slice
    pub fn slice_config() -> Config {
        let mut config = Config::default();
        config.top = PWM_TOP;
        config.compare_a = 0;
        config.compare_b = 0;
        config.enable = false;
        config
    }

    fn apply(&mut self) {
        let (a, b) = self.table.compares();
        self.config.compare_a = a;
        self.config.compare_b = b;
        self.config.enable = self.table.slice_enabled();
        self.pwm.set_config(&self.config);
    }
}

impl PwmOutput for LedPwm<'_> {
    fn set_duty(&mut self, channel: LedChannel, value: u8) {
        if self.table.set_duty(channel, value) {
            self.apply();
        }
    }

    fn set_enabled(&mut self, channel: LedChannel, enabled: bool) {
        if self.table.set_enabled(channel, enabled) {
            self.apply();
        }
    }
}
