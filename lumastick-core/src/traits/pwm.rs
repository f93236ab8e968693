//! PWM LED output trait

/// LED channel of the RGB LED
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    /// Follows X-axis deflection
    Red,
    /// Follows the indicator toggle
    Green,
    /// Follows Y-axis deflection
    Blue,
}

/// PWM duty-cycle output
///
/// Implementations configure the counter to wrap at 255 so that `value`
/// maps directly onto the fraction of time the LED is on.
pub trait PwmOutput {
    /// Set the duty cycle of `channel` (0 = off, 255 = fully on)
    fn set_duty(&mut self, channel: LedChannel, value: u8);

    /// Start or stop the PWM generator driving `channel`
    fn set_enabled(&mut self, channel: LedChannel, enabled: bool);
}
