//! Joystick ADC
//!
//! RP2040 has a single ADC with 5 channels; ADC0-3 sit on GPIO26-29 and
//! ADC4 is the internal temperature sensor. The joystick uses ADC0
//! (vertical, GPIO26) and ADC1 (horizontal, GPIO27).

use embassy_rp::adc::{Adc, Blocking, Channel};
use lumastick_core::traits::{AnalogError, AnalogInput};

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
    /// ADC3 on GPIO29
    Adc3,
    /// Internal temperature sensor
    Temperature,
}

impl AdcChannel {
    /// Channel from the hardware channel number
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(AdcChannel::Adc0),
            1 => Some(AdcChannel::Adc1),
            2 => Some(AdcChannel::Adc2),
            3 => Some(AdcChannel::Adc3),
            4 => Some(AdcChannel::Temperature),
            _ => None,
        }
    }
}

/// Index into the joystick channel handles for hardware channel `id`
///
/// Only ADC0 and ADC1 are wired; anything else is `UnknownChannel`.
pub fn joystick_channel_index(id: u8) -> Result<usize, AnalogError> {
    match AdcChannel::from_id(id) {
        Some(AdcChannel::Adc0) => Ok(0),
        Some(AdcChannel::Adc1) => Ok(1),
        _ => Err(AnalogError::UnknownChannel(id)),
    }
}

/// Blocking ADC with the two joystick channels attached
pub struct JoystickAdc<'d> {
    adc: Adc<'d, Blocking>,
    /// Channel handles indexed by hardware channel number
    channels: [Channel<'d>; 2],
    selected: usize,
}

impl<'d> JoystickAdc<'d> {
    /// Wrap the ADC and the vertical (GPIO26) and horizontal (GPIO27) channels
    pub fn new(adc: Adc<'d, Blocking>, vertical: Channel<'d>, horizontal: Channel<'d>) -> Self {
        Self {
            adc,
            channels: [vertical, horizontal],
            selected: 0,
        }
    }
}

impl AnalogInput for JoystickAdc<'_> {
    fn select_channel(&mut self, id: u8) -> Result<(), AnalogError> {
        self.selected = joystick_channel_index(id)?;
        Ok(())
    }

    fn read(&mut self) -> Result<u16, AnalogError> {
        self.adc
            .blocking_read(&mut self.channels[self.selected])
            .map_err(|_| AnalogError::Conversion)
    }
}
