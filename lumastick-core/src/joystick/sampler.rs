//! Two-axis joystick sampler

use crate::config::ADC_MAX;
use crate::traits::{AnalogError, AnalogInput};

/// Joystick axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    /// Horizontal axis, wired to ADC1 (GPIO27)
    X,
    /// Vertical axis, wired to ADC0 (GPIO26)
    Y,
}

impl Axis {
    /// ADC input the axis is wired to
    pub const fn adc_channel(self) -> u8 {
        match self {
            Axis::X => 1,
            Axis::Y => 0,
        }
    }
}

/// Raw readings of both axes, each 0-4095
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AxisSample {
    pub x: u16,
    pub y: u16,
}

/// Reads joystick axes through a multiplexed ADC
///
/// Owns the backend, so select and read of one axis can never be split by
/// a read of the other axis from somewhere else.
pub struct AnalogSampler<A> {
    adc: A,
}

impl<A: AnalogInput> AnalogSampler<A> {
    /// Create a sampler over an ADC backend
    pub fn new(adc: A) -> Self {
        Self { adc }
    }

    /// Convert the X axis
    pub fn sample_x(&mut self) -> Result<u16, AnalogError> {
        self.sample_axis(Axis::X)
    }

    /// Convert the Y axis
    pub fn sample_y(&mut self) -> Result<u16, AnalogError> {
        self.sample_axis(Axis::Y)
    }

    /// Convert X then Y
    pub fn sample(&mut self) -> Result<AxisSample, AnalogError> {
        let x = self.sample_x()?;
        let y = self.sample_y()?;
        Ok(AxisSample { x, y })
    }

    /// Select the axis channel and run one fresh conversion
    pub fn sample_axis(&mut self, axis: Axis) -> Result<u16, AnalogError> {
        self.adc.select_channel(axis.adc_channel())?;
        // Keep the 12-bit contract even if a backend returns wider values
        Ok(self.adc.read()?.min(ADC_MAX))
    }

    /// Release the backend
    pub fn into_inner(self) -> A {
        self.adc
    }
}
