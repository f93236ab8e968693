//! Per-frame control loop
//!
//! One call to [`ControlLoop::step`] is one frame: sample both axes, update
//! the red/blue LED duties, move the marker. The caller sleeps for
//! [`LoopConfig::frame_interval_ms`] between steps.

use crate::config::LoopConfig;
use crate::joystick::{brightness, map_x, map_y, AnalogSampler, AxisSample};
use crate::render::Renderer;
use crate::state::ModeState;
use crate::traits::{
    AnalogError, AnalogInput, DisplayError, DisplaySurface, LedChannel, PwmOutput,
};

/// Errors surfaced by one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// Axis conversion failed; LEDs and display were left untouched
    Analog(AnalogError),
    /// Drawing or flushing failed; LEDs were already updated
    Display(DisplayError),
}

impl From<AnalogError> for ControlError {
    fn from(e: AnalogError) -> Self {
        ControlError::Analog(e)
    }
}

impl From<DisplayError> for ControlError {
    fn from(e: DisplayError) -> Self {
        ControlError::Display(e)
    }
}

/// What one frame did, for tracing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pub sample: AxisSample,
    pub red_duty: u8,
    pub blue_duty: u8,
    pub marker_x: i32,
    pub marker_y: i32,
}

/// Sampling, dimming and rendering loop
///
/// Owns every resource it touches except the mode state, which it only
/// reads.
pub struct ControlLoop<'a, A, P, D> {
    sampler: AnalogSampler<A>,
    leds: P,
    surface: D,
    renderer: Renderer,
    mode: &'a ModeState,
    config: LoopConfig,
}

impl<'a, A, P, D> ControlLoop<'a, A, P, D>
where
    A: AnalogInput,
    P: PwmOutput,
    D: DisplaySurface,
{
    /// Wire the loop and start the red/blue PWM outputs dark
    pub fn new(
        sampler: AnalogSampler<A>,
        mut leds: P,
        surface: D,
        mode: &'a ModeState,
        config: LoopConfig,
    ) -> Self {
        for channel in [LedChannel::Red, LedChannel::Blue] {
            leds.set_duty(channel, 0);
            leds.set_enabled(channel, true);
        }

        Self {
            sampler,
            leds,
            surface,
            renderer: Renderer::new(config.border_overlay),
            mode,
            config,
        }
    }

    /// Run one frame
    pub fn step(&mut self) -> Result<Frame, ControlError> {
        let sample = self.sampler.sample()?;
        let mode = self.mode.snapshot();

        let red_duty = brightness(sample.x, mode.pwm_enabled);
        let blue_duty = brightness(sample.y, mode.pwm_enabled);
        self.leds.set_duty(LedChannel::Red, red_duty);
        self.leds.set_duty(LedChannel::Blue, blue_duty);

        let marker_x = map_x(sample.x);
        let marker_y = map_y(sample.y);
        self.renderer
            .render(&mut self.surface, &mode, marker_x, marker_y)?;

        Ok(Frame {
            sample,
            red_duty,
            blue_duty,
            marker_x,
            marker_y,
        })
    }

    /// Loop configuration
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Renderer and its current marker position
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Display surface, e.g. for diagnostics between frames
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// LED output
    pub fn leds(&self) -> &P {
        &self.leds
    }
}
