//! Test doubles for the hardware traits

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::traits::{AnalogError, AnalogInput, DisplayError, DisplaySurface, LedChannel, PwmOutput};

const W: usize = DISPLAY_WIDTH as usize;
const H: usize = DISPLAY_HEIGHT as usize;

fn led_index(channel: LedChannel) -> usize {
    match channel {
        LedChannel::Red => 0,
        LedChannel::Green => 1,
        LedChannel::Blue => 2,
    }
}

/// PWM output that remembers the last value written per channel
#[derive(Default)]
pub struct RecordingPwm {
    duty: [Option<u8>; 3],
    enabled: [bool; 3],
}

impl RecordingPwm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn duty(&self, channel: LedChannel) -> Option<u8> {
        self.duty[led_index(channel)]
    }

    pub fn enabled(&self, channel: LedChannel) -> bool {
        self.enabled[led_index(channel)]
    }
}

impl PwmOutput for RecordingPwm {
    fn set_duty(&mut self, channel: LedChannel, value: u8) {
        self.duty[led_index(channel)] = Some(value);
    }

    fn set_enabled(&mut self, channel: LedChannel, enabled: bool) {
        self.enabled[led_index(channel)] = enabled;
    }
}

/// Two-channel ADC returning preset values
pub struct FakeAdc {
    /// Value returned for each channel id
    pub values: [u16; 2],
    /// Channel ids in the order they were selected
    pub selected: [Option<u8>; 8],
    selects: usize,
    current: Option<u8>,
    /// Make every read fail
    pub fail: bool,
}

impl FakeAdc {
    pub fn new(ch0: u16, ch1: u16) -> Self {
        Self {
            values: [ch0, ch1],
            selected: [None; 8],
            selects: 0,
            current: None,
            fail: false,
        }
    }
}

impl AnalogInput for FakeAdc {
    fn select_channel(&mut self, id: u8) -> Result<(), AnalogError> {
        if id as usize >= self.values.len() {
            return Err(AnalogError::UnknownChannel(id));
        }
        if self.selects < self.selected.len() {
            self.selected[self.selects] = Some(id);
        }
        self.selects += 1;
        self.current = Some(id);
        Ok(())
    }

    fn read(&mut self) -> Result<u16, AnalogError> {
        if self.fail {
            return Err(AnalogError::Conversion);
        }
        match self.current {
            Some(id) => Ok(self.values[id as usize]),
            None => Err(AnalogError::Conversion),
        }
    }
}

/// In-memory 128x64 surface that counts calls
pub struct PixelSurface {
    pixels: [[bool; W]; H],
    /// Number of `draw_rect` calls
    pub rects: usize,
    /// Number of `flush` calls
    pub flushes: usize,
    /// Make `flush` fail
    pub fail_flush: bool,
}

impl PixelSurface {
    pub fn new() -> Self {
        Self {
            pixels: [[false; W]; H],
            rects: 0,
            flushes: 0,
            fail_flush: false,
        }
    }

    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.pixels[y as usize][x as usize]
    }

    fn set(&mut self, x: i32, y: i32, on: bool) {
        if (0..DISPLAY_WIDTH).contains(&x) && (0..DISPLAY_HEIGHT).contains(&y) {
            self.pixels[y as usize][x as usize] = on;
        }
    }

    pub fn lit_count(&self) -> usize {
        self.pixels
            .iter()
            .map(|row| row.iter().filter(|&&p| p).count())
            .sum()
    }

    /// Whether every pixel inside the rectangle is lit
    pub fn block_lit(&self, x: i32, y: i32, w: i32, h: i32) -> bool {
        (y..y + h).all(|py| (x..x + w).all(|px| self.pixel(px, py)))
    }
}

impl DisplaySurface for PixelSurface {
    fn draw_rect(
        &mut self,
        top: i32,
        left: i32,
        height: i32,
        width: i32,
        filled: bool,
        color: bool,
    ) -> Result<(), DisplayError> {
        self.rects += 1;
        for y in top..top + height {
            for x in left..left + width {
                let edge = y == top || y == top + height - 1 || x == left || x == left + width - 1;
                if filled || edge {
                    self.set(x, y, color);
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if self.fail_flush {
            return Err(DisplayError::Bus);
        }
        self.flushes += 1;
        Ok(())
    }
}
