//! SSD1306 OLED Display Driver
//!
//! Driver for 128x64 SSD1306-based OLED displays via I2C.
//! Keeps a 1-bit frame buffer organized as 8 pages of 8 rows; drawing only
//! touches the buffer and `flush` sends the whole buffer in one pass.

use embedded_hal::i2c::I2c;
use lumastick_core::traits::{DisplayError, DisplaySurface};

/// SSD1306 I2C address (0x3C, or 0x3D with SA0 pulled high)
pub const SSD1306_ADDR: u8 = 0x3C;

/// Display dimensions
const WIDTH: usize = 128;
const HEIGHT: usize = 64;
const PAGES: usize = HEIGHT / 8;

/// Control byte prefixes
const CONTROL_COMMAND: u8 = 0x00;
const CONTROL_DATA: u8 = 0x40;

/// SSD1306 commands
#[allow(dead_code)]
mod cmd {
    pub const SET_MEM_ADDR: u8 = 0x20;
    pub const SET_COL_ADDR: u8 = 0x21;
    pub const SET_PAGE_ADDR: u8 = 0x22;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_ENTIRE_ON_RESUME: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_PRECHARGE: u8 = 0xD9;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_VCOM_DETECT: u8 = 0xDB;
}

/// SSD1306 OLED driver
pub struct Ssd1306<I2C> {
    i2c: I2C,
    address: u8,
    /// Frame buffer (1 bit per pixel, organized as pages)
    buffer: [[u8; WIDTH]; PAGES],
    initialized: bool,
}

impl<I2C: I2c> Ssd1306<I2C> {
    /// Create a new SSD1306 driver
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: [[0; WIDTH]; PAGES],
            initialized: false,
        }
    }

    /// Initialize the display
    ///
    /// Selects horizontal addressing so a flush can stream all pages
    /// back to back.
    pub fn init(&mut self) -> Result<(), DisplayError> {
        let init_cmds: &[u8] = &[
            cmd::DISPLAY_OFF,
            cmd::SET_MEM_ADDR,
            0x00, // Horizontal addressing
            cmd::SET_START_LINE | 0x00,
            cmd::SET_SEG_REMAP,
            cmd::SET_MUX_RATIO,
            (HEIGHT - 1) as u8,
            cmd::SET_COM_SCAN_DEC,
            cmd::SET_DISPLAY_OFFSET,
            0x00,
            cmd::SET_COM_PINS,
            0x12, // Alternative COM config, 128x64
            cmd::SET_CLOCK_DIV,
            0x80,
            cmd::SET_PRECHARGE,
            0xF1,
            cmd::SET_VCOM_DETECT,
            0x30,
            cmd::SET_CONTRAST,
            0xFF,
            cmd::SET_ENTIRE_ON_RESUME,
            cmd::SET_NORMAL,
            cmd::SET_CHARGE_PUMP,
            0x14, // Enable charge pump
            cmd::DISPLAY_ON,
        ];

        for &c in init_cmds {
            self.command(c)?;
        }

        self.initialized = true;
        Ok(())
    }

    /// Send a command to the display
    fn command(&mut self, cmd: u8) -> Result<(), DisplayError> {
        self.i2c
            .write(self.address, &[CONTROL_COMMAND, cmd])
            .map_err(|_| DisplayError::Bus)
    }

    /// Clear the frame buffer
    pub fn clear(&mut self) {
        for page in self.buffer.iter_mut() {
            page.fill(0);
        }
    }

    /// Read back a pixel from the frame buffer
    ///
    /// Out-of-range coordinates read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        match Self::locate(x, y) {
            Some((page, col, mask)) => self.buffer[page][col] & mask != 0,
            None => false,
        }
    }

    /// Set or clear one pixel; out-of-range coordinates are ignored
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        if let Some((page, col, mask)) = Self::locate(x, y) {
            if on {
                self.buffer[page][col] |= mask;
            } else {
                self.buffer[page][col] &= !mask;
            }
        }
    }

    /// Page, column and bit mask holding pixel (x, y)
    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        let x = usize::try_from(x).ok().filter(|&x| x < WIDTH)?;
        let y = usize::try_from(y).ok().filter(|&y| y < HEIGHT)?;
        Some((y / 8, x, 1 << (y % 8)))
    }

    /// Set display contrast (0-255)
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), DisplayError> {
        self.command(cmd::SET_CONTRAST)?;
        self.command(contrast)
    }

    /// Turn display on/off
    pub fn set_display_on(&mut self, on: bool) -> Result<(), DisplayError> {
        if on {
            self.command(cmd::DISPLAY_ON)
        } else {
            self.command(cmd::DISPLAY_OFF)
        }
    }

    /// Release the I2C bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplaySurface for Ssd1306<I2C> {
    fn draw_rect(
        &mut self,
        top: i32,
        left: i32,
        height: i32,
        width: i32,
        filled: bool,
        color: bool,
    ) -> Result<(), DisplayError> {
        if height <= 0 || width <= 0 {
            return Ok(());
        }

        let bottom = top + height - 1;
        let right = left + width - 1;

        if filled {
            for y in top..=bottom {
                for x in left..=right {
                    self.set_pixel(x, y, color);
                }
            }
        } else {
            for x in left..=right {
                self.set_pixel(x, top, color);
                self.set_pixel(x, bottom, color);
            }
            for y in top..=bottom {
                self.set_pixel(left, y, color);
                self.set_pixel(right, y, color);
            }
        }

        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        if !self.initialized {
            return Err(DisplayError::NotInitialized);
        }

        // Full window: columns 0-127, pages 0-7
        self.command(cmd::SET_COL_ADDR)?;
        self.command(0)?;
        self.command((WIDTH - 1) as u8)?;
        self.command(cmd::SET_PAGE_ADDR)?;
        self.command(0)?;
        self.command((PAGES - 1) as u8)?;

        // One data transfer: control byte, then all pages in order
        let mut data = [0u8; WIDTH * PAGES + 1];
        data[0] = CONTROL_DATA;
        for (chunk, page) in data[1..].chunks_exact_mut(WIDTH).zip(self.buffer.iter()) {
            chunk.copy_from_slice(page);
        }

        self.i2c
            .write(self.address, &data)
            .map_err(|_| DisplayError::Bus)
    }
}
