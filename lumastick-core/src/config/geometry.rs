//! Display, marker and ADC constants

/// Display width in pixels (SSD1306 128x64)
pub const DISPLAY_WIDTH: i32 = 128;

/// Display height in pixels
pub const DISPLAY_HEIGHT: i32 = 64;

/// Side length of the square position marker
pub const MARKER_SIZE: i32 = 8;

/// Largest raw reading of the 12-bit ADC
pub const ADC_MAX: u16 = 4095;

/// Raw reading treated as the joystick rest position
pub const AXIS_CENTER: u16 = 2048;

/// Lower bound of the deadzone (exclusive)
pub const DEADZONE_LOW: u16 = 1940;

/// Upper bound of the deadzone (exclusive)
pub const DEADZONE_HIGH: u16 = 2200;

/// Divider from axis deflection to PWM duty
pub const BRIGHTNESS_DIVISOR: u16 = 16;

/// PWM counter wrap value; duty 255 keeps the LED fully on
pub const PWM_TOP: u16 = 255;

/// Largest marker X coordinate
pub const MAX_MARKER_X: i32 = DISPLAY_WIDTH - MARKER_SIZE;

/// Largest marker Y coordinate
pub const MAX_MARKER_Y: i32 = DISPLAY_HEIGHT - MARKER_SIZE;

/// Marker X position before the first frame (screen center)
pub const INITIAL_MARKER_X: i32 = DISPLAY_WIDTH / 2 - MARKER_SIZE / 2;

/// Marker Y position before the first frame (screen center)
pub const INITIAL_MARKER_Y: i32 = DISPLAY_HEIGHT / 2 - MARKER_SIZE / 2;
