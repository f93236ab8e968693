//! Loop and debounce timing

/// Shortest accepted debounce window
pub const MIN_DEBOUNCE_WINDOW_MS: u32 = 1;

/// Longest accepted debounce window
pub const MAX_DEBOUNCE_WINDOW_MS: u32 = 2000;

/// Shortest accepted delay between frames
pub const MIN_FRAME_INTERVAL_MS: u32 = 1;

/// Longest accepted delay between frames
pub const MAX_FRAME_INTERVAL_MS: u32 = 1000;

/// Errors reported by [`LoopConfig::validate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Debounce window outside 1..=2000 ms
    DebounceWindowOutOfRange,
    /// Frame interval outside 1..=1000 ms
    FrameIntervalOutOfRange,
}

/// Per-deployment loop parameters
///
/// Boards differ only in these values, e.g. a 500 ms debounce for stiffer
/// buttons or the border redraw for a visible indicator on the OLED.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LoopConfig {
    /// Minimum time between two accepted edges of the same button
    pub debounce_window_ms: u32,
    /// Sleep between the end of one frame and the start of the next
    pub frame_interval_ms: u32,
    /// Redraw a full-frame border every frame, visible while the indicator is on
    pub border_overlay: bool,
}

impl LoopConfig {
    /// Default deployment: 200 ms debounce, 10 ms frames, no border
    pub const DEFAULT: Self = Self {
        debounce_window_ms: 200,
        frame_interval_ms: 10,
        border_overlay: false,
    };

    /// Check that every value is inside its supported range
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_window_ms < MIN_DEBOUNCE_WINDOW_MS
            || self.debounce_window_ms > MAX_DEBOUNCE_WINDOW_MS
        {
            return Err(ConfigError::DebounceWindowOutOfRange);
        }
        if self.frame_interval_ms < MIN_FRAME_INTERVAL_MS
            || self.frame_interval_ms > MAX_FRAME_INTERVAL_MS
        {
            return Err(ConfigError::FrameIntervalOutOfRange);
        }
        Ok(())
    }
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(LoopConfig::DEFAULT.validate(), Ok(()));
        assert_eq!(LoopConfig::default(), LoopConfig::DEFAULT);
    }

    #[test]
    fn test_slow_variant_is_valid() {
        let config = LoopConfig {
            debounce_window_ms: 500,
            border_overlay: true,
            ..LoopConfig::DEFAULT
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = LoopConfig {
            debounce_window_ms: 0,
            ..LoopConfig::DEFAULT
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::DebounceWindowOutOfRange)
        );
    }

    #[test]
    fn test_interval_bounds() {
        let too_fast = LoopConfig {
            frame_interval_ms: 0,
            ..LoopConfig::DEFAULT
        };
        let too_slow = LoopConfig {
            frame_interval_ms: MAX_FRAME_INTERVAL_MS + 1,
            ..LoopConfig::DEFAULT
        };
        assert_eq!(too_fast.validate(), Err(ConfigError::FrameIntervalOutOfRange));
        assert_eq!(too_slow.validate(), Err(ConfigError::FrameIntervalOutOfRange));
    }
}
