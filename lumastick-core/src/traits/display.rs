//! Display surface trait

/// Errors that can occur when talking to the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Bus transfer to the panel failed
    Bus,
    /// Display not initialized
    NotInitialized,
}

/// Buffered monochrome drawing surface
///
/// Drawing only touches the frame buffer; nothing reaches the panel until
/// [`flush`](DisplaySurface::flush) is called.
pub trait DisplaySurface {
    /// Draw a rectangle into the frame buffer
    ///
    /// - `top`, `left`: upper-left corner in pixels
    /// - `height`, `width`: size in pixels
    /// - `filled`: fill the interior instead of drawing the outline
    /// - `color`: `true` sets pixels (foreground), `false` clears them
    ///
    /// Pixels falling outside the surface are clipped.
    fn draw_rect(
        &mut self,
        top: i32,
        left: i32,
        height: i32,
        width: i32,
        filled: bool,
        color: bool,
    ) -> Result<(), DisplayError>;

    /// Transfer the frame buffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
