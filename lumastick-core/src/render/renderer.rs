//! Incremental marker renderer
//!
//! Only the 8x8 marker moves, so instead of clearing and redrawing the whole
//! frame each iteration the renderer clears the block it drew last time and
//! draws the new one. The buffer therefore holds exactly one marker after
//! every frame.
//!
//! With the border overlay enabled, a full-frame outline is redrawn every
//! frame, lit while the indicator is on and cleared otherwise. The border is
//! drawn after the erase and before the new marker, so an erase at the
//! screen edge cannot leave a gap in the border and the border cannot cut
//! into the new marker.

use crate::config::{DISPLAY_HEIGHT, DISPLAY_WIDTH, INITIAL_MARKER_X, INITIAL_MARKER_Y, MARKER_SIZE};
use crate::state::ModeSnapshot;
use crate::traits::{DisplayError, DisplaySurface};

/// Position of the marker currently in the frame buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderState {
    pub previous_x: i32,
    pub previous_y: i32,
}

impl Default for RenderState {
    fn default() -> Self {
        Self {
            previous_x: INITIAL_MARKER_X,
            previous_y: INITIAL_MARKER_Y,
        }
    }
}

/// Erase-then-draw marker renderer
#[derive(Debug, Clone)]
pub struct Renderer {
    state: RenderState,
    border_overlay: bool,
}

impl Renderer {
    /// Create a renderer with the marker at screen center
    pub fn new(border_overlay: bool) -> Self {
        Self::with_state(RenderState::default(), border_overlay)
    }

    /// Create a renderer that believes a marker is already drawn at `state`
    pub fn with_state(state: RenderState, border_overlay: bool) -> Self {
        Self {
            state,
            border_overlay,
        }
    }

    /// Where the current marker is drawn
    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Whether the full-frame border is redrawn every frame
    pub fn border_overlay(&self) -> bool {
        self.border_overlay
    }

    /// Move the marker to (`new_x`, `new_y`) and push the frame out
    ///
    /// The stored position is updated as soon as the old block is erased,
    /// so a later bus failure still leaves the state pointing at the block
    /// that is in the frame buffer.
    pub fn render<D: DisplaySurface>(
        &mut self,
        surface: &mut D,
        mode: &ModeSnapshot,
        new_x: i32,
        new_y: i32,
    ) -> Result<(), DisplayError> {
        surface.draw_rect(
            self.state.previous_y,
            self.state.previous_x,
            MARKER_SIZE,
            MARKER_SIZE,
            true,
            false,
        )?;

        self.state = RenderState {
            previous_x: new_x,
            previous_y: new_y,
        };

        if self.border_overlay {
            surface.draw_rect(0, 0, DISPLAY_HEIGHT, DISPLAY_WIDTH, false, mode.indicator_on)?;
        }

        surface.draw_rect(new_y, new_x, MARKER_SIZE, MARKER_SIZE, true, true)?;
        surface.flush()
    }
}
