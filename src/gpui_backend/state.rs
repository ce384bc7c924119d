use crate::brush::DragTarget;
use crate::geom::ScreenRect;

/// View state shared with the canvas callbacks.
#[derive(Debug, Clone, Default)]
pub(crate) struct BrushUiState {
    /// Region bounds in window pixels, refreshed on every prepaint.
    pub(crate) region: Option<ScreenRect>,
    /// What the pointer is over when no gesture is active.
    pub(crate) hover: Option<DragTarget>,
}

impl BrushUiState {
    pub(crate) fn clear_interaction(&mut self) {
        self.hover = None;
    }
}
