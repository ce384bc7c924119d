use crate::brush::BrushConfig;

/// Configuration for the GPUI brush view.
#[derive(Debug, Clone)]
pub struct BrushViewConfig {
    /// Interaction tuning passed to the brush.
    pub brush: BrushConfig,
    /// Stroke width of the handle lines.
    pub handle_width_px: f32,
    /// Side of the square grip drawn on each handle.
    pub grip_size_px: f32,
}

impl Default for BrushViewConfig {
    fn default() -> Self {
        Self {
            brush: BrushConfig::default(),
            handle_width_px: 2.0,
            grip_size_px: 8.0,
        }
    }
}
