//! Brush colors.

use crate::render::Color;

/// Visual theme for a brush.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushTheme {
    /// Fill of the selection rectangle.
    pub selection_fill: Color,
    /// Border of the selection rectangle.
    pub selection_border: Color,
    /// Low handle color.
    pub low_handle: Color,
    /// High handle color.
    pub high_handle: Color,
}

impl Default for BrushTheme {
    fn default() -> Self {
        Self::light()
    }
}

impl BrushTheme {
    /// Translucent red fill with a green low handle and a red high handle.
    pub fn light() -> Self {
        Self {
            selection_fill: Color::new(1.0, 0.36, 0.36, 0.1),
            selection_border: Color::new(0.0, 0.0, 0.0, 0.0),
            low_handle: Color::new(0.0, 0.5, 0.0, 1.0),
            high_handle: Color::new(1.0, 0.0, 0.0, 1.0),
        }
    }

    /// Variant tuned for dark chart backgrounds.
    pub fn dark() -> Self {
        Self {
            selection_fill: Color::new(1.0, 0.36, 0.36, 0.16),
            selection_border: Color::new(1.0, 0.36, 0.36, 0.35),
            low_handle: Color::new(0.25, 0.85, 0.45, 1.0),
            high_handle: Color::new(0.95, 0.3, 0.3, 1.0),
        }
    }
}
