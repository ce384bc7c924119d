//! Brush shapes in window space.
//!
//! [`build_brush`] turns a region-relative [`BrushLayout`] into the
//! rectangles a backend paints: the selection body, and a line plus a grip
//! for each handle. Nothing here depends on a UI toolkit.

use crate::brush::BrushLayout;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::handle::HandleSide;
use crate::style::BrushTheme;

/// RGBA color with components in the 0.0..=1.0 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color {
    /// Create a new color.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Check whether the color draws anything.
    pub fn is_visible(&self) -> bool {
        self.a > 0.0
    }
}

/// Handle sizing in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleStyle {
    /// Width of the handle line.
    pub line_width: f32,
    /// Side of the square grip drawn at mid-height.
    pub grip_size: f32,
}

/// One edge handle, ready to paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleShape {
    /// Bound the handle controls.
    pub side: HandleSide,
    /// Full-height bar centered on the handle pixel.
    pub line: ScreenRect,
    /// Grip square at mid-height.
    pub grip: ScreenRect,
    /// Fill color of bar and grip.
    pub color: Color,
}

/// Everything a backend paints for one brush.
#[derive(Debug, Clone, PartialEq)]
pub struct BrushShapes {
    /// Region all shapes are clipped to.
    pub clip: ScreenRect,
    /// Selection body.
    pub selection: ScreenRect,
    /// Selection fill.
    pub fill: Color,
    /// Selection border, if the theme draws one.
    pub border: Option<Color>,
    /// Handles with a finite position, low first.
    pub handles: Vec<HandleShape>,
}

/// Lay out the brush shapes for a brush inside `region`.
///
/// Layout pixels are relative to the region's left edge. Returns `None` when
/// the region has no area.
pub fn build_brush(
    layout: &BrushLayout,
    region: ScreenRect,
    theme: &BrushTheme,
    style: HandleStyle,
) -> Option<BrushShapes> {
    if !region.is_valid() {
        return None;
    }
    let top = region.min.y;
    let bottom = region.max.y;
    let mid = (top + bottom) * 0.5;
    let origin_x = region.min.x;

    let handles = [
        (HandleSide::Low, layout.low_handle, theme.low_handle),
        (HandleSide::High, layout.high_handle, theme.high_handle),
    ]
    .into_iter()
    .filter(|(_, pixel, _)| pixel.is_finite())
    .map(|(side, pixel, color)| {
        let x = origin_x + pixel;
        let half_line = style.line_width * 0.5;
        let half_grip = style.grip_size * 0.5;
        HandleShape {
            side,
            line: ScreenRect::new(
                ScreenPoint::new(x - half_line, top),
                ScreenPoint::new(x + half_line, bottom),
            ),
            grip: ScreenRect::new(
                ScreenPoint::new(x - half_grip, mid - half_grip),
                ScreenPoint::new(x + half_grip, mid + half_grip),
            ),
            color,
        }
    })
    .collect();

    Some(BrushShapes {
        clip: region,
        selection: ScreenRect::new(
            ScreenPoint::new(origin_x + layout.left, top),
            ScreenPoint::new(origin_x + layout.right(), bottom),
        ),
        fill: theme.selection_fill,
        border: theme
            .selection_border
            .is_visible()
            .then_some(theme.selection_border),
        handles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use crate::scale::LinearScale;

    const HANDLE: HandleStyle = HandleStyle {
        line_width: 2.0,
        grip_size: 8.0,
    };

    #[test]
    fn shapes_offset_by_region() {
        let scale = LinearScale::with_width((0.0, 1000.0), 500.0).expect("valid scale");
        let layout = BrushLayout::from_interval(Interval::new(600.0, 200.0), &scale);
        let region = ScreenRect::from_origin_size(ScreenPoint::new(20.0, 10.0), 500.0, 100.0);
        let theme = BrushTheme::light();
        let shapes = build_brush(&layout, region, &theme, HANDLE).expect("shapes");

        assert_eq!(shapes.clip, region);
        assert_eq!(shapes.selection.min, ScreenPoint::new(120.0, 10.0));
        assert_eq!(shapes.selection.max, ScreenPoint::new(320.0, 110.0));
        assert_eq!(shapes.border, None);

        let low = shapes.handles[0];
        assert_eq!(low.side, HandleSide::Low);
        assert_eq!(low.color, theme.low_handle);
        assert_eq!(low.line.min, ScreenPoint::new(319.0, 10.0));
        assert_eq!(low.line.max, ScreenPoint::new(321.0, 110.0));
        assert_eq!(low.grip.min, ScreenPoint::new(316.0, 56.0));

        let high = shapes.handles[1];
        assert_eq!(high.side, HandleSide::High);
        assert_eq!(high.color, theme.high_handle);
        assert_eq!(high.line.min.x, 119.0);
    }

    #[test]
    fn dark_theme_draws_border() {
        let scale = LinearScale::with_width((0.0, 1.0), 10.0).expect("valid scale");
        let layout = BrushLayout::from_interval(Interval::new(0.2, 0.4), &scale);
        let region = ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), 10.0, 10.0);
        let theme = BrushTheme::dark();
        let shapes = build_brush(&layout, region, &theme, HANDLE).expect("shapes");
        assert_eq!(shapes.border, Some(theme.selection_border));
    }

    #[test]
    fn invalid_region_draws_nothing() {
        let scale = LinearScale::with_width((0.0, 1.0), 10.0).expect("valid scale");
        let layout = BrushLayout::from_interval(Interval::new(0.2, 0.4), &scale);
        let region = ScreenRect::from_origin_size(ScreenPoint::new(0.0, 0.0), 0.0, 10.0);
        assert_eq!(build_brush(&layout, region, &BrushTheme::light(), HANDLE), None);
    }
}
