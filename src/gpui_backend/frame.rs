use gpui::{Bounds, Pixels};

use crate::brush::BrushLayout;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::{BrushShapes, HandleStyle, build_brush};
use crate::style::BrushTheme;

use super::config::BrushViewConfig;
use super::state::BrushUiState;

#[derive(Debug, Clone)]
pub(crate) struct BrushFrame {
    pub(crate) shapes: Option<BrushShapes>,
}

pub(crate) fn build_frame(
    layout: Option<BrushLayout>,
    state: &mut BrushUiState,
    config: &BrushViewConfig,
    theme: &BrushTheme,
    bounds: Bounds<Pixels>,
) -> BrushFrame {
    let region = ScreenRect::from_origin_size(
        ScreenPoint::new(f32::from(bounds.origin.x), f32::from(bounds.origin.y)),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    );
    state.region = Some(region);

    let style = HandleStyle {
        line_width: config.handle_width_px,
        grip_size: config.grip_size_px,
    };
    BrushFrame {
        shapes: layout.and_then(|layout| build_brush(&layout, region, theme, style)),
    }
}
