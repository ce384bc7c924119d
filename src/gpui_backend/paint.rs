use gpui::{Bounds, ContentMask, Corners, Edges, Hsla, Pixels, Window, fill, point, px};

use crate::geom::ScreenRect;
use crate::render::Color;

use super::frame::BrushFrame;

const GRIP_RADIUS: f32 = 1.5;

pub(crate) fn paint_frame(frame: &BrushFrame, window: &mut Window) {
    let Some(shapes) = frame.shapes.as_ref() else {
        return;
    };
    let mask = ContentMask {
        bounds: to_bounds(shapes.clip),
    };
    window.with_content_mask(Some(mask), |window| {
        let mut body = fill(to_bounds(shapes.selection), to_hsla(shapes.fill));
        if let Some(border) = shapes.border {
            body = body
                .border_widths(Edges::all(px(1.0)))
                .border_color(to_hsla(border));
        }
        window.paint_quad(body);

        for handle in &shapes.handles {
            let color = to_hsla(handle.color);
            window.paint_quad(fill(to_bounds(handle.line), color));
            window.paint_quad(
                fill(to_bounds(handle.grip), color).corner_radii(Corners::all(px(GRIP_RADIUS))),
            );
        }
    });
}

fn to_hsla(color: Color) -> Hsla {
    Hsla::from(gpui::Rgba {
        r: color.r,
        g: color.g,
        b: color.b,
        a: color.a,
    })
}

fn to_bounds(rect: ScreenRect) -> Bounds<Pixels> {
    Bounds::from_corners(
        point(px(rect.min.x), px(rect.min.y)),
        point(px(rect.max.x), px(rect.max.y)),
    )
}
