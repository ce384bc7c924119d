//! gpui_rangebrush is a draggable range selection for GPUI charts.
//! Users draw an interval on a scaled axis, drag its body to move it, and
//! drag either edge to resize it.

#![forbid(unsafe_code)]

pub mod brush;
pub mod geom;
pub mod gpui_backend;
pub mod handle;
pub mod interval;
pub mod render;
pub mod scale;
pub mod style;

pub use brush::{Brush, BrushConfig, BrushEvent, BrushLayout, BrushPhase, DragTarget};
pub use geom::{ScreenPoint, ScreenRect};
pub use gpui_backend::{BrushViewConfig, GpuiBrushView};
pub use handle::{EdgeHandle, HandleDrag, HandleSide};
pub use interval::Interval;
pub use render::{BrushShapes, Color, HandleShape, HandleStyle, build_brush};
pub use scale::{LinearScale, LogScale, Scale, ScaleError};
pub use style::BrushTheme;
