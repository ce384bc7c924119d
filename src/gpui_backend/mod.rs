//! GPUI integration for gpui_rangebrush.
//!
//! This module provides a GPUI view that hosts a [`Brush`](crate::brush::Brush)
//! over a fixed-size region, paints the selection and its handles, and emits
//! [`BrushEvent`](crate::brush::BrushEvent)s to subscribers.

mod config;
mod frame;
mod paint;
mod state;
mod view;

pub use config::BrushViewConfig;
pub use view::GpuiBrushView;
