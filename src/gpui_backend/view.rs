use std::sync::{Arc, RwLock};

use gpui::prelude::*;
use gpui::{
    CursorStyle, EventEmitter, MouseButton, MouseDownEvent, MouseMoveEvent, MouseUpEvent, Pixels,
    Point, Window, canvas, div, px,
};

use crate::brush::{Brush, BrushEvent, DragTarget};
use crate::geom::ScreenPoint;
use crate::interval::Interval;
use crate::scale::Scale;
use crate::style::BrushTheme;

use super::config::BrushViewConfig;
use super::frame::build_frame;
use super::paint::paint_frame;
use super::state::BrushUiState;

/// A GPUI view that lets the user select an interval by dragging.
///
/// Subscribers receive [`BrushEvent::Changed`] while a gesture is in
/// progress and one [`BrushEvent::Committed`] with sorted bounds when the
/// pointer is released. The owner controls the selection through
/// [`set_value`](Self::set_value): a present owner value overwrites the
/// selection on every render that is not mid-gesture, so owners that track
/// the selection should store each commit.
pub struct GpuiBrushView {
    brush: Brush,
    scale: Arc<dyn Scale>,
    value: Option<Interval>,
    config: BrushViewConfig,
    theme: BrushTheme,
    state: Arc<RwLock<BrushUiState>>,
}

impl EventEmitter<BrushEvent> for GpuiBrushView {}

impl GpuiBrushView {
    /// Create a brush view over a `width` x `height` pixel region.
    ///
    /// Uses the default [`BrushViewConfig`].
    pub fn new(scale: impl Scale + 'static, width: f32, height: f32) -> Self {
        Self::with_config(scale, width, height, BrushViewConfig::default())
    }

    /// Create a brush view with a custom configuration.
    pub fn with_config(
        scale: impl Scale + 'static,
        width: f32,
        height: f32,
        config: BrushViewConfig,
    ) -> Self {
        Self {
            brush: Brush::with_config(width, height, config.brush.clone()),
            scale: Arc::new(scale),
            value: None,
            config,
            theme: BrushTheme::default(),
            state: Arc::new(RwLock::new(BrushUiState::default())),
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: BrushTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Start with an owner-controlled selection.
    pub fn with_value(mut self, value: Option<Interval>) -> Self {
        self.value = value;
        self
    }

    /// Set the owner-controlled selection.
    pub fn set_value(&mut self, value: Option<Interval>, cx: &mut Context<Self>) {
        self.value = value;
        cx.notify();
    }

    /// Replace the scale, for example after the chart's domain changed.
    pub fn set_scale(&mut self, scale: impl Scale + 'static, cx: &mut Context<Self>) {
        self.scale = Arc::new(scale);
        cx.notify();
    }

    /// Resize the region.
    pub fn set_size(&mut self, width: f32, height: f32, cx: &mut Context<Self>) {
        self.brush.set_size(width, height);
        cx.notify();
    }

    /// Current selection, possibly unsorted mid-gesture.
    pub fn interval(&self) -> Option<Interval> {
        self.brush.interval()
    }

    /// Access the underlying state machine.
    pub fn brush(&self) -> &Brush {
        &self.brush
    }

    /// Drop the selection without notifying subscribers.
    ///
    /// A present owner value is restored on the next render.
    pub fn clear(&mut self, cx: &mut Context<Self>) {
        self.brush.clear();
        self.state.write().expect("brush state lock").clear_interaction();
        cx.notify();
    }

    /// Abandon the gesture in progress without a commit.
    pub fn cancel_gesture(&mut self, cx: &mut Context<Self>) {
        self.brush.cancel();
        cx.notify();
    }

    fn local_x(&self, position: Point<Pixels>) -> Option<f32> {
        let state = self.state.read().expect("brush state lock");
        let region = state.region?;
        Some(region.to_local(screen_point(position)).x)
    }

    fn on_mouse_down(&mut self, ev: &MouseDownEvent, cx: &mut Context<Self>) {
        let Some(pixel) = self.local_x(ev.position) else {
            return;
        };
        if let Some(event) = self.brush.pointer_down(pixel, &*self.scale) {
            cx.emit(event);
        }
        cx.notify();
    }

    fn on_mouse_move(&mut self, ev: &MouseMoveEvent, cx: &mut Context<Self>) {
        let Some(pixel) = self.local_x(ev.position) else {
            return;
        };

        if !self.brush.is_dragging() {
            let hover = self.brush.hit_test(pixel, &*self.scale);
            let mut state = self.state.write().expect("brush state lock");
            if state.hover != hover {
                state.hover = hover;
                cx.notify();
            }
            return;
        }

        let pressed = ev.pressed_button == Some(MouseButton::Left);
        if let Some(event) = self.brush.pointer_move(pixel, pressed, &*self.scale) {
            cx.emit(event);
        }
        cx.notify();
    }

    fn on_hover(&mut self, hovered: bool, cx: &mut Context<Self>) {
        if hovered {
            return;
        }
        let mut state = self.state.write().expect("brush state lock");
        if state.hover.is_some() {
            state.clear_interaction();
            cx.notify();
        }
    }

    fn on_mouse_up(&mut self, _ev: &MouseUpEvent, cx: &mut Context<Self>) {
        if let Some(event) = self.brush.pointer_up() {
            cx.emit(event);
            cx.notify();
        }
    }

    fn cursor_style(&self) -> CursorStyle {
        let target = self
            .brush
            .active_target()
            .or_else(|| self.state.read().expect("brush state lock").hover);
        match target {
            Some(DragTarget::Handle(_)) => CursorStyle::ResizeLeftRight,
            Some(DragTarget::Selection) if self.brush.is_dragging() => CursorStyle::ClosedHand,
            Some(DragTarget::Selection) => CursorStyle::OpenHand,
            None if self.brush.interval().is_none() => CursorStyle::Crosshair,
            None => CursorStyle::Arrow,
        }
    }
}

impl Render for GpuiBrushView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.brush.reconcile(self.value);

        let layout = self.brush.layout(&*self.scale);
        let state = Arc::clone(&self.state);
        let config = self.config.clone();
        let theme = self.theme.clone();

        div()
            .id("range-brush")
            .w(px(self.brush.width()))
            .h(px(self.brush.height()))
            .cursor(self.cursor_style())
            .child(
                canvas(
                    move |bounds, _window, _| {
                        let mut state = state.write().expect("brush state lock");
                        build_frame(layout, &mut state, &config, &theme, bounds)
                    },
                    move |_, frame, window, _| {
                        paint_frame(&frame, window);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_move(cx.listener(|this, ev, _, cx| {
                this.on_mouse_move(ev, cx);
            }))
            .on_hover(cx.listener(|this, hovered, _, cx| {
                this.on_hover(*hovered, cx);
            }))
            .on_mouse_up(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
            .on_mouse_up_out(
                MouseButton::Left,
                cx.listener(|this, ev, _, cx| {
                    this.on_mouse_up(ev, cx);
                }),
            )
    }
}

fn screen_point(point: Point<Pixels>) -> ScreenPoint {
    ScreenPoint::new(f32::from(point.x), f32::from(point.y))
}
