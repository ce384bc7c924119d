//! Pointer-driven range selection.
//!
//! [`Brush`] is a backend-agnostic state machine. Render backends feed it
//! region-relative pointer pixels and forward the returned [`BrushEvent`]s to
//! the owner. A gesture is one down/move/up sequence; gestures never
//! interleave.

use tracing::{debug, trace};

use crate::handle::{EdgeHandle, HandleDrag, HandleSide, pick_handle};
use crate::interval::Interval;
use crate::scale::Scale;

/// Selection lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BrushPhase {
    /// No interval exists.
    #[default]
    Idle,
    /// The first interval is being drawn.
    Creating,
    /// An interval exists and has been released at least once.
    Finalized,
}

/// Notifications produced by pointer handlers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BrushEvent {
    /// The interval changed during a gesture. Bounds may be unsorted.
    Changed(Interval),
    /// A gesture finished. Bounds are sorted ascending.
    Committed(Interval),
}

/// What a pointer is over, or what it is dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragTarget {
    /// The selection body.
    Selection,
    /// One of the edge handles.
    Handle(HandleSide),
}

/// Interaction tuning for [`Brush`].
#[derive(Debug, Clone)]
pub struct BrushConfig {
    /// Pixel distance within which a pointer grabs an edge handle.
    pub handle_hit_px: f32,
    /// Clamp edge-handle drags to the region on every move.
    ///
    /// Only the initiating pointer-down is clamped when this is off.
    pub clamp_edge_drags: bool,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            handle_hit_px: 6.0,
            clamp_edge_drags: false,
        }
    }
}

/// Pixel geometry of a selection, derived from its interval and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushLayout {
    /// Left edge of the selection rectangle.
    pub left: f32,
    /// Width of the selection rectangle.
    pub width: f32,
    /// Pixel of the low handle.
    pub low_handle: f32,
    /// Pixel of the high handle.
    pub high_handle: f32,
}

impl BrushLayout {
    /// Derive the layout for an interval.
    pub fn from_interval<S: Scale + ?Sized>(interval: Interval, scale: &S) -> Self {
        let low = scale.to_pixel(interval.low);
        let high = scale.to_pixel(interval.high);
        Self {
            left: low.min(high),
            width: (high - low).abs(),
            low_handle: low,
            high_handle: high,
        }
    }

    /// Right edge of the selection rectangle.
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Check whether a pixel lies inside the rectangle, inclusive.
    pub fn contains(&self, pixel: f32) -> bool {
        pixel >= self.left && pixel <= self.right()
    }

    /// Low and high handles.
    pub fn handles(&self) -> (EdgeHandle, EdgeHandle) {
        (
            EdgeHandle::new(HandleSide::Low, self.low_handle),
            EdgeHandle::new(HandleSide::High, self.high_handle),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DragMode {
    Create { anchor: f64 },
    Whole { offset: f64, span: f64 },
    Edge(HandleDrag),
}

impl DragMode {
    fn target(&self) -> DragTarget {
        match self {
            Self::Create { .. } => DragTarget::Handle(HandleSide::High),
            Self::Whole { .. } => DragTarget::Selection,
            Self::Edge(drag) => DragTarget::Handle(drag.side()),
        }
    }
}

/// Range-selection state machine for one brush region.
#[derive(Debug, Clone)]
pub struct Brush {
    config: BrushConfig,
    width: f32,
    height: f32,
    phase: BrushPhase,
    interval: Option<Interval>,
    drag: Option<DragMode>,
    owner_value: Option<Interval>,
}

impl Brush {
    /// Create an idle brush for a region of the given pixel size.
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_config(width, height, BrushConfig::default())
    }

    /// Create an idle brush with a custom configuration.
    pub fn with_config(width: f32, height: f32, config: BrushConfig) -> Self {
        Self {
            config,
            width: width.max(0.0),
            height: height.max(0.0),
            phase: BrushPhase::Idle,
            interval: None,
            drag: None,
            owner_value: None,
        }
    }

    /// Region width in pixels.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Region height in pixels.
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Resize the region.
    pub fn set_size(&mut self, width: f32, height: f32) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> BrushPhase {
        self.phase
    }

    /// Current interval, possibly unsorted mid-gesture.
    pub fn interval(&self) -> Option<Interval> {
        self.interval
    }

    /// Check whether a gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Target of the gesture in progress.
    pub fn active_target(&self) -> Option<DragTarget> {
        self.drag.map(|mode| mode.target())
    }

    /// Pixel geometry of the current interval.
    pub fn layout<S: Scale + ?Sized>(&self, scale: &S) -> Option<BrushLayout> {
        self.interval
            .map(|interval| BrushLayout::from_interval(interval, scale))
    }

    /// What a pointer-down at `pixel` would grab.
    pub fn hit_test<S: Scale + ?Sized>(&self, pixel: f32, scale: &S) -> Option<DragTarget> {
        let layout = self.layout(scale)?;
        let pixel = self.clamp_pixel(pixel);
        let (low, high) = layout.handles();
        if let Some(handle) = pick_handle(low, high, pixel, self.config.handle_hit_px) {
            return Some(DragTarget::Handle(handle.side));
        }
        layout.contains(pixel).then_some(DragTarget::Selection)
    }

    /// Apply the owner's controlled value.
    ///
    /// A present value overwrites the interval whenever they differ. An
    /// absent value clears the interval only when the owner previously
    /// supplied one. During a gesture nothing is applied, so the next call
    /// after release picks the value up. Returns true when the interval was
    /// replaced. Never produces events.
    pub fn reconcile(&mut self, value: Option<Interval>) -> bool {
        if self.drag.is_some() {
            return false;
        }
        let previous = std::mem::replace(&mut self.owner_value, value);
        match value {
            Some(interval) if self.interval != Some(interval) => {
                self.interval = Some(interval);
                self.phase = BrushPhase::Finalized;
            }
            None if previous.is_some() && self.interval.is_some() => {
                self.interval = None;
                self.phase = BrushPhase::Idle;
            }
            _ => return false,
        }
        debug!(?value, "brush synced to owner value");
        true
    }

    /// Handle a pointer-down at a region-relative pixel.
    pub fn pointer_down<S: Scale + ?Sized>(&mut self, pixel: f32, scale: &S) -> Option<BrushEvent> {
        // A press while a gesture is active means its release was lost.
        self.cancel();
        let pixel = self.clamp_pixel(pixel);
        let value = scale.to_domain(pixel);

        let Some(interval) = self.interval else {
            let interval = Interval::point(value);
            self.interval = Some(interval);
            self.phase = BrushPhase::Creating;
            self.drag = Some(DragMode::Create { anchor: value });
            debug!(anchor = value, "brush selection started");
            return Some(BrushEvent::Changed(interval));
        };

        let layout = BrushLayout::from_interval(interval, scale);
        let (low, high) = layout.handles();
        if let Some(handle) = pick_handle(low, high, pixel, self.config.handle_hit_px) {
            self.drag = Some(DragMode::Edge(HandleDrag::begin(handle, pixel)));
            debug!(side = ?handle.side, "brush handle drag started");
        } else if layout.contains(pixel) {
            self.drag = Some(DragMode::Whole {
                offset: value - interval.low,
                span: interval.span(),
            });
            debug!(low = interval.low, high = interval.high, "brush move started");
        }
        None
    }

    /// Handle pointer motion. `pressed` reports whether the primary button is
    /// held; motion without it ends any gesture without a commit.
    pub fn pointer_move<S: Scale + ?Sized>(
        &mut self,
        pixel: f32,
        pressed: bool,
        scale: &S,
    ) -> Option<BrushEvent> {
        if !pressed {
            self.cancel();
            return None;
        }
        let mode = self.drag?;
        let current = self.interval?;

        let next = match mode {
            DragMode::Create { anchor } => {
                Interval::new(anchor, scale.to_domain(self.clamp_pixel(pixel)))
            }
            DragMode::Whole { offset, span } => {
                let low = scale.to_domain(self.clamp_pixel(pixel)) - offset;
                Interval::new(low, low + span)
            }
            DragMode::Edge(drag) => {
                let mut handle_pixel = drag.position(pixel);
                if self.config.clamp_edge_drags {
                    handle_pixel = self.clamp_pixel(handle_pixel);
                }
                let value = scale.to_domain(handle_pixel);
                trace!(side = ?drag.side(), value, "brush handle moved");
                match drag.side() {
                    HandleSide::Low => Interval::new(value, current.high),
                    HandleSide::High => Interval::new(current.low, value),
                }
            }
        };

        if next == current {
            return None;
        }
        self.interval = Some(next);
        trace!(low = next.low, high = next.high, "brush interval changed");
        Some(BrushEvent::Changed(next))
    }

    /// Handle pointer release, committing the sorted interval.
    pub fn pointer_up(&mut self) -> Option<BrushEvent> {
        self.drag.take()?;
        let interval = self.interval?.sorted();
        self.interval = Some(interval);
        self.phase = BrushPhase::Finalized;
        debug!(
            low = interval.low,
            high = interval.high,
            "brush selection committed"
        );
        Some(BrushEvent::Committed(interval))
    }

    /// Abandon the gesture in progress without committing.
    pub fn cancel(&mut self) {
        if self.drag.take().is_some() {
            debug!("brush gesture cancelled");
        }
        if self.phase == BrushPhase::Creating {
            self.phase = BrushPhase::Finalized;
        }
    }

    /// Drop the interval and return to idle. Produces no events.
    pub fn clear(&mut self) {
        self.drag = None;
        self.interval = None;
        self.phase = BrushPhase::Idle;
    }

    fn clamp_pixel(&self, pixel: f32) -> f32 {
        pixel.clamp(0.0, self.width)
    }
}
