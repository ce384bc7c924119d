//! Edge handles and their drag relay.
//!
//! A handle knows only its own pixel position. Dragging converts pointer
//! motion into a new handle pixel and leaves interval bookkeeping to the
//! [`Brush`](crate::brush::Brush).

/// Which bound a handle controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleSide {
    /// Handle at `interval.low`.
    Low,
    /// Handle at `interval.high`.
    High,
}

/// A handle placed at a pixel offset inside the brush region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeHandle {
    /// Bound controlled by this handle.
    pub side: HandleSide,
    /// Pixel offset of the handle line.
    pub pixel: f32,
}

impl EdgeHandle {
    /// Create a handle at a pixel offset.
    pub fn new(side: HandleSide, pixel: f32) -> Self {
        Self { side, pixel }
    }

    /// Horizontal distance between the handle and a pointer pixel.
    pub fn distance(&self, pointer: f32) -> f32 {
        (pointer - self.pixel).abs()
    }

    /// Check whether a pointer pixel grabs this handle.
    pub fn hit(&self, pointer: f32, threshold: f32) -> bool {
        self.distance(pointer) <= threshold
    }
}

/// Pick the handle under the pointer, if any.
///
/// The nearest handle wins; when both are equally close the high handle is
/// chosen so that a fresh zero-width selection widens to the right.
pub(crate) fn pick_handle(
    low: EdgeHandle,
    high: EdgeHandle,
    pointer: f32,
    threshold: f32,
) -> Option<EdgeHandle> {
    match (low.hit(pointer, threshold), high.hit(pointer, threshold)) {
        (true, true) => {
            if low.distance(pointer) < high.distance(pointer) {
                Some(low)
            } else {
                Some(high)
            }
        }
        (true, false) => Some(low),
        (false, true) => Some(high),
        (false, false) => None,
    }
}

/// Pixel relay for an in-progress handle drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandleDrag {
    side: HandleSide,
    grab_offset: f32,
}

impl HandleDrag {
    /// Start dragging a handle grabbed at `pointer`.
    pub fn begin(handle: EdgeHandle, pointer: f32) -> Self {
        Self {
            side: handle.side,
            grab_offset: pointer - handle.pixel,
        }
    }

    /// Bound controlled by the dragged handle.
    pub fn side(&self) -> HandleSide {
        self.side
    }

    /// Handle pixel for the current pointer pixel.
    pub fn position(&self, pointer: f32) -> f32 {
        pointer - self.grab_offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_keeps_grab_offset() {
        let handle = EdgeHandle::new(HandleSide::Low, 100.0);
        let drag = HandleDrag::begin(handle, 103.0);
        assert_eq!(drag.side(), HandleSide::Low);
        assert_eq!(drag.position(153.0), 150.0);
        assert_eq!(drag.position(-7.0), -10.0);
    }

    #[test]
    fn pick_prefers_nearest_then_high() {
        let low = EdgeHandle::new(HandleSide::Low, 100.0);
        let high = EdgeHandle::new(HandleSide::High, 104.0);
        assert_eq!(
            pick_handle(low, high, 101.0, 6.0).map(|h| h.side),
            Some(HandleSide::Low)
        );
        assert_eq!(
            pick_handle(low, high, 102.0, 6.0).map(|h| h.side),
            Some(HandleSide::High)
        );
        assert_eq!(pick_handle(low, high, 120.0, 6.0), None);
    }
}
