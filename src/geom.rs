//! Screen-space primitives.
//!
//! Coordinates are logical window pixels. Brush handlers work in
//! region-relative pixels along X only; these types are used when laying the
//! brush out inside a window.

/// A point in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    /// X value in screen pixels.
    pub x: f32,
    /// Y value in screen pixels.
    pub y: f32,
}

impl ScreenPoint {
    /// Create a new screen point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A rectangle in screen space (pixel coordinates).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    /// Top-left corner.
    pub min: ScreenPoint,
    /// Bottom-right corner.
    pub max: ScreenPoint,
}

impl ScreenRect {
    /// Create a new screen rectangle from corners.
    pub fn new(min: ScreenPoint, max: ScreenPoint) -> Self {
        Self { min, max }
    }

    /// Create a rectangle from an origin and a size.
    pub fn from_origin_size(origin: ScreenPoint, width: f32, height: f32) -> Self {
        Self {
            min: origin,
            max: ScreenPoint::new(origin.x + width, origin.y + height),
        }
    }

    /// Rectangle width in pixels.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Rectangle height in pixels.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Check whether the rectangle has positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    /// Convert a window point into an offset from the top-left corner.
    pub fn to_local(&self, point: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(point.x - self.min.x, point.y - self.min.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_offsets_from_origin() {
        let rect = ScreenRect::from_origin_size(ScreenPoint::new(40.0, 10.0), 500.0, 200.0);
        assert!(rect.is_valid());
        assert_eq!(
            rect.to_local(ScreenPoint::new(140.0, 60.0)),
            ScreenPoint::new(100.0, 50.0)
        );
        assert_eq!(rect.max, ScreenPoint::new(540.0, 210.0));
    }
}
