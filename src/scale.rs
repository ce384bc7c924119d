//! Coordinate scales between domain values and region pixels.

use std::sync::Arc;

use thiserror::Error;

/// Bidirectional mapping between domain values and pixel offsets.
///
/// Pixel offsets are relative to the left edge of the brush region.
/// Implementations must be monotonic and mutually inverse over the visible
/// pixel range; the brush does not check this.
pub trait Scale {
    /// Map a domain value to a pixel offset.
    fn to_pixel(&self, value: f64) -> f32;

    /// Map a pixel offset back to a domain value.
    fn to_domain(&self, pixel: f32) -> f64;
}

impl<S: Scale + ?Sized> Scale for &S {
    fn to_pixel(&self, value: f64) -> f32 {
        (**self).to_pixel(value)
    }

    fn to_domain(&self, pixel: f32) -> f64 {
        (**self).to_domain(pixel)
    }
}

impl<S: Scale + ?Sized> Scale for Arc<S> {
    fn to_pixel(&self, value: f64) -> f32 {
        (**self).to_pixel(value)
    }

    fn to_domain(&self, pixel: f32) -> f64 {
        (**self).to_domain(pixel)
    }
}

/// Errors returned when constructing a scale.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ScaleError {
    /// A domain or pixel bound is NaN or infinite.
    #[error("scale bounds must be finite")]
    NonFinite,
    /// Domain bounds are equal.
    #[error("scale domain [{0}, {1}] has zero span")]
    EmptyDomain(f64, f64),
    /// Pixel bounds are equal.
    #[error("scale pixel range [{0}, {1}] has zero span")]
    EmptyRange(f32, f32),
    /// Logarithmic domain touches or crosses zero.
    #[error("logarithmic domain [{0}, {1}] must be strictly positive")]
    NonPositiveLogDomain(f64, f64),
}

/// Affine map between two spans, shared by the concrete scales.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Affine {
    domain_min: f64,
    pixel_min: f64,
    units_per_pixel: f64,
}

impl Affine {
    fn new(domain: (f64, f64), pixels: (f32, f32)) -> Result<Self, ScaleError> {
        let (d0, d1) = domain;
        let (r0, r1) = (pixels.0 as f64, pixels.1 as f64);
        if !(d0.is_finite() && d1.is_finite() && r0.is_finite() && r1.is_finite()) {
            return Err(ScaleError::NonFinite);
        }
        if d0 == d1 {
            return Err(ScaleError::EmptyDomain(domain.0, domain.1));
        }
        if r0 == r1 {
            return Err(ScaleError::EmptyRange(pixels.0, pixels.1));
        }
        Ok(Self {
            domain_min: d0,
            pixel_min: r0,
            units_per_pixel: (d1 - d0) / (r1 - r0),
        })
    }

    fn forward(&self, value: f64) -> f64 {
        self.pixel_min + (value - self.domain_min) / self.units_per_pixel
    }

    fn inverse(&self, pixel: f64) -> f64 {
        self.domain_min + (pixel - self.pixel_min) * self.units_per_pixel
    }
}

/// Linear scale mapping `[domain.0, domain.1]` onto `[pixels.0, pixels.1]`.
///
/// Values outside the domain extrapolate linearly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    pixels: (f32, f32),
    map: Affine,
}

impl LinearScale {
    /// Create a linear scale between a domain and a pixel range.
    pub fn new(domain: (f64, f64), pixels: (f32, f32)) -> Result<Self, ScaleError> {
        Ok(Self {
            domain,
            pixels,
            map: Affine::new(domain, pixels)?,
        })
    }

    /// Create a linear scale spanning pixels `[0, width]`.
    pub fn with_width(domain: (f64, f64), width: f32) -> Result<Self, ScaleError> {
        Self::new(domain, (0.0, width))
    }

    /// Domain bounds as configured.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel bounds as configured.
    pub fn pixels(&self) -> (f32, f32) {
        self.pixels
    }
}

impl Scale for LinearScale {
    fn to_pixel(&self, value: f64) -> f32 {
        self.map.forward(value) as f32
    }

    fn to_domain(&self, pixel: f32) -> f64 {
        self.map.inverse(pixel as f64)
    }
}

/// Base-10 logarithmic scale.
///
/// Non-positive values have no pixel position and map to NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogScale {
    domain: (f64, f64),
    pixels: (f32, f32),
    map: Affine,
}

impl LogScale {
    /// Create a log scale between a strictly positive domain and a pixel range.
    pub fn new(domain: (f64, f64), pixels: (f32, f32)) -> Result<Self, ScaleError> {
        let (d0, d1) = domain;
        if !(d0.is_finite() && d1.is_finite()) {
            return Err(ScaleError::NonFinite);
        }
        if d0 <= 0.0 || d1 <= 0.0 {
            return Err(ScaleError::NonPositiveLogDomain(d0, d1));
        }
        let map = Affine::new((d0.log10(), d1.log10()), pixels).map_err(|err| match err {
            ScaleError::EmptyDomain(..) => ScaleError::EmptyDomain(d0, d1),
            other => other,
        })?;
        Ok(Self {
            domain,
            pixels,
            map,
        })
    }

    /// Create a log scale spanning pixels `[0, width]`.
    pub fn with_width(domain: (f64, f64), width: f32) -> Result<Self, ScaleError> {
        Self::new(domain, (0.0, width))
    }

    /// Domain bounds as configured.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Pixel bounds as configured.
    pub fn pixels(&self) -> (f32, f32) {
        self.pixels
    }
}

impl Scale for LogScale {
    fn to_pixel(&self, value: f64) -> f32 {
        if value <= 0.0 {
            return f32::NAN;
        }
        self.map.forward(value.log10()) as f32
    }

    fn to_domain(&self, pixel: f32) -> f64 {
        10_f64.powf(self.map.inverse(pixel as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_maps_both_directions() {
        let scale = LinearScale::with_width((0.0, 1000.0), 500.0).expect("valid scale");
        assert!((scale.to_domain(100.0) - 200.0).abs() < 1e-9);
        assert!((scale.to_pixel(600.0) - 300.0).abs() < 1e-4);
        assert!((scale.to_domain(-50.0) + 100.0).abs() < 1e-9);
    }

    #[test]
    fn linear_supports_reversed_pixels() {
        let scale = LinearScale::new((0.0, 10.0), (100.0, 0.0)).expect("valid scale");
        assert!((scale.to_pixel(0.0) - 100.0).abs() < 1e-4);
        assert!((scale.to_pixel(10.0)).abs() < 1e-4);
        assert!((scale.to_domain(25.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn linear_rejects_degenerate_bounds() {
        assert_eq!(
            LinearScale::new((1.0, 1.0), (0.0, 10.0)),
            Err(ScaleError::EmptyDomain(1.0, 1.0))
        );
        assert_eq!(
            LinearScale::new((0.0, 1.0), (5.0, 5.0)),
            Err(ScaleError::EmptyRange(5.0, 5.0))
        );
        assert_eq!(
            LinearScale::new((0.0, f64::NAN), (0.0, 5.0)),
            Err(ScaleError::NonFinite)
        );
    }

    #[test]
    fn log_roundtrip() {
        let scale = LogScale::with_width((1.0, 1000.0), 300.0).expect("valid scale");
        assert!((scale.to_pixel(10.0) - 100.0).abs() < 1e-3);
        assert!((scale.to_domain(200.0) - 100.0).abs() < 1e-6);
        assert!(scale.to_pixel(-1.0).is_nan());
    }

    #[test]
    fn log_rejects_non_positive_domain() {
        assert_eq!(
            LogScale::new((0.0, 10.0), (0.0, 100.0)),
            Err(ScaleError::NonPositiveLogDomain(0.0, 10.0))
        );
    }
}
