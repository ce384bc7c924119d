//! Domain-unit intervals selected by the brush.

/// A pair of domain values (for example prices).
///
/// Unlike a normalized range, the bounds are kept in the order they were
/// produced. During a gesture `low` may exceed `high`; committed intervals
/// are always [`sorted`](Interval::sorted).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Bound driven by the low handle.
    pub low: f64,
    /// Bound driven by the high handle.
    pub high: f64,
}

impl Interval {
    /// Create an interval, keeping the bounds in the given order.
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Create a zero-width interval at a single value.
    pub fn point(value: f64) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    /// Return the interval with bounds in ascending order.
    pub fn sorted(&self) -> Self {
        if self.low > self.high {
            Self {
                low: self.high,
                high: self.low,
            }
        } else {
            *self
        }
    }

    /// Check whether `low <= high`.
    pub fn is_sorted(&self) -> bool {
        self.low <= self.high
    }

    /// Signed span (`high - low`).
    pub fn span(&self) -> f64 {
        self.high - self.low
    }

    /// Smaller of the two bounds.
    pub fn min(&self) -> f64 {
        self.low.min(self.high)
    }

    /// Larger of the two bounds.
    pub fn max(&self) -> f64 {
        self.low.max(self.high)
    }

    /// Check whether a value lies between the bounds, inclusive.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min() && value <= self.max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_swaps_inverted_bounds() {
        let interval = Interval::new(600.0, 200.0);
        assert!(!interval.is_sorted());
        let sorted = interval.sorted();
        assert_eq!(sorted, Interval::new(200.0, 600.0));
        assert!(sorted.is_sorted());
    }

    #[test]
    fn contains_ignores_bound_order() {
        let interval = Interval::new(10.0, 2.0);
        assert!(interval.contains(2.0));
        assert!(interval.contains(5.0));
        assert!(interval.contains(10.0));
        assert!(!interval.contains(10.5));
    }

    #[test]
    fn point_has_zero_span() {
        let interval = Interval::point(240.0);
        assert_eq!(interval.span(), 0.0);
        assert!(interval.is_sorted());
        assert!(interval.contains(240.0));
    }
}
