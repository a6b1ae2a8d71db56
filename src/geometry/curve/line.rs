use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::{Curve, CurveDomain};

/// A straight segment between two points.
///
/// The parametric form is `P(t) = start + t * (end - start)` for `t` in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    start: Point2,
    end: Point2,
}

impl Line {
    /// Creates a new line segment.
    ///
    /// Zero-length segments are accepted; they chain as closed curves.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint has a non-finite coordinate.
    pub fn new(start: Point2, end: Point2) -> Result<Self> {
        if !(start.coords.iter().all(|c| c.is_finite()) && end.coords.iter().all(|c| c.is_finite()))
        {
            return Err(GeometryError::NonFinite("line endpoint").into());
        }
        Ok(Self { start, end })
    }

    /// Returns the segment length.
    #[must_use]
    pub fn length(&self) -> f64 {
        nalgebra::distance(&self.start, &self.end)
    }
}

impl Curve for Line {
    fn evaluate(&self, t: f64) -> Point2 {
        self.start + (self.end - self.start) * t
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }

    fn start_point(&self) -> Point2 {
        self.start
    }

    fn end_point(&self) -> Point2 {
        self.end
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        let line = Line::new(Point2::new(0.1, 0.2), Point2::new(0.7, -0.3)).unwrap();
        assert_eq!(line.start_point(), Point2::new(0.1, 0.2));
        assert_eq!(line.end_point(), Point2::new(0.7, -0.3));
    }

    #[test]
    fn evaluate_midpoint() {
        let line = Line::new(Point2::new(0.0, 0.0), Point2::new(2.0, 4.0)).unwrap();
        let mid = line.evaluate(0.5);
        assert!((mid - Point2::new(1.0, 2.0)).norm() < 1e-12);
        assert!((line.length() - 20f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rejects_non_finite() {
        assert!(Line::new(Point2::new(f64::NAN, 0.0), Point2::new(1.0, 0.0)).is_err());
        assert!(Line::new(Point2::new(0.0, 0.0), Point2::new(f64::INFINITY, 0.0)).is_err());
    }
}
