use crate::error::{GeometryError, Result};
use crate::math::arc_2d::point_on_circle;
use crate::math::{Point2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A full circle in the plane.
///
/// The parametric domain is `[0, 2π)` and the curve is always closed.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point2,
    radius: f64,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the center or radius is non-finite, or the radius is
    /// not positive.
    pub fn new(center: Point2, radius: f64) -> Result<Self> {
        if !(center.x.is_finite() && center.y.is_finite() && radius.is_finite()) {
            return Err(GeometryError::NonFinite("circle parameter").into());
        }
        if radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }
        Ok(Self { center, radius })
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Point2 {
        point_on_circle(&self.center, self.radius, t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, std::f64::consts::TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
