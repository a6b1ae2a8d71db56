use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{included_angle, normalize_angle, point_on_circle};
use crate::math::{Point2, TOLERANCE};

use super::{Curve, CurveDomain};

/// A circular arc in the plane.
///
/// Arcs always run counter-clockwise from `start_angle` to `end_angle`. Both
/// angles are stored normalized to `[0, 2π)`, so an arc whose end angle is
/// smaller than its start angle crosses the zero-angle ray.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    end_angle: f64,
}

impl Arc {
    /// Creates a new counter-clockwise arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Start angle in radians
    /// * `end_angle` - End angle in radians
    ///
    /// Equal start and end angles are accepted; such an arc starts and ends at
    /// the same point and chains as a closed curve.
    ///
    /// # Errors
    ///
    /// Returns an error if any value is non-finite or the radius is not positive.
    pub fn new(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        if !(center.x.is_finite()
            && center.y.is_finite()
            && radius.is_finite()
            && start_angle.is_finite()
            && end_angle.is_finite())
        {
            return Err(GeometryError::NonFinite("arc parameter").into());
        }
        if radius < TOLERANCE {
            return Err(GeometryError::Degenerate("arc radius must be positive".into()).into());
        }

        Ok(Self {
            center,
            radius,
            start_angle: normalize_angle(start_angle),
            end_angle: normalize_angle(end_angle),
        })
    }

    /// Creates an arc that is authored clockwise from `start_angle` to `end_angle`.
    ///
    /// The result covers the same points, stored in counter-clockwise form, so
    /// its start point is the authored end point.
    ///
    /// # Errors
    ///
    /// Same as [`Arc::new`].
    pub fn clockwise(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        Self::new(center, radius, end_angle, start_angle)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normalized start angle.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the normalized end angle.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.end_angle
    }

    /// Counter-clockwise included angle, in `[0, 2π)`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        included_angle(self.start_angle, self.end_angle)
    }

    /// Bulge of the arc travelled from its start point to its end point.
    #[must_use]
    pub fn bulge(&self) -> f64 {
        (self.sweep() / 4.0).tan()
    }
}

impl Curve for Arc {
    fn evaluate(&self, t: f64) -> Point2 {
        point_on_circle(&self.center, self.radius, t)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(self.start_angle, self.start_angle + self.sweep())
    }

    fn is_closed(&self) -> bool {
        false
    }
}
