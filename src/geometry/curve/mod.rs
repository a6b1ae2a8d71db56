mod arc;
mod circle;
mod line;

pub use arc::Arc;
pub use circle::Circle;
pub use line::Line;

use crate::math::Point2;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for bounded parametric curves in the plane.
pub trait Curve {
    /// Evaluates the curve at parameter `t`.
    fn evaluate(&self, t: f64) -> Point2;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns whether the curve is closed by construction.
    fn is_closed(&self) -> bool;

    /// Point at the start of the domain.
    fn start_point(&self) -> Point2 {
        self.evaluate(self.domain().t_min)
    }

    /// Point at the end of the domain.
    fn end_point(&self) -> Point2 {
        self.evaluate(self.domain().t_max)
    }
}

/// Geometry of a single chainable primitive.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve2d {
    Line(Line),
    Arc(Arc),
    Circle(Circle),
}

impl Curve2d {
    fn as_curve(&self) -> &dyn Curve {
        match self {
            Self::Line(line) => line,
            Self::Arc(arc) => arc,
            Self::Circle(circle) => circle,
        }
    }
}

impl Curve for Curve2d {
    fn evaluate(&self, t: f64) -> Point2 {
        self.as_curve().evaluate(t)
    }

    fn domain(&self) -> CurveDomain {
        self.as_curve().domain()
    }

    fn is_closed(&self) -> bool {
        self.as_curve().is_closed()
    }

    fn start_point(&self) -> Point2 {
        self.as_curve().start_point()
    }

    fn end_point(&self) -> Point2 {
        self.as_curve().end_point()
    }
}

impl From<Line> for Curve2d {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Curve2d {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl From<Circle> for Curve2d {
    fn from(circle: Circle) -> Self {
        Self::Circle(circle)
    }
}
