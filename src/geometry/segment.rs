use crate::error::Result;
use crate::math::{coincident, Point2};

use super::curve::{Arc, Circle, Curve, Curve2d, Line};
use super::pline::{Pline, PlineVertex};
use super::style::Style;

/// A styled 2D primitive that can take part in a chain.
///
/// Segments are immutable. Chaining decides the direction each segment is
/// travelled in; the segment itself keeps its authored start and end.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    curve: Curve2d,
    style: Style,
}

impl Segment {
    /// Creates an unstyled segment from any supported curve.
    #[must_use]
    pub fn new(curve: impl Into<Curve2d>) -> Self {
        Self {
            curve: curve.into(),
            style: Style::default(),
        }
    }

    /// Creates a line segment.
    ///
    /// # Errors
    ///
    /// See [`Line::new`].
    pub fn line(start: Point2, end: Point2) -> Result<Self> {
        Ok(Self::new(Line::new(start, end)?))
    }

    /// Creates a counter-clockwise arc segment.
    ///
    /// # Errors
    ///
    /// See [`Arc::new`].
    pub fn arc(center: Point2, radius: f64, start_angle: f64, end_angle: f64) -> Result<Self> {
        Ok(Self::new(Arc::new(center, radius, start_angle, end_angle)?))
    }

    /// Creates a circle segment.
    ///
    /// # Errors
    ///
    /// See [`Circle::new`].
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        Ok(Self::new(Circle::new(center, radius)?))
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub fn curve(&self) -> &Curve2d {
        &self.curve
    }

    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Authored start point.
    #[must_use]
    pub fn start(&self) -> Point2 {
        self.curve.start_point()
    }

    /// Authored end point.
    #[must_use]
    pub fn end(&self) -> Point2 {
        self.curve.end_point()
    }

    /// Returns `true` for inherently closed curves and for segments whose
    /// endpoints coincide within `tol`.
    #[must_use]
    pub fn is_closed(&self, tol: f64) -> bool {
        self.curve.is_closed() || coincident(&self.start(), &self.end(), tol)
    }

    /// Bulge of this segment when travelled from start to end, or from end to
    /// start when `reversed` is set. Lines and circles have no bulge.
    #[must_use]
    pub fn bulge(&self, reversed: bool) -> f64 {
        match &self.curve {
            Curve2d::Arc(arc) => {
                let bulge = arc.bulge();
                if reversed {
                    -bulge
                } else {
                    bulge
                }
            }
            Curve2d::Line(_) | Curve2d::Circle(_) => 0.0,
        }
    }

    /// Re-expresses the segment as a bulge polyline carrying the same style.
    ///
    /// Circles and arcs that close over more than a half turn become closed
    /// two-vertex polylines of two half-turns. Any other segment whose
    /// endpoints coincide within `tol` collapses to a closed single vertex;
    /// the rest become open two-vertex polylines.
    #[must_use]
    pub fn to_pline(&self, tol: f64) -> Pline {
        let (vertices, closed) = match &self.curve {
            Curve2d::Circle(circle) => {
                let opposite = circle.evaluate(std::f64::consts::PI);
                (half_turns(circle.start_point(), opposite), true)
            }
            Curve2d::Arc(arc) if self.is_closed(tol) && arc.sweep() > std::f64::consts::PI => {
                let start = arc.start_point();
                let opposite = arc.evaluate(arc.start_angle() + std::f64::consts::PI);
                (half_turns(start, opposite), true)
            }
            Curve2d::Arc(_) | Curve2d::Line(_) if self.is_closed(tol) => {
                (vec![PlineVertex::at(&self.start(), 0.0)], true)
            }
            Curve2d::Arc(_) | Curve2d::Line(_) => {
                let (start, end) = (self.start(), self.end());
                (
                    vec![
                        PlineVertex::at(&start, self.bulge(false)),
                        PlineVertex::at(&end, 0.0),
                    ],
                    false,
                )
            }
        };
        Pline {
            vertices,
            closed,
            style: self.style.clone(),
        }
    }
}

fn half_turns(a: Point2, b: Point2) -> Vec<PlineVertex> {
    vec![PlineVertex::new(a.x, a.y, 1.0), PlineVertex::new(b.x, b.y, 1.0)]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-5;

    #[test]
    fn line_has_zero_bulge_both_ways() {
        let seg = Segment::line(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)).unwrap();
        assert!(seg.bulge(false).abs() < 1e-12);
        assert!(seg.bulge(true).abs() < 1e-12);
        assert!(!seg.is_closed(TOL));
    }

    #[test]
    fn reversed_arc_negates_bulge() {
        let seg = Segment::arc(Point2::origin(), 1.0, 0.0, PI / 2.0).unwrap();
        let forward = seg.bulge(false);
        assert_abs_diff_eq!(forward, (PI / 8.0).tan(), epsilon = 1e-12);
        assert_abs_diff_eq!(seg.bulge(true), -forward, epsilon = 1e-12);
    }

    #[test]
    fn accidental_closure_within_tolerance() {
        let seg = Segment::line(Point2::new(1.0, 1.0), Point2::new(1.0 + 1e-7, 1.0)).unwrap();
        assert!(seg.is_closed(TOL));
        let arc = Segment::arc(Point2::origin(), 1.0, 1.0, 1.0).unwrap();
        assert!(arc.is_closed(TOL));
        let circle = Segment::circle(Point2::origin(), 2.0).unwrap();
        assert!(circle.is_closed(TOL));
    }

    #[test]
    fn circle_to_pline_is_two_half_turns() {
        let circle = Segment::circle(Point2::new(1.0, 1.0), 2.0)
            .unwrap()
            .with_style(Style::on_layer("holes"));
        let pline = circle.to_pline(TOL);
        assert!(pline.closed);
        assert_eq!(pline.vertices.len(), 2);
        assert_abs_diff_eq!(pline.vertices[0].x, 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pline.vertices[1].x, -1.0, epsilon = 1e-12);
        assert!(pline.vertices.iter().all(|v| (v.bulge - 1.0).abs() < 1e-12));
        assert_eq!(pline.style.layer.as_deref(), Some("holes"));
    }

    #[test]
    fn nearly_full_arc_to_pline_is_a_circle() {
        let seg = Segment::arc(Point2::origin(), 1.0, 1.0, 1.0 - 1e-7).unwrap();
        let pline = seg.to_pline(TOL);
        assert!(pline.closed);
        assert_eq!(pline.vertices.len(), 2);
        let span = (pline.vertices[0].point() - pline.vertices[1].point()).norm();
        assert_abs_diff_eq!(span, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn sliver_arc_to_pline_collapses_to_a_point() {
        let seg = Segment::arc(Point2::origin(), 1.0, 1.0, 1.0 + 1e-7).unwrap();
        assert!(seg.is_closed(TOL));
        let pline = seg.to_pline(TOL);
        assert!(pline.closed);
        assert_eq!(pline.vertices.len(), 1);
        assert_abs_diff_eq!(pline.vertices[0].x, 1.0_f64.cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(pline.vertices[0].y, 1.0_f64.sin(), epsilon = 1e-12);
        assert_eq!(pline.segment_count(), 0);
    }

    #[test]
    fn zero_length_line_to_pline_is_closed() {
        let seg = Segment::line(Point2::new(2.0, 3.0), Point2::new(2.0 + 1e-7, 3.0)).unwrap();
        let pline = seg.to_pline(TOL);
        assert_eq!(pline.closed, seg.is_closed(TOL));
        assert_eq!(pline.vertices, vec![PlineVertex::line(2.0, 3.0)]);
    }

    #[test]
    fn open_arc_to_pline() {
        let seg = Segment::arc(Point2::origin(), 1.0, 0.0, PI).unwrap();
        let pline = seg.to_pline(TOL);
        assert!(!pline.closed);
        assert_eq!(pline.vertices.len(), 2);
        assert_abs_diff_eq!(pline.vertices[0].bulge, 1.0, epsilon = 1e-12);
        assert!(pline.vertices[1].bulge.abs() < 1e-12);
    }
}
