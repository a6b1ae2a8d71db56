use crate::error::Result;
use crate::math::arc_2d::{arc_from_bulge, point_on_circle};
use crate::math::{Point2, TOLERANCE};

use super::curve::{Arc, Line};
use super::segment::Segment;
use super::style::Style;

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    /// Creates a vertex at `point`.
    #[must_use]
    pub fn at(point: &Point2, bulge: f64) -> Self {
        Self::new(point.x, point.y, bulge)
    }

    #[must_use]
    pub fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A polyline with mixed straight-line and circular-arc segments.
///
/// Each segment between consecutive vertices is either a line (bulge=0)
/// or a circular arc (bulge≠0). For closed polylines, the last vertex
/// connects back to the first and is never a repeat of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
    pub closed: bool,
    pub style: Style,
}

impl Pline {
    /// Creates a `Pline` from points with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point2], closed: bool) -> Self {
        let vertices = points.iter().map(|p| PlineVertex::line(p.x, p.y)).collect();
        Self {
            vertices,
            closed,
            style: Style::default(),
        }
    }

    /// Replaces the style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Converts this polyline to a list of points by tessellating arcs into line segments.
    ///
    /// `tolerance` controls the maximum deviation between the arc and its chord approximation.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let n = self.vertices.len();
        if n == 0 {
            return Vec::new();
        }

        let seg_count = self.segment_count();
        let mut points = Vec::with_capacity(n * 2);
        points.push(self.vertices[0].point());

        for i in 0..seg_count {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];

            if let Some(arc) = arc_from_bulge(&v0.point(), &v1.point(), v0.bulge) {
                let n_sub = arc_subdivision_count(arc.radius, arc.sweep.abs(), tolerance);
                for j in 1..n_sub {
                    let t = f64::from(j) / f64::from(n_sub);
                    points.push(point_on_circle(
                        &arc.center,
                        arc.radius,
                        arc.start_angle + arc.sweep * t,
                    ));
                }
            }
            points.push(v1.point());
        }

        points
    }

    /// Returns a new polyline with vertices in reverse order and negated bulges.
    ///
    /// For a segment `v[i] → v[i+1]` with bulge `b`, the reversed segment
    /// `v[i+1] → v[i]` has bulge `-b` (arc direction flips).
    #[must_use]
    pub fn reversed(&self) -> Self {
        let m = self.vertices.len();
        if m == 0 {
            return self.clone();
        }
        let mut new_verts = Vec::with_capacity(m);
        for j in 0..m {
            let orig = &self.vertices[m - 1 - j];
            // Reversed vertex j leads to reversed vertex j+1, i.e. original
            // segment (m-2-j) run backwards. The closing segment wraps.
            let bulge = if j < m - 1 {
                -self.vertices[m - 2 - j].bulge
            } else if self.closed {
                -self.vertices[m - 1].bulge
            } else {
                0.0
            };
            new_verts.push(PlineVertex::new(orig.x, orig.y, bulge));
        }
        Self {
            vertices: new_verts,
            closed: self.closed,
            style: self.style.clone(),
        }
    }

    /// Returns the number of segments in this polyline.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        let n = self.vertices.len();
        if n < 2 {
            return 0;
        }
        if self.closed {
            n
        } else {
            n - 1
        }
    }

    /// Signed enclosed area, positive for counter-clockwise loops.
    ///
    /// Open polylines are measured as if closed by a straight segment.
    #[must_use]
    pub fn area(&self) -> f64 {
        let n = self.vertices.len();
        if n < 2 {
            return 0.0;
        }
        let mut twice_area = 0.0;
        let mut arc_area = 0.0;
        for i in 0..n {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];
            twice_area += v0.x * v1.y - v1.x * v0.y;
            if i < self.segment_count() {
                if let Some(arc) = arc_from_bulge(&v0.point(), &v1.point(), v0.bulge) {
                    // Circular segment between the chord and the arc.
                    arc_area += 0.5 * arc.radius * arc.radius * (arc.sweep - arc.sweep.sin());
                }
            }
        }
        0.5 * twice_area + arc_area
    }

    /// Explodes the polyline into line and arc segments carrying its style.
    ///
    /// Arcs are emitted in counter-clockwise form, so a clockwise bulge yields
    /// an arc whose start is the segment's far vertex. Zero-length segments are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if a vertex has non-finite coordinates.
    pub fn segments(&self) -> Result<Vec<Segment>> {
        let n = self.vertices.len();
        let mut segments = Vec::with_capacity(self.segment_count());

        for i in 0..self.segment_count() {
            let p0 = self.vertices[i].point();
            let p1 = self.vertices[(i + 1) % n].point();
            if nalgebra::distance(&p0, &p1) < TOLERANCE {
                continue;
            }

            let segment = match arc_from_bulge(&p0, &p1, self.vertices[i].bulge) {
                Some(arc) if arc.sweep > 0.0 => Segment::new(Arc::new(
                    arc.center,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle(),
                )?),
                Some(arc) => Segment::new(Arc::clockwise(
                    arc.center,
                    arc.radius,
                    arc.start_angle,
                    arc.end_angle(),
                )?),
                None => Segment::new(Line::new(p0, p1)?),
            };
            segments.push(segment.with_style(self.style.clone()));
        }

        Ok(segments)
    }
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // From the sagitta formula: sagitta = r * (1 - cos(θ/2))
    // For a given tolerance: θ = 2 * acos(1 - tolerance/r)
    let max_angle = if tolerance >= radius {
        std::f64::consts::PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Curve, Curve2d};

    fn pline(vertices: Vec<PlineVertex>, closed: bool) -> Pline {
        Pline {
            vertices,
            closed,
            style: Style::default(),
        }
    }

    #[test]
    fn from_points_closed() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let pline = Pline::from_points(&pts, true);
        assert_eq!(pline.segment_count(), 3); // 3 sides of triangle
        assert!(pline.vertices.iter().all(|v| v.bulge.abs() < 1e-12));
    }

    #[test]
    fn to_points_semicircle_arc() {
        let pline = pline(
            vec![PlineVertex::new(0.0, 0.0, 1.0), PlineVertex::line(2.0, 0.0)],
            false,
        );
        let pts = pline.to_points(0.01);
        assert!(pts.len() > 2, "expected more than 2 points, got {}", pts.len());
        assert!(pts[0].coords.norm() < 1e-10);
        assert!((pts.last().unwrap() - Point2::new(2.0, 0.0)).norm() < 1e-10);
        // CCW semicircle from (0,0) to (2,0) dips below the chord.
        assert!(pts.iter().all(|p| p.y < 1e-10));
    }

    #[test]
    fn to_points_closed_returns_to_start() {
        let square = Pline::from_points(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            true,
        );
        let pts = square.to_points(0.01);
        assert_eq!(pts.len(), 5);
        assert!((pts[4] - pts[0]).norm() < 1e-12);
    }

    #[test]
    fn segment_count_degenerate() {
        assert_eq!(pline(vec![], false).segment_count(), 0);
        assert_eq!(pline(vec![PlineVertex::line(0.0, 0.0)], true).segment_count(), 0);
    }

    #[test]
    fn reversed_with_arc() {
        let pline = pline(
            vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::new(2.0, 0.0, 1.0), // semicircle CCW
                PlineVertex::line(4.0, 0.0),
            ],
            false,
        );
        let rev = pline.reversed();
        assert_eq!(rev.vertices.len(), 3);
        // Reversed: (4,0) → (2,0) → (0,0)
        assert!((rev.vertices[0].x - 4.0).abs() < 1e-12);
        assert!((rev.vertices[0].bulge + 1.0).abs() < 1e-12); // CW semicircle to (2,0)
        assert!(rev.vertices[1].bulge.abs() < 1e-12);
        assert!(rev.vertices[2].bulge.abs() < 1e-12);
    }

    #[test]
    fn reversed_closed_keeps_closing_bulge() {
        let pline = pline(
            vec![PlineVertex::new(1.0, 0.0, 1.0), PlineVertex::new(-1.0, 0.0, 0.5)],
            true,
        );
        let rev = pline.reversed();
        // (-1,0) → (1,0) runs the first arc backwards; (1,0) → (-1,0) the closing one.
        assert!((rev.vertices[0].x + 1.0).abs() < 1e-12);
        assert!((rev.vertices[0].bulge + 1.0).abs() < 1e-12);
        assert!((rev.vertices[1].bulge + 0.5).abs() < 1e-12);
        assert_eq!(rev.reversed(), pline);
    }

    #[test]
    fn area_of_lines_and_arcs() {
        let square = Pline::from_points(
            &[
                Point2::new(0.0, 0.0),
                Point2::new(2.0, 0.0),
                Point2::new(2.0, 2.0),
                Point2::new(0.0, 2.0),
            ],
            true,
        );
        assert!((square.area() - 4.0).abs() < 1e-12);
        assert!((square.reversed().area() + 4.0).abs() < 1e-12);

        let disc = pline(
            vec![PlineVertex::new(1.0, 0.0, 1.0), PlineVertex::new(-1.0, 0.0, 1.0)],
            true,
        );
        assert!((disc.area() - std::f64::consts::PI).abs() < 1e-9);

        let half_disc = pline(
            vec![PlineVertex::new(1.0, 0.0, 1.0), PlineVertex::line(-1.0, 0.0)],
            true,
        );
        assert!((half_disc.area() - std::f64::consts::FRAC_PI_2).abs() < 1e-9);

        let flat = pline(vec![PlineVertex::line(0.0, 0.0), PlineVertex::line(1.0, 0.0)], true);
        assert!(flat.area().abs() < 1e-12);
    }

    #[test]
    fn segments_explode_lines_and_arcs() {
        let pline = pline(
            vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::new(2.0, 0.0, -1.0), // CW semicircle over the top
                PlineVertex::line(4.0, 0.0),
            ],
            false,
        )
        .with_style(Style::on_layer("outline"));
        let segments = pline.segments().unwrap();
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[0].curve(), Curve2d::Line(_)));

        let Curve2d::Arc(arc) = segments[1].curve() else {
            panic!("expected an arc");
        };
        // Stored counter-clockwise: from (4,0) round the top to (2,0).
        assert!((arc.start_point() - Point2::new(4.0, 0.0)).norm() < 1e-9);
        assert!((arc.end_point() - Point2::new(2.0, 0.0)).norm() < 1e-9);
        assert!((arc.radius() - 1.0).abs() < 1e-9);
        assert!(segments
            .iter()
            .all(|s| s.style().layer.as_deref() == Some("outline")));
    }

    #[test]
    fn segments_skip_zero_length() {
        let pline = pline(
            vec![
                PlineVertex::line(0.0, 0.0),
                PlineVertex::line(0.0, 0.0),
                PlineVertex::line(1.0, 0.0),
            ],
            false,
        );
        assert_eq!(pline.segments().unwrap().len(), 1);
    }

    #[test]
    fn arc_subdivision_count_by_tolerance() {
        assert_eq!(arc_subdivision_count(1.0, std::f64::consts::PI, 10.0), 1);
        let n = arc_subdivision_count(1.0, std::f64::consts::PI, 0.001);
        assert!(n > 10, "expected many subdivisions, got {n}");
    }
}
