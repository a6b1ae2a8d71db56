/// 2D arc/bulge math utilities.
///
/// Bulge convention: `bulge = tan(sweep_angle / 4)`.
/// - `bulge = 0`: straight line
/// - `bulge > 0`: counter-clockwise arc
/// - `bulge < 0`: clockwise arc
/// - `|bulge| = 1`: semicircle
use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// Center-radius-angle form of a bulge segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BulgeArc {
    pub center: Point2,
    pub radius: f64,
    /// Angle of the segment start point, as seen from the center.
    pub start_angle: f64,
    /// Signed sweep, positive for counter-clockwise travel.
    pub sweep: f64,
}

impl BulgeArc {
    /// Angle of the segment end point, as seen from the center.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.sweep
    }
}

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Counter-clockwise angle swept from `start_angle` to `end_angle`.
///
/// When `start_angle > end_angle` the arc crosses the zero-angle ray and a
/// full turn is taken off the start. The result lies in `[0, 2π)` for
/// normalized inputs.
#[must_use]
pub fn included_angle(start_angle: f64, end_angle: f64) -> f64 {
    let start = if start_angle > end_angle {
        start_angle - TAU
    } else {
        start_angle
    };
    end_angle - start
}

/// Converts a bulge-defined segment from `p0` to `p1` to center-radius-angle form.
///
/// Returns `None` for a zero-length chord or a zero bulge (straight segment).
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> Option<BulgeArc> {
    let chord = p1 - p0;
    let chord_len = chord.norm();

    if chord_len < 1e-12 || bulge.abs() < 1e-12 {
        return None;
    }

    // Signed distance from chord midpoint to center, in half-chord units.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = p0 + chord * 0.5;

    // Left normal of the chord; for positive bulge the center lies on this side.
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|) derived from r = d/(2*sin(θ/2)) with θ=4*atan(b)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());

    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
    let sweep = 4.0 * bulge.atan();

    Some(BulgeArc {
        center,
        radius,
        start_angle,
        sweep,
    })
}

/// Evaluates a point at `angle` on the circle of the given center and radius.
#[must_use]
pub fn point_on_circle(center: &Point2, radius: f64, angle: f64) -> Point2 {
    center + Vector2::new(radius * angle.cos(), radius * angle.sin())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw_passes_below_chord() {
        // CCW semicircle from (0,0) to (2,0): center (1,0), through (1,-1).
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0).unwrap();
        assert!((arc.center - Point2::new(1.0, 0.0)).norm() < TOL);
        assert!((arc.radius - 1.0).abs() < TOL);
        assert!((arc.sweep - PI).abs() < TOL);

        let mid = point_on_circle(&arc.center, arc.radius, arc.start_angle + arc.sweep * 0.5);
        assert!((mid - Point2::new(1.0, -1.0)).norm() < TOL, "mid={mid}");
    }

    #[test]
    fn semicircle_cw_passes_above_chord() {
        let arc = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0).unwrap();
        assert!((arc.sweep + PI).abs() < TOL);
        let mid = point_on_circle(&arc.center, arc.radius, arc.start_angle + arc.sweep * 0.5);
        assert!((mid - Point2::new(1.0, 1.0)).norm() < TOL, "mid={mid}");
    }

    #[test]
    fn quarter_circle_ccw() {
        let bulge = (PI / 8.0).tan();
        let arc = arc_from_bulge(&Point2::new(1.0, 0.0), &Point2::new(0.0, 1.0), bulge).unwrap();
        assert!((arc.radius - 1.0).abs() < 1e-9);
        assert!(arc.center.coords.norm() < 1e-9);
        assert!((arc.sweep - FRAC_PI_2).abs() < 1e-9);
        let end = point_on_circle(&arc.center, arc.radius, arc.end_angle());
        assert!((end - Point2::new(0.0, 1.0)).norm() < 1e-9);
    }

    #[test]
    fn straight_or_zero_chord_has_no_arc() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(1.0, 0.0);
        assert!(arc_from_bulge(&a, &b, 0.0).is_none());
        assert!(arc_from_bulge(&a, &a, 1.0).is_none());
    }

    #[test]
    fn included_angle_wraps_through_zero() {
        // 270° → 90° counter-clockwise is a half turn.
        let sweep = included_angle(3.0 * FRAC_PI_2, FRAC_PI_2);
        assert!((sweep - PI).abs() < TOL);
        assert!((included_angle(0.0, PI) - PI).abs() < TOL);
        assert!(included_angle(1.0, 1.0).abs() < TOL);
    }

    #[test]
    fn normalize_angle_range() {
        assert!((normalize_angle(-FRAC_PI_2) - 3.0 * FRAC_PI_2).abs() < TOL);
        assert!((normalize_angle(TAU + 1.0) - 1.0).abs() < TOL);
        assert!(normalize_angle(TAU).abs() < TOL);
        let tiny = normalize_angle(-1e-300);
        assert!((0.0..TAU).contains(&tiny));
    }
}
