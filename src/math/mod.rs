pub mod arc_2d;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global numeric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Default endpoint-coincidence threshold used when chaining segments.
pub const DEFAULT_CHAIN_TOLERANCE: f64 = 1e-5;

/// Returns `true` if `a` and `b` are closer than `tol`.
///
/// The comparison is strict, so a non-positive `tol` never matches.
#[must_use]
pub fn coincident(a: &Point2, b: &Point2, tol: f64) -> bool {
    nalgebra::distance(a, b) < tol
}
