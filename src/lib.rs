//! Rebuilds closed contours from loose 2D line and arc segments.
//!
//! Segments are linked wherever their endpoints coincide within a tolerance,
//! and each resulting chain is emitted as a bulge polyline. See
//! [`operations::ChainCurves`].

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod shape;

pub use error::{CurvelinkError, Result};
