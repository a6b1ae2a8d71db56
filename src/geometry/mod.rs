pub mod curve;
pub mod pline;
pub mod segment;
pub mod style;

pub use curve::{Arc, Circle, Curve, Curve2d, CurveDomain, Line};
pub use pline::{Pline, PlineVertex};
pub use segment::Segment;
pub use style::Style;
