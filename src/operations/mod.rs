pub mod chain;

pub use chain::{ChainCurves, ChainOptions, Contour};
