use crate::error::{OperationError, Result};
use crate::math::DEFAULT_CHAIN_TOLERANCE;

/// Default limit on how deeply composites may nest.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Settings for one chaining run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChainOptions {
    /// Only join segments that share the chain's layer.
    pub same_layer_only: bool,
    /// Endpoint coincidence threshold. Must be finite and positive.
    pub tolerance: f64,
    /// Maximum composite nesting depth.
    pub max_depth: usize,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            same_layer_only: false,
            tolerance: DEFAULT_CHAIN_TOLERANCE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ChainOptions {
    #[must_use]
    pub fn with_same_layer_only(mut self, same_layer_only: bool) -> Self {
        self.same_layer_only = same_layer_only;
        self
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Checks that the options can drive a chaining run.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the tolerance is not a finite
    /// positive number. Such a tolerance would make every endpoint test fail.
    pub fn validate(&self) -> Result<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(OperationError::InvalidInput(format!(
                "chain tolerance must be finite and positive, got {}",
                self.tolerance
            ))
            .into());
        }
        Ok(())
    }
}
