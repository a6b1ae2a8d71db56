use thiserror::Error;

/// Top-level error type for curvelink.
#[derive(Debug, Error)]
pub enum CurvelinkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("non-finite {0}")]
    NonFinite(&'static str),
}

/// Errors raised by chaining operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("composite nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: usize },
}

/// Convenience type alias for results using [`CurvelinkError`].
pub type Result<T> = std::result::Result<T, CurvelinkError>;
