//! Error types for the poyang-seasonal library.

use thiserror::Error;

/// Result type alias for decomposition and series operations.
pub type Result<T> = std::result::Result<T, DecomposeError>;

/// Errors that can occur while building series or decomposing them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecomposeError {
    /// Input data is empty.
    #[error("empty input data")]
    EmptyData,

    /// Seasonal period is zero or negative.
    #[error("invalid period: {0} (must be positive)")]
    InvalidPeriod(i64),

    /// Dimension mismatch between paired sequences.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Invalid parameter value.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Month at `index` does not follow its predecessor.
    #[error("months are not contiguous at index {index}")]
    NonContiguous { index: usize },

    /// Missing values detected when not allowed.
    #[error("missing values detected in data")]
    MissingValues,
}

impl DecomposeError {
    /// True for the errors rejected up front by [`decompose`](crate::seasonality::decompose):
    /// an empty series or a non-positive period.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::EmptyData | Self::InvalidPeriod(_))
    }
}
