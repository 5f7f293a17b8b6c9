//! Sequence errors

use thiserror::Error;

/// Sequence result
pub type FibResult<T> = Result<T, FibError>;

/// Sequence errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FibError {
    /// Negative index rejected at the checked boundary
    #[error("Invalid argument: index must be non-negative, got {0}")]
    InvalidArgument(i64),

    /// Decimal rendering blocked by a configured digit ceiling.
    /// This is a conversion limit only; computation itself is unbounded.
    #[error("Conversion limit exceeded: result has {digits} digits, limit is {limit}")]
    ConversionLimitExceeded { digits: usize, limit: usize },
}
