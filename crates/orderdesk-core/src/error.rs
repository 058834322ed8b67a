//! Validation error types.

use thiserror::Error;

/// Errors raised when a candidate order or status value is rejected.
///
/// Validation is fail-fast: the first violated rule is reported and no
/// further rules are checked. A rejected operation never mutates store
/// state, so every variant is caller-correctable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or empty.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A field is present but its value is out of range.
    #[error("{0} must be greater than zero")]
    InvalidValue(&'static str),

    /// A status string outside the recognized status set.
    #[error("invalid order status: {0}")]
    InvalidStatus(String),
}
