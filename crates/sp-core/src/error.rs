//! Shared error type.
//!
//! Every rejected input is reported before the first random draw, so a caller
//! that sees an `SpError` knows no simulation work was done.

use thiserror::Error;

/// The base error type for `sp-core` and the simulator crates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name:   &'static str,
        reason: String,
    },
}

impl SpError {
    /// Shorthand for building an [`SpError::InvalidParameter`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SpError::InvalidParameter { name, reason: reason.into() }
    }
}

/// Shorthand result type for all `sp-*` crates.
pub type SpResult<T> = Result<T, SpError>;
