//! Error types for extrapolation operations.
//!
//! All failures here are deterministic input-validation errors raised
//! before any computation starts; none of them is transient and nothing
//! retries.

use thiserror::Error;

/// Main error type for extrapolation operations.
#[derive(Error, Debug)]
pub enum ExtrapolationError {
    /// Requested method name is not registered.
    #[error("Unknown extrapolation method '{name}'. The available methods are: {available:?}")]
    UnknownMethod {
        name: String,
        available: Vec<&'static str>,
    },

    /// Field and velocity grids disagree in shape.
    #[error("Shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    /// Out-of-range argument (step counts).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Unrecognized value for a recognized option key.
    #[error("Invalid value '{value}' for option '{key}'. Accepted values are: {accepted:?}")]
    InvalidOption {
        key: &'static str,
        value: String,
        accepted: Vec<&'static str>,
    },
}

/// Result type for extrapolation operations.
pub type Result<T> = std::result::Result<T, ExtrapolationError>;

impl ExtrapolationError {
    /// Create an unknown method error.
    pub fn unknown_method(name: impl Into<String>, available: &[&'static str]) -> Self {
        Self::UnknownMethod {
            name: name.into(),
            available: available.to_vec(),
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create an invalid option error.
    pub fn invalid_option(
        key: &'static str,
        value: impl Into<String>,
        accepted: &[&'static str],
    ) -> Self {
        Self::InvalidOption {
            key,
            value: value.into(),
            accepted: accepted.to_vec(),
        }
    }
}
