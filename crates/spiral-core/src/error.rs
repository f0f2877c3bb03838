//! Error types for spiral generation.

use thiserror::Error;

/// Result type for spiral operations.
pub type Result<T> = std::result::Result<T, SpiralError>;

/// Errors raised while validating spiral and field parameters.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpiralError {
    /// A parameter is outside the range the generator accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    /// A color string could not be parsed.
    #[error("invalid color {0:?}: expected `#rrggbb`")]
    InvalidColor(String),
}

impl SpiralError {
    pub(crate) fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
