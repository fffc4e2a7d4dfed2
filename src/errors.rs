//! Error support for hook consumers
//!
//! Error types stored in a tracker must be `Clone + 'static` so they can live
//! inside a `Signal`. Most std error types are not `Clone`, which forces
//! callers to hand-roll wrappers. `AsyncError` is a ready-made cloneable,
//! comparable error carrying a human-readable message.

use std::fmt::Display;

/// A cloneable, comparable error for use as a tracker error type.
///
/// Comparison is by message, so two independently constructed errors with the
/// same text are equal. Use [`AsyncError::caused_by`] to capture an arbitrary
/// source error's display text.
///
/// ## Example
///
/// ```rust,no_run
/// use dioxus_use_async::errors::AsyncError;
///
/// async fn fetch_config() -> Result<String, AsyncError> {
///     std::fs::read_to_string("config.toml").map_err(AsyncError::caused_by)
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct AsyncError {
    message: String,
}

impl AsyncError {
    /// Create a new error with the given message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create an error from any displayable source error
    pub fn caused_by(source: impl Display) -> Self {
        Self {
            message: source.to_string(),
        }
    }

    /// The error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for AsyncError {
    fn from(message: String) -> Self {
        Self { message }
    }
}

impl From<&str> for AsyncError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}
