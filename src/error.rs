//! Engine-wide error type.
//!
//! A single `thiserror`-derived enum carries every error kind the core
//! raises. Library code never panics on ordinary bad input; `Internal`
//! is reserved for invariant violations and should be treated as a bug
//! report by callers, not a retryable condition.

use thiserror::Error;

/// Result alias used at every fallible boundary in this crate.
pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, Error)]
pub enum EngineError {
    /// Order is syntactically valid but illegal for this phase/unit/user.
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),

    /// No game/province/unit/country with the given id.
    #[error("not found: {0}")]
    NotFound(String),

    /// The submitting user does not own the affected country.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    /// Operation incompatible with the current phase.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Corrupt or inconsistent map descriptor.
    #[error("map error: {0}")]
    MapError(String),

    /// Invariant violation. Must be treated as a bug, never silently
    /// recovered from.
    #[error("internal invariant violation: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn invalid_submission(msg: impl Into<String>) -> Self {
        EngineError::InvalidSubmission(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        EngineError::NotFound(msg.into())
    }

    pub fn permission_denied(msg: impl Into<String>) -> Self {
        EngineError::PermissionDenied(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        EngineError::InvalidState(msg.into())
    }

    pub fn map_error(msg: impl Into<String>) -> Self {
        EngineError::MapError(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        EngineError::Internal(msg.into())
    }
}
