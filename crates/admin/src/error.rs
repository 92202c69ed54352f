//! Unified error handling for the admin crate.

use thiserror::Error;

use crate::gateway::GatewayError;
use crate::snapshot::SnapshotError;

/// Application-level error type for the admin panel.
///
/// The legacy admin collapsed every failure into a boolean return and a
/// state field; here each failure class is a distinct variant so callers
/// can branch without string matching.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form or input failed validation. The message is user-facing.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A gateway (remote directory, order service) call failed.
    #[error("gateway error: {0}")]
    Gateway(#[from] GatewayError),

    /// Snapshot read/write failed.
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The current admin lacks permission for the operation.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// The operation conflicts with newer state (stale read, double resolve).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Internal invariant failure.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Build a validation error from any displayable message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Whether this error should be shown to the admin verbatim.
    ///
    /// Gateway and internal errors carry detail that belongs in logs, not
    /// dialogs.
    #[must_use]
    pub const fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::NotFound(_) | Self::Forbidden(_) | Self::Conflict(_)
        )
    }

    /// Message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            "Something went wrong. Please try again.".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("order JD-1001".to_string());
        assert_eq!(err.to_string(), "not found: order JD-1001");

        let err = AppError::validation("passwords do not match");
        assert_eq!(err.to_string(), "validation failed: passwords do not match");
    }

    #[test]
    fn test_user_message_hides_internals() {
        let err = AppError::Internal("slab index out of range".to_string());
        assert!(!err.is_user_facing());
        assert!(!err.user_message().contains("slab"));

        let err = AppError::Conflict("adjustment already resolved".to_string());
        assert!(err.is_user_facing());
        assert!(err.user_message().contains("already resolved"));
    }
}
