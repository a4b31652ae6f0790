//! Error types for the host alert boundary.
//!
//! [`AlertError`] is produced by [`AlertService`](crate::AlertService)
//! implementations when the platform cannot display or dismiss a popup. The
//! lifecycle core catches every instance, reports it on the event bus, and
//! keeps its bookkeeping consistent — visual failure never corrupts an
//! owner's logical view of its notification set, and no error ever crosses
//! the per-owner API surface.

use thiserror::Error;

/// # Errors produced by the host alert subsystem.
///
/// All variants are non-fatal to the lifecycle core: a failed show leaves the
/// notification tracked (no visible popup), and a failed close still removes
/// it from the registry.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum AlertError {
    /// No alert subsystem is available on this platform.
    #[error("alert subsystem unavailable")]
    Unavailable,

    /// The subsystem exists but does not support the requested operation.
    #[error("operation not supported by the alert subsystem: {what}")]
    Unsupported {
        /// The unsupported operation, e.g. "close".
        what: String,
    },

    /// The subsystem rejected the request.
    #[error("alert request rejected: {reason}")]
    Rejected {
        /// The underlying rejection message.
        reason: String,
    },
}

impl AlertError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use notivisor::AlertError;
    ///
    /// assert_eq!(AlertError::Unavailable.as_label(), "alert_unavailable");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            AlertError::Unavailable => "alert_unavailable",
            AlertError::Unsupported { .. } => "alert_unsupported",
            AlertError::Rejected { .. } => "alert_rejected",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            AlertError::Unavailable => "alert subsystem unavailable".to_string(),
            AlertError::Unsupported { what } => format!("unsupported: {what}"),
            AlertError::Rejected { reason } => format!("rejected: {reason}"),
        }
    }
}
