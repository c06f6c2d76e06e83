//! Error types for the notification senders.

use thiserror::Error;

/// Errors raised by the tightly coupled sender.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotificationError {
    /// The requested delivery method has no hard-wired service.
    #[error("Unsupported notification method: {0}")]
    UnsupportedMethod(String),
}
