//! Error types for reactive publisher operations

use thiserror::Error;

/// Errors that can occur while running a subscription or loading configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReactiveError {
    /// The producer side of a subscription failed before completing
    #[error("Upstream publisher failed: {0}")]
    Upstream(String),

    /// The consumer side of a subscription failed
    #[error("Subscriber failed: {0}")]
    Subscriber(String),

    /// The subscription was disposed before it completed
    #[error("Subscription cancelled")]
    Cancelled,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Timeout error
    #[error("Operation timed out: {0}")]
    Timeout(String),
}

/// Result type for reactive operations
pub type ReactiveResult<T> = Result<T, ReactiveError>;

impl From<tokio::task::JoinError> for ReactiveError {
    fn from(err: tokio::task::JoinError) -> Self {
        if err.is_cancelled() {
            ReactiveError::Cancelled
        } else {
            ReactiveError::Subscriber(err.to_string())
        }
    }
}

impl From<tokio::time::error::Elapsed> for ReactiveError {
    fn from(err: tokio::time::error::Elapsed) -> Self {
        ReactiveError::Timeout(err.to_string())
    }
}
