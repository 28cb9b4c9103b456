//! Error types for the feed crate.

use thiserror::Error;

/// Rejected feed configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeedError {
    #[error("Interval `{name}` must be greater than zero")]
    ZeroInterval { name: &'static str },

    #[error("Step `{name}` must be finite and non-negative, got {value}")]
    InvalidStep { name: &'static str, value: f64 },

    #[error("Feed must be started inside a tokio runtime")]
    NoRuntime,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlertError {
    #[error("Alert not found: {0}")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Login identifier must not be empty")]
    EmptyIdentifier,
}
