//! Error types for bertbot.

use std::time::Duration;

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}

/// Outbound send errors, classified by retryability.
///
/// Only `Timeout` is retryable. Everything else is treated as an
/// application-level rejection and fails the delivery on the spot —
/// the endpoint already saw (and refused) the request, so resending
/// the same payload won't help.
#[derive(Debug, thiserror::Error)]
pub enum SendError {
    #[error("send timed out after {0:?}")]
    Timeout(Duration),

    #[error("endpoint rejected message (status {status}): {body}")]
    Rejected { status: u16, body: String },

    #[error("transport error: {0}")]
    Transport(String),
}

impl SendError {
    /// Whether the delivery loop may attempt again after this error.
    pub fn is_retryable(&self) -> bool {
        matches!(self, SendError::Timeout(_))
    }
}
