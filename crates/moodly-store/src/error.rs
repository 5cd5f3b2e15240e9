use thiserror::Error;

use moodly_core::error::CoreError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("session rejected by result store (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("result store {operation} failed with HTTP {status}")]
    Status {
        operation: &'static str,
        status: u16,
    },

    #[error("result store {operation} timed out")]
    Timeout { operation: &'static str },

    #[error("result store {operation} transport error: {message}")]
    Transport {
        operation: &'static str,
        message: String,
    },

    #[error("result store declined {operation}")]
    Rejected { operation: &'static str },

    #[error("malformed result store response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("stored assessment is invalid: {0}")]
    InvalidRecord(#[from] CoreError),

    #[error("result store worker failed: {0}")]
    Worker(String),
}

impl StoreError {
    /// The session is no longer valid; re-authenticate, do not retry.
    pub fn is_auth(&self) -> bool {
        matches!(self, StoreError::Unauthorized { .. })
    }

    /// Worth offering the user an explicit retry.
    pub fn is_retryable(&self) -> bool {
        match self {
            StoreError::Timeout { .. }
            | StoreError::Transport { .. }
            | StoreError::Rejected { .. }
            | StoreError::Worker(_) => true,
            StoreError::Status { status, .. } => (500..600).contains(status),
            StoreError::Unauthorized { .. }
            | StoreError::Decode(_)
            | StoreError::InvalidRecord(_) => false,
        }
    }
}
