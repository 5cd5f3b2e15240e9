use thiserror::Error;

use moodly_core::error::CoreError;
use moodly_instruments::error::InstrumentError;
use moodly_store::StoreError;

#[derive(Debug, Error)]
pub enum FlowError {
    /// Submit with unanswered questions. Local only; nothing was sent.
    #[error("{count} question(s) unanswered", count = .missing.len())]
    Validation { missing: Vec<usize> },

    #[error("invalid response: {0}")]
    Response(#[from] CoreError),

    #[error("cannot {action} while {state}")]
    InvalidTransition {
        action: &'static str,
        state: &'static str,
    },

    #[error("result store reported a valid result without including it")]
    MissingResult,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Scoring(#[from] InstrumentError),
}

impl FlowError {
    /// The store rejected the session; the caller must re-authenticate.
    pub fn is_session_invalid(&self) -> bool {
        matches!(self, FlowError::Store(e) if e.is_auth())
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            FlowError::Store(e) => e.is_retryable(),
            FlowError::MissingResult => true,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum RetakeError {
    #[error("retake not available for another {remaining_seconds} seconds")]
    CooldownActive { remaining_seconds: u64 },

    #[error(transparent)]
    Store(#[from] StoreError),
}
