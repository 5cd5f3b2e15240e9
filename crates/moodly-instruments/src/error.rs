use thiserror::Error;

use moodly_core::models::dimension::DimensionTag;
use moodly_core::models::response::IncompleteResponses;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstrumentError {
    #[error("incomplete responses: {0}")]
    Incomplete(#[from] IncompleteResponses),

    /// Scores come from the scoring engine and cannot be negative. Seeing one
    /// means a defect upstream, not a classification.
    #[error("invariant violation: {dimension} score {score} is negative")]
    NegativeScore { dimension: DimensionTag, score: i32 },
}
