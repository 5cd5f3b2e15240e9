use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("rating {0} is outside the response scale 0-3")]
    RatingOutOfRange(i64),

    #[error("question index {0} is outside the 21-item inventory")]
    QuestionOutOfRange(usize),

    #[error("expected {expected} responses, got {actual}")]
    ResponseCount { expected: usize, actual: usize },

    #[error("{dimension} score {score} is outside 0-42")]
    ScoreOutOfRange { dimension: String, score: i64 },

    #[error("unknown severity label: {0:?}")]
    UnknownSeverityLabel(String),

    #[error("invalid user id: {0:?}")]
    InvalidUserId(String),

    #[error("missing required field: {0}")]
    MissingField(String),
}
