use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use moodly_core::models::dimension::DimensionTag;
use moodly_core::models::response::{CompletedResponses, IncompleteResponses, ResponseVector};
use moodly_core::models::score::ScoreTriple;

use crate::instruments::dass21::DIMENSION_MAP;

/// Raw item sums are doubled to put the short form on the full-form scale.
pub const SCORE_MULTIPLIER: u8 = 2;

/// One statement of the inventory.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub index: usize,
    pub text: String,
    pub dimension: DimensionTag,
}

/// One point of the response scale.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScaleOption {
    pub value: u8,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct RatingError {
    pub index: usize,
    pub value: Option<i64>,
    pub message: String,
}

/// Sum each dimension's seven items and double.
pub fn score(responses: &CompletedResponses) -> ScoreTriple {
    let mut sums = ScoreTriple::default();
    for (rating, dimension) in responses.ratings().iter().zip(DIMENSION_MAP.iter()) {
        let slot = match dimension {
            DimensionTag::Depression => &mut sums.depression,
            DimensionTag::Anxiety => &mut sums.anxiety,
            DimensionTag::Stress => &mut sums.stress,
        };
        *slot += rating.value();
    }
    ScoreTriple {
        depression: sums.depression * SCORE_MULTIPLIER,
        anxiety: sums.anxiety * SCORE_MULTIPLIER,
        stress: sums.stress * SCORE_MULTIPLIER,
    }
}

/// Score an in-progress vector, refusing if any slot is still unset.
pub fn score_vector(responses: &ResponseVector) -> Result<ScoreTriple, IncompleteResponses> {
    responses.complete().map(|completed| score(&completed))
}
