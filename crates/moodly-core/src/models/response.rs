use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::error::CoreError;

/// Number of items in the inventory.
pub const ITEM_COUNT: usize = 21;

/// A single answer on the 0–3 response scale.
///
/// Only constructible from a value already known to be on the scale, so a
/// `Rating` reaching the scoring engine is always valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(try_from = "i64", into = "u8")]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: Rating = Rating(0);
    pub const MAX: Rating = Rating(3);

    pub fn new(value: i64) -> Result<Self, CoreError> {
        match value {
            0..=3 => Ok(Rating(value as u8)),
            other => Err(CoreError::RatingOutOfRange(other)),
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rating {
    type Error = CoreError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Rating::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returned when a response vector is asked to complete with gaps.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{count} of {total} questions unanswered: {missing:?}", count = .missing.len(), total = ITEM_COUNT)]
pub struct IncompleteResponses {
    /// Zero-based indices of the unanswered questions.
    pub missing: Vec<usize>,
}

/// The in-progress answers, one optional slot per question.
///
/// Pages are views over index ranges; the vector itself is global and
/// survives page navigation untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseVector {
    slots: [Option<Rating>; ITEM_COUNT],
}

impl ResponseVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, index: usize) -> Option<Rating> {
        self.slots.get(index).copied().flatten()
    }

    pub fn set(&mut self, index: usize, rating: Rating) -> Result<(), CoreError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(CoreError::QuestionOutOfRange(index))?;
        *slot = Some(rating);
        Ok(())
    }

    /// Validate a raw captured value and store it.
    pub fn record(&mut self, index: usize, value: i64) -> Result<Rating, CoreError> {
        if index >= ITEM_COUNT {
            return Err(CoreError::QuestionOutOfRange(index));
        }
        let rating = Rating::new(value)?;
        self.set(index, rating)?;
        Ok(rating)
    }

    pub fn answered(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn missing(&self) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_none())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Freeze the vector for scoring. Unset slots are reported, never zeroed.
    pub fn complete(&self) -> Result<CompletedResponses, IncompleteResponses> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(IncompleteResponses { missing });
        }
        let mut ratings = [Rating::MIN; ITEM_COUNT];
        for (out, slot) in ratings.iter_mut().zip(self.slots.iter()) {
            if let Some(rating) = slot {
                *out = *rating;
            }
        }
        Ok(CompletedResponses(ratings))
    }
}

/// All 21 answers, no gaps. The only input the scoring engine accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedResponses([Rating; ITEM_COUNT]);

impl CompletedResponses {
    pub fn new(ratings: [Rating; ITEM_COUNT]) -> Self {
        Self(ratings)
    }

    /// Validate raw persisted values: exactly 21, each on the 0–3 scale.
    pub fn from_values(values: &[i64]) -> Result<Self, CoreError> {
        if values.len() != ITEM_COUNT {
            return Err(CoreError::ResponseCount {
                expected: ITEM_COUNT,
                actual: values.len(),
            });
        }
        let mut ratings = [Rating::MIN; ITEM_COUNT];
        for (out, value) in ratings.iter_mut().zip(values) {
            *out = Rating::new(*value)?;
        }
        Ok(Self(ratings))
    }

    pub fn ratings(&self) -> &[Rating; ITEM_COUNT] {
        &self.0
    }

    pub fn to_values(&self) -> Vec<u8> {
        self.0.iter().map(|r| r.value()).collect()
    }
}
