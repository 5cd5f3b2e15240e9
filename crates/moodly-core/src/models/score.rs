use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::dimension::DimensionTag;

/// Highest possible score on any one dimension (7 items × 3 × 2).
pub const MAX_DIMENSION_SCORE: u8 = 42;

/// Doubled sub-scores, one per dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreTriple {
    pub depression: u8,
    pub anxiety: u8,
    pub stress: u8,
}

impl ScoreTriple {
    pub fn get(&self, dimension: DimensionTag) -> u8 {
        match dimension {
            DimensionTag::Depression => self.depression,
            DimensionTag::Anxiety => self.anxiety,
            DimensionTag::Stress => self.stress,
        }
    }

    pub fn total(&self) -> u16 {
        u16::from(self.depression) + u16::from(self.anxiety) + u16::from(self.stress)
    }

    /// Validate raw persisted scores against the 0–42 range.
    pub fn from_values(depression: i64, anxiety: i64, stress: i64) -> Result<Self, CoreError> {
        let check = |dimension: DimensionTag, score: i64| -> Result<u8, CoreError> {
            if (0..=i64::from(MAX_DIMENSION_SCORE)).contains(&score) {
                Ok(score as u8)
            } else {
                Err(CoreError::ScoreOutOfRange {
                    dimension: dimension.key().to_string(),
                    score,
                })
            }
        };
        Ok(Self {
            depression: check(DimensionTag::Depression, depression)?,
            anxiety: check(DimensionTag::Anxiety, anxiety)?,
            stress: check(DimensionTag::Stress, stress)?,
        })
    }
}

/// Clinical severity band for one dimension, ordered from least to most severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum SeverityBand {
    Normal,
    Mild,
    Moderate,
    Severe,
    #[serde(rename = "Extremely Severe")]
    ExtremelySevere,
}

impl SeverityBand {
    pub const ALL: [SeverityBand; 5] = [
        SeverityBand::Normal,
        SeverityBand::Mild,
        SeverityBand::Moderate,
        SeverityBand::Severe,
        SeverityBand::ExtremelySevere,
    ];

    /// Label as persisted and displayed.
    pub fn label(self) -> &'static str {
        match self {
            SeverityBand::Normal => "Normal",
            SeverityBand::Mild => "Mild",
            SeverityBand::Moderate => "Moderate",
            SeverityBand::Severe => "Severe",
            SeverityBand::ExtremelySevere => "Extremely Severe",
        }
    }
}

impl fmt::Display for SeverityBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SeverityBand {
    type Err = CoreError;

    /// Exact match on the persisted label. Anything else is malformed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeverityBand::ALL
            .into_iter()
            .find(|band| band.label() == s)
            .ok_or_else(|| CoreError::UnknownSeverityLabel(s.to_string()))
    }
}

/// One band per dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityLabels {
    pub depression: SeverityBand,
    pub anxiety: SeverityBand,
    pub stress: SeverityBand,
}

impl SeverityLabels {
    pub fn get(&self, dimension: DimensionTag) -> SeverityBand {
        match dimension {
            DimensionTag::Depression => self.depression,
            DimensionTag::Anxiety => self.anxiety,
            DimensionTag::Stress => self.stress,
        }
    }
}
