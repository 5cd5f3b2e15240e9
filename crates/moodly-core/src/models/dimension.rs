use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An affect axis of the inventory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DimensionTag {
    Depression,
    Anxiety,
    Stress,
}

impl DimensionTag {
    pub const ALL: [DimensionTag; 3] = [
        DimensionTag::Depression,
        DimensionTag::Anxiety,
        DimensionTag::Stress,
    ];

    /// Lower-case key used in wire payloads (`depression`, `anxiety`, `stress`).
    pub fn key(self) -> &'static str {
        match self {
            DimensionTag::Depression => "depression",
            DimensionTag::Anxiety => "anxiety",
            DimensionTag::Stress => "stress",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            DimensionTag::Depression => "Depression",
            DimensionTag::Anxiety => "Anxiety",
            DimensionTag::Stress => "Stress",
        }
    }
}

impl fmt::Display for DimensionTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
