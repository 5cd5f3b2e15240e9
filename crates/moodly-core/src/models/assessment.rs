use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::response::CompletedResponses;
use super::score::{ScoreTriple, SeverityBand, SeverityLabels};

/// A scored, classified submission. Immutable once created; replaced only
/// after the store clears it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssessmentResult {
    pub user_id: String,
    pub responses: CompletedResponses,
    pub scores: ScoreTriple,
    pub labels: SeverityLabels,
    /// Recorded by the result store; authoritative for the retake cooldown.
    pub submitted_at: jiff::Timestamp,
}

impl AssessmentResult {
    pub fn to_record(&self) -> StoredAssessment {
        StoredAssessment {
            user_id: self.user_id.clone(),
            responses: self
                .responses
                .to_values()
                .into_iter()
                .map(i64::from)
                .collect(),
            scores: StoredScores::from(self.scores),
            severity_results: StoredSeverityResults::from(self.labels),
            submitted_at: self.submitted_at,
        }
    }
}

/// The persisted shape, as the result store returns it.
///
/// Values are kept raw so a malformed record can be recognised and rejected
/// rather than failing somewhere less visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredAssessment {
    pub user_id: String,
    pub responses: Vec<i64>,
    pub scores: StoredScores,
    pub severity_results: StoredSeverityResults,
    pub submitted_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StoredScores {
    pub depression: i64,
    pub anxiety: i64,
    pub stress: i64,
}

impl From<ScoreTriple> for StoredScores {
    fn from(scores: ScoreTriple) -> Self {
        Self {
            depression: i64::from(scores.depression),
            anxiety: i64::from(scores.anxiety),
            stress: i64::from(scores.stress),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct StoredSeverityResults {
    pub depression_label: String,
    pub anxiety_label: String,
    pub stress_label: String,
}

impl From<SeverityLabels> for StoredSeverityResults {
    fn from(labels: SeverityLabels) -> Self {
        Self {
            depression_label: labels.depression.label().to_string(),
            anxiety_label: labels.anxiety.label().to_string(),
            stress_label: labels.stress.label().to_string(),
        }
    }
}

impl TryFrom<&StoredSeverityResults> for SeverityLabels {
    type Error = CoreError;

    fn try_from(raw: &StoredSeverityResults) -> Result<Self, Self::Error> {
        Ok(Self {
            depression: raw.depression_label.parse::<SeverityBand>()?,
            anxiety: raw.anxiety_label.parse::<SeverityBand>()?,
            stress: raw.stress_label.parse::<SeverityBand>()?,
        })
    }
}

impl TryFrom<&StoredAssessment> for AssessmentResult {
    type Error = CoreError;

    fn try_from(record: &StoredAssessment) -> Result<Self, Self::Error> {
        if record.user_id.is_empty() {
            return Err(CoreError::MissingField("userId".to_string()));
        }
        Ok(Self {
            user_id: record.user_id.clone(),
            responses: CompletedResponses::from_values(&record.responses)?,
            scores: ScoreTriple::from_values(
                record.scores.depression,
                record.scores.anxiety,
                record.scores.stress,
            )?,
            labels: SeverityLabels::try_from(&record.severity_results)?,
            submitted_at: record.submitted_at,
        })
    }
}
