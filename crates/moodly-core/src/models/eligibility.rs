use serde::Serialize;
use ts_rs::TS;

/// Why the chat companion is or is not available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EligibilityReason {
    NoAssessmentOnFile,
    DepressionSeverityExceedsThreshold,
    Eligible,
    EvaluationError,
}

/// Access decision for the chat companion.
///
/// Only built from a reason, so `eligible` is true exactly when the reason is
/// [`EligibilityReason::Eligible`]. Every other reason denies access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
pub struct EligibilityVerdict {
    eligible: bool,
    reason: EligibilityReason,
}

impl EligibilityVerdict {
    pub fn from_reason(reason: EligibilityReason) -> Self {
        Self {
            eligible: reason == EligibilityReason::Eligible,
            reason,
        }
    }

    pub fn eligible(&self) -> bool {
        self.eligible
    }

    pub fn reason(&self) -> EligibilityReason {
        self.reason
    }

    /// Message shown at the chat entry point.
    pub fn guidance(&self) -> &'static str {
        match self.reason {
            EligibilityReason::Eligible => {
                "The AI companion is available. It is not a substitute for professional care."
            }
            EligibilityReason::NoAssessmentOnFile => {
                "Please complete the questionnaire before using the AI companion."
            }
            EligibilityReason::DepressionSeverityExceedsThreshold => {
                "Based on your assessment results, we recommend speaking with a mental health \
                 professional. Please consider booking an appointment or contacting a helpline."
            }
            EligibilityReason::EvaluationError => "Unable to verify your eligibility at this time.",
        }
    }

    /// Whether the entry point should point the user at the questionnaire.
    pub fn suggests_questionnaire(&self) -> bool {
        matches!(
            self.reason,
            EligibilityReason::NoAssessmentOnFile | EligibilityReason::EvaluationError
        )
    }
}
