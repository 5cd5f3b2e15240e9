//! JSON bodies exchanged with the result store.

use serde::{Deserialize, Serialize};

use moodly_core::models::assessment::{StoredAssessment, StoredScores, StoredSeverityResults};

/// `GET /api/questionnaire-status/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub has_valid_result: bool,
    #[serde(default)]
    pub result: Option<StoredAssessment>,
    pub can_attempt: bool,
    /// Seconds until a new attempt is allowed.
    #[serde(default)]
    pub time_remaining: Option<f64>,
}

/// `POST /api/questionnaire/submit`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitRequest {
    pub user_id: String,
    pub responses: Vec<u8>,
    pub scores: StoredScores,
    pub severity_results: StoredSeverityResults,
}

/// Reply to submit and clear.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AckResponse {
    pub success: bool,
}

/// `GET /api/questionnaire/result/{userId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultResponse {
    pub success: bool,
    #[serde(default)]
    pub result: Option<StoredAssessment>,
}
