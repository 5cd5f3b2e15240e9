//! Chat-companion access gate.
//!
//! Fails closed: anything that is not a well-formed result with a Normal or
//! Mild depression band denies access.

use tracing::{error, info, warn};

use moodly_core::models::assessment::{AssessmentResult, StoredAssessment};
use moodly_core::models::dimension::DimensionTag;
use moodly_core::models::eligibility::{EligibilityReason, EligibilityVerdict};
use moodly_core::models::score::SeverityBand;
use moodly_core::session::Session;
use moodly_instruments::severity::classify;
use moodly_store::{ResultStore, StoreError};

/// Highest depression band that still allows the chat companion.
pub const ELIGIBLE_CEILING: SeverityBand = SeverityBand::Mild;

pub fn evaluate(result: Option<&AssessmentResult>) -> EligibilityVerdict {
    let Some(result) = result else {
        return EligibilityVerdict::from_reason(EligibilityReason::NoAssessmentOnFile);
    };

    let score = result.scores.depression;
    let stored = result.labels.depression;
    let derived = match classify(i32::from(score), DimensionTag::Depression) {
        Ok(band) => band,
        Err(e) => {
            error!(user_id = %result.user_id, error = %e, "depression score failed to classify");
            return EligibilityVerdict::from_reason(EligibilityReason::EvaluationError);
        }
    };
    if derived != stored {
        warn!(
            user_id = %result.user_id,
            score,
            stored = %stored,
            derived = %derived,
            "stored depression label disagrees with its score"
        );
        return EligibilityVerdict::from_reason(EligibilityReason::EvaluationError);
    }

    let reason = if stored <= ELIGIBLE_CEILING {
        EligibilityReason::Eligible
    } else {
        EligibilityReason::DepressionSeverityExceedsThreshold
    };
    EligibilityVerdict::from_reason(reason)
}

/// Evaluate a record exactly as the store returned it.
pub fn evaluate_record(record: Option<&StoredAssessment>) -> EligibilityVerdict {
    let Some(record) = record else {
        return evaluate(None);
    };
    match AssessmentResult::try_from(record) {
        Ok(result) => evaluate(Some(&result)),
        Err(e) => {
            warn!(user_id = %record.user_id, error = %e, "stored assessment is malformed");
            EligibilityVerdict::from_reason(EligibilityReason::EvaluationError)
        }
    }
}

/// Fetch the user's result and decide access.
///
/// Only a rejected session is returned as an error, since the caller has to
/// re-authenticate. Every other store failure denies access.
pub async fn check_eligibility(
    store: &dyn ResultStore,
    session: &Session,
) -> Result<EligibilityVerdict, StoreError> {
    let verdict = match store.fetch_result(session).await {
        Ok(result) => evaluate(result.as_ref()),
        Err(e) if e.is_auth() => return Err(e),
        Err(e) => {
            warn!(
                user_id = session.user_id(),
                error = %e,
                "eligibility check could not read result"
            );
            EligibilityVerdict::from_reason(EligibilityReason::EvaluationError)
        }
    };
    info!(
        user_id = session.user_id(),
        eligible = verdict.eligible(),
        reason = ?verdict.reason(),
        "eligibility evaluated"
    );
    Ok(verdict)
}
