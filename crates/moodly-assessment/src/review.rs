use tracing::info;

use moodly_core::models::assessment::AssessmentResult;
use moodly_core::session::Session;
use moodly_store::{ResultStore, StoreError};

use crate::clock::Clock;
use crate::error::RetakeError;
use crate::window::check_window;

/// The result to show on the result screen.
///
/// An in-memory result from a just-finished flow wins; otherwise the store
/// is asked, as when the screen is opened directly.
pub async fn resume(
    store: &dyn ResultStore,
    session: &Session,
    in_memory: Option<AssessmentResult>,
) -> Result<Option<AssessmentResult>, StoreError> {
    if let Some(result) = in_memory {
        return Ok(Some(result));
    }
    store.fetch_result(session).await
}

/// Clear the stored result so the questionnaire can be taken again.
///
/// The store is only contacted once the cooldown over `result.submitted_at`
/// has run out. Start a fresh flow afterwards.
pub async fn authorize_retake(
    store: &dyn ResultStore,
    session: &Session,
    result: &AssessmentResult,
    clock: &dyn Clock,
) -> Result<(), RetakeError> {
    let window = check_window(Some(result.submitted_at), clock.now());
    if !window.can_attempt {
        return Err(RetakeError::CooldownActive {
            remaining_seconds: window.time_remaining_seconds,
        });
    }

    store.clear(session).await?;
    info!(user_id = session.user_id(), "stored result cleared for retake");
    Ok(())
}
