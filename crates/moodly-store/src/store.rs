use std::future::Future;
use std::pin::Pin;

use moodly_core::models::assessment::AssessmentResult;
use moodly_core::models::response::CompletedResponses;
use moodly_core::models::score::{ScoreTriple, SeverityLabels};
use moodly_core::session::Session;

use crate::error::StoreError;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// What the store knows about a user, fetched in one round trip.
#[derive(Debug, Clone, PartialEq)]
pub struct StoreStatus {
    pub has_valid_result: bool,
    pub result: Option<AssessmentResult>,
    pub can_attempt: bool,
    /// Seconds until a new attempt is allowed, when the store reports it.
    pub time_remaining: Option<u64>,
}

/// A scored submission. The store stamps `submittedAt`.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub responses: CompletedResponses,
    pub scores: ScoreTriple,
    pub labels: SeverityLabels,
}

/// Persistence for one current assessment result per user.
///
/// The backing service is external. Every failure is reported as an error,
/// never as "no result". Methods return boxed futures for dyn compatibility.
/// Submissions are not idempotent; the once-per-cooldown rule is enforced by
/// callers checking `can_attempt` first.
pub trait ResultStore: Send + Sync {
    fn status<'a>(&'a self, session: &'a Session)
    -> BoxFuture<'a, Result<StoreStatus, StoreError>>;

    fn submit<'a>(
        &'a self,
        session: &'a Session,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<(), StoreError>>;

    /// `Ok(None)` means the store has no result for this user.
    fn fetch_result<'a>(
        &'a self,
        session: &'a Session,
    ) -> BoxFuture<'a, Result<Option<AssessmentResult>, StoreError>>;

    /// Remove the current result so a new one may be submitted. Does not
    /// reset the cooldown.
    fn clear<'a>(&'a self, session: &'a Session) -> BoxFuture<'a, Result<(), StoreError>>;
}
