#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use jiff::Timestamp;

use moodly_assessment::Clock;
use moodly_core::models::assessment::AssessmentResult;
use moodly_core::models::response::CompletedResponses;
use moodly_core::models::score::{ScoreTriple, SeverityBand, SeverityLabels};
use moodly_core::session::Session;
use moodly_store::store::BoxFuture;
use moodly_store::{ResultStore, StoreError, StoreStatus, Submission};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Status,
    Submit(Submission),
    FetchResult,
    Clear,
}

/// Scripted `ResultStore`. Each operation pops its next queued reply; an
/// empty queue answers with a default success.
#[derive(Default)]
pub struct FakeStore {
    calls: Mutex<Vec<Call>>,
    status: Mutex<VecDeque<Result<StoreStatus, StoreError>>>,
    submit: Mutex<VecDeque<Result<(), StoreError>>>,
    fetch: Mutex<VecDeque<Result<Option<AssessmentResult>, StoreError>>>,
    clear: Mutex<VecDeque<Result<(), StoreError>>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(self, reply: Result<StoreStatus, StoreError>) -> Self {
        self.status.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_submit(self, reply: Result<(), StoreError>) -> Self {
        self.submit.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_fetch(self, reply: Result<Option<AssessmentResult>, StoreError>) -> Self {
        self.fetch.lock().unwrap().push_back(reply);
        self
    }

    pub fn with_clear(self, reply: Result<(), StoreError>) -> Self {
        self.clear.lock().unwrap().push_back(reply);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl ResultStore for FakeStore {
    fn status<'a>(
        &'a self,
        _session: &'a Session,
    ) -> BoxFuture<'a, Result<StoreStatus, StoreError>> {
        self.record(Call::Status);
        let reply = self
            .status
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(fresh_status()));
        Box::pin(async move { reply })
    }

    fn submit<'a>(
        &'a self,
        _session: &'a Session,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        self.record(Call::Submit(submission.clone()));
        let reply = self.submit.lock().unwrap().pop_front().unwrap_or(Ok(()));
        Box::pin(async move { reply })
    }

    fn fetch_result<'a>(
        &'a self,
        _session: &'a Session,
    ) -> BoxFuture<'a, Result<Option<AssessmentResult>, StoreError>> {
        self.record(Call::FetchResult);
        let reply = self.fetch.lock().unwrap().pop_front().unwrap_or(Ok(None));
        Box::pin(async move { reply })
    }

    fn clear<'a>(&'a self, _session: &'a Session) -> BoxFuture<'a, Result<(), StoreError>> {
        self.record(Call::Clear);
        let reply = self.clear.lock().unwrap().pop_front().unwrap_or(Ok(()));
        Box::pin(async move { reply })
    }
}

pub struct FixedClock(pub Timestamp);

impl Clock for FixedClock {
    fn now(&self) -> Timestamp {
        self.0
    }
}

pub fn now() -> Timestamp {
    "2026-05-04T12:00:00Z".parse().unwrap()
}

pub fn session() -> Session {
    Session::new("uid-42", "token").unwrap()
}

pub fn fresh_status() -> StoreStatus {
    StoreStatus {
        has_valid_result: false,
        result: None,
        can_attempt: true,
        time_remaining: None,
    }
}

/// A consistent stored result with the given depression score.
pub fn result_with_depression(score: u8, band: SeverityBand) -> AssessmentResult {
    AssessmentResult {
        user_id: "uid-42".to_string(),
        responses: CompletedResponses::from_values(&[0; 21]).unwrap(),
        scores: ScoreTriple {
            depression: score,
            anxiety: 0,
            stress: 0,
        },
        labels: SeverityLabels {
            depression: band,
            anxiety: SeverityBand::Normal,
            stress: SeverityBand::Normal,
        },
        submitted_at: now(),
    }
}
