//! The questionnaire state machine.
//!
//! ```text
//! Loading ──enter──▶ Complete            (store already holds a valid result)
//!         ├────────▶ CooldownBlocked     (attempt window still closed)
//!         └────────▶ QuestionPage(0) ◀─next/previous─▶ QuestionPage(n)
//! QuestionPage(last) ──submit──▶ Submitting ──▶ Complete
//!                                           └─▶ QuestionPage(last)  (store failure)
//! ```
//!
//! Every method that talks to the store takes `&mut self`, so a single flow
//! never has two store calls in flight.

use jiff::Timestamp;
use tracing::{info, warn};

use moodly_core::models::assessment::AssessmentResult;
use moodly_core::models::response::{Rating, ResponseVector};
use moodly_core::models::window::AttemptWindow;
use moodly_core::session::Session;
use moodly_instruments::Instrument;
use moodly_instruments::instruments::dass21::DASS21;
use moodly_instruments::scoring::{self, Item};
use moodly_instruments::severity::classify_triple;
use moodly_store::{ResultStore, StoreStatus, Submission};

use crate::clock::Clock;
use crate::error::FlowError;
use crate::window::check_window;

#[derive(Debug, Clone, PartialEq)]
pub enum FlowState {
    Loading,
    CooldownBlocked { time_remaining_seconds: u64 },
    QuestionPage(usize),
    Submitting,
    Complete(AssessmentResult),
}

impl FlowState {
    pub fn name(&self) -> &'static str {
        match self {
            FlowState::Loading => "loading",
            FlowState::CooldownBlocked { .. } => "cooldown_blocked",
            FlowState::QuestionPage(_) => "question_page",
            FlowState::Submitting => "submitting",
            FlowState::Complete(_) => "complete",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, FlowState::Complete(_) | FlowState::CooldownBlocked { .. })
    }
}

pub struct AssessmentFlow<'a> {
    store: &'a dyn ResultStore,
    session: &'a Session,
    clock: &'a dyn Clock,
    state: FlowState,
    responses: ResponseVector,
}

impl<'a> AssessmentFlow<'a> {
    pub fn new(store: &'a dyn ResultStore, session: &'a Session, clock: &'a dyn Clock) -> Self {
        Self {
            store,
            session,
            clock,
            state: FlowState::Loading,
            responses: ResponseVector::new(),
        }
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn responses(&self) -> &ResponseVector {
        &self.responses
    }

    pub fn result(&self) -> Option<&AssessmentResult> {
        match &self.state {
            FlowState::Complete(result) => Some(result),
            _ => None,
        }
    }

    pub fn page_count(&self) -> usize {
        DASS21.page_count()
    }

    /// Items on the page currently shown; empty outside `QuestionPage`.
    pub fn current_items(&self) -> &'static [Item] {
        match self.state {
            FlowState::QuestionPage(page) => DASS21
                .page(page)
                .map(|range| &DASS21.items()[range])
                .unwrap_or(&[]),
            _ => &[],
        }
    }

    pub fn is_last_page(&self) -> bool {
        self.state == FlowState::QuestionPage(self.last_page())
    }

    fn last_page(&self) -> usize {
        self.page_count() - 1
    }

    fn invalid(&self, action: &'static str) -> FlowError {
        FlowError::InvalidTransition {
            action,
            state: self.state.name(),
        }
    }

    fn current_page(&self, action: &'static str) -> Result<usize, FlowError> {
        match self.state {
            FlowState::QuestionPage(page) => Ok(page),
            _ => Err(self.invalid(action)),
        }
    }

    /// Ask the store for status and move out of `Loading`.
    ///
    /// A store failure leaves the flow in `Loading`; calling `enter` again is
    /// the retry.
    pub async fn enter(&mut self) -> Result<&FlowState, FlowError> {
        if self.state != FlowState::Loading {
            return Err(self.invalid("enter"));
        }

        let status = self.store.status(self.session).await?;

        if status.has_valid_result {
            let result = status.result.ok_or(FlowError::MissingResult)?;
            info!(
                user_id = self.session.user_id(),
                submitted_at = %result.submitted_at,
                "valid result on file, skipping questionnaire"
            );
            self.state = FlowState::Complete(result);
            return Ok(&self.state);
        }

        let window = attempt_window(&status, self.clock.now());
        self.state = if window.can_attempt {
            FlowState::QuestionPage(0)
        } else {
            FlowState::CooldownBlocked {
                time_remaining_seconds: window.time_remaining_seconds,
            }
        };
        info!(
            user_id = self.session.user_id(),
            state = self.state.name(),
            "assessment flow entered"
        );
        Ok(&self.state)
    }

    /// Record an answer. Any question may be answered from any page.
    pub fn answer(&mut self, index: usize, value: i64) -> Result<Rating, FlowError> {
        self.current_page("answer")?;
        Ok(self.responses.record(index, value)?)
    }

    pub fn next(&mut self) -> Result<usize, FlowError> {
        let page = self.current_page("go to next page")?;
        let page = (page + 1).min(self.last_page());
        self.state = FlowState::QuestionPage(page);
        Ok(page)
    }

    pub fn previous(&mut self) -> Result<usize, FlowError> {
        let page = self.current_page("go to previous page")?;
        let page = page.saturating_sub(1);
        self.state = FlowState::QuestionPage(page);
        Ok(page)
    }

    /// Score, classify and persist. Only available from the last page.
    ///
    /// Unanswered questions fail locally without contacting the store. A
    /// store failure returns the flow to the last page with every answer
    /// intact.
    pub async fn submit(&mut self) -> Result<AssessmentResult, FlowError> {
        let last = self.last_page();
        if self.current_page("submit")? != last {
            return Err(self.invalid("submit"));
        }

        let completed = match self.responses.complete() {
            Ok(completed) => completed,
            Err(incomplete) => {
                warn!(
                    user_id = self.session.user_id(),
                    missing = incomplete.missing.len(),
                    "submit with unanswered questions"
                );
                return Err(FlowError::Validation {
                    missing: incomplete.missing,
                });
            }
        };

        self.state = FlowState::Submitting;

        let scores = scoring::score(&completed);
        let labels = match classify_triple(&scores) {
            Ok(labels) => labels,
            Err(e) => {
                self.state = FlowState::QuestionPage(last);
                return Err(e.into());
            }
        };

        let submission = Submission {
            responses: completed,
            scores,
            labels,
        };
        if let Err(e) = self.store.submit(self.session, &submission).await {
            self.state = FlowState::QuestionPage(last);
            return Err(e.into());
        }

        let result = AssessmentResult {
            user_id: self.session.user_id().to_string(),
            responses: completed,
            scores,
            labels,
            submitted_at: self.clock.now(),
        };
        info!(
            user_id = self.session.user_id(),
            depression = %labels.depression,
            anxiety = %labels.anxiety,
            stress = %labels.stress,
            "assessment submitted"
        );
        self.state = FlowState::Complete(result.clone());
        Ok(result)
    }
}

/// The stricter of the store's own verdict and the tracker's reading of the
/// store-recorded timestamp.
fn attempt_window(status: &StoreStatus, now: Timestamp) -> AttemptWindow {
    let tracked = check_window(status.result.as_ref().map(|r| r.submitted_at), now);
    let reported = if status.can_attempt {
        AttemptWindow::open()
    } else {
        AttemptWindow::blocked(status.time_remaining.unwrap_or(0))
    };
    tracked.most_restrictive(reported)
}
