use serde::de::DeserializeOwned;
use tracing::{info, warn};
use ureq::Agent;
use ureq::http::Response;

use moodly_core::models::assessment::AssessmentResult;
use moodly_core::session::Session;

use crate::client::{StoreSettings, build_agent};
use crate::error::StoreError;
use crate::store::{BoxFuture, ResultStore, StoreStatus, Submission};
use crate::wire::{AckResponse, ResultResponse, StatusResponse, SubmitRequest};

/// Result store backed by the Moodly REST API.
///
/// Requests run on tokio's blocking pool; each one is bounded by the agent's
/// global timeout.
#[derive(Clone)]
pub struct HttpResultStore {
    agent: Agent,
    base_url: String,
}

impl HttpResultStore {
    pub fn new(settings: &StoreSettings) -> Self {
        Self {
            agent: build_agent(settings),
            base_url: settings.base_url.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn run<T, F>(&self, operation: &'static str, request: F) -> Result<T, StoreError>
    where
        F: FnOnce(Agent) -> Result<T, StoreError> + Send + 'static,
        T: Send + 'static,
    {
        let agent = self.agent.clone();
        let outcome = tokio::task::spawn_blocking(move || request(agent))
            .await
            .map_err(|e| StoreError::Worker(e.to_string()))?;
        if let Err(e) = &outcome {
            warn!(operation, error = %e, "result store request failed");
        }
        outcome
    }
}

fn transport(operation: &'static str, err: ureq::Error) -> StoreError {
    match err {
        ureq::Error::Timeout(_) => StoreError::Timeout { operation },
        ureq::Error::StatusCode(status) => match check_status(operation, status) {
            Err(e) => e,
            Ok(()) => StoreError::Status { operation, status },
        },
        other => StoreError::Transport {
            operation,
            message: other.to_string(),
        },
    }
}

fn check_status(operation: &'static str, status: u16) -> Result<(), StoreError> {
    match status {
        200..=299 => Ok(()),
        401 | 403 => Err(StoreError::Unauthorized { status }),
        _ => Err(StoreError::Status { operation, status }),
    }
}

fn read_json<T: DeserializeOwned>(
    operation: &'static str,
    response: &mut Response<ureq::Body>,
) -> Result<T, StoreError> {
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| transport(operation, e))?;
    Ok(serde_json::from_str(&body)?)
}

/// Whole seconds, rounded up; anything non-positive or non-finite is zero.
fn wire_seconds(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.ceil() as u64
    } else {
        0
    }
}

impl ResultStore for HttpResultStore {
    fn status<'a>(
        &'a self,
        session: &'a Session,
    ) -> BoxFuture<'a, Result<StoreStatus, StoreError>> {
        Box::pin(async move {
            const OP: &str = "status";
            info!(user_id = session.user_id(), "fetching questionnaire status");

            let url = self.url(&format!("/api/questionnaire-status/{}", session.user_id()));
            let authorization = session.authorization();
            let raw: StatusResponse = self
                .run(OP, move |agent| {
                    let mut response = agent
                        .get(&url)
                        .header("Authorization", authorization.as_str())
                        .header("Accept", "application/json")
                        .call()
                        .map_err(|e| transport(OP, e))?;
                    check_status(OP, response.status().as_u16())?;
                    read_json(OP, &mut response)
                })
                .await?;

            let result = raw
                .result
                .as_ref()
                .map(AssessmentResult::try_from)
                .transpose()?;

            Ok(StoreStatus {
                has_valid_result: raw.has_valid_result,
                result,
                can_attempt: raw.can_attempt,
                time_remaining: raw.time_remaining.map(wire_seconds),
            })
        })
    }

    fn submit<'a>(
        &'a self,
        session: &'a Session,
        submission: &'a Submission,
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            const OP: &str = "submit";
            info!(user_id = session.user_id(), "submitting questionnaire");

            let url = self.url("/api/questionnaire/submit");
            let authorization = session.authorization();
            let body = SubmitRequest {
                user_id: session.user_id().to_string(),
                responses: submission.responses.to_values(),
                scores: submission.scores.into(),
                severity_results: submission.labels.into(),
            };
            let ack: AckResponse = self
                .run(OP, move |agent| {
                    let mut response = agent
                        .post(&url)
                        .header("Authorization", authorization.as_str())
                        .send_json(&body)
                        .map_err(|e| transport(OP, e))?;
                    check_status(OP, response.status().as_u16())?;
                    read_json(OP, &mut response)
                })
                .await?;

            if !ack.success {
                warn!(user_id = session.user_id(), "result store declined submission");
                return Err(StoreError::Rejected { operation: OP });
            }
            Ok(())
        })
    }

    fn fetch_result<'a>(
        &'a self,
        session: &'a Session,
    ) -> BoxFuture<'a, Result<Option<AssessmentResult>, StoreError>> {
        Box::pin(async move {
            const OP: &str = "fetch_result";
            info!(user_id = session.user_id(), "fetching stored result");

            let url = self.url(&format!("/api/questionnaire/result/{}", session.user_id()));
            let authorization = session.authorization();
            let raw: Option<ResultResponse> = self
                .run(OP, move |agent| {
                    let mut response = agent
                        .get(&url)
                        .header("Authorization", authorization.as_str())
                        .header("Accept", "application/json")
                        .call()
                        .map_err(|e| transport(OP, e))?;
                    let status = response.status().as_u16();
                    if status == 404 {
                        return Ok(None);
                    }
                    check_status(OP, status)?;
                    read_json(OP, &mut response).map(Some)
                })
                .await?;

            match raw {
                Some(ResultResponse {
                    success: true,
                    result: Some(record),
                }) => Ok(Some(AssessmentResult::try_from(&record)?)),
                _ => Ok(None),
            }
        })
    }

    fn clear<'a>(&'a self, session: &'a Session) -> BoxFuture<'a, Result<(), StoreError>> {
        Box::pin(async move {
            const OP: &str = "clear";
            info!(user_id = session.user_id(), "clearing stored result");

            let url = self.url(&format!("/api/questionnaire/clear/{}", session.user_id()));
            let authorization = session.authorization();
            self.run(OP, move |agent| {
                let response = agent
                    .delete(&url)
                    .header("Authorization", authorization.as_str())
                    .call()
                    .map_err(|e| transport(OP, e))?;
                check_status(OP, response.status().as_u16())
            })
            .await
        })
    }
}
