//! HTTP adapter tests against a local axum server standing in for the API.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::extract::Path;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use serde_json::{Value, json};

use moodly_core::models::response::CompletedResponses;
use moodly_core::models::score::{ScoreTriple, SeverityBand, SeverityLabels};
use moodly_core::session::Session;
use moodly_store::client::StoreSettings;
use moodly_store::{HttpResultStore, ResultStore, StoreError, Submission};

const TOKEN: &str = "good-token";

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn store(base_url: &str) -> HttpResultStore {
    HttpResultStore::new(&StoreSettings::new(base_url, Duration::from_millis(500)))
}

fn session() -> Session {
    Session::new("uid-42", TOKEN).unwrap()
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == format!("Bearer {TOKEN}"))
}

fn record_json() -> Value {
    json!({
        "userId": "uid-42",
        "responses": [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        "scores": { "depression": 14, "anxiety": 14, "stress": 14 },
        "severityResults": {
            "depressionLabel": "Moderate",
            "anxietyLabel": "Moderate",
            "stressLabel": "Normal"
        },
        "submittedAt": "2026-05-04T08:30:00Z"
    })
}

fn submission() -> Submission {
    Submission {
        responses: CompletedResponses::from_values(&[1; 21]).unwrap(),
        scores: ScoreTriple {
            depression: 14,
            anxiety: 14,
            stress: 14,
        },
        labels: SeverityLabels {
            depression: SeverityBand::Moderate,
            anxiety: SeverityBand::Moderate,
            stress: SeverityBand::Normal,
        },
    }
}

#[tokio::test]
async fn status_decodes_a_stored_result() {
    let app = Router::new().route(
        "/api/questionnaire-status/{user_id}",
        get(|headers: HeaderMap, Path(user_id): Path<String>| async move {
            if !authorized(&headers) || user_id != "uid-42" {
                return (StatusCode::UNAUTHORIZED, Json(json!({})));
            }
            (
                StatusCode::OK,
                Json(json!({
                    "hasValidResult": true,
                    "result": record_json(),
                    "canAttempt": false,
                    "timeRemaining": 3600.4
                })),
            )
        }),
    );
    let base = serve(app).await;

    let status = store(&base).status(&session()).await.unwrap();
    assert!(status.has_valid_result);
    assert!(!status.can_attempt);
    assert_eq!(status.time_remaining, Some(3601));
    let result = status.result.unwrap();
    assert_eq!(result.user_id, "uid-42");
    assert_eq!(result.labels.depression, SeverityBand::Moderate);
}

#[tokio::test]
async fn status_without_result_or_remaining_time() {
    let app = Router::new().route(
        "/api/questionnaire-status/{user_id}",
        get(|| async { Json(json!({ "hasValidResult": false, "canAttempt": true })) }),
    );
    let base = serve(app).await;

    let status = store(&base).status(&session()).await.unwrap();
    assert!(!status.has_valid_result);
    assert!(status.can_attempt);
    assert_eq!(status.result, None);
    assert_eq!(status.time_remaining, None);
}

#[tokio::test]
async fn rejected_token_is_an_auth_error() {
    let app = Router::new().route(
        "/api/questionnaire-status/{user_id}",
        get(|headers: HeaderMap| async move {
            if authorized(&headers) {
                StatusCode::OK
            } else {
                StatusCode::UNAUTHORIZED
            }
        }),
    );
    let base = serve(app).await;
    let stale = Session::new("uid-42", "expired").unwrap();

    let err = store(&base).status(&stale).await.unwrap_err();
    assert!(matches!(err, StoreError::Unauthorized { status: 401 }));
    assert!(err.is_auth());
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn server_error_is_retryable() {
    let app = Router::new().route(
        "/api/questionnaire-status/{user_id}",
        get(|| async { StatusCode::SERVICE_UNAVAILABLE }),
    );
    let base = serve(app).await;

    let err = store(&base).status(&session()).await.unwrap_err();
    assert!(matches!(err, StoreError::Status { status: 503, .. }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn malformed_stored_label_is_an_invalid_record() {
    let mut record = record_json();
    record["severityResults"]["depressionLabel"] = "Unknown".into();
    let app = Router::new().route(
        "/api/questionnaire-status/{user_id}",
        get(move || {
            let record = record.clone();
            async move {
                Json(json!({ "hasValidResult": true, "result": record, "canAttempt": false }))
            }
        }),
    );
    let base = serve(app).await;

    let err = store(&base).status(&session()).await.unwrap_err();
    assert!(matches!(err, StoreError::InvalidRecord(_)));
}

#[tokio::test]
async fn submit_posts_camel_case_body() {
    let captured: Arc<Mutex<Option<Value>>> = Arc::default();
    let sink = captured.clone();
    let app = Router::new().route(
        "/api/questionnaire/submit",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                assert!(authorized(&headers));
                *sink.lock().unwrap() = Some(body);
                Json(json!({ "success": true }))
            }
        }),
    );
    let base = serve(app).await;

    store(&base).submit(&session(), &submission()).await.unwrap();

    let body = captured.lock().unwrap().take().unwrap();
    assert_eq!(body["userId"], "uid-42");
    assert_eq!(body["responses"].as_array().unwrap().len(), 21);
    assert_eq!(body["scores"], json!({ "depression": 14, "anxiety": 14, "stress": 14 }));
    assert_eq!(
        body["severityResults"],
        json!({
            "depressionLabel": "Moderate",
            "anxietyLabel": "Moderate",
            "stressLabel": "Normal"
        })
    );
}

#[tokio::test]
async fn declined_submit_is_an_error() {
    let app = Router::new().route(
        "/api/questionnaire/submit",
        post(|| async { Json(json!({ "success": false })) }),
    );
    let base = serve(app).await;

    let err = store(&base)
        .submit(&session(), &submission())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Rejected {
            operation: "submit"
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn fetch_result_handles_missing_and_present() {
    let app = Router::new().route(
        "/api/questionnaire/result/{user_id}",
        get(|Path(user_id): Path<String>| async move {
            match user_id.as_str() {
                "uid-42" => (
                    StatusCode::OK,
                    Json(json!({ "success": true, "result": record_json() })),
                ),
                "uid-none" => (StatusCode::OK, Json(json!({ "success": false }))),
                _ => (StatusCode::NOT_FOUND, Json(json!({}))),
            }
        }),
    );
    let base = serve(app).await;
    let store = store(&base);

    let found = store.fetch_result(&session()).await.unwrap().unwrap();
    assert_eq!(found.scores.depression, 14);

    let none = Session::new("uid-none", TOKEN).unwrap();
    assert_eq!(store.fetch_result(&none).await.unwrap(), None);

    let missing = Session::new("uid-404", TOKEN).unwrap();
    assert_eq!(store.fetch_result(&missing).await.unwrap(), None);
}

#[tokio::test]
async fn clear_sends_delete() {
    let hits: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = hits.clone();
    let app = Router::new().route(
        "/api/questionnaire/clear/{user_id}",
        delete(move |Path(user_id): Path<String>| {
            let sink = sink.clone();
            async move {
                sink.lock().unwrap().push(user_id);
                Json(json!({ "success": true }))
            }
        }),
    );
    let base = serve(app).await;

    store(&base).clear(&session()).await.unwrap();
    assert_eq!(*hits.lock().unwrap(), vec!["uid-42".to_string()]);
}

#[tokio::test]
async fn slow_store_times_out() {
    let app = Router::new().route(
        "/api/questionnaire-status/{user_id}",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({ "hasValidResult": false, "canAttempt": true }))
        }),
    );
    let base = serve(app).await;

    let err = store(&base).status(&session()).await.unwrap_err();
    assert!(matches!(
        err,
        StoreError::Timeout {
            operation: "status"
        }
    ));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn unreachable_store_is_a_transport_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = store(&format!("http://{addr}"))
        .status(&session())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Transport { .. }));
    assert!(err.is_retryable());
}
