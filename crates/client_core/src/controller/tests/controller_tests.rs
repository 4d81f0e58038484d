use super::*;
use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use axum::{http::StatusCode, routing::post, Router};
use shared::protocol::{ValidationResult, VALIDATE_SENTENCE_ROUTE};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{
    error::GENERIC_FALLBACK_MESSAGE, transport::HttpScoringService, validator::ValidationRequest,
};

struct ScriptedService {
    outcomes: Mutex<VecDeque<Outcome>>,
    calls: AtomicUsize,
    seen: Mutex<Vec<ValidationRequest>>,
}

impl ScriptedService {
    fn new(outcomes: impl IntoIterator<Item = Outcome>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into_iter().collect()),
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoringService for ScriptedService {
    async fn validate(
        &self,
        request: &ValidationRequest,
    ) -> Result<ValidationResult, ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().await.push(request.clone());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(ValidationError::Transport {
                reason: "script exhausted".into(),
            }))
    }
}

struct NeverResponds;

#[async_trait]
impl ScoringService for NeverResponds {
    async fn validate(
        &self,
        _request: &ValidationRequest,
    ) -> Result<ValidationResult, ValidationError> {
        std::future::pending().await
    }
}

fn sample_result() -> ValidationResult {
    ValidationResult {
        score: 91.5,
        level: "Advanced".into(),
        suggestion: "Outstanding!".into(),
        corrected_sentence: "Finding that café was pure serendipity.".into(),
    }
}

fn word_not_found() -> ValidationError {
    ValidationError::Remote {
        status: 404,
        message: "Word not found".into(),
    }
}

async fn spawn_fixed_response(status: StatusCode, body: &'static str) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let app = Router::new().route(
        VALIDATE_SENTENCE_ROUTE,
        post(move || async move { (status, body) }),
    );
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

#[test]
fn new_session_starts_idle() {
    let controller = RequestController::new();
    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert!(!controller.is_in_flight());
}

#[tokio::test]
async fn run_settles_into_succeeded() {
    let service = ScriptedService::new([Ok(sample_result())]);
    let mut controller = RequestController::new();

    let state = controller
        .run(&service, "3", " Finding that café was pure serendipity. ")
        .await;

    assert_eq!(state.result(), Some(&sample_result()));
    assert!(!controller.is_in_flight());
    let seen = service.seen.lock().await;
    assert_eq!(seen[0].sentence(), "Finding that café was pure serendipity.");
}

#[tokio::test]
async fn invalid_input_never_reaches_the_service() {
    let service = ScriptedService::new([Ok(sample_result())]);
    let mut controller = RequestController::new();

    let state = controller.run(&service, "3", "   ").await;
    assert_eq!(state.message(), Some("Please enter a sentence"));

    let state = controller.run(&service, "0", "The library is big.").await;
    assert_eq!(state.message(), Some("Please enter a valid word ID"));

    assert_eq!(service.calls(), 0);
    assert!(!controller.is_in_flight());
}

#[test]
fn submit_while_validating_leaves_state_unchanged() {
    let mut controller = RequestController::new();
    let first = controller.submit("1", "I study.").expect("dispatch");
    let before = controller.state().clone();

    assert!(controller.submit("2", "Another sentence.").is_none());
    assert!(controller.submit("", "").is_none());

    assert_eq!(controller.state(), &before);
    assert_eq!(
        controller.state(),
        &SubmissionState::Validating {
            ticket: first.ticket
        }
    );
}

#[tokio::test]
async fn fail_then_succeed_leaves_no_residue() {
    let service = ScriptedService::new([Err(word_not_found()), Ok(sample_result())]);
    let mut controller = RequestController::new();

    let state = controller.run(&service, "42", "Some sentence.").await;
    assert_eq!(
        state,
        &SubmissionState::Failed {
            message: "Word not found".into()
        }
    );

    let state = controller.run(&service, "3", "Pure serendipity.").await;
    assert_eq!(
        state,
        &SubmissionState::Succeeded {
            result: sample_result()
        }
    );
    assert!(state.message().is_none());
    assert_eq!(service.calls(), 2);
}

#[test]
fn completion_for_an_older_ticket_is_ignored() {
    let mut controller = RequestController::new();
    let first = controller.submit("1", "I study.").expect("dispatch");
    controller.complete(first.ticket, Err(word_not_found()));

    let second = controller.submit("1", "I study hard.").expect("dispatch");
    assert_ne!(first.ticket, second.ticket);

    let state = controller.complete(first.ticket, Ok(sample_result()));
    assert_eq!(
        state,
        &SubmissionState::Validating {
            ticket: second.ticket
        }
    );

    let state = controller.complete(second.ticket, Ok(sample_result()));
    assert_eq!(state.result(), Some(&sample_result()));
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
    }
}

impl std::io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn ignored_completion_is_not_logged_as_failure() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();

    tracing::subscriber::with_default(subscriber, || {
        let mut controller = RequestController::new();
        let first = controller.submit("1", "I study.").expect("dispatch");
        controller.complete(first.ticket, Ok(sample_result()));
        let second = controller.submit("1", "I study hard.").expect("dispatch");

        controller.complete(first.ticket, Err(word_not_found()));
        assert!(!logs.text().contains("submission failed"));

        controller.complete(second.ticket, Err(word_not_found()));
    });

    assert_eq!(logs.text().matches("submission failed").count(), 1);
}

#[tokio::test]
async fn dropped_run_settles_as_cancelled() {
    let mut controller = RequestController::new();

    let timed_out = tokio::time::timeout(
        Duration::from_millis(20),
        controller.run(&NeverResponds, "1", "I study."),
    )
    .await
    .is_err();

    assert!(timed_out);
    assert_eq!(controller.state().message(), Some("Request was cancelled"));
    assert!(controller.submit("1", "I study again.").is_some());
}

#[test]
fn input_edit_dismisses_error() {
    let mut controller = RequestController::new();
    assert!(controller.submit("1", "").is_none());
    assert!(controller.state().message().is_some());

    controller.input_edited();
    assert_eq!(controller.state(), &SubmissionState::Idle);
}

#[tokio::test]
async fn not_found_response_settles_with_service_detail() {
    let server_url =
        spawn_fixed_response(StatusCode::NOT_FOUND, r#"{"detail":"Word not found"}"#).await;
    let service = HttpScoringService::new(server_url).expect("http client");
    let mut controller = RequestController::new();

    let state = controller.run(&service, "99", "Any sentence.").await;

    assert_eq!(
        state,
        &SubmissionState::Failed {
            message: "Word not found".into()
        }
    );
}

#[tokio::test]
async fn unparsable_success_body_settles_with_generic_message() {
    let server_url = spawn_fixed_response(StatusCode::OK, "{not json").await;
    let service = HttpScoringService::new(server_url).expect("http client");
    let mut controller = RequestController::new();

    let state = controller.run(&service, "1", "I study.").await;

    assert_eq!(state.message(), Some(GENERIC_FALLBACK_MESSAGE));
    assert!(!controller.is_in_flight());
}
