use async_trait::async_trait;
use client::{
  GeneratedDocument, Generator, NETWORK_ERROR_MESSAGE, SUBMIT_LABEL, SUBMITTING_LABEL, SubmitError,
  SubmitOrchestrator, SubmitState,
};
use dazzlo_core::{Form, SubmissionPayload, TemplateRegistry};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Notify;

#[derive(Clone, Copy)]
enum Outcome {
  Document,
  ServerError,
  NetworkError,
}

/// Generator that records payloads and optionally waits for a release signal
struct FakeGenerator {
  outcome: Outcome,
  gate: Option<Arc<Notify>>,
  received: Mutex<Vec<SubmissionPayload>>,
}

impl FakeGenerator {
  fn new(outcome: Outcome) -> Self {
    Self {
      outcome,
      gate: None,
      received: Mutex::new(Vec::new()),
    }
  }

  fn gated(outcome: Outcome, gate: Arc<Notify>) -> Self {
    Self {
      gate: Some(gate),
      ..Self::new(outcome)
    }
  }
}

#[async_trait]
impl Generator for FakeGenerator {
  async fn generate(&self, payload: &SubmissionPayload) -> Result<GeneratedDocument, SubmitError> {
    self.received.lock().unwrap().push(payload.clone());
    if let Some(gate) = &self.gate {
      gate.notified().await;
    }
    match self.outcome {
      Outcome::Document => Ok(GeneratedDocument::new(payload.download_filename(), b"%PDF".to_vec())),
      Outcome::ServerError => Err(SubmitError::Server {
        status: 400,
        message: "bad template".to_string(),
      }),
      Outcome::NetworkError => {
        // a real reqwest error: nothing listens on port 1
        let err = reqwest::Client::new()
          .get("http://127.0.0.1:1/")
          .timeout(Duration::from_millis(200))
          .send()
          .await
          .unwrap_err();
        Err(SubmitError::Network(err))
      }
    }
  }
}

fn lab_form() -> Form {
  let mut form = Form::new(TemplateRegistry::builtin());
  form.render("lab_report");
  form.user.student_name = "Asha".to_string();
  form.user.subject = "Physics".to_string();
  form
}

#[tokio::test]
async fn test_successful_submit_restores_control() {
  let generator = Arc::new(FakeGenerator::new(Outcome::Document));
  let orchestrator = SubmitOrchestrator::new(generator.clone());

  let mut form = lab_form();
  form.add_table("observations").unwrap();
  let document = orchestrator.submit(&form).await.unwrap();

  assert_eq!(document.filename, "DazzloDocs_Asha_Physics.pdf");
  assert_eq!(orchestrator.state(), SubmitState::Idle);
  let control = orchestrator.control();
  assert!(control.enabled);
  assert_eq!(control.label, SUBMIT_LABEL);

  let received = generator.received.lock().unwrap();
  assert_eq!(received.len(), 1);
  assert_eq!(received[0].template, "lab_report");
  assert_eq!(received[0].tables["observations"].len(), 1);
}

#[tokio::test]
async fn test_server_error_restores_control() {
  let orchestrator = SubmitOrchestrator::new(Arc::new(FakeGenerator::new(Outcome::ServerError)));
  let err = orchestrator.submit(&lab_form()).await.unwrap_err();

  assert_eq!(err.user_message(), "bad template");
  assert_eq!(orchestrator.state(), SubmitState::Failed("bad template".to_string()));
  let control = orchestrator.control();
  assert!(control.enabled);
  assert_eq!(control.label, SUBMIT_LABEL);
  assert!(!orchestrator.is_submitting());
}

#[tokio::test]
async fn test_network_error_shows_generic_message() {
  let orchestrator = SubmitOrchestrator::new(Arc::new(FakeGenerator::new(Outcome::NetworkError)));
  let err = orchestrator.submit(&lab_form()).await.unwrap_err();

  assert!(matches!(err, SubmitError::Network(_)));
  assert_eq!(orchestrator.state(), SubmitState::Failed(NETWORK_ERROR_MESSAGE.to_string()));
  assert!(orchestrator.control().enabled);
}

#[tokio::test]
async fn test_second_submit_while_in_flight_is_rejected() {
  let gate = Arc::new(Notify::new());
  let generator = Arc::new(FakeGenerator::gated(Outcome::Document, gate.clone()));
  let orchestrator = Arc::new(SubmitOrchestrator::new(generator.clone()));
  let form = lab_form();

  let first = tokio::spawn({
    let orchestrator = orchestrator.clone();
    let form = form.clone();
    async move { orchestrator.submit(&form).await }
  });

  while !orchestrator.is_submitting() {
    tokio::task::yield_now().await;
  }
  let control = orchestrator.control();
  assert!(!control.enabled);
  assert_eq!(control.label, SUBMITTING_LABEL);
  assert_eq!(orchestrator.state(), SubmitState::Submitting);

  let second = orchestrator.submit(&form).await;
  assert!(matches!(second, Err(SubmitError::AlreadySubmitting)));
  // the rejected call leaves the busy control alone
  assert_eq!(orchestrator.control().label, SUBMITTING_LABEL);

  gate.notify_one();
  first.await.unwrap().unwrap();
  assert_eq!(generator.received.lock().unwrap().len(), 1);
  assert!(orchestrator.control().enabled);
}

#[tokio::test]
async fn test_cancelled_submit_releases_guard() {
  let gate = Arc::new(Notify::new());
  let orchestrator = Arc::new(SubmitOrchestrator::new(Arc::new(FakeGenerator::gated(
    Outcome::Document,
    gate.clone(),
  ))));

  let task = tokio::spawn({
    let orchestrator = orchestrator.clone();
    async move { orchestrator.submit(&lab_form()).await }
  });
  while !orchestrator.is_submitting() {
    tokio::task::yield_now().await;
  }
  task.abort();
  let _ = task.await;

  assert!(!orchestrator.is_submitting());
  assert_eq!(orchestrator.state(), SubmitState::Idle);
  assert!(orchestrator.control().enabled);
}

#[tokio::test]
async fn test_submit_and_save_writes_file() {
  let temp = TempDir::new().unwrap();
  let orchestrator = SubmitOrchestrator::new(Arc::new(FakeGenerator::new(Outcome::Document)));

  let mut form = lab_form();
  form.user.subject = "Physics/Optics".to_string();
  let path = orchestrator.submit_and_save(&form, temp.path()).await.unwrap();

  assert_eq!(path, temp.path().join("DazzloDocs_Asha_Physics_Optics.pdf"));
  assert_eq!(std::fs::read(&path).unwrap(), b"%PDF");
  assert_eq!(orchestrator.state(), SubmitState::Idle);
}
