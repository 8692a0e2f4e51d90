//! Submit flow: guard against double submission, serialize the form, call the
//! generator and restore the submit control whatever the outcome.

use crate::download::GeneratedDocument;
use crate::error::SubmitError;
use crate::generator::Generator;
use dazzlo_core::{Form, SubmissionPayload};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use tracing::{error, info, warn};

pub const SUBMIT_LABEL: &str = "Generate Document";
pub const SUBMITTING_LABEL: &str = "Generating...";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitState {
  #[default]
  Idle,
  Submitting,
  /// Last attempt failed with this user-facing message
  Failed(String),
}

/// The submit button as the user sees it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitControl {
  pub label: &'static str,
  pub enabled: bool,
}

impl SubmitControl {
  fn for_state(state: &SubmitState) -> Self {
    match state {
      SubmitState::Submitting => Self {
        label: SUBMITTING_LABEL,
        enabled: false,
      },
      SubmitState::Idle | SubmitState::Failed(_) => Self {
        label: SUBMIT_LABEL,
        enabled: true,
      },
    }
  }
}

pub struct SubmitOrchestrator {
  generator: Arc<dyn Generator>,
  in_flight: AtomicBool,
  state: Mutex<SubmitState>,
}

/// Clears the in-flight flag on drop, so a cancelled submit cannot leave the
/// control disabled
struct InFlight<'a> {
  orchestrator: &'a SubmitOrchestrator,
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    let mut state = self.orchestrator.lock_state();
    if *state == SubmitState::Submitting {
      *state = SubmitState::Idle;
    }
    self.orchestrator.in_flight.store(false, Ordering::Release);
  }
}

impl SubmitOrchestrator {
  pub fn new(generator: Arc<dyn Generator>) -> Self {
    Self {
      generator,
      in_flight: AtomicBool::new(false),
      state: Mutex::new(SubmitState::Idle),
    }
  }

  fn lock_state(&self) -> std::sync::MutexGuard<'_, SubmitState> {
    self.state.lock().unwrap_or_else(PoisonError::into_inner)
  }

  pub fn state(&self) -> SubmitState {
    self.lock_state().clone()
  }

  pub fn control(&self) -> SubmitControl {
    SubmitControl::for_state(&self.lock_state())
  }

  pub fn is_submitting(&self) -> bool {
    self.in_flight.load(Ordering::Acquire)
  }

  fn begin(&self) -> Result<InFlight<'_>, SubmitError> {
    if self
      .in_flight
      .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
      .is_err()
    {
      warn!("Ignoring submit while a document is being generated");
      return Err(SubmitError::AlreadySubmitting);
    }
    *self.lock_state() = SubmitState::Submitting;
    Ok(InFlight { orchestrator: self })
  }

  fn finish<T>(&self, result: &Result<T, SubmitError>) {
    let next = match result {
      Ok(_) => SubmitState::Idle,
      Err(e) => {
        error!("Document generation failed: {}", e);
        SubmitState::Failed(e.user_message())
      }
    };
    *self.lock_state() = next;
  }

  /// Serialize `form` and generate a document from it
  pub async fn submit(&self, form: &Form) -> Result<GeneratedDocument, SubmitError> {
    let _in_flight = self.begin()?;
    let payload = SubmissionPayload::from_form(form);
    let result = self.generator.generate(&payload).await;
    self.finish(&result);
    result
  }

  /// Generate a document and save it into `dir` under its download filename
  pub async fn submit_and_save(&self, form: &Form, dir: &Path) -> Result<PathBuf, SubmitError> {
    let _in_flight = self.begin()?;
    let payload = SubmissionPayload::from_form(form);
    let result = match self.generator.generate(&payload).await {
      Ok(document) => document.save_async(dir).await.map_err(SubmitError::from),
      Err(e) => Err(e),
    };
    if let Ok(path) = &result {
      info!(path = %path.display(), "Document ready");
    }
    self.finish(&result);
    result
  }
}
