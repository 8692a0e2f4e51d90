use thiserror::Error;

/// Shown for any failure where the request never got a server response
pub const NETWORK_ERROR_MESSAGE: &str = "An error occurred while generating the document";

/// Used when a non-success response carries no readable `error` field
pub const FALLBACK_ERROR_MESSAGE: &str = "Failed to generate document";

#[derive(Error, Debug)]
pub enum SubmitError {
  #[error("A document is already being generated")]
  AlreadySubmitting,

  #[error("Server returned {status}: {message}")]
  Server { status: u16, message: String },

  #[error("Request failed: {0}")]
  Network(#[from] reqwest::Error),

  #[error("IO error: {0}")]
  Io(#[from] std::io::Error),
}

impl SubmitError {
  /// Text shown to the user in place of the technical error
  pub fn user_message(&self) -> String {
    match self {
      SubmitError::AlreadySubmitting => self.to_string(),
      SubmitError::Server { message, .. } => message.clone(),
      SubmitError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
      SubmitError::Io(e) => format!("Could not save the document: {}", e),
    }
  }
}
