use crate::download::GeneratedDocument;
use crate::error::{FALLBACK_ERROR_MESSAGE, SubmitError};
use async_trait::async_trait;
use dazzlo_core::{ServerConfig, SubmissionPayload};
use serde::Deserialize;
use tracing::{debug, info, warn};

pub const DEFAULT_BASE_URL: &str = dazzlo_core::config::DEFAULT_BASE_URL;

/// Turns a submission payload into a rendered document
#[async_trait]
pub trait Generator: Send + Sync {
  async fn generate(&self, payload: &SubmissionPayload) -> Result<GeneratedDocument, SubmitError>;
}

/// Generator backed by the DazzloDocs HTTP service
#[derive(Debug, Clone)]
pub struct HttpGenerator {
  client: reqwest::Client,
  base_url: String,
}

impl Default for HttpGenerator {
  fn default() -> Self {
    Self::new()
  }
}

impl HttpGenerator {
  pub fn new() -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }

  pub fn from_config(config: &ServerConfig) -> Self {
    Self::new().with_url(&config.base_url)
  }

  pub fn with_url(mut self, url: impl Into<String>) -> Self {
    self.base_url = url.into().trim_end_matches('/').to_string();
    self
  }

  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  fn generate_url(&self) -> String {
    format!("{}/api/generate", self.base_url)
  }
}

#[derive(Deserialize)]
struct ErrorResponse {
  error: Option<String>,
}

/// Message carried by a failed generation response, or the fallback
pub(crate) fn error_message(body: &[u8]) -> String {
  serde_json::from_slice::<ErrorResponse>(body)
    .ok()
    .and_then(|r| r.error)
    .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string())
}

#[async_trait]
impl Generator for HttpGenerator {
  async fn generate(&self, payload: &SubmissionPayload) -> Result<GeneratedDocument, SubmitError> {
    debug!(
      template = %payload.template,
      sections = payload.content.len(),
      features = payload.feature_count(),
      "Posting generation request"
    );

    let response = self.client.post(self.generate_url()).json(payload).send().await?;

    let status = response.status();
    if !status.is_success() {
      let body = response.bytes().await.unwrap_or_default();
      let message = error_message(&body);
      warn!("Document generation failed: {} - {}", status, message);
      return Err(SubmitError::Server {
        status: status.as_u16(),
        message,
      });
    }

    let bytes = response.bytes().await?.to_vec();
    let document = GeneratedDocument::new(payload.download_filename(), bytes);
    info!(filename = %document.filename, bytes = document.bytes.len(), "Document generated");
    Ok(document)
  }
}
