//! Read-only listings published by the generation server.

use dazzlo_core::{Template, TemplateRegistry};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum CatalogError {
  #[error("Request failed: {0}")]
  Request(#[from] reqwest::Error),

  #[error("Server returned {status} for {path}")]
  Status { status: u16, path: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteTemplate {
  pub name: String,
  #[serde(default)]
  pub sections: Vec<String>,
}

/// Color palette keyed by role (`primary`, `accent`, ...)
pub type RemotePalette = BTreeMap<String, String>;

#[derive(Debug, Clone)]
pub struct RemoteCatalog {
  client: reqwest::Client,
  base_url: String,
}

impl RemoteCatalog {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      base_url: base_url.into().trim_end_matches('/').to_string(),
    }
  }

  async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CatalogError> {
    let url = format!("{}{}", self.base_url, path);
    debug!(%url, "Fetching catalog");
    let response = self.client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
      return Err(CatalogError::Status {
        status: status.as_u16(),
        path: path.to_string(),
      });
    }
    Ok(response.json().await?)
  }

  pub async fn templates(&self) -> Result<BTreeMap<String, RemoteTemplate>, CatalogError> {
    self.get("/api/templates").await
  }

  pub async fn color_schemes(&self) -> Result<BTreeMap<String, RemotePalette>, CatalogError> {
    self.get("/api/color-schemes").await
  }

  pub async fn chart_types(&self) -> Result<Vec<String>, CatalogError> {
    self.get("/api/chart-types").await
  }

  pub async fn code_languages(&self) -> Result<Vec<String>, CatalogError> {
    self.get("/api/code-languages").await
  }

  /// Registry built from the server's template list
  pub async fn registry(&self) -> Result<TemplateRegistry, CatalogError> {
    Ok(registry_from(self.templates().await?))
  }
}

pub fn registry_from(templates: BTreeMap<String, RemoteTemplate>) -> TemplateRegistry {
  TemplateRegistry::new(
    templates
      .into_iter()
      .map(|(id, t)| Template {
        id,
        name: t.name,
        description: String::new(),
        sections: t.sections,
      })
      .collect(),
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_registry_from_remote_listing() {
    let listing: BTreeMap<String, RemoteTemplate> = serde_json::from_str(
      r#"{
        "lab_report": {"name": "Lab Report", "sections": ["objective", "results"]},
        "assignment": {"name": "Assignment"}
      }"#,
    )
    .unwrap();
    let registry = registry_from(listing);
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.sections_for("lab_report"), ["objective", "results"]);
    assert!(registry.sections_for("assignment").is_empty());
    // listing order is alphabetical by id
    assert_eq!(registry.next_id(None), Some("assignment"));
  }
}
