use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
  #[error("Feature not found: {0}")]
  FeatureNotFound(String),

  #[error("Section not found: {0}")]
  SectionNotFound(String),

  #[error("Cell out of range: {what} {index} (size {size})")]
  CellOutOfRange { what: &'static str, index: usize, size: usize },

  #[error("Invalid feature id: {0}")]
  InvalidFeatureId(String),

  #[error("Draft: {0}")]
  Draft(String),

  #[error("TOML: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("IO: {0}")]
  Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
