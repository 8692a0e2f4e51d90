use std::path::{Path, PathBuf};
use tracing::info;

/// A rendered document returned by the generator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
  pub filename: String,
  pub bytes: Vec<u8>,
}

impl GeneratedDocument {
  pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
    Self {
      filename: filename.into(),
      bytes,
    }
  }

  /// Filename with path separators replaced, so user input cannot escape the output directory
  pub fn safe_filename(&self) -> String {
    let name: String = self
      .filename
      .chars()
      .map(|c| if matches!(c, '/' | '\\') || c.is_control() { '_' } else { c })
      .collect();
    match name.as_str() {
      "" | "." | ".." => "DazzloDocs.pdf".to_string(),
      _ => name,
    }
  }

  /// Write the document into `dir`, creating it if needed
  pub fn save(&self, dir: &Path) -> std::io::Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(self.safe_filename());
    std::fs::write(&path, &self.bytes)?;
    info!(path = %path.display(), bytes = self.bytes.len(), "Saved document");
    Ok(path)
  }

  pub async fn save_async(&self, dir: &Path) -> std::io::Result<PathBuf> {
    tokio::fs::create_dir_all(dir).await?;
    let path = dir.join(self.safe_filename());
    tokio::fs::write(&path, &self.bytes).await?;
    info!(path = %path.display(), bytes = self.bytes.len(), "Saved document");
    Ok(path)
  }
}
