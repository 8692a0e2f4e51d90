//! Draft-driven commands (payload, generate)

use anyhow::{Context, Result, anyhow};
use client::{HttpGenerator, SubmitOrchestrator};
use dazzlo_core::{Config, Form, FormDraft, SubmissionPayload, TemplateRegistry};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// Build a form from config defaults, then replay a draft over it if one is given
pub fn load_form(config: &Config, registry: TemplateRegistry, draft: Option<&Path>) -> Result<Form> {
  let mut form = Form::new(registry);
  form.color_scheme = config.defaults.color_scheme.clone();

  match draft {
    Some(path) => {
      let draft = FormDraft::load(path).with_context(|| format!("Failed to read draft {}", path.display()))?;
      form
        .apply_draft(&draft)
        .with_context(|| format!("Failed to apply draft {}", path.display()))?;
    }
    None => {
      if let Some(template) = &config.defaults.template {
        form.render(template);
      }
    }
  }

  Ok(form)
}

/// Print (or write) the JSON payload a draft would submit, without sending it
pub async fn cmd_payload(config: &Config, draft: &Path, output: Option<&Path>) -> Result<()> {
  let form = load_form(config, config.registry(), Some(draft))?;
  let payload = SubmissionPayload::from_form(&form);
  let json = serde_json::to_string_pretty(&payload)?;

  match output {
    Some(path) => {
      std::fs::write(path, &json).with_context(|| format!("Failed to write {}", path.display()))?;
      info!(
        path = %path.display(),
        sections = payload.content.len(),
        features = payload.feature_count(),
        "Wrote payload"
      );
    }
    None => println!("{}", json),
  }

  Ok(())
}

/// Submit a draft to the generation server and save the returned document
pub async fn cmd_generate(
  config: &Config,
  draft: &Path,
  output_dir: Option<PathBuf>,
  server: Option<&str>,
) -> Result<PathBuf> {
  let form = load_form(config, config.registry(), Some(draft))?;

  let mut generator = HttpGenerator::from_config(&config.server);
  if let Some(url) = server {
    generator = generator.with_url(url);
  }
  info!(server = generator.base_url(), "Generating document");
  let orchestrator = SubmitOrchestrator::new(Arc::new(generator));

  let dir = output_dir.unwrap_or_else(|| config.output.directory());
  std::fs::create_dir_all(&dir).with_context(|| format!("Failed to create output directory {}", dir.display()))?;

  let path = orchestrator
    .submit_and_save(&form, &dir)
    .await
    .map_err(|e| anyhow!("{}", e.user_message()))?;

  println!("Document saved: {}", path.display());
  Ok(path)
}
