//! Interactive editor command

use anyhow::Result;
use client::{HttpGenerator, SubmitOrchestrator};
use dazzlo_core::Config;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use super::load_form;

/// Launch the interactive form editor
pub async fn cmd_tui(config: &Config, draft: Option<&Path>, server: Option<&str>) -> Result<()> {
  let form = load_form(config, config.registry(), draft)?;

  let mut generator = HttpGenerator::from_config(&config.server);
  if let Some(url) = server {
    generator = generator.with_url(url);
  }
  info!(server = generator.base_url(), "Starting editor");
  let orchestrator = Arc::new(SubmitOrchestrator::new(Arc::new(generator)));

  crate::tui::run(form, orchestrator, config.output.directory()).await
}
