mod app;
mod event;
mod theme;
mod views;
mod widgets;

use std::{path::PathBuf, sync::Arc};

use client::SubmitOrchestrator;
use dazzlo_core::Form;

pub async fn run(form: Form, orchestrator: Arc<SubmitOrchestrator>, output_dir: PathBuf) -> anyhow::Result<()> {
  app::run(form, orchestrator, output_dir).await
}
