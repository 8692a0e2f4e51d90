//! Configuration commands (show, init, path)

use anyhow::{Context, Result, bail};
use dazzlo_core::Config;
use std::path::Path;

/// Show the effective configuration for a project directory
pub async fn cmd_config_show(project: &Path) -> Result<()> {
  let (config, source) = Config::load_with_source(project);

  println!("Effective configuration for: {}", project.display());
  println!();
  println!("{}", describe_source(project, source.as_deref()));
  println!();

  let toml_str = toml::to_string_pretty(&config)?;
  println!("{}", toml_str);

  Ok(())
}

/// Name the file the effective config was read from
fn describe_source(project: &Path, source: Option<&Path>) -> String {
  match source {
    Some(path) if path == Config::project_config_path(project) => {
      format!("Using project config: {}", path.display())
    }
    Some(path) => format!("Using user config: {}", path.display()),
    None => "Using default configuration (no valid config file found)".to_string(),
  }
}

/// Write a commented default config to `.dazzlo/dazzlo.toml`
pub async fn cmd_config_init(project: &Path, force: bool) -> Result<()> {
  let config_path = Config::project_config_path(project);

  if config_path.exists() && !force {
    bail!(
      "Config file already exists: {} (use --force to overwrite)",
      config_path.display()
    );
  }

  if let Some(parent) = config_path.parent() {
    std::fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
  }
  std::fs::write(&config_path, Config::generate_template())
    .with_context(|| format!("Failed to write {}", config_path.display()))?;

  println!("Created project config: {}", config_path.display());
  println!("Edit the file to customize settings.");

  Ok(())
}

/// Print the config file locations and whether they exist
pub async fn cmd_config_path(project: &Path) -> Result<()> {
  let status = |path: &Path| if path.exists() { "found" } else { "not found" };

  let project_config = Config::project_config_path(project);
  println!("Project: {} ({})", project_config.display(), status(&project_config));
  match Config::user_config_path() {
    Some(user) => println!("User:    {} ({})", user.display(), status(&user)),
    None => println!("User:    (no config directory on this platform)"),
  }

  Ok(())
}
