//! Configuration for DazzloDocs clients with per-project overrides.
//!
//! Config priority: project-relative (.dazzlo/dazzlo.toml) > user (~/.config/dazzlo/config.toml) > defaults

use crate::color::DEFAULT_COLOR_SCHEME;
use crate::template::{Template, TemplateRegistry};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

// ============================================================================
// Sections
// ============================================================================

/// Generation server settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  /// Base URL the `/api/...` paths are appended to
  /// Default: "http://localhost:5000"
  pub base_url: String,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

/// Where generated documents are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
  /// Output directory (default: current directory)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub directory: Option<PathBuf>,
}

impl OutputConfig {
  /// Resolved output directory, with a leading `~` expanded to the home directory
  pub fn directory(&self) -> PathBuf {
    match &self.directory {
      Some(dir) => expand_home(dir),
      None => PathBuf::from("."),
    }
  }
}

fn expand_home(path: &Path) -> PathBuf {
  if let Ok(rest) = path.strip_prefix("~")
    && let Some(home) = dirs::home_dir()
  {
    return home.join(rest);
  }
  path.to_path_buf()
}

/// Values preselected when a new form is opened
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
  /// Template rendered on startup (default: none, the user picks one)
  #[serde(skip_serializing_if = "Option::is_none")]
  pub template: Option<String>,

  /// Default: "professional"
  pub color_scheme: String,
}

impl Default for DefaultsConfig {
  fn default() -> Self {
    Self {
      template: None,
      color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// Log level: "error", "warn", "info", "debug", "trace"
  /// Default: "info"
  pub level: String,

  /// Log file rotation for the interactive editor: "daily", "hourly", "never"
  /// Default: "daily"
  pub rotation: String,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self {
      level: "info".to_string(),
      rotation: "daily".to_string(),
    }
  }
}

/// A template added to, or replacing one in, the built-in registry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
  pub id: String,
  pub name: String,
  pub description: String,
  pub sections: Vec<String>,
}

impl From<TemplateConfig> for Template {
  fn from(config: TemplateConfig) -> Self {
    Template {
      name: if config.name.is_empty() { config.id.clone() } else { config.name },
      id: config.id,
      description: config.description,
      sections: config.sections,
    }
  }
}

// ============================================================================
// Main Config
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
  #[serde(default)]
  pub server: ServerConfig,

  #[serde(default)]
  pub output: OutputConfig,

  #[serde(default)]
  pub defaults: DefaultsConfig,

  #[serde(default)]
  pub logging: LoggingConfig,

  /// Template overrides and additions
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub templates: Vec<TemplateConfig>,
}

impl Config {
  /// Load config for a project, with fallback to user config
  pub fn load_for_project(project_path: &Path) -> Self {
    Self::load_with_source(project_path).0
  }

  /// Load config for a project along with the file it came from (`None` for defaults)
  pub fn load_with_source(project_path: &Path) -> (Self, Option<PathBuf>) {
    Self::load_layered(project_path, Self::user_config_path().as_deref())
  }

  fn load_layered(project_path: &Path, user_config_path: Option<&Path>) -> (Self, Option<PathBuf>) {
    let project_config = Self::project_config_path(project_path);
    if let Some(config) = Self::read(&project_config) {
      return (config, Some(project_config));
    }

    if let Some(path) = user_config_path
      && let Some(config) = Self::read(path)
    {
      return (config, Some(path.to_path_buf()));
    }

    (Self::default(), None)
  }

  fn read(path: &Path) -> Option<Self> {
    if !path.exists() {
      return None;
    }
    let content = std::fs::read_to_string(path).ok()?;
    match toml::from_str(&content) {
      Ok(config) => Some(config),
      Err(e) => {
        warn!(path = %path.display(), "Ignoring invalid config: {}", e);
        None
      }
    }
  }

  /// Get the user-level config path
  pub fn user_config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("DAZZLO_CONFIG_DIR") {
      return Some(PathBuf::from(path).join("config.toml"));
    }

    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
      return Some(PathBuf::from(path).join("dazzlo").join("config.toml"));
    }

    dirs::config_dir().map(|p: PathBuf| p.join("dazzlo").join("config.toml"))
  }

  /// Get the project-relative config path
  pub fn project_config_path(project_path: &Path) -> PathBuf {
    project_path.join(".dazzlo").join("dazzlo.toml")
  }

  /// Built-in templates with the configured overrides applied
  pub fn registry(&self) -> TemplateRegistry {
    let overrides = self
      .templates
      .iter()
      .filter(|t| {
        if t.id.is_empty() {
          warn!("Skipping configured template without an id");
        }
        !t.id.is_empty()
      })
      .cloned()
      .map(Template::from);
    TemplateRegistry::builtin().with_overrides(overrides)
  }

  /// Generate a default config file as a string
  pub fn generate_template() -> String {
    format!(
      r#"# DazzloDocs Configuration
# Place in .dazzlo/dazzlo.toml (project) or ~/.config/dazzlo/config.toml (user)

# ============================================================================
# Generation Server
# ============================================================================

[server]
# Base URL of the document generation service
base_url = "{base_url}"

# ============================================================================
# Output
# ============================================================================

[output]
# Directory generated documents are saved to (default: current directory)
# directory = "~/Documents/dazzlo"

# ============================================================================
# Form Defaults
# ============================================================================

[defaults]
# Template rendered when the editor opens (uncomment to use):
# template = "lab_report"

# Color scheme: professional, modern, classic, elegant, tech_blue,
# cyber_purple, neon_green, sunset_orange, ocean_teal, midnight_black
color_scheme = "{color_scheme}"

# ============================================================================
# Logging
# ============================================================================

[logging]
# Level: error, warn, info, debug, trace (RUST_LOG overrides this)
level = "info"

# Editor log file rotation: daily, hourly, never
rotation = "daily"

# ============================================================================
# Templates
# ============================================================================

# Add a template, or replace a built-in one with the same id:
# [[templates]]
# id = "lab_report"
# name = "Lab Report"
# description = "Short lab write-up"
# sections = ["objective", "observations", "results", "conclusion"]
"#,
      base_url = DEFAULT_BASE_URL,
      color_scheme = DEFAULT_COLOR_SCHEME
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use pretty_assertions::assert_eq;
  use tempfile::TempDir;

  fn write_project_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".dazzlo");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("dazzlo.toml"), content).unwrap();
  }

  #[test]
  fn test_defaults() {
    let config = Config::default();
    assert_eq!(config.server.base_url, "http://localhost:5000");
    assert_eq!(config.defaults.color_scheme, "professional");
    assert_eq!(config.defaults.template, None);
    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.rotation, "daily");
    assert_eq!(config.output.directory(), PathBuf::from("."));
  }

  #[test]
  fn test_load_project_config() {
    let temp = TempDir::new().unwrap();
    write_project_config(
      temp.path(),
      r#"
[server]
base_url = "http://docs.internal:8080"

[defaults]
template = "lab_report"
"#,
    );

    let (config, source) = Config::load_layered(temp.path(), None);
    assert_eq!(source, Some(Config::project_config_path(temp.path())));
    assert_eq!(config.server.base_url, "http://docs.internal:8080");
    assert_eq!(config.defaults.template.as_deref(), Some("lab_report"));
    // unspecified fields keep defaults
    assert_eq!(config.defaults.color_scheme, "professional");
    assert_eq!(config.logging.level, "info");
  }

  #[test]
  fn test_project_config_wins_over_user() {
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    let user_config = user.path().join("config.toml");
    std::fs::write(&user_config, "[logging]\nlevel = \"debug\"\n").unwrap();

    let (config, source) = Config::load_layered(project.path(), Some(&user_config));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(source.as_deref(), Some(user_config.as_path()));

    write_project_config(project.path(), "[logging]\nlevel = \"warn\"\n");
    let (config, _) = Config::load_layered(project.path(), Some(&user_config));
    assert_eq!(config.logging.level, "warn");
  }

  #[test]
  fn test_invalid_config_falls_through() {
    let temp = TempDir::new().unwrap();
    write_project_config(temp.path(), "[server\nbase_url = ");
    let (config, source) = Config::load_layered(temp.path(), None);
    assert_eq!(config, Config::default());
    assert_eq!(source, None);
  }

  #[test]
  fn test_invalid_project_config_reports_user_source() {
    let project = TempDir::new().unwrap();
    let user = TempDir::new().unwrap();
    let user_config = user.path().join("config.toml");
    std::fs::write(&user_config, "[logging]\nlevel = \"debug\"\n").unwrap();
    write_project_config(project.path(), "[logging\nlevel = ");

    let (config, source) = Config::load_layered(project.path(), Some(&user_config));
    assert_eq!(config.logging.level, "debug");
    assert_eq!(source, Some(user_config));
  }

  #[test]
  fn test_load_default_when_no_config() {
    let temp = TempDir::new().unwrap();
    let (config, source) = Config::load_layered(temp.path(), Some(&temp.path().join("missing.toml")));
    assert_eq!(config, Config::default());
    assert_eq!(source, None);
  }

  #[test]
  fn test_output_directory_expands_home() {
    let config: Config = toml::from_str("[output]\ndirectory = \"~/docs\"\n").unwrap();
    if let Some(home) = dirs::home_dir() {
      assert_eq!(config.output.directory(), home.join("docs"));
    }

    let config: Config = toml::from_str("[output]\ndirectory = \"/srv/reports\"\n").unwrap();
    assert_eq!(config.output.directory(), PathBuf::from("/srv/reports"));

    // only a whole leading component counts
    let config: Config = toml::from_str("[output]\ndirectory = \"~reports\"\n").unwrap();
    assert_eq!(config.output.directory(), PathBuf::from("~reports"));
  }

  #[test]
  fn test_template_overrides() {
    let config: Config = toml::from_str(
      r#"
[[templates]]
id = "lab_report"
name = "Short Lab"
sections = ["objective", "results"]

[[templates]]
id = "memo"
sections = ["summary"]

[[templates]]
name = "No id"
"#,
    )
    .unwrap();

    let registry = config.registry();
    assert_eq!(registry.len(), TemplateRegistry::builtin().len() + 1);
    assert_eq!(registry.sections_for("lab_report"), ["objective", "results"]);
    assert_eq!(registry.get("memo").unwrap().name, "memo");
  }

  #[test]
  fn test_generate_template_parses() {
    let template = Config::generate_template();
    assert!(template.contains("[server]"));
    assert!(template.contains("[logging]"));
    let parsed: Config = toml::from_str(&template).unwrap();
    assert_eq!(parsed, Config::default());
  }

  #[test]
  fn test_toml_roundtrip() {
    let config = Config {
      output: OutputConfig {
        directory: Some(PathBuf::from("/tmp/docs")),
      },
      defaults: DefaultsConfig {
        template: Some("case_study".to_string()),
        color_scheme: "ocean_teal".to_string(),
      },
      templates: vec![TemplateConfig {
        id: "memo".to_string(),
        name: "Memo".to_string(),
        description: String::new(),
        sections: vec!["summary".to_string()],
      }],
      ..Default::default()
    };

    let toml_str = toml::to_string_pretty(&config).unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
  }
}
