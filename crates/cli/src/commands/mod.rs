//! CLI command implementations

mod catalog;
mod config;
mod generate;
mod tui;

pub use catalog::{cmd_colors, cmd_features, cmd_templates};
pub use config::{cmd_config_init, cmd_config_path, cmd_config_show};
pub use generate::{cmd_generate, cmd_payload, load_form};
pub use tui::cmd_tui;
