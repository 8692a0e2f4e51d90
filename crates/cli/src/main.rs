//! DazzloDocs CLI - build document forms and generate documents

use anyhow::Result;
use clap::{Parser, Subcommand};
use dazzlo_core::Config;
use std::path::PathBuf;

mod commands;
mod logging;
mod tui;

use commands::{
  cmd_colors, cmd_config_init, cmd_config_path, cmd_config_show, cmd_features, cmd_generate, cmd_payload,
  cmd_templates, cmd_tui,
};
use logging::{init_cli_logging, init_tui_logging};

#[derive(Parser)]
#[command(name = "dazzlo")]
#[command(about = "Build document forms and generate documents with DazzloDocs")]
#[command(after_help = "\
QUICK START:
  dazzlo config init              # Create .dazzlo/dazzlo.toml
  dazzlo tui                      # Fill in a form interactively
  dazzlo generate report.toml     # Generate a document from a draft

COMMON WORKFLOWS:
  dazzlo templates                # List templates and their sections
  dazzlo payload report.toml      # Preview the JSON sent to the server")]
struct Cli {
  #[command(subcommand)]
  command: Commands,
}

/// Subcommands for `dazzlo config`
#[derive(Subcommand)]
pub enum ConfigCommand {
  /// Show current effective configuration
  #[command(long_about = "Show the current effective configuration.\n\n\
    Displays which config file is being used and its contents as TOML.")]
  Show,

  /// Initialize project config file (.dazzlo/dazzlo.toml)
  Init {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
  },

  /// Print config file locations
  Path,
}

#[derive(Subcommand)]
enum Commands {
  /// List document templates
  Templates {
    /// Ask the generation server instead of using local templates
    #[arg(long)]
    remote: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// List color schemes
  Colors {
    /// Ask the generation server instead of using local schemes
    #[arg(long)]
    remote: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// List chart types and code languages
  Features {
    /// Ask the generation server instead of using local lists
    #[arg(long)]
    remote: bool,
    /// Output as JSON
    #[arg(long)]
    json: bool,
  },
  /// Print the JSON payload for a draft without sending it
  #[command(after_help = "\
DRAFT FORMAT:
  TOML (.toml) or JSON (any other extension):

  template = \"lab_report\"
  color_scheme = \"modern\"

  [user]
  student_name = \"Asha\"
  subject = \"Physics\"

  [[sections]]
  name = \"results\"
  content = \"...\"

  [[sections.tables]]
  title = \"Measurements\"
  headers = [\"Length\", \"Period\"]
  rows = [[\"10cm\", \"0.63\"]]")]
  Payload {
    /// Draft file
    draft: PathBuf,
    /// Write to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
  },
  /// Generate a document from a draft and save it
  Generate {
    /// Draft file
    draft: PathBuf,
    /// Directory to save the document in (default: configured output.directory)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,
    /// Generation server base URL (default: configured server.base_url)
    #[arg(long)]
    server: Option<String>,
  },
  /// Launch interactive form editor
  Tui {
    /// Draft to pre-fill the form with
    #[arg(short, long)]
    draft: Option<PathBuf>,
    /// Generation server base URL (default: configured server.base_url)
    #[arg(long)]
    server: Option<String>,
  },
  /// Manage configuration
  #[command(after_help = "\
CONFIG LOCATIONS:
  Project: .dazzlo/dazzlo.toml
  User:    ~/.config/dazzlo/config.toml")]
  Config {
    #[command(subcommand)]
    command: ConfigCommand,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();

  let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
  let config = Config::load_for_project(&cwd);

  // The editor owns the terminal, so it logs to a file
  let _guard = match &cli.command {
    Commands::Tui { .. } => init_tui_logging(&config.logging),
    _ => {
      init_cli_logging(&config.logging);
      None
    }
  };

  match cli.command {
    Commands::Templates { remote, json } => cmd_templates(&config, remote, json).await,
    Commands::Colors { remote, json } => cmd_colors(&config, remote, json).await,
    Commands::Features { remote, json } => cmd_features(&config, remote, json).await,
    Commands::Payload { draft, output } => cmd_payload(&config, &draft, output.as_deref()).await,
    Commands::Generate {
      draft,
      output_dir,
      server,
    } => cmd_generate(&config, &draft, output_dir, server.as_deref()).await.map(|_| ()),
    Commands::Tui { draft, server } => cmd_tui(&config, draft.as_deref(), server.as_deref()).await,

    // Config subcommands
    Commands::Config { command } => match command {
      ConfigCommand::Show => cmd_config_show(&cwd).await,
      ConfigCommand::Init { force } => cmd_config_init(&cwd, force).await,
      ConfigCommand::Path => cmd_config_path(&cwd).await,
    },
  }
}
