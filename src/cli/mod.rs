//! CLI adapter for lineseek
//!
//! Thin clap frontend over `core/`. Commands load a corpus, build an engine
//! that borrows from it, and print ranked lines.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lineseek - TF-IDF line search
///
/// Ranks the lines of a text file against a free-text query. Words are runs
/// of ASCII letters and match regardless of case.
#[derive(Parser, Debug)]
#[command(name = "lineseek")]
#[command(version)]
#[command(about = "TF-IDF line search", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Config file (overrides XDG and ./lineseek.toml lookup)
    #[arg(long, global = true, env = "LINESEEK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank the lines of a file against a query
    Search(commands::SearchArgs),

    /// Index a file once and answer queries read from stdin
    Interactive(commands::InteractiveArgs),

    /// Show document and word counts for a file
    Stats(commands::StatsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  lineseek completions bash > ~/.local/share/bash-completion/completions/lineseek
    ///   zsh:   lineseek completions zsh > ~/.zfunc/_lineseek
    ///   fish:  lineseek completions fish > ~/.config/fish/completions/lineseek.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::services::Services;
    use crate::core::xdg::XdgDirs;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => {
            XdgDirs::new().log_paths();
            Config::load()?
        }
    };
    config.log_config();

    let services = Arc::new(Services::new(config));

    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::Interactive(args) => {
            commands::interactive::execute(args, &services, cli.format)
        }
        Commands::Stats(args) => commands::stats::execute(args, &services, cli.format),
        Commands::ShowConfig(args) => {
            commands::config::execute(args, &services, cli.config.as_deref(), cli.format)
        }
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
