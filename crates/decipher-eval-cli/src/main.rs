//! decipher-eval CLI - score decipherment/transliteration outputs against gold references

use anyhow::Result;
use clap::{Parser, Subcommand};
use decipher_eval_core::Config;
use std::path::PathBuf;

mod commands;

use commands::score::ScoreArgs;

#[derive(Parser)]
#[command(name = "decipher-eval")]
#[command(version)]
#[command(about = "Symbol error rate and word accuracy for decipherment outputs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Verbose output (per-group debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score hypotheses against references, per language and globally
    Score(ScoreArgs),

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,

    /// Set the default report format
    SetFormat {
        /// Format (text, tsv, json)
        format: String,
    },

    /// Set how aligned inputs of unequal length are handled
    SetAlignment {
        /// Policy (truncate, strict)
        policy: String,
    },

    /// Show config file path
    Path,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for the report
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config_path = cli.config.as_deref();
    let mut config = Config::load(config_path)?;

    match cli.command {
        Commands::Score(args) => commands::score::run(&config, &args),

        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&config),
            ConfigAction::SetFormat { format } => {
                commands::config::set_format(&mut config, config_path, &format)
            }
            ConfigAction::SetAlignment { policy } => {
                commands::config::set_alignment(&mut config, config_path, &policy)
            }
            ConfigAction::Path => commands::config::show_path(config_path),
        },
    }
}
