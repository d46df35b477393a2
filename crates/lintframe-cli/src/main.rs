//! lintframe CLI tool.
//!
//! Usage:
//! ```bash
//! lintframe check [OPTIONS] [PATHS]...
//! lintframe list-rules [--group NAME]
//! lintframe describe <RULE>
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Rule-based linter built on the lintframe framework
#[derive(Parser)]
#[command(name = "lintframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "LINTFRAME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Lint files and directories
    Check {
        /// Files or directories to lint (default: current directory)
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run these rules (comma-separated names)
        #[arg(long)]
        rules: Option<String>,

        /// Additional exclude globs (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Enable experimental rules
        #[arg(long)]
        include_experimental: bool,
    },

    /// List available rules by kind
    ListRules {
        /// Only show rules in this group
        #[arg(long)]
        group: Option<String>,
    },

    /// Show the details of one rule
    Describe {
        /// Rule name, e.g. `LineLength`
        name: String,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One line per diagnostic.
    Compact,
    /// Source snippets rendered with miette.
    Rich,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            paths,
            format,
            rules,
            exclude,
            include_experimental,
        } => {
            let request = commands::check::CheckRequest {
                paths,
                format,
                rules,
                exclude,
                include_experimental,
            };
            let has_errors = commands::check::run(&request, cli.config.as_deref())?;
            if has_errors {
                std::process::exit(1);
            }
            Ok(())
        }
        Commands::ListRules { group } => commands::list_rules::run(group.as_deref()),
        Commands::Describe { name } => commands::describe::run(&name),
    }
}
