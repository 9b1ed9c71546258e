//! lint-compose CLI tool.
//!
//! Usage:
//! ```bash
//! lint-compose resolve [--pretty] [PATH]
//! lint-compose list-fragments
//! lint-compose files [PATH]
//! lint-compose init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Compose host lint configurations from named fragments
#[derive(Parser)]
#[command(name = "lint-compose")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved configuration as JSON
    Resolve {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// List built-in fragments and presets
    ListFragments,

    /// List the files the resolved configuration applies to
    Files {
        /// Project directory (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
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
        Commands::Resolve { path, pretty } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::resolve::run(&source, pretty)
        }
        Commands::ListFragments => commands::list_fragments::run(),
        Commands::Files { path } => {
            let source = config_resolver::resolve(&path, cli.config.as_deref());
            commands::files::run(&source)
        }
        Commands::Init { force } => commands::init::run(&PathBuf::from("."), force),
    }
}
