//! agent-skills CLI
//!
//! Syncs the component catalog of a project into the configured agent
//! configuration directories.

mod cli;
mod commands;
mod error;

use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let root = project_root(cli.root.as_deref())?;
    if cli.root.is_some() && !root.is_dir() {
        return Err(CliError::user(format!(
            "Project root {} is not a directory",
            root.display()
        )));
    }
    tracing::debug!(root = %root.display(), "Resolved project root");

    match cli.command {
        Some(cmd) => execute_command(cmd, &root),
        None => {
            println!("{} Distribute skills, hooks and rules", "agent-skills".green().bold());
            println!();
            println!("Run {} for available commands.", "agent-skills --help".cyan());
            Ok(())
        }
    }
}

/// Logs go to stderr so they never mix with `--json` output.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Verbose mode enabled");
}

fn project_root(flag: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir()?;
    Ok(match flag {
        Some(path) if path.is_absolute() => path.to_path_buf(),
        Some(path) => cwd.join(path),
        None => cwd,
    })
}

fn execute_command(cmd: Commands, root: &Path) -> Result<()> {
    match cmd {
        Commands::List => commands::run_list(root),
        Commands::Status { json } => commands::run_status(root, json),
        Commands::Sync { dry_run, json } => commands::run_sync(root, dry_run, json),
    }
}
