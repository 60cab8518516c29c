//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// agent-skills - Distribute skills, hooks and rules to agent config directories
#[derive(Parser, Debug)]
#[command(name = "agent-skills")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root holding components/ and config.yaml (defaults to the current directory)
    #[arg(long, global = true, env = "AGENT_SKILLS_ROOT")]
    pub root: Option<PathBuf>,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List available components
    List,

    /// Show sync status of configured components
    Status {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Sync components to configured destinations based on config.yaml
    ///
    /// Examples:
    ///   agent-skills sync              # Apply changes
    ///   agent-skills sync --dry-run    # Show what would be done
    Sync {
        /// Show what would be done without making changes
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}
