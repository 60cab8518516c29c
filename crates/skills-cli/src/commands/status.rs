//! Status command implementation

use std::path::Path;

use colored::{ColoredString, Colorize};
use skills_core::{ArtifactState, StatusReport};

use super::{engine, missing_component_line};
use crate::error::Result;

/// Run the status command
///
/// Read-only: classifies every artifact of every configured destination.
pub fn run_status(root: &Path, json: bool) -> Result<()> {
    let engine = engine(root);
    let config = engine.config()?;

    if !json {
        if config.components().is_empty() {
            println!("No components configured in config.yaml");
            return Ok(());
        }
        if config.destinations().is_empty() {
            println!("No destinations configured in config.yaml");
            return Ok(());
        }
    }

    let report = engine.status()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &StatusReport) {
    for name in &report.missing_components {
        println!("{}", missing_component_line(name));
    }

    println!("{}", "Component sync status:".bold());
    println!();

    for destination in &report.destinations {
        println!("{}:", destination.destination.cyan());
        if !destination.exists {
            println!("  {}", "(not deployed)".dimmed());
            println!();
            continue;
        }
        for artifact in &destination.artifacts {
            println!("  {}: {}", artifact.label, state_label(artifact.state));
        }
        println!();
    }
}

fn state_label(state: ArtifactState) -> ColoredString {
    match state {
        ArtifactState::Synced => "✓ synced".green(),
        ArtifactState::NotDeployed => "○ not deployed".dimmed(),
        ArtifactState::Diverged => "⚠ out of sync".yellow(),
    }
}
