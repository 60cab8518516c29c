//! Sync command implementation

use std::path::Path;

use colored::Colorize;
use skills_core::{ArtifactKind, ArtifactReport, SyncAction, SyncOptions, SyncReport};

use super::{engine, missing_component_line};
use crate::error::Result;

/// Run the sync command
///
/// With `dry_run` every artifact is classified and the action it would take
/// printed; nothing under the destinations or the lock file is written.
pub fn run_sync(root: &Path, dry_run: bool, json: bool) -> Result<()> {
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

    let report = engine.sync_with_options(SyncOptions { dry_run })?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_report(&report);
    Ok(())
}

fn print_report(report: &SyncReport) {
    for name in &report.missing_components {
        println!("{}", missing_component_line(name));
    }

    for destination in &report.destinations {
        println!();
        println!("{}:", destination.destination.cyan());
        for artifact in &destination.artifacts {
            println!("  {}: {}", artifact.label, action_label(artifact, report.dry_run));
        }
    }

    println!();
    if !report.has_changes() {
        println!("{}", "All components are up to date.".green());
    } else if report.dry_run {
        println!("Run without {} to apply changes.", "--dry-run".cyan());
    }
}

fn action_label(artifact: &ArtifactReport, dry_run: bool) -> String {
    let verb = match (artifact.kind, artifact.action) {
        (_, SyncAction::Unchanged) => return format!("{} synced", "✓".green()),
        (ArtifactKind::Settings, _) => ("update hooks", "hooks updated"),
        (_, SyncAction::Copy) => ("copy", "copied"),
        (_, SyncAction::Create) => ("create", "created"),
        (_, SyncAction::Update) => ("update", "updated"),
    };
    if dry_run {
        format!("would {}", verb.0).yellow().to_string()
    } else {
        format!("{} {}", "✓".green(), verb.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skills_fs::NormalizedPath;
    use skills_test_utils::TestCatalog;

    fn artifact(kind: ArtifactKind, action: SyncAction) -> ArtifactReport {
        ArtifactReport {
            kind,
            component: None,
            label: "x".to_string(),
            path: NormalizedPath::new("/dest/x"),
            state: skills_core::ArtifactState::NotDeployed,
            action,
        }
    }

    #[test]
    fn test_action_labels() {
        colored::control::set_override(false);

        assert_eq!(action_label(&artifact(ArtifactKind::Rule, SyncAction::Copy), true), "would copy");
        assert_eq!(action_label(&artifact(ArtifactKind::Rule, SyncAction::Copy), false), "✓ copied");
        assert_eq!(
            action_label(&artifact(ArtifactKind::InstructionIndex, SyncAction::Create), false),
            "✓ created"
        );
        assert_eq!(
            action_label(&artifact(ArtifactKind::Settings, SyncAction::Update), true),
            "would update hooks"
        );
        assert_eq!(
            action_label(&artifact(ArtifactKind::Hook, SyncAction::Unchanged), true),
            "✓ synced"
        );
    }

    #[test]
    fn test_sync_with_temp_catalog() {
        let catalog = TestCatalog::new();
        catalog.add_file("git-safety", "SKILL.md", "# Git safety\n");
        let dest = catalog.destination("claude");
        catalog.write_config(&["git-safety"], &[dest.to_str().unwrap()]);

        run_sync(&catalog.root(), true, false).unwrap();
        assert!(!dest.exists());

        run_sync(&catalog.root(), false, false).unwrap();
        assert!(dest.join("skills/git-safety/SKILL.md").exists());
    }
}
