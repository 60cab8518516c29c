//! CLI end-to-end tests that invoke the compiled `agent-skills` binary.
//!
//! Every test runs against a `TestCatalog` project root passed with `--root`
//! and destinations inside the same temp dir.

use assert_cmd::Command;
use predicates::prelude::*;
use skills_test_utils::{TestCatalog, snapshot_tree};
use std::fs;

/// `agent-skills --root <catalog root>` with colors and ambient logging off.
fn agent_skills(catalog: &TestCatalog) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("agent-skills"));
    cmd.arg("--root")
        .arg(catalog.root())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .env_remove("AGENT_SKILLS_ROOT");
    cmd
}

fn catalog_with_dest() -> TestCatalog {
    let catalog = TestCatalog::new();
    catalog.add_file("git-safety", "SKILL.md", "# Git safety\n");
    catalog.add_file("git-safety", "hooks/block-main-commit.sh", "#!/bin/bash\n");
    catalog.add_file("git-safety", "rules/commits.md", "Small commits.\n");
    let dest = catalog.destination("claude");
    catalog.write_config(&["git-safety"], &[dest.to_str().unwrap()]);
    catalog
}

#[test]
fn test_help_exits_zero() {
    Command::new(assert_cmd::cargo::cargo_bin!("agent-skills"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("sync"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_no_subcommand_prints_hint() {
    let catalog = TestCatalog::new();
    agent_skills(&catalog)
        .assert()
        .success()
        .stdout(predicate::str::contains("agent-skills --help"));
}

#[test]
fn test_list_empty_catalog() {
    let catalog = TestCatalog::new();
    agent_skills(&catalog)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No components found in components/ directory"));
}

#[test]
fn test_list_shows_components_and_destinations() {
    let catalog = catalog_with_dest();
    catalog.add_file("unused", "rules/x.md", "x\n");

    agent_skills(&catalog)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-safety"))
        .stdout(predicate::str::contains("unused"))
        .stdout(predicate::str::contains("Configured destinations:"))
        .stdout(predicate::str::contains(
            catalog.destination("claude").to_str().unwrap(),
        ));
}

#[test]
fn test_status_without_components() {
    let catalog = TestCatalog::new();
    catalog.write_config(&[], &["./out"]);
    agent_skills(&catalog)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No components configured in config.yaml"));
}

#[test]
fn test_sync_without_destinations() {
    let catalog = TestCatalog::new();
    catalog.add_file("git-safety", "SKILL.md", "# Git safety\n");
    catalog.write_config(&["git-safety"], &[]);
    agent_skills(&catalog)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("No destinations configured in config.yaml"));
    assert!(!catalog.lock_path().exists());
}

#[test]
fn test_status_before_sync_reports_not_deployed() {
    let catalog = catalog_with_dest();
    agent_skills(&catalog)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not deployed)"));
    assert!(!catalog.destination("claude").exists());
}

#[test]
fn test_dry_run_prints_plan_and_writes_nothing() {
    let catalog = catalog_with_dest();
    agent_skills(&catalog)
        .args(["sync", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skills/git-safety/: would copy"))
        .stdout(predicate::str::contains("CLAUDE.md: would create"))
        .stdout(predicate::str::contains("settings.json: would update hooks"))
        .stdout(predicate::str::contains("Run without --dry-run to apply changes."));

    assert!(!catalog.destination("claude").exists());
    assert!(!catalog.lock_path().exists());
}

#[test]
fn test_sync_then_resync_is_up_to_date() {
    let catalog = catalog_with_dest();

    agent_skills(&catalog)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("skills/git-safety/: ✓ copied"))
        .stdout(predicate::str::contains("hooks/block-main-commit.sh: ✓ copied"))
        .stdout(predicate::str::contains("CLAUDE.md: ✓ created"))
        .stdout(predicate::str::contains("settings.json: ✓ hooks updated"));

    let dest_before = snapshot_tree(&catalog.destination("claude"));
    let lock_before = fs::read(catalog.lock_path()).unwrap();

    agent_skills(&catalog)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("rules/commits.md: ✓ synced"))
        .stdout(predicate::str::contains("All components are up to date."));

    assert_eq!(snapshot_tree(&catalog.destination("claude")), dest_before);
    assert_eq!(fs::read(catalog.lock_path()).unwrap(), lock_before);

    agent_skills(&catalog)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("skills/git-safety/: ✓ synced"))
        .stdout(predicate::str::contains("out of sync").not());
}

#[test]
fn test_status_detects_out_of_sync() {
    let catalog = catalog_with_dest();
    agent_skills(&catalog).arg("sync").assert().success();
    fs::write(
        catalog.destination("claude").join("rules/commits.md"),
        "hand edited\n",
    )
    .unwrap();

    agent_skills(&catalog)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("rules/commits.md: ⚠ out of sync"));

    agent_skills(&catalog)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("rules/commits.md: ✓ updated"));
}

#[test]
fn test_missing_component_warning() {
    let catalog = catalog_with_dest();
    let dest = catalog.destination("claude");
    catalog.write_config(&["ghost", "git-safety"], &[dest.to_str().unwrap()]);

    agent_skills(&catalog)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Component \"ghost\" not found in components/ directory",
        ));
    assert!(dest.join("skills/git-safety/SKILL.md").exists());
}

#[test]
fn test_sync_json_output() {
    let catalog = catalog_with_dest();
    let output = agent_skills(&catalog)
        .args(["sync", "--dry-run", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["dry_run"], true);
    assert_eq!(report["lock_written"], false);
    assert_eq!(report["destinations"][0]["artifacts"][0]["action"], "copy");
}

#[test]
fn test_malformed_config_exits_with_error() {
    let catalog = TestCatalog::new();
    fs::write(catalog.root().join("config.yaml"), "components: [oops\n").unwrap();

    agent_skills(&catalog)
        .arg("sync")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_root_from_environment() {
    let catalog = catalog_with_dest();
    Command::new(assert_cmd::cargo::cargo_bin!("agent-skills"))
        .env("AGENT_SKILLS_ROOT", catalog.root())
        .env("NO_COLOR", "1")
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("git-safety"));
}

#[test]
fn test_missing_root_is_a_user_error() {
    let catalog = TestCatalog::new();
    Command::new(assert_cmd::cargo::cargo_bin!("agent-skills"))
        .arg("--root")
        .arg(catalog.root().join("does-not-exist"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
