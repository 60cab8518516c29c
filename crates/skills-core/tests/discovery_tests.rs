//! Tests for component discovery and configuration loading

use pretty_assertions::assert_eq;
use rstest::rstest;
use skills_core::{Config, ProjectLayout, discover};
use skills_fs::NormalizedPath;
use skills_test_utils::TestCatalog;
use std::fs;

fn layout(catalog: &TestCatalog) -> ProjectLayout {
    ProjectLayout::new(NormalizedPath::new(catalog.root()))
}

#[test]
fn test_discover_sorted_with_flags() {
    let catalog = TestCatalog::new();
    catalog.add_file("notify", "hooks/notify-stop.sh", "#!/bin/bash\n");
    catalog.add_file("git-safety", "SKILL.md", "# Git safety\n");
    catalog.add_file("git-safety", "rules/commits.md", "x\n");
    catalog.add_file("git-safety", "templates/pr.md", "x\n");
    catalog.add_empty_component("empty");
    // Loose files at the catalog root are not components
    fs::write(catalog.root().join("components/README.md"), "catalog\n").unwrap();

    let components = discover(&layout(&catalog).components_dir()).unwrap();

    let names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["empty", "git-safety", "notify"]);

    let empty = &components[0];
    assert!(!empty.has_instruction_doc && !empty.has_hooks && !empty.has_rules);

    let git = &components[1];
    assert!(git.has_instruction_doc);
    assert!(git.has_rules);
    assert!(git.has_templates);
    assert!(!git.has_hooks);

    let notify = &components[2];
    assert!(notify.has_hooks);
    assert!(!notify.has_instruction_doc);
}

#[test]
fn test_hook_and_rule_filters() {
    let catalog = TestCatalog::new();
    catalog.add_file("mixed", "hooks/b.sh", "");
    catalog.add_file("mixed", "hooks/a.sh", "");
    catalog.add_file("mixed", "hooks/README.md", "");
    catalog.add_file("mixed", "rules/style.md", "");
    catalog.add_file("mixed", "rules/style.local.md", "");
    catalog.add_file("mixed", "rules/notes.txt", "");

    let components = discover(&layout(&catalog).components_dir()).unwrap();
    let mixed = &components[0];

    assert_eq!(mixed.hook_scripts().unwrap(), vec!["a.sh", "b.sh"]);
    assert_eq!(mixed.rule_documents().unwrap(), vec!["style.md"]);
}

#[test]
fn test_missing_config_is_empty() {
    let catalog = TestCatalog::new();
    let config = Config::load(&layout(&catalog).config_path()).unwrap();
    assert!(config.components().is_empty());
    assert!(config.destinations().is_empty());
}

#[rstest]
#[case("components:\n  - a\n  - b\n  - a\ndestinations:\n  - ~/.claude\n", &["a", "b"], &["~/.claude"])]
#[case("components: []\n", &[], &[])]
#[case("destinations:\n  - /srv/agent\n", &[], &["/srv/agent"])]
#[case("components:\n  - a\n  - 3\n  - null\n", &["a"], &[])]
fn test_config_parsing(
    #[case] yaml: &str,
    #[case] components: &[&str],
    #[case] destinations: &[&str],
) {
    let catalog = TestCatalog::new();
    fs::write(catalog.root().join("config.yaml"), yaml).unwrap();

    let config = Config::load(&layout(&catalog).config_path()).unwrap();

    assert_eq!(config.components(), components);
    assert_eq!(config.destinations(), destinations);
}

#[test]
fn test_malformed_config_is_an_error() {
    let catalog = TestCatalog::new();
    fs::write(catalog.root().join("config.yaml"), "components: [a\n").unwrap();

    assert!(Config::load(&layout(&catalog).config_path()).is_err());
}
