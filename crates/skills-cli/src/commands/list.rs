//! List command implementation

use std::path::Path;

use colored::Colorize;

use super::{engine, flag};
use crate::error::Result;

/// Run the list command
///
/// Prints every discovered component with its capability flags and whether
/// `config.yaml` enables it, followed by the configured destinations.
pub fn run_list(root: &Path) -> Result<()> {
    let engine = engine(root);
    let components = engine.components()?;
    let config = engine.config()?;

    if components.is_empty() {
        println!("No components found in components/ directory");
        return Ok(());
    }

    println!("{}", "Available components:".bold());
    println!();
    println!("  {:<20} {:<6} {:<6} {:<6} {:<10} Enabled", "Name", "Skill", "Hooks", "Rules", "Templates");
    println!("  {}", "─".repeat(62));

    for component in &components {
        println!(
            "  {} {} {} {} {} {}",
            format!("{:<20}", component.name).cyan(),
            flag(component.has_instruction_doc, 6),
            flag(component.has_hooks, 6),
            flag(component.has_rules, 6),
            flag(component.has_templates, 10),
            flag(config.is_enabled(&component.name), 0),
        );
    }
    println!();

    if !config.destinations().is_empty() {
        println!("{}", "Configured destinations:".bold());
        for destination in config.destinations() {
            println!("  - {}", destination);
        }
        println!();
    }

    Ok(())
}
