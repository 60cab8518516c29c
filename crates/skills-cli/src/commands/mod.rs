//! Command implementations for skills-cli

pub mod list;
pub mod status;
pub mod sync;

pub use list::run_list;
pub use status::run_status;
pub use sync::run_sync;

use std::path::Path;

use colored::{ColoredString, Colorize};
use skills_core::SyncEngine;
use skills_fs::NormalizedPath;

/// Engine for the project rooted at `root`
pub(crate) fn engine(root: &Path) -> SyncEngine {
    SyncEngine::new(NormalizedPath::new(root))
}

/// Warning line for a configured component missing from the catalog
pub(crate) fn missing_component_line(name: &str) -> String {
    format!("{} Component \"{}\" not found in components/ directory", "⚠".yellow(), name)
}

/// `✓` or `-` for a capability flag, left-aligned in `width` columns.
///
/// Padding is applied before coloring so escape codes do not skew columns.
pub(crate) fn flag(value: bool, width: usize) -> ColoredString {
    if value {
        format!("{:<width$}", "✓").green()
    } else {
        format!("{:<width$}", "-").dimmed()
    }
}
