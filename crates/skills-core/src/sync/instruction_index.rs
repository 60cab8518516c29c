//! Generated instruction index (`CLAUDE.md`)
//!
//! The index is never copied from the source. Every run renders it from
//! scratch and compares the result byte-for-byte with what the destination
//! holds.

/// File name of the index at the destination root
pub const INDEX_FILE: &str = "CLAUDE.md";

const HEADER: [&str; 5] = [
    "# Claude Code User-Level Instructions",
    "",
    "<!-- Auto-generated by agent-skills sync. Do not edit directly. -->",
    "<!-- For environment-specific settings, create CLAUDE.local.md -->",
    "",
];

/// Render the index for the given rule documents.
///
/// `rule_files` are destination file names under `rules/`, already in
/// component-then-file order. Each becomes one `@rules/<file>` line.
pub fn render_index<S: AsRef<str>>(rule_files: &[S]) -> String {
    let mut lines: Vec<String> = HEADER.iter().map(|l| l.to_string()).collect();
    lines.extend(rule_files.iter().map(|f| format!("@rules/{}", f.as_ref())));
    lines.join("\n") + "\n"
}
