//! Per-destination planning
//!
//! Collects every artifact the enabled components contribute to one
//! destination, classifies it against what is on disk and pairs it with the
//! write that would converge it. Nothing here mutates the filesystem.

use std::collections::HashMap;

use skills_fs::{NormalizedPath, hash_file, io};

use super::check::{ArtifactKind, ArtifactReport, ArtifactState, SyncAction};
use super::instruction_index::{INDEX_FILE, render_index};
use super::settings::{SETTINGS_FILE, merge_settings};
use crate::component::{Component, HOOKS_DIR, INSTRUCTION_DOC, RULES_DIR};
use crate::Result;

/// Destination directory holding one folder per instruction document
pub const SKILLS_DIR: &str = "skills";

/// How an artifact's content is produced
#[derive(Debug, Clone)]
pub(crate) enum Content {
    /// Copy a source file verbatim
    Source(NormalizedPath),
    /// Write generated bytes
    Generated(Vec<u8>),
}

/// A classified artifact and the write that converges it
#[derive(Debug, Clone)]
pub(crate) struct PlannedArtifact {
    pub report: ArtifactReport,
    pub content: Content,
}

impl PlannedArtifact {
    /// Perform the write for this artifact.
    ///
    /// Callers skip artifacts whose action is `Unchanged`.
    pub fn apply(&self) -> Result<()> {
        let dest = &self.report.path;
        match &self.content {
            Content::Source(source) => {
                io::copy_file(&source.to_native(), dest, self.report.kind.is_executable())?
            }
            Content::Generated(bytes) => io::write_atomic(dest, bytes)?,
        }
        tracing::info!(
            dest = %dest,
            action = ?self.report.action,
            "Applied {}",
            self.report.label
        );
        Ok(())
    }
}

/// A copied artifact before classification
struct SourceArtifact {
    kind: ArtifactKind,
    component: String,
    /// Destination-relative path with `/` separators
    relative: String,
    label: String,
    source: NormalizedPath,
}

/// Plan every artifact for the destination rooted at `dest_root`.
///
/// Order: instruction documents, hook scripts, rule documents (each in
/// component order, then file order), then the instruction index and the
/// settings document.
pub(crate) fn plan_destination(
    components: &[&Component],
    dest_root: &NormalizedPath,
) -> Result<Vec<PlannedArtifact>> {
    let sources = collect_sources(components)?;

    let hook_files = file_names(&sources, ArtifactKind::Hook);
    let rule_files = file_names(&sources, ArtifactKind::Rule);

    let mut planned = Vec::with_capacity(sources.len() + 2);

    for artifact in sources {
        let dest = dest_root.join(&artifact.relative);
        let state = classify_file(&artifact.source, &dest)?;
        planned.push(PlannedArtifact {
            report: report(artifact.kind, Some(artifact.component), artifact.label, dest, state),
            content: Content::Source(artifact.source),
        });
    }

    let index = render_index(&rule_files);
    let index_path = dest_root.join(INDEX_FILE);
    let state = classify_bytes(index.as_bytes(), &index_path)?;
    planned.push(PlannedArtifact {
        report: report(
            ArtifactKind::InstructionIndex,
            None,
            INDEX_FILE.to_string(),
            index_path,
            state,
        ),
        content: Content::Generated(index.into_bytes()),
    });

    let settings_path = dest_root.join(SETTINGS_FILE);
    let merge = merge_settings(&settings_path, &hook_files)?;
    // No file and nothing to register: there is nothing to manage
    if merge.existed || merge.changed {
        let state = match (merge.existed, merge.changed) {
            (_, false) => ArtifactState::Synced,
            (true, true) => ArtifactState::Diverged,
            (false, true) => ArtifactState::NotDeployed,
        };
        let rendered = merge.render(&settings_path)?;
        planned.push(PlannedArtifact {
            report: report(
                ArtifactKind::Settings,
                None,
                SETTINGS_FILE.to_string(),
                settings_path,
                state,
            ),
            content: Content::Generated(rendered.into_bytes()),
        });
    }

    Ok(planned)
}

/// Gather copied artifacts, kind-major, component order, file order.
///
/// When two components map to the same destination path the later one
/// replaces the earlier in place.
fn collect_sources(components: &[&Component]) -> Result<Vec<SourceArtifact>> {
    let mut sources: Vec<SourceArtifact> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    let mut push = |artifact: SourceArtifact| match positions.get(&artifact.relative) {
        Some(&idx) => {
            tracing::warn!(
                path = %artifact.relative,
                replaced = %sources[idx].component,
                by = %artifact.component,
                "Two components provide the same destination file; the later one wins"
            );
            sources[idx] = artifact;
        }
        None => {
            positions.insert(artifact.relative.clone(), sources.len());
            sources.push(artifact);
        }
    };

    for component in components.iter().filter(|c| c.has_instruction_doc) {
        push(SourceArtifact {
            kind: ArtifactKind::InstructionDoc,
            component: component.name.clone(),
            relative: format!("{SKILLS_DIR}/{}/{INSTRUCTION_DOC}", component.name),
            label: format!("{SKILLS_DIR}/{}/", component.name),
            source: component.instruction_doc(),
        });
    }

    for component in components.iter().filter(|c| c.has_hooks) {
        for file in component.hook_scripts()? {
            push(SourceArtifact {
                kind: ArtifactKind::Hook,
                component: component.name.clone(),
                relative: format!("{HOOKS_DIR}/{file}"),
                label: format!("{HOOKS_DIR}/{file}"),
                source: component.hooks_dir().join(&file),
            });
        }
    }

    for component in components.iter().filter(|c| c.has_rules) {
        for file in component.rule_documents()? {
            push(SourceArtifact {
                kind: ArtifactKind::Rule,
                component: component.name.clone(),
                relative: format!("{RULES_DIR}/{file}"),
                label: format!("{RULES_DIR}/{file}"),
                source: component.rules_dir().join(&file),
            });
        }
    }

    Ok(sources)
}

/// Classify a copied artifact by full-file digest.
fn classify_file(source: &NormalizedPath, dest: &NormalizedPath) -> Result<ArtifactState> {
    if !dest.is_file() {
        return Ok(ArtifactState::NotDeployed);
    }
    let source_hash = hash_file(&source.to_native())?;
    let dest_hash = hash_file(&dest.to_native())?;
    let state = if source_hash == dest_hash {
        ArtifactState::Synced
    } else {
        ArtifactState::Diverged
    };
    tracing::debug!(dest = %dest, %source_hash, %dest_hash, ?state, "Classified file");
    Ok(state)
}

/// Classify a generated artifact by byte equality.
fn classify_bytes(expected: &[u8], dest: &NormalizedPath) -> Result<ArtifactState> {
    if !dest.is_file() {
        return Ok(ArtifactState::NotDeployed);
    }
    let current = io::read_bytes(dest)?;
    Ok(if current == expected {
        ArtifactState::Synced
    } else {
        ArtifactState::Diverged
    })
}

fn report(
    kind: ArtifactKind,
    component: Option<String>,
    label: String,
    path: NormalizedPath,
    state: ArtifactState,
) -> ArtifactReport {
    ArtifactReport {
        kind,
        component,
        label,
        path,
        state,
        action: SyncAction::for_state(kind, state),
    }
}

/// Destination file names of one kind, as referenced by the generated artifacts
fn file_names(sources: &[SourceArtifact], kind: ArtifactKind) -> Vec<String> {
    sources
        .iter()
        .filter(|s| s.kind == kind)
        .filter_map(|s| s.source.file_name().map(str::to_string))
        .collect()
}
