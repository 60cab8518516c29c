//! Classification types shared by status and sync
//!
//! Every artifact of a destination is classified by comparing what is on disk
//! with what the source (or a generated builder) says should be there.

use serde::Serialize;
use skills_fs::NormalizedPath;

/// What an artifact is and how it reaches the destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    /// A component's `SKILL.md`, copied to `skills/<component>/SKILL.md`
    InstructionDoc,
    /// A hook script, copied to `hooks/` and marked executable
    Hook,
    /// A rule document, copied to `rules/`
    Rule,
    /// Generated `CLAUDE.md` referencing every active rule document
    InstructionIndex,
    /// `settings.json` with a rebuilt hook registration section
    Settings,
}

impl ArtifactKind {
    /// Generated artifacts are synthesized fresh instead of copied
    pub fn is_generated(self) -> bool {
        matches!(self, Self::InstructionIndex | Self::Settings)
    }

    /// Hook scripts get owner-executable permissions after every write
    pub fn is_executable(self) -> bool {
        matches!(self, Self::Hook)
    }
}

/// Result of comparing a destination artifact against its source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactState {
    /// Nothing at the destination path
    NotDeployed,
    /// Content digests are equal
    Synced,
    /// Present but different from the source
    Diverged,
}

/// Filesystem action implied by an artifact's state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncAction {
    /// Copy a source file that is not yet deployed
    Copy,
    /// Write a generated artifact that does not exist yet
    Create,
    /// Overwrite diverged content, last writer wins
    Update,
    Unchanged,
}

impl SyncAction {
    pub fn for_state(kind: ArtifactKind, state: ArtifactState) -> Self {
        match state {
            ArtifactState::Synced => Self::Unchanged,
            ArtifactState::Diverged => Self::Update,
            ArtifactState::NotDeployed if kind.is_generated() => Self::Create,
            ArtifactState::NotDeployed => Self::Copy,
        }
    }

    /// Whether applying this action mutates the destination
    pub fn is_change(self) -> bool {
        self != Self::Unchanged
    }
}

/// Classification of one artifact at one destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactReport {
    pub kind: ArtifactKind,
    /// Owning component; `None` for generated artifacts
    pub component: Option<String>,
    /// Destination-relative label, e.g. `hooks/notify-stop.sh`
    pub label: String,
    /// Absolute destination path
    pub path: NormalizedPath,
    pub state: ArtifactState,
    pub action: SyncAction,
}

/// All artifacts of one destination, in processing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DestinationReport {
    /// Destination as written in the configuration
    pub destination: String,
    /// Resolved destination directory
    pub path: NormalizedPath,
    /// Whether the destination directory existed before the run
    pub exists: bool,
    pub artifacts: Vec<ArtifactReport>,
}

impl DestinationReport {
    /// Artifacts whose action is not `Unchanged`
    pub fn changes(&self) -> impl Iterator<Item = &ArtifactReport> {
        self.artifacts.iter().filter(|a| a.action.is_change())
    }
}

/// Read-only classification of every destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Configured component names with no matching catalog entry
    pub missing_components: Vec<String>,
    pub destinations: Vec<DestinationReport>,
}

impl StatusReport {
    /// Whether every deployed artifact is synced and every destination exists
    pub fn is_synced(&self) -> bool {
        self.destinations
            .iter()
            .all(|d| d.exists && d.artifacts.iter().all(|a| a.state == ArtifactState::Synced))
    }
}
