//! Per-component and per-destination lock records

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome recorded for one destination of one component
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DestinationStatus {
    Synced,
    Diverged,
    Missing,
    Deleted,
}

/// Follow-up a later run is expected to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PendingAction {
    Update,
    Delete,
}

/// What was last synced for a (component, destination) pair
///
/// `hash` is the component's source tree digest captured when `status` was
/// recorded; it is a historical snapshot, not a live value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DestinationRecord {
    pub hash: String,
    pub status: DestinationStatus,
    pub synced_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_action: Option<PendingAction>,
}

impl DestinationRecord {
    /// A record stamped `synced` at `at`.
    pub fn synced(hash: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            hash: hash.into(),
            status: DestinationStatus::Synced,
            synced_at: at,
            pending_action: None,
        }
    }

    /// Whether this record already describes a completed sync of `hash`.
    pub fn is_synced_at(&self, hash: &str) -> bool {
        self.status == DestinationStatus::Synced && self.hash == hash && self.pending_action.is_none()
    }
}

/// Lock state of one component
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockEntry {
    pub source_hash: String,
    /// Keyed by destination exactly as written in the configuration
    #[serde(default)]
    pub destinations: BTreeMap<String, DestinationRecord>,
}

impl LockEntry {
    pub fn new(source_hash: impl Into<String>) -> Self {
        Self {
            source_hash: source_hash.into(),
            destinations: BTreeMap::new(),
        }
    }

    pub fn destination(&self, destination: &str) -> Option<&DestinationRecord> {
        self.destinations.get(destination)
    }
}
