//! Lock store
//!
//! The lock store is the persisted record of the last successful sync: the
//! source tree digest of every enabled component and, per destination, the
//! digest, status and time it was synced. It is serialized as YAML next to
//! `config.yaml` and fully overwritten after every applied sync. A missing
//! file is equivalent to an empty store.

mod record;

pub use record::{DestinationRecord, DestinationStatus, LockEntry, PendingAction};

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use skills_fs::{ConfigStore, NormalizedPath, checksum};

use crate::Result;

/// Snapshot of every component's last synced state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockStore {
    #[serde(default)]
    pub components: BTreeMap<String, LockEntry>,
    #[serde(default)]
    pub global_hash: String,
}

impl LockStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the store, treating a missing or blank file as empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &NormalizedPath) -> Result<Self> {
        Ok(ConfigStore::new().load_or_default(path)?)
    }

    /// Serialize and atomically overwrite the backing file.
    pub fn save(&self, path: &NormalizedPath) -> Result<()> {
        ConfigStore::new().save(path, self)?;
        tracing::info!(path = %path, components = self.components.len(), "Wrote lock file");
        Ok(())
    }

    pub fn entry(&self, component: &str) -> Option<&LockEntry> {
        self.components.get(component)
    }

    /// Build the post-sync snapshot.
    ///
    /// Every component in `sources` (name, source tree digest) gets an entry
    /// and every destination a `synced` record stamped `now`. A record that
    /// was already synced at the same digest keeps its previous timestamp, so
    /// a sync that changes nothing produces an identical store.
    pub fn snapshot(
        &self,
        sources: &[(String, String)],
        destinations: &[String],
        now: DateTime<Utc>,
    ) -> Self {
        let mut components = BTreeMap::new();

        for (name, source_hash) in sources {
            let previous = self.entry(name);
            let mut entry = LockEntry::new(source_hash.clone());

            for destination in destinations {
                let record = previous
                    .and_then(|p| p.destination(destination))
                    .filter(|r| r.is_synced_at(source_hash))
                    .cloned()
                    .unwrap_or_else(|| DestinationRecord::synced(source_hash.clone(), now));
                entry.destinations.insert(destination.clone(), record);
            }

            components.insert(name.clone(), entry);
        }

        let mut lock = Self {
            components,
            global_hash: String::new(),
        };
        lock.global_hash = lock.compute_global_hash();
        lock
    }

    /// Digest over `name:source_hash` of every component, in name order.
    ///
    /// Empty for an empty store.
    pub fn compute_global_hash(&self) -> String {
        if self.components.is_empty() {
            return String::new();
        }
        let mut stream = String::new();
        for (name, entry) in &self.components {
            stream.push_str(name);
            stream.push(':');
            stream.push_str(&entry.source_hash);
            stream.push('\n');
        }
        checksum::hash_bytes(stream.as_bytes())
    }
}
