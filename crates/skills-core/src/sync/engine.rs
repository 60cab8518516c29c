//! SyncEngine implementation
//!
//! The SyncEngine reconciles every configured destination with the component
//! catalog. Destinations are processed in configuration order; within a
//! destination, artifacts are processed in the order the planner returns them.
//! The lock store is written once, after all destinations succeeded.

use chrono::Utc;
use serde::Serialize;
use skills_fs::{NormalizedPath, expand_destination, hash_tree, io};

use super::check::{DestinationReport, StatusReport};
use super::planner::plan_destination;
use crate::component::{Component, discover};
use crate::config::Config;
use crate::layout::ProjectLayout;
use crate::lock::LockStore;
use crate::Result;

/// Options for sync operations
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOptions {
    /// Classify and report without touching destinations or the lock store
    pub dry_run: bool,
}

/// Report from a sync operation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SyncReport {
    pub dry_run: bool,
    /// Configured component names with no matching catalog entry
    pub missing_components: Vec<String>,
    /// Per-destination actions, taken or (in dry-run) proposed
    pub destinations: Vec<DestinationReport>,
    /// Whether the lock store was rewritten
    pub lock_written: bool,
}

impl SyncReport {
    /// Whether any artifact needed an action
    pub fn has_changes(&self) -> bool {
        self.destinations.iter().any(|d| d.changes().next().is_some())
    }
}

/// Engine for reconciling destinations with the component catalog
///
/// The engine holds no cached state: the catalog, configuration and lock
/// store are re-read from disk by every operation.
#[derive(Debug, Clone)]
pub struct SyncEngine {
    layout: ProjectLayout,
}

impl SyncEngine {
    /// Create an engine for the project rooted at `root`
    pub fn new(root: NormalizedPath) -> Self {
        Self {
            layout: ProjectLayout::new(root),
        }
    }

    /// Scan the component catalog
    pub fn components(&self) -> Result<Vec<Component>> {
        discover(&self.layout.components_dir())
    }

    /// Load `config.yaml`, empty if absent
    pub fn config(&self) -> Result<Config> {
        Config::load(&self.layout.config_path())
    }

    /// Load the lock store, empty if absent
    pub fn load_lock(&self) -> Result<LockStore> {
        LockStore::load(&self.layout.lock_path())
    }

    /// Classify every artifact of every destination without mutating anything.
    ///
    /// A destination directory that does not exist is reported with
    /// `exists == false` and no artifacts.
    pub fn status(&self) -> Result<StatusReport> {
        let config = self.config()?;
        let catalog = self.components()?;
        let (enabled, missing_components) = resolve(&config, &catalog);

        let mut report = StatusReport {
            missing_components,
            destinations: Vec::new(),
        };
        if config.components().is_empty() || config.destinations().is_empty() {
            return Ok(report);
        }

        for destination in config.destinations() {
            let path = expand_destination(destination, self.layout.root())?;
            if !path.is_dir() {
                tracing::debug!(destination = %destination, "Destination not deployed");
                report.destinations.push(DestinationReport {
                    destination: destination.clone(),
                    path,
                    exists: false,
                    artifacts: Vec::new(),
                });
                continue;
            }

            let artifacts = plan_destination(&enabled, &path)?
                .into_iter()
                .map(|p| p.report)
                .collect();
            report.destinations.push(DestinationReport {
                destination: destination.clone(),
                path,
                exists: true,
                artifacts,
            });
        }

        Ok(report)
    }

    /// Synchronize all destinations, applying changes
    pub fn sync(&self) -> Result<SyncReport> {
        self.sync_with_options(SyncOptions::default())
    }

    /// Synchronize all destinations with options
    ///
    /// When `options.dry_run` is true, every artifact is classified and the
    /// proposed action reported, but no directory, file or lock is written.
    ///
    /// # Errors
    ///
    /// A failed write aborts the run. Destinations processed before the
    /// failure keep their changes; the lock store is left as it was.
    pub fn sync_with_options(&self, options: SyncOptions) -> Result<SyncReport> {
        let config = self.config()?;
        let previous_lock = self.load_lock()?;
        let catalog = self.components()?;
        let (enabled, missing_components) = resolve(&config, &catalog);

        let mut report = SyncReport {
            dry_run: options.dry_run,
            missing_components,
            destinations: Vec::new(),
            lock_written: false,
        };
        if config.components().is_empty() || config.destinations().is_empty() {
            tracing::debug!("Nothing configured, skipping sync");
            return Ok(report);
        }

        for destination in config.destinations() {
            let path = expand_destination(destination, self.layout.root())?;
            let exists = path.is_dir();
            if !options.dry_run {
                io::ensure_dir(&path)?;
            }

            let mut artifacts = Vec::new();
            for planned in plan_destination(&enabled, &path)? {
                if planned.report.action.is_change() {
                    if options.dry_run {
                        tracing::debug!(
                            destination = %destination,
                            action = ?planned.report.action,
                            "[dry-run] Would apply {}",
                            planned.report.label
                        );
                    } else {
                        planned.apply()?;
                    }
                }
                artifacts.push(planned.report);
            }

            report.destinations.push(DestinationReport {
                destination: destination.clone(),
                path,
                exists,
                artifacts,
            });
        }

        if !options.dry_run {
            let mut sources = Vec::with_capacity(enabled.len());
            for component in &enabled {
                sources.push((component.name.clone(), hash_tree(&component.root.to_native())?));
            }
            let lock = previous_lock.snapshot(&sources, config.destinations(), Utc::now());
            lock.save(&self.layout.lock_path())?;
            report.lock_written = true;
        }

        Ok(report)
    }
}

/// Split configured names into catalog matches (in configured order) and
/// names with no matching component.
fn resolve<'a>(config: &Config, catalog: &'a [Component]) -> (Vec<&'a Component>, Vec<String>) {
    let mut enabled = Vec::new();
    let mut missing = Vec::new();

    for name in config.components() {
        match catalog.iter().find(|c| &c.name == name) {
            Some(component) => enabled.push(component),
            None => {
                tracing::warn!(component = %name, "Component not found in components/ directory");
                missing.push(name.clone());
            }
        }
    }

    (enabled, missing)
}
