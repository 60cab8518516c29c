//! Reconciliation engine for agent-skills
//!
//! This crate distributes a catalog of component bundles from a project's
//! `components/` directory into one or more destination directories:
//!
//! - **Component discovery**: capability flags derived from directory layout
//! - **Configuration**: enabled components and destinations from `config.yaml`
//! - **Lock store**: content-addressed record of the last successful sync
//! - **SyncEngine**: classify every artifact per destination, then converge
//!
//! # Architecture
//!
//! ```text
//!          agent-skills CLI
//!                 |
//!            skills-core
//!                 |
//!             skills-fs
//! ```
//!
//! # Example
//!
//! ```no_run
//! use skills_core::{SyncEngine, SyncOptions};
//! use skills_fs::NormalizedPath;
//!
//! fn example() -> skills_core::Result<()> {
//!     let engine = SyncEngine::new(NormalizedPath::new("/path/to/project"));
//!     let report = engine.sync_with_options(SyncOptions { dry_run: true })?;
//!     println!("changes pending: {}", report.has_changes());
//!     Ok(())
//! }
//! ```

pub mod component;
pub mod config;
pub mod error;
pub mod layout;
pub mod lock;
pub mod sync;

pub use component::{Component, discover};
pub use config::Config;
pub use error::{Error, Result};
pub use layout::ProjectLayout;
pub use lock::{DestinationRecord, DestinationStatus, LockEntry, LockStore, PendingAction};
pub use sync::{
    ArtifactKind, ArtifactReport, ArtifactState, DestinationReport, StatusReport, SyncAction,
    SyncEngine, SyncOptions, SyncReport,
};
