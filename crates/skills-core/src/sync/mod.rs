//! Reconciliation of destinations with the component catalog
//!
//! This module provides:
//! - **check**: artifact kinds, states, actions and the status report
//! - **planner**: per-destination classification of every artifact
//! - **engine**: `status` and `sync` over all configured destinations
//! - **instruction_index**: the generated `CLAUDE.md`
//! - **settings**: the hook section merge into `settings.json`

mod check;
mod engine;
pub mod instruction_index;
mod planner;
pub mod settings;

pub use check::{
    ArtifactKind, ArtifactReport, ArtifactState, DestinationReport, StatusReport, SyncAction,
};
pub use engine::{SyncEngine, SyncOptions, SyncReport};
pub use planner::SKILLS_DIR;
