//! Shared test utilities for the agent-skills workspace.
//!
//! This crate provides standardised fixtures so each crate's test suite does
//! not rebuild catalogs by hand. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`catalog`]: [`TestCatalog`] builder: project root, components, config
//! - [`tree`]: whole-directory snapshots for before/after comparisons

pub mod catalog;
pub mod tree;

pub use catalog::TestCatalog;
pub use tree::snapshot_tree;
