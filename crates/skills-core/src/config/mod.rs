//! Sync configuration
//!
//! `config.yaml` declares which catalog components are enabled and which
//! destination directories receive them:
//!
//! ```yaml
//! components:
//!   - git-safety
//!   - notifications
//! destinations:
//!   - ~/.claude
//! ```
//!
//! The file is read once per run and is read-only to the engine.

mod manifest;

pub use manifest::Config;
