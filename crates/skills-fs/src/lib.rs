//! Filesystem layer for agent-skills
//!
//! Provides content hashing, atomic I/O, path handling and format-agnostic
//! loading of the YAML/JSON data files the sync engine reads and writes.

pub mod checksum;
pub mod config;
pub mod error;
pub mod io;
pub mod path;

pub use checksum::{hash_file, hash_tree, list_files};
pub use config::ConfigStore;
pub use error::{Error, Result};
pub use path::{NormalizedPath, expand_destination};
