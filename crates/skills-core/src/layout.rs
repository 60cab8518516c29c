//! Well-known paths inside a project root

use skills_fs::NormalizedPath;

/// Directory holding one subdirectory per component
pub const COMPONENTS_DIR: &str = "components";

/// Declarative configuration file
pub const CONFIG_FILE: &str = "config.yaml";

/// Lock store written after every successful sync
pub const LOCK_FILE: &str = "config.lock.yaml";

/// Paths of a project: the component catalog, its config and its lock store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    root: NormalizedPath,
}

impl ProjectLayout {
    pub fn new(root: NormalizedPath) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    pub fn components_dir(&self) -> NormalizedPath {
        self.root.join(COMPONENTS_DIR)
    }

    pub fn config_path(&self) -> NormalizedPath {
        self.root.join(CONFIG_FILE)
    }

    pub fn lock_path(&self) -> NormalizedPath {
        self.root.join(LOCK_FILE)
    }
}
