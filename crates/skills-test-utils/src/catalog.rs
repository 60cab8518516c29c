//! [`TestCatalog`] builder for sync engine test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root with a `components/` catalog, a `config.yaml`
/// and room for destination directories, all inside one temp dir.
///
/// # Example
///
/// ```rust,no_run
/// use skills_test_utils::TestCatalog;
///
/// let catalog = TestCatalog::new();
/// catalog.add_file("git-safety", "SKILL.md", "# Git safety\n");
/// catalog.add_file("git-safety", "hooks/block-main-commit.sh", "#!/bin/sh\n");
/// let dest = catalog.destination("claude");
/// catalog.write_config(&["git-safety"], &[dest.to_str().unwrap()]);
/// ```
pub struct TestCatalog {
    temp_dir: TempDir,
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalog {
    /// Create an empty project root with a `project/` directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("project")).unwrap();
        Self { temp_dir }
    }

    /// The project root (parent of `components/` and `config.yaml`).
    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join("project")
    }

    /// Path of a component directory in the catalog.
    pub fn component_dir(&self, component: &str) -> PathBuf {
        self.root().join("components").join(component)
    }

    /// Write `content` to `relative` inside `component`, creating directories.
    pub fn add_file(&self, component: &str, relative: &str, content: &str) -> PathBuf {
        let path = self.component_dir(component).join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Create an empty component directory.
    pub fn add_empty_component(&self, component: &str) -> PathBuf {
        let dir = self.component_dir(component);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// A destination path next to (not inside) the project root.
    ///
    /// The directory is not created.
    pub fn destination(&self, name: &str) -> PathBuf {
        self.temp_dir.path().join("destinations").join(name)
    }

    /// Write `config.yaml` listing `components` and `destinations`.
    pub fn write_config(&self, components: &[&str], destinations: &[&str]) {
        let mut config = String::from("components:\n");
        for component in components {
            config.push_str(&format!("  - {component}\n"));
        }
        config.push_str("destinations:\n");
        for destination in destinations {
            config.push_str(&format!("  - \"{destination}\"\n"));
        }
        fs::write(self.root().join("config.yaml"), config).unwrap();
    }

    /// Path of the lock file.
    pub fn lock_path(&self) -> PathBuf {
        self.root().join("config.lock.yaml")
    }

    /// Read a file below `base`, panicking with its path on failure.
    pub fn read(base: &Path, relative: &str) -> String {
        let path = base.join(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|_| panic!("Could not read file: {}", path.display()))
    }
}
