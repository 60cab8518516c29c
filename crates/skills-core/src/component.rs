//! Component discovery
//!
//! A component is an immediate subdirectory of the catalog. What it can
//! provide is derived from which well-known entries it contains; each
//! capability is an independent flag that the matching artifact handler
//! checks on its own.

use std::fs;

use serde::Serialize;
use skills_fs::NormalizedPath;

use crate::{Error, Result};

/// Instruction document, a file at the component root
pub const INSTRUCTION_DOC: &str = "SKILL.md";
/// Directory of hook scripts
pub const HOOKS_DIR: &str = "hooks";
/// Directory of rule documents
pub const RULES_DIR: &str = "rules";
/// Directory of templates
pub const TEMPLATES_DIR: &str = "templates";

/// File name suffix of a hook script
pub const HOOK_SUFFIX: &str = ".sh";
/// File name suffix of a rule document
pub const RULE_SUFFIX: &str = ".md";
/// Rule documents ending in this suffix belong to the destination and are
/// never read from the source or written by a sync.
pub const LOCAL_OVERRIDE_SUFFIX: &str = ".local.md";

/// A named bundle under the catalog root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Component {
    /// Directory name, unique within the catalog
    pub name: String,
    /// Absolute path of the component directory
    pub root: NormalizedPath,
    pub has_instruction_doc: bool,
    pub has_hooks: bool,
    pub has_rules: bool,
    pub has_templates: bool,
}

impl Component {
    /// Probe `root` for the well-known entries.
    pub fn from_dir(name: impl Into<String>, root: NormalizedPath) -> Self {
        Self {
            name: name.into(),
            has_instruction_doc: root.join(INSTRUCTION_DOC).is_file(),
            has_hooks: root.join(HOOKS_DIR).is_dir(),
            has_rules: root.join(RULES_DIR).is_dir(),
            has_templates: root.join(TEMPLATES_DIR).is_dir(),
            root,
        }
    }

    pub fn instruction_doc(&self) -> NormalizedPath {
        self.root.join(INSTRUCTION_DOC)
    }

    pub fn hooks_dir(&self) -> NormalizedPath {
        self.root.join(HOOKS_DIR)
    }

    pub fn rules_dir(&self) -> NormalizedPath {
        self.root.join(RULES_DIR)
    }

    /// File names of the hook scripts, byte-wise sorted.
    ///
    /// Empty when the component has no hooks directory.
    pub fn hook_scripts(&self) -> Result<Vec<String>> {
        if !self.has_hooks {
            return Ok(Vec::new());
        }
        list_files(&self.hooks_dir(), |name| name.ends_with(HOOK_SUFFIX))
    }

    /// File names of the syncable rule documents, byte-wise sorted.
    ///
    /// Local overrides are excluded.
    pub fn rule_documents(&self) -> Result<Vec<String>> {
        if !self.has_rules {
            return Ok(Vec::new());
        }
        list_files(&self.rules_dir(), is_rule_document)
    }
}

/// Whether `file_name` is a rule document the engine manages.
pub fn is_rule_document(file_name: &str) -> bool {
    file_name.ends_with(RULE_SUFFIX) && !is_local_override(file_name)
}

/// Whether `file_name` is destination-local content.
pub fn is_local_override(file_name: &str) -> bool {
    file_name.ends_with(LOCAL_OVERRIDE_SUFFIX)
}

/// Scan the catalog's immediate subdirectories.
///
/// Non-directory entries are ignored. An absent catalog yields an empty list.
/// The result is sorted by name.
pub fn discover(components_dir: &NormalizedPath) -> Result<Vec<Component>> {
    let native = components_dir.to_native();
    if !native.is_dir() {
        tracing::debug!(path = %components_dir, "No component catalog");
        return Ok(Vec::new());
    }

    let entries = fs::read_dir(&native).map_err(|source| Error::Catalog {
        path: native.clone(),
        source,
    })?;

    let mut components = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Catalog {
            path: native.clone(),
            source,
        })?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        components.push(Component::from_dir(name, NormalizedPath::new(&path)));
    }

    components.sort_by(|a, b| a.name.as_bytes().cmp(b.name.as_bytes()));
    tracing::debug!(count = components.len(), "Discovered components");
    Ok(components)
}

fn list_files(dir: &NormalizedPath, keep: impl Fn(&str) -> bool) -> Result<Vec<String>> {
    let native = dir.to_native();
    let entries = fs::read_dir(&native).map_err(|source| Error::Catalog {
        path: native.clone(),
        source,
    })?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| Error::Catalog {
            path: native.clone(),
            source,
        })?;
        if !entry.path().is_file() {
            continue;
        }
        let Some(name) = utf8_name(&entry) else {
            continue;
        };
        if keep(&name) {
            names.push(name);
        }
    }

    names.sort_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    Ok(names)
}

/// Entry name as UTF-8, or `None` (with a warning) when it cannot be
/// represented. Such entries are skipped rather than renamed.
fn utf8_name(entry: &fs::DirEntry) -> Option<String> {
    match entry.file_name().into_string() {
        Ok(name) => Some(name),
        Err(raw) => {
            tracing::warn!(
                path = %entry.path().display(),
                name = ?raw,
                "Skipping entry with non-UTF-8 name"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_overrides_are_not_rule_documents() {
        assert!(is_rule_document("style.md"));
        assert!(!is_rule_document("style.local.md"));
        assert!(!is_rule_document("notes.txt"));
        assert!(is_local_override("x.local.md"));
    }

    #[test]
    fn flags_follow_entry_types() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("git-safety");
        fs::create_dir_all(root.join("hooks")).unwrap();
        // A file named like a directory capability does not count
        fs::write(root.join("rules"), "not a dir").unwrap();
        fs::create_dir_all(root.join("SKILL.md")).unwrap();

        let component = Component::from_dir("git-safety", NormalizedPath::new(&root));
        assert!(component.has_hooks);
        assert!(!component.has_rules);
        assert!(!component.has_instruction_doc);
        assert!(!component.has_templates);
    }

    #[test]
    fn missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let found = discover(&NormalizedPath::new(dir.path().join("components"))).unwrap();
        assert!(found.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("notify");
        let hooks = root.join("hooks");
        fs::create_dir_all(&hooks).unwrap();
        fs::write(hooks.join("notify-stop.sh"), "#!/bin/bash\n").unwrap();
        // Some filesystems refuse non-UTF-8 names outright
        if fs::write(hooks.join(OsStr::from_bytes(b"bad\xff.sh")), "x").is_err() {
            return;
        }

        let component = Component::from_dir("notify", NormalizedPath::new(&root));
        assert_eq!(component.hook_scripts().unwrap(), vec!["notify-stop.sh"]);
    }
}
