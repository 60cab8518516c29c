//! Normalized path handling and destination expansion

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A path normalized to use forward slashes internally.
///
/// Catalog entries, lock keys and report labels are all compared as strings,
/// so every path crossing a crate boundary is carried in this form and only
/// converted to a native `PathBuf` at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    pub fn extension(&self) -> Option<&str> {
        self.file_name().and_then(|name| {
            let idx = name.rfind('.')?;
            if idx == 0 {
                None
            } else {
                Some(&name[idx + 1..])
            }
        })
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

/// Resolve a configured destination string to a concrete directory.
///
/// - `~` and `~/...` are expanded against the user's home directory.
/// - Absolute paths are used as-is.
/// - Anything else is resolved relative to `base` (the project root).
///
/// # Errors
///
/// Returns [`Error::HomeDirNotFound`] when a `~` destination is configured and
/// no home directory can be determined.
pub fn expand_destination(raw: &str, base: &NormalizedPath) -> Result<NormalizedPath> {
    if raw == "~" {
        return home().map(NormalizedPath::new);
    }
    if let Some(rest) = raw.strip_prefix("~/") {
        return home().map(|h| NormalizedPath::new(h).join(rest));
    }
    if Path::new(raw).is_absolute() {
        return Ok(NormalizedPath::new(raw));
    }
    Ok(base.join(raw.trim_start_matches("./")))
}

fn home() -> Result<PathBuf> {
    dirs::home_dir().ok_or(Error::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_inserts_single_separator() {
        let base = NormalizedPath::new("/tmp/project/");
        assert_eq!(base.join("components").as_str(), "/tmp/project/components");
        let base = NormalizedPath::new("/tmp/project");
        assert_eq!(base.join("components").as_str(), "/tmp/project/components");
    }

    #[test]
    fn file_name_and_extension() {
        let path = NormalizedPath::new("/dest/hooks/notify-stop.sh");
        assert_eq!(path.file_name(), Some("notify-stop.sh"));
        assert_eq!(path.extension(), Some("sh"));
        assert_eq!(NormalizedPath::new("/dest/.hidden").extension(), None);
    }

    #[test]
    fn absolute_destination_is_kept() {
        let base = NormalizedPath::new("/project");
        let resolved = expand_destination("/opt/agent", &base).unwrap();
        assert_eq!(resolved.as_str(), "/opt/agent");
    }

    #[test]
    fn relative_destination_resolves_against_base() {
        let base = NormalizedPath::new("/project");
        let resolved = expand_destination("./out/agent", &base).unwrap();
        assert_eq!(resolved.as_str(), "/project/out/agent");
    }

    #[test]
    fn tilde_destination_expands_home() {
        let Some(home) = dirs::home_dir() else {
            return;
        };
        let base = NormalizedPath::new("/project");
        let resolved = expand_destination("~/.claude", &base).unwrap();
        assert_eq!(resolved, NormalizedPath::new(home).join(".claude"));
    }
}
