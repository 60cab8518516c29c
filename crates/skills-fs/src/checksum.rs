//! Content hashing
//!
//! Digests are SHA-256, hex encoded and truncated to [`DIGEST_LEN`]
//! characters. They are an equality oracle for "is this artifact up to date",
//! not an integrity or security boundary.
//!
//! A path that does not exist hashes to the empty string, which never equals a
//! real digest. Callers that need to tell "missing" from "diverged" must check
//! existence separately.

use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::{Error, Result};

/// Number of hex characters kept from the full SHA-256 digest.
pub const DIGEST_LEN: usize = 12;

/// Digest of a byte slice.
pub fn hash_bytes(content: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content);
    truncate(hasher)
}

/// Digest of a single file's raw bytes.
///
/// Returns `""` when `path` is not a file.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
pub fn hash_file(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Ok(String::new());
    }
    let content = fs::read(path).map_err(|e| Error::io(path, e))?;
    Ok(hash_bytes(&content))
}

/// Digest of every regular file below `root`.
///
/// Files are ordered byte-wise by their root-relative path. For each file the
/// accumulator receives `/<relative path>` followed by the file's bytes, so the
/// result depends only on the set of relative paths and their contents.
///
/// Returns `""` when `root` does not exist.
///
/// # Errors
///
/// Returns an error if a directory cannot be listed or a file cannot be read.
pub fn hash_tree(root: &Path) -> Result<String> {
    if !root.exists() {
        return Ok(String::new());
    }

    let mut hasher = Sha256::new();
    for relative in list_files(root)? {
        let path = root.join(&relative);
        let content = fs::read(&path).map_err(|e| Error::io(&path, e))?;
        hasher.update(b"/");
        hasher.update(relative.as_bytes());
        hasher.update(&content);
    }
    Ok(truncate(hasher))
}

/// List every regular file below `root` as a `/`-separated relative path.
///
/// The walk uses an explicit stack, so depth is bounded by heap rather than
/// call stack. Symlinks resolving to files are included; symlinked
/// directories are not followed. The result is sorted byte-wise.
///
/// # Errors
///
/// Returns an error if a directory entry cannot be read.
pub fn list_files(root: &Path) -> Result<Vec<String>> {
    let mut files = Vec::new();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| Error::io(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| Error::io(&dir, e))?;
            let path = entry.path();
            let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() || (file_type.is_symlink() && path.is_file()) {
                files.push(relative_path(root, &path));
            }
        }
    }

    files.sort_unstable_by(|a, b| a.as_bytes().cmp(b.as_bytes()));
    Ok(files)
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn truncate(hasher: Sha256) -> String {
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(DIGEST_LEN);
    hex
}
