//! Atomic file writes, reads and copies

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::{Error, NormalizedPath, Result};

/// Permission bits applied to synced hook scripts.
#[cfg(unix)]
const EXECUTABLE_MODE: u32 = 0o755;

/// Write content atomically to a file.
///
/// Uses write-to-temp-then-rename so readers never observe a partial write.
/// Parent directories are created as needed.
pub fn write_atomic(path: &NormalizedPath, content: &[u8]) -> Result<()> {
    let native_path = path.to_native();

    if let Some(parent) = native_path.parent() {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    // Temp file lives next to the target so the rename stays on one filesystem
    let temp_name = format!(
        ".{}.{}.tmp",
        native_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default(),
        std::process::id()
    );
    let temp_path = native_path.with_file_name(&temp_name);

    let mut temp_file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&temp_path)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file
        .write_all(content)
        .map_err(|e| Error::io(&temp_path, e))?;

    temp_file.sync_all().map_err(|e| Error::io(&temp_path, e))?;
    drop(temp_file);

    fs::rename(&temp_path, &native_path).map_err(|e| Error::io(&native_path, e))?;

    Ok(())
}

/// Read text content from a file.
pub fn read_text(path: &NormalizedPath) -> Result<String> {
    let native_path = path.to_native();
    fs::read_to_string(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Read raw bytes from a file.
pub fn read_bytes(path: &NormalizedPath) -> Result<Vec<u8>> {
    let native_path = path.to_native();
    fs::read(&native_path).map_err(|e| Error::io(&native_path, e))
}

/// Copy `source` verbatim to `dest`, creating parent directories as needed.
///
/// When `executable` is set the destination receives mode `0o755` after the
/// write (no-op on non-Unix platforms).
pub fn copy_file(source: &Path, dest: &NormalizedPath, executable: bool) -> Result<()> {
    let content = fs::read(source).map_err(|e| Error::io(source, e))?;
    write_atomic(dest, &content)?;
    if executable {
        set_executable(dest)?;
    }
    tracing::debug!(source = %source.display(), dest = %dest, executable, "Copied file");
    Ok(())
}

/// Mark a file owner-executable.
#[cfg(unix)]
pub fn set_executable(path: &NormalizedPath) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let native_path = path.to_native();
    fs::set_permissions(&native_path, fs::Permissions::from_mode(EXECUTABLE_MODE))
        .map_err(|e| Error::io(&native_path, e))
}

/// Mark a file owner-executable.
#[cfg(not(unix))]
pub fn set_executable(_path: &NormalizedPath) -> Result<()> {
    Ok(())
}

/// Create a directory and all of its parents.
pub fn ensure_dir(path: &NormalizedPath) -> Result<()> {
    let native_path = path.to_native();
    fs::create_dir_all(&native_path).map_err(|e| Error::io(&native_path, e))
}
