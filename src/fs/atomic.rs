//! Atomic writes for generated files.
//!
//! A generated file is either fully old or fully new: content goes to a
//! temporary sibling (`.{filename}.{pid}.tmp`), is synced to disk, then
//! renamed over the target. Rename is only atomic within one filesystem, which
//! holds because the temporary file lives in the target's directory.
//!
//! On a crash a temporary file may remain next to the target.

use crate::error::{Result, SyncError};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace (or create) `path` with `content`.
///
/// Missing parent directories are created.
///
/// # Example
///
/// ```no_run
/// use areasync::fs::atomic_write_file;
///
/// atomic_write_file("apps/web/src/routes.ts", "export const routes = [];\n")?;
/// # Ok::<(), areasync::error::SyncError>(())
/// ```
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            SyncError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        SyncError::IoError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    sync_parent_dir(path);
    Ok(())
}

/// Persist the directory entry of a freshly renamed file.
#[cfg(unix)]
fn sync_parent_dir(path: &Path) {
    if let Some(parent) = path.parent()
        && let Ok(dir) = File::open(parent)
    {
        let _ = dir.sync_all();
    }
}

#[cfg(not(unix))]
fn sync_parent_dir(_path: &Path) {}

/// Temporary sibling path for `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            SyncError::UserError(format!("invalid target path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.{}.tmp", filename, std::process::id())))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        SyncError::IoError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            SyncError::IoError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
