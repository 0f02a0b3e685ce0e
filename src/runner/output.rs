//! Output directory reset before a runner invocation.

use crate::error::{ComposerError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;

/// Recursively remove `path` if it exists.
///
/// An absent path is a no-op. Any failure, including the path surviving the
/// removal, is reported as [`ComposerError::OutputCleanupFailed`].
pub fn reset_output_directory(path: &Path) -> Result<()> {
    let fail = |reason: String| ComposerError::OutputCleanupFailed {
        path: path.to_path_buf(),
        reason,
    };

    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(fail(e.to_string())),
    };

    info!(path = %path.display(), "removing existing outputs");
    let removed = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    removed.map_err(|e| fail(e.to_string()))?;

    match fs::symlink_metadata(path) {
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Ok(_) => Err(fail("path still exists after removal".to_string())),
        Err(e) => Err(fail(e.to_string())),
    }
}
