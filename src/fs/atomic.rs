//! Atomic file writes.
//!
//! Content is written to a uniquely named temporary file in the target's
//! directory, synced to disk, then renamed over the target. A failed write
//! leaves the previous file (or no file) in place, never a truncated one.
//!
//! Source and destination must be on the same filesystem for the rename to
//! be atomic, which holds because the temporary file is created next to the
//! target.

use crate::error::{CampaignError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Atomically write bytes to a file, creating parent directories as needed.
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &[u8]) -> Result<()> {
    let path = path.as_ref();

    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    if !parent.exists() {
        fs::create_dir_all(parent).map_err(|e| {
            CampaignError::IoError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let mut temp = NamedTempFile::new_in(parent).map_err(|e| {
        CampaignError::IoError(format!(
            "failed to create temporary file in '{}': {}",
            parent.display(),
            e
        ))
    })?;

    // The temp file is deleted on drop if any step below fails.
    temp.write_all(content)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| {
            CampaignError::IoError(format!(
                "failed to write '{}': {}",
                path.display(),
                e
            ))
        })?;

    temp.persist(path).map_err(|e| {
        CampaignError::IoError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e.error
        ))
    })?;

    #[cfg(unix)]
    if let Ok(dir) = fs::File::open(parent) {
        let _ = dir.sync_all();
    }

    Ok(())
}

/// Atomically write a string to a file.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    atomic_write(path, content.as_bytes())
}
