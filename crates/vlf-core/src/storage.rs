//! Disk I/O and file lifecycle for one fetched entry.
//!
//! The body streams into a `.part` temp file next to the destination; on
//! success the temp is renamed onto the final path (overwriting any previous
//! copy), on failure it is removed. The destination is therefore always
//! either the old file or the complete new one.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Temporary file suffix used before the final rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Sequential writer for one entry's temp file.
pub struct EntryWriter {
    file: File,
    temp_path: PathBuf,
}

impl EntryWriter {
    /// Create (or truncate) the temp file for `final_path`. The parent
    /// directory must already exist.
    pub fn create(final_path: &Path) -> Result<Self> {
        let temp_path = temp_path(final_path);
        let file = File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .with_context(|| format!("failed to create temp file: {}", temp_path.display()))?;
        Ok(EntryWriter { file, temp_path })
    }

    /// Append a chunk of the response body.
    pub fn write_all(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)
    }

    /// Size of the temp file as the filesystem reports it right now.
    pub fn len_on_disk(&self) -> io::Result<u64> {
        Ok(self.file.metadata()?.len())
    }

    /// Path to the temp file (e.g. for hashing before finalize).
    pub fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Flush to disk and atomically rename onto `final_path`, replacing any
    /// existing file. Consumes the writer and closes the file.
    pub fn finalize(self, final_path: &Path) -> Result<()> {
        self.file.sync_all().context("temp file sync failed")?;
        let temp_path = self.temp_path;
        drop(self.file);

        std::fs::rename(&temp_path, final_path).with_context(|| {
            format!(
                "failed to rename {} to {}",
                temp_path.display(),
                final_path.display()
            )
        })?;
        Ok(())
    }

    /// Remove the temp file, leaving the destination untouched.
    pub fn discard(self) {
        let temp_path = self.temp_path;
        drop(self.file);
        if let Err(err) = std::fs::remove_file(&temp_path) {
            tracing::warn!("could not remove {}: {}", temp_path.display(), err);
        }
    }
}
