//! SHA-256 verification of fetched files.
//!
//! Digests are checked on demand (after a transfer, or over files already on
//! disk), never inline with the body stream.

use crate::manifest::Entry;
use anyhow::{Context, Result};
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io;
use std::path::Path;

/// Compute SHA-256 of a file and return the digest as lowercase hex.
pub fn sha256_file(path: &Path) -> Result<String> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut hasher = Sha256::new();
    io::copy(&mut f, &mut hasher).with_context(|| format!("read {}", path.display()))?;
    Ok(hex::encode(hasher.finalize()))
}

/// Result of checking one entry's file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerifyStatus {
    /// File present, non-empty, digest matches.
    Ok,
    /// File present and non-empty; the entry carries no expected digest.
    Unhashed,
    /// No file at the destination path.
    Missing,
    /// File exists but is zero bytes.
    Empty,
    /// Digest differs from the expected value.
    Mismatch { expected: String, actual: String },
}

/// Check the file for `entry` under `root`: existence, non-zero size, and
/// the expected digest when the entry carries one.
pub fn verify_entry(root: &Path, entry: &Entry) -> Result<VerifyStatus> {
    let path = root.join(&entry.dest);
    let meta = match std::fs::metadata(&path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(VerifyStatus::Missing),
        Err(err) => return Err(err).with_context(|| format!("stat {}", path.display())),
    };
    if meta.len() == 0 {
        return Ok(VerifyStatus::Empty);
    }

    let expected = match &entry.sha256 {
        Some(digest) => digest.to_ascii_lowercase(),
        None => return Ok(VerifyStatus::Unhashed),
    };
    let actual = sha256_file(&path)?;
    if actual == expected {
        Ok(VerifyStatus::Ok)
    } else {
        Ok(VerifyStatus::Mismatch { expected, actual })
    }
}
