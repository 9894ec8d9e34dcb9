//! Library manifest: which files to fetch and where to put them.
//!
//! The built-in table mirrors the CDN list the web UI is served from; an
//! optional TOML manifest can replace it at runtime. Validation runs at load
//! time, before any network traffic: destination paths must be unique,
//! relative, and free of traversal components, and every URL must be an
//! absolute http(s) URL.

mod bundled;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// One file to fetch: destination relative to the libs root, source URL,
/// and an optional expected SHA-256 digest (lowercase hex).
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub dest: String,
    pub url: String,
    #[serde(default)]
    pub sha256: Option<String>,
}

/// Ordered, validated set of entries. Construction always validates;
/// a `Manifest` in hand is safe to run.
#[derive(Debug, Clone)]
pub struct Manifest {
    entries: Vec<Entry>,
}

/// On-disk manifest shape: a sequence of `[[entry]]` tables.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    entry: Vec<Entry>,
}

impl Manifest {
    /// The built-in library table.
    pub fn bundled() -> Self {
        let entries = bundled::BUNDLED
            .iter()
            .map(|(dest, url)| Entry {
                dest: (*dest).to_string(),
                url: (*url).to_string(),
                sha256: None,
            })
            .collect();
        // The table is a compile-time constant; a bad row is a bug, not a
        // runtime condition.
        Self::from_entries(entries).expect("bundled manifest must be valid")
    }

    /// Load a manifest from a TOML file, replacing the built-in table.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read manifest {}", path.display()))?;
        let file: ManifestFile = toml::from_str(&data)
            .with_context(|| format!("parse manifest {}", path.display()))?;
        Self::from_entries(file.entry)
            .with_context(|| format!("invalid manifest {}", path.display()))
    }

    /// Validate and wrap a list of entries.
    pub fn from_entries(entries: Vec<Entry>) -> Result<Self> {
        validate(&entries)?;
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate(entries: &[Entry]) -> Result<()> {
    if entries.is_empty() {
        anyhow::bail!("manifest has no entries");
    }

    let mut seen: HashSet<&str> = HashSet::new();
    for entry in entries {
        if !dest_is_clean(&entry.dest) {
            anyhow::bail!("bad destination path: {:?}", entry.dest);
        }
        if !seen.insert(entry.dest.as_str()) {
            anyhow::bail!("duplicate destination path: {}", entry.dest);
        }

        let url = url::Url::parse(&entry.url)
            .with_context(|| format!("bad URL for {}: {}", entry.dest, entry.url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("unsupported URL scheme for {}: {}", entry.dest, url.scheme());
        }

        if let Some(digest) = &entry.sha256 {
            if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
                anyhow::bail!("bad sha256 for {}: {}", entry.dest, digest);
            }
        }
    }
    Ok(())
}

/// True if `dest` is a safe relative path: non-empty components, no `.`/`..`,
/// no leading `/`, no backslash or control characters.
fn dest_is_clean(dest: &str) -> bool {
    if dest.is_empty() || dest.starts_with('/') || dest.ends_with('/') {
        return false;
    }
    if dest.chars().any(|c| c == '\\' || c == '\0' || c.is_control()) {
        return false;
    }
    dest.split('/')
        .all(|part| !part.is_empty() && part != "." && part != "..")
}
