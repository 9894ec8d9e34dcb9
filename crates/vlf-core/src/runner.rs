//! Sequential fetch run over a manifest.
//!
//! One blocking transfer at a time, in manifest order. A failed entry is
//! recorded and the run moves on; nothing short of process termination stops
//! the pass. The aggregated report carries the exit status.

use crate::checksum;
use crate::config::VlfConfig;
use crate::fetch;
use crate::manifest::{Entry, Manifest};
use crate::storage::EntryWriter;
use std::fs;
use std::path::Path;

/// Outcome of one entry's attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    Fetched { bytes: u64 },
    Failed { reason: String },
}

/// One row of the run report, in manifest order.
#[derive(Debug, Clone)]
pub struct EntryReport {
    pub dest: String,
    pub outcome: EntryOutcome,
}

/// Aggregated result of one pass over the manifest.
#[derive(Debug, Default)]
pub struct RunReport {
    pub entries: Vec<EntryReport>,
}

impl RunReport {
    pub fn attempted(&self) -> usize {
        self.entries.len()
    }

    pub fn succeeded(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.outcome, EntryOutcome::Fetched { .. }))
            .count()
    }

    pub fn failed(&self) -> usize {
        self.attempted() - self.succeeded()
    }

    /// Process exit status: 0 only when every entry succeeded.
    pub fn exit_code(&self) -> i32 {
        if self.failed() == 0 {
            0
        } else {
            1
        }
    }
}

/// Fetch every manifest entry into `root_dir`, in order.
///
/// Every entry is attempted exactly once; per-entry failures are downgraded
/// to recorded reasons and never abort the pass. Progress lines and the
/// final summary go to stdout.
pub fn run(manifest: &Manifest, root_dir: &Path, cfg: &VlfConfig, verify: bool) -> RunReport {
    let total = manifest.len();
    let mut report = RunReport::default();

    for (index, entry) in manifest.entries().iter().enumerate() {
        let outcome = match fetch_entry(entry, root_dir, cfg, verify) {
            Ok(bytes) => {
                println!("[{:>2}/{}] {} ... ok ({} bytes)", index + 1, total, entry.dest, bytes);
                tracing::info!(dest = %entry.dest, bytes, "fetched");
                EntryOutcome::Fetched { bytes }
            }
            Err(reason) => {
                println!("[{:>2}/{}] {} ... failed: {}", index + 1, total, entry.dest, reason);
                tracing::warn!(dest = %entry.dest, %reason, "fetch failed");
                EntryOutcome::Failed { reason }
            }
        };
        report.entries.push(EntryReport {
            dest: entry.dest.clone(),
            outcome,
        });
    }

    println!();
    println!(
        "Done: {} succeeded, {} failed ({} attempted)",
        report.succeeded(),
        report.failed(),
        report.attempted()
    );
    report
}

/// Attempt one entry. Any error becomes the recorded failure reason; the
/// destination is left absent or unchanged on failure.
fn fetch_entry(entry: &Entry, root_dir: &Path, cfg: &VlfConfig, verify: bool) -> Result<u64, String> {
    let dest_path = root_dir.join(&entry.dest);
    if let Some(parent) = dest_path.parent() {
        fs::create_dir_all(parent).map_err(|err| format!("create {}: {}", parent.display(), err))?;
    }

    let mut writer = EntryWriter::create(&dest_path).map_err(|err| format!("{:#}", err))?;

    if let Err(err) = fetch::fetch_to_writer(&entry.url, &mut writer, cfg) {
        writer.discard();
        return Err(err.to_string());
    }

    // Size as the filesystem reports it, not as the transfer counted it.
    let bytes = match writer.len_on_disk() {
        Ok(n) => n,
        Err(err) => {
            writer.discard();
            return Err(format!("stat temp file: {}", err));
        }
    };
    if bytes == 0 {
        writer.discard();
        return Err("empty file".to_string());
    }

    if verify {
        if let Some(expected) = &entry.sha256 {
            match checksum::sha256_file(writer.temp_path()) {
                Ok(actual) if actual.eq_ignore_ascii_case(expected) => {}
                Ok(actual) => {
                    writer.discard();
                    return Err(format!("checksum mismatch (expected {expected}, got {actual})"));
                }
                Err(err) => {
                    writer.discard();
                    return Err(format!("checksum: {:#}", err));
                }
            }
        }
    }

    writer.finalize(&dest_path).map_err(|err| format!("{:#}", err))?;
    Ok(bytes)
}
