//! `vlf verify` – audit files already on disk against the manifest.

use anyhow::Result;
use std::path::PathBuf;
use vlf_core::checksum::{self, VerifyStatus};

use super::{load_manifest, resolve_dest};

pub fn run_verify(dest: Option<PathBuf>, manifest: Option<PathBuf>) -> Result<i32> {
    let manifest = load_manifest(manifest.as_ref())?;
    let root = resolve_dest(dest)?;

    let mut failed = 0usize;
    for entry in manifest.entries() {
        let status = checksum::verify_entry(&root, entry)?;
        let label = match &status {
            VerifyStatus::Ok => "ok",
            VerifyStatus::Unhashed => "present (no digest)",
            VerifyStatus::Missing => {
                failed += 1;
                "missing"
            }
            VerifyStatus::Empty => {
                failed += 1;
                "empty"
            }
            VerifyStatus::Mismatch { .. } => {
                failed += 1;
                "checksum mismatch"
            }
        };
        println!("{:<45}  {}", entry.dest, label);
        if let VerifyStatus::Mismatch { expected, actual } = &status {
            println!("    expected {expected}");
            println!("    actual   {actual}");
        }
    }

    println!();
    if failed == 0 {
        println!("All {} file(s) verified.", manifest.len());
        Ok(0)
    } else {
        println!("{} of {} file(s) failed verification.", failed, manifest.len());
        Ok(1)
    }
}
