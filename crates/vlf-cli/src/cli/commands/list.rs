//! `vlf list` – print the manifest table.

use anyhow::Result;
use std::path::PathBuf;

use super::load_manifest;

pub fn run_list(manifest: Option<PathBuf>) -> Result<i32> {
    let manifest = load_manifest(manifest.as_ref())?;
    for (index, entry) in manifest.entries().iter().enumerate() {
        println!("{:>3}  {:<45}  {}", index + 1, entry.dest, entry.url);
    }
    Ok(0)
}
