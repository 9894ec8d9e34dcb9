//! `vlf fetch` – download every manifest entry.

use anyhow::Result;
use std::path::PathBuf;
use vlf_core::config::VlfConfig;
use vlf_core::runner;

use super::{load_manifest, resolve_dest};

pub fn run_fetch(
    cfg: &VlfConfig,
    dest: Option<PathBuf>,
    manifest: Option<PathBuf>,
    verify: bool,
) -> Result<i32> {
    let manifest = load_manifest(manifest.as_ref())?;
    let root = resolve_dest(dest)?;

    println!("Destination: {}", root.display());
    println!("Fetching {} file(s)", manifest.len());
    println!();

    let report = runner::run(&manifest, &root, cfg, verify);
    Ok(report.exit_code())
}
