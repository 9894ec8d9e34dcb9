//! Subcommand implementations.

mod fetch;
mod list;
mod verify;

pub use fetch::run_fetch;
pub use list::run_list;
pub use verify::run_verify;

use anyhow::Result;
use std::path::PathBuf;
use vlf_core::manifest::Manifest;

/// Built-in table unless a manifest file was given.
fn load_manifest(path: Option<&PathBuf>) -> Result<Manifest> {
    match path {
        Some(p) => Manifest::load_from_path(p),
        None => Ok(Manifest::bundled()),
    }
}

/// Destination root: `--dest`, else `./public/libs`.
fn resolve_dest(dest: Option<PathBuf>) -> Result<PathBuf> {
    match dest {
        Some(d) => Ok(d),
        None => Ok(std::env::current_dir()?.join(super::DEFAULT_DEST)),
    }
}
