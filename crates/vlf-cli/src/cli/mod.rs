//! CLI for the VLF vendor library fetcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::{run_fetch, run_list, run_verify};

/// Default destination root, relative to the working directory.
pub const DEFAULT_DEST: &str = "public/libs";

/// Top-level CLI for the VLF vendor library fetcher.
#[derive(Debug, Parser)]
#[command(name = "vlf")]
#[command(about = "VLF: vendor library fetcher for offline web-app deployments", long_about = None)]
pub struct Cli {
    /// Log at debug verbosity.
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every manifest entry (the default when no subcommand is given).
    Fetch {
        /// Destination root directory.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// TOML manifest file replacing the built-in table.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,

        /// Check SHA-256 digests (for entries that carry one) before keeping files.
        #[arg(long)]
        verify: bool,
    },

    /// Print the manifest table without downloading.
    List {
        /// TOML manifest file replacing the built-in table.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },

    /// Check files already on disk against the manifest.
    Verify {
        /// Destination root directory.
        #[arg(long, value_name = "DIR")]
        dest: Option<PathBuf>,

        /// TOML manifest file replacing the built-in table.
        #[arg(long, value_name = "FILE")]
        manifest: Option<PathBuf>,
    },
}

impl Cli {
    /// Dispatch the parsed command. Returns the process exit code.
    pub fn run(self) -> Result<i32> {
        let cfg = vlf_core::config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        // Bare `vlf` performs the fetch.
        let command = self.command.unwrap_or(CliCommand::Fetch {
            dest: None,
            manifest: None,
            verify: false,
        });

        match command {
            CliCommand::Fetch {
                dest,
                manifest,
                verify,
            } => run_fetch(&cfg, dest, manifest, verify),
            CliCommand::List { manifest } => run_list(manifest),
            CliCommand::Verify { dest, manifest } => run_verify(dest, manifest),
        }
    }
}

#[cfg(test)]
mod tests;
