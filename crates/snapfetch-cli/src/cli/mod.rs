//! CLI for the snapfetch snapshot mirror.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use snapfetch_core::config;
use std::path::PathBuf;

use commands::{run_checksum, run_snapshot, run_verify};

/// Top-level CLI for the snapfetch snapshot mirror.
#[derive(Debug, Parser)]
#[command(name = "snapfetch")]
#[command(about = "snapfetch: mirror one remote resource with a digest and dated archive", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the resource and publish the latest (and optionally dated) copy.
    Run {
        /// Direct HTTP/HTTPS URL to fetch.
        url: String,

        /// Directory to write outputs into (created if missing).
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Output filename inside the directory (default from config).
        #[arg(long)]
        name: Option<String>,

        /// Override the archive date stamp. Default: today, UTC.
        #[arg(long, value_name = "YYYY-MM-DD")]
        run_date: Option<String>,

        /// Also keep a dated copy under <out-dir>/archive/<stamp>/.
        #[arg(long)]
        keep_dated_copy: bool,

        /// Fetch timeout in seconds (default from config).
        #[arg(long, value_name = "SECS")]
        timeout_secs: Option<u64>,
    },

    /// Re-hash a published file and compare against its recorded digest.
    Verify {
        /// Directory the snapshot was published into.
        #[arg(long, value_name = "DIR")]
        out_dir: PathBuf,

        /// Filename of the published resource (default from config).
        #[arg(long)]
        name: Option<String>,
    },

    /// Compute SHA-256 of a local file.
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Run {
                url,
                out_dir,
                name,
                run_date,
                keep_dated_copy,
                timeout_secs,
            } => run_snapshot(&cfg, url, out_dir, name, run_date, keep_dated_copy, timeout_secs),
            CliCommand::Verify { out_dir, name } => run_verify(&cfg, &out_dir, name),
            CliCommand::Checksum { path } => run_checksum(&path),
        }
    }
}

#[cfg(test)]
mod tests;
