//! `snapfetch run <url>` – fetch, digest, publish, optionally archive.

use anyhow::Result;
use snapfetch_core::clock::SystemClock;
use snapfetch_core::config::SnapfetchConfig;
use snapfetch_core::snapshot::{self, SnapshotJob};
use std::path::PathBuf;
use std::time::Duration;

pub fn run_snapshot(
    cfg: &SnapfetchConfig,
    url: String,
    out_dir: PathBuf,
    name: Option<String>,
    run_date: Option<String>,
    keep_dated_copy: bool,
    timeout_secs: Option<u64>,
) -> Result<()> {
    let job = SnapshotJob {
        url,
        out_dir,
        name: name.unwrap_or_else(|| cfg.default_filename.clone()),
        run_date,
        keep_dated_copy,
        timeout: Duration::from_secs(timeout_secs.unwrap_or(cfg.timeout_secs)),
        user_agent: cfg.user_agent.clone(),
    };

    let report = snapshot::run(&job, &SystemClock)?;
    println!("Downloaded: {}", report.url);
    println!("Saved:      {}", report.latest_path.display());
    println!("SHA256:     {}", report.digest);
    Ok(())
}
