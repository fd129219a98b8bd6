//! The fetch → digest → publish → archive pipeline.
//!
//! One invocation handles exactly one resource, strictly in sequence. The
//! fetch is the only stage that can block for long and is bounded by the
//! job's timeout. Any failure aborts the rest of the run; there is no
//! rollback of artifacts already published when a later stage fails.

use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

use crate::checksum;
use crate::clock::{self, Clock};
use crate::fetch::{self, FetchOptions};
use crate::publish;

/// One snapshot run: where to fetch from and where the copies go.
#[derive(Debug, Clone)]
pub struct SnapshotJob {
    /// Source URL of the mirrored resource.
    pub url: String,
    /// Directory receiving the latest copy (created if missing).
    pub out_dir: PathBuf,
    /// Stored filename for the resource.
    pub name: String,
    /// Explicit `YYYY-MM-DD` stamp; `None` means today's UTC date.
    pub run_date: Option<String>,
    /// Also keep a dated copy under `archive/<stamp>/`.
    pub keep_dated_copy: bool,
    /// Hard bound on the fetch.
    pub timeout: Duration,
    /// Client identifier sent with the fetch.
    pub user_agent: String,
}

/// What a successful run produced; feeds the CLI confirmation lines.
#[derive(Debug, Clone)]
pub struct SnapshotReport {
    pub url: String,
    pub latest_path: PathBuf,
    pub digest: String,
}

/// Run the pipeline for one resource.
///
/// The stamp is resolved up front, so a malformed `run_date` fails before
/// any network or filesystem activity. A failed fetch leaves the output
/// directory exactly as it was.
pub fn run(job: &SnapshotJob, clock: &dyn Clock) -> Result<SnapshotReport> {
    let stamp = clock::resolve_stamp(job.run_date.as_deref(), clock)?;

    tracing::info!(url = %job.url, "fetching resource");
    let opts = FetchOptions {
        user_agent: job.user_agent.clone(),
        timeout: job.timeout,
    };
    let bytes =
        fetch::fetch_bytes(&job.url, &opts).with_context(|| format!("fetch {}", job.url))?;
    tracing::info!(len = bytes.len(), "fetch complete");

    let digest = checksum::sha256_bytes(&bytes);

    let latest_path = publish::publish_latest(&job.out_dir, &job.name, &bytes, &digest)?;

    if job.keep_dated_copy {
        publish::archive(&job.out_dir, &job.name, &bytes, &digest, &stamp)?;
    }

    tracing::info!(path = %latest_path.display(), %digest, "snapshot published");
    Ok(SnapshotReport {
        url: job.url.clone(),
        latest_path,
        digest,
    })
}
