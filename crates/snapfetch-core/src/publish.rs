//! Durable placement of fetched artifacts.
//!
//! Every artifact is staged as a `.part` file in its destination directory
//! and moved into place with an atomic rename, so a concurrent reader never
//! observes a half-written file. The digest sibling is written from the same
//! in-memory payload as the data file, in the same call.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Suffix of the digest record stored next to a published artifact.
pub const DIGEST_SUFFIX: &str = ".sha256";

/// Subdirectory of the output dir that holds dated snapshots.
pub const ARCHIVE_DIR: &str = "archive";

/// Staging suffix used before the atomic rename.
const TEMP_SUFFIX: &str = ".part";

/// Name of the digest sibling for `name` (e.g. `data.json.sha256`).
pub fn digest_name(name: &str) -> String {
    format!("{name}{DIGEST_SUFFIX}")
}

/// Staging path for `final_path` (e.g. `data.json` → `data.json.part`).
fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `contents` to `final_path` via a same-directory staging file and an
/// atomic rename. Replaces any existing file at `final_path`. Data is synced
/// before the rename; the file is closed before rename on all platforms.
fn write_atomic(final_path: &Path, contents: &[u8]) -> Result<()> {
    let staged = temp_path(final_path);
    let mut f =
        File::create(&staged).with_context(|| format!("create {}", staged.display()))?;
    f.write_all(contents)
        .with_context(|| format!("write {}", staged.display()))?;
    f.sync_all()
        .with_context(|| format!("sync {}", staged.display()))?;
    drop(f);
    fs::rename(&staged, final_path).with_context(|| {
        format!(
            "rename {} to {}",
            staged.display(),
            final_path.display()
        )
    })?;
    Ok(())
}

/// Write both artifacts of a snapshot into `dir`: `<name>` with the payload
/// and `<name>.sha256` with the hex digest plus a trailing newline. Creates
/// `dir` and any missing parents first. Returns the data path.
fn write_pair(dir: &Path, name: &str, bytes: &[u8], digest: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let data_path = dir.join(name);
    write_atomic(&data_path, bytes)?;
    write_atomic(&dir.join(digest_name(name)), format!("{digest}\n").as_bytes())?;
    Ok(data_path)
}

/// Publish the latest snapshot: `<out_dir>/<name>` and its digest sibling,
/// unconditionally replacing whatever a previous run left there.
pub fn publish_latest(out_dir: &Path, name: &str, bytes: &[u8], digest: &str) -> Result<PathBuf> {
    let path = write_pair(out_dir, name, bytes, digest)?;
    tracing::debug!(path = %path.display(), "published latest snapshot");
    Ok(path)
}

/// Duplicate the snapshot into `<out_dir>/archive/<stamp>/`. A second run
/// with the same stamp replaces the first; the pair stays consistent because
/// both files come from one payload.
pub fn archive(
    out_dir: &Path,
    name: &str,
    bytes: &[u8],
    digest: &str,
    stamp: &str,
) -> Result<PathBuf> {
    let dir = out_dir.join(ARCHIVE_DIR).join(stamp);
    let path = write_pair(&dir, name, bytes, digest)?;
    tracing::debug!(path = %path.display(), stamp, "archived dated snapshot");
    Ok(path)
}

/// Outcome of re-hashing a published artifact against its recorded digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Recorded and recomputed digests agree.
    Match { digest: String },
    /// The artifact no longer hashes to what its digest record says.
    Mismatch { recorded: String, actual: String },
}

/// Re-hash `<dir>/<name>` and compare with its `.sha256` record.
pub fn verify_pair(dir: &Path, name: &str) -> Result<Verification> {
    let digest_path = dir.join(digest_name(name));
    let recorded = fs::read_to_string(&digest_path)
        .with_context(|| format!("read {}", digest_path.display()))?
        .trim_end()
        .to_string();
    let actual = crate::checksum::sha256_path(&dir.join(name))?;
    if recorded == actual {
        Ok(Verification::Match { digest: actual })
    } else {
        Ok(Verification::Mismatch { recorded, actual })
    }
}
