//! `snapfetch verify` – re-hash the published file against its digest record.

use anyhow::{bail, Result};
use snapfetch_core::config::SnapfetchConfig;
use snapfetch_core::publish::{self, Verification};
use std::path::Path;

pub fn run_verify(cfg: &SnapfetchConfig, out_dir: &Path, name: Option<String>) -> Result<()> {
    let name = name.unwrap_or_else(|| cfg.default_filename.clone());
    let path = out_dir.join(&name);
    match publish::verify_pair(out_dir, &name)? {
        Verification::Match { digest } => {
            println!("OK {}  {}", digest, path.display());
            Ok(())
        }
        Verification::Mismatch { recorded, actual } => {
            bail!(
                "digest mismatch for {}: recorded {}, actual {}",
                path.display(),
                recorded,
                actual
            )
        }
    }
}
