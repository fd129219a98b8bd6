//! Date-stamp resolution for archive directories.
//!
//! The wall clock sits behind a trait so tests can pin a date instead of
//! depending on when they run.

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};

/// Format of archive directory names (`YYYY-MM-DD`).
pub const STAMP_FORMAT: &str = "%Y-%m-%d";

/// Source of the current UTC date.
pub trait Clock {
    fn today_utc(&self) -> NaiveDate;
}

/// Clock backed by system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today_utc(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Resolve the archive date stamp: an explicit override wins, otherwise
/// today's UTC date. Overrides are parsed and re-formatted, so a value that
/// is not a real `YYYY-MM-DD` calendar date is rejected.
pub fn resolve_stamp(run_date: Option<&str>, clock: &dyn Clock) -> Result<String> {
    let date = match run_date {
        Some(s) => NaiveDate::parse_from_str(s, STAMP_FORMAT)
            .with_context(|| format!("invalid run date {s:?}: expected YYYY-MM-DD"))?,
        None => clock.today_utc(),
    };
    Ok(date.format(STAMP_FORMAT).to_string())
}
