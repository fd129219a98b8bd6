//! CLI command handlers, one file per command.

mod checksum;
mod run;
mod verify;

pub use checksum::run_checksum;
pub use run::run_snapshot;
pub use verify::run_verify;
