pub mod config;
pub mod logging;

// Pipeline stages and their shared pieces.
pub mod checksum;
pub mod clock;
pub mod error;
pub mod fetch;
pub mod publish;
pub mod snapshot;
