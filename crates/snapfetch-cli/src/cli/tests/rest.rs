//! Tests for verify and checksum subcommands.

use super::parse;
use crate::cli::CliCommand;
use std::path::Path;

#[test]
fn cli_parse_verify() {
    match parse(&["snapfetch", "verify", "--out-dir", "/srv/mirror"]) {
        CliCommand::Verify { out_dir, name } => {
            assert_eq!(out_dir, Path::new("/srv/mirror"));
            assert!(name.is_none());
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_with_name() {
    match parse(&[
        "snapfetch",
        "verify",
        "--out-dir",
        "/srv/mirror",
        "--name",
        "statutes.json",
    ]) {
        CliCommand::Verify { out_dir, name } => {
            assert_eq!(out_dir, Path::new("/srv/mirror"));
            assert_eq!(name.as_deref(), Some("statutes.json"));
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["snapfetch", "checksum", "/srv/mirror/download.bin"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, Path::new("/srv/mirror/download.bin"));
        }
        _ => panic!("expected Checksum"),
    }
}
