//! Tests for status, export and the global overrides.

use super::{command, parse};
use crate::cli::CliCommand;
use favdl_core::config::FavdlConfig;
use std::path::{Path, PathBuf};

#[test]
fn cli_parse_status() {
    match command(&["favdl", "status"]) {
        CliCommand::Status { list } => assert!(!list),
        _ => panic!("expected Status"),
    }
    match command(&["favdl", "status", "--list"]) {
        CliCommand::Status { list } => assert!(list),
        _ => panic!("expected Status --list"),
    }
}

#[test]
fn cli_parse_export_default_path() {
    match command(&["favdl", "export"]) {
        CliCommand::Export { path } => assert_eq!(path, PathBuf::from("fa_download.csv")),
        _ => panic!("expected Export"),
    }
}

#[test]
fn cli_parse_export_stdout() {
    match command(&["favdl", "export", "-"]) {
        CliCommand::Export { path } => assert_eq!(path, Path::new("-")),
        _ => panic!("expected Export -"),
    }
}

#[test]
fn cli_global_flags_before_and_after_subcommand() {
    let cli = parse(&[
        "favdl",
        "--database",
        "/tmp/state.db",
        "download",
        "--download-dir",
        "/tmp/out",
        "--cookie",
        "/tmp/cookie",
    ]);
    assert!(matches!(cli.command, CliCommand::Download));
    assert_eq!(cli.global.database.as_deref(), Some(Path::new("/tmp/state.db")));
    assert_eq!(cli.global.download_dir.as_deref(), Some(Path::new("/tmp/out")));
    assert_eq!(cli.global.cookie.as_deref(), Some(Path::new("/tmp/cookie")));
    assert!(cli.global.config.is_none());
}

#[test]
fn global_overrides_replace_config_values() {
    let cli = parse(&["favdl", "--database", "other.db", "--cookie", "sess", "status"]);
    let cfg = cli.global.apply(FavdlConfig::default());
    assert_eq!(cfg.database, PathBuf::from("other.db"));
    assert_eq!(cfg.cookie_file, PathBuf::from("sess"));
    assert_eq!(cfg.download_dir, PathBuf::from("downloads"));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["favdl", "pause", "1"]).is_err());
}
