//! Tests for the phase subcommands and `run`.

use super::{command, parse};
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_discover() {
    match command(&["favdl", "discover", "somefauser"]) {
        CliCommand::Discover { username } => assert_eq!(username, "somefauser"),
        _ => panic!("expected Discover"),
    }
}

#[test]
fn cli_discover_requires_username() {
    assert!(Cli::try_parse_from(["favdl", "discover"]).is_err());
}

#[test]
fn cli_parse_single_phases() {
    assert!(matches!(command(&["favdl", "resolve"]), CliCommand::Resolve));
    assert!(matches!(command(&["favdl", "download"]), CliCommand::Download));
    assert!(matches!(
        command(&["favdl", "fix-extensions"]),
        CliCommand::FixExtensions
    ));
}

#[test]
fn cli_parse_run_all_phases() {
    match command(&["favdl", "run", "somefauser"]) {
        CliCommand::Run {
            username,
            skip_discover,
            skip_resolve,
            skip_download,
            skip_fix,
        } => {
            assert_eq!(username.as_deref(), Some("somefauser"));
            assert!(!skip_discover && !skip_resolve && !skip_download && !skip_fix);
        }
        _ => panic!("expected Run"),
    }
}

#[test]
fn cli_parse_run_skips() {
    match command(&["favdl", "run", "bob", "--skip-download", "--skip-fix"]) {
        CliCommand::Run {
            skip_discover,
            skip_resolve,
            skip_download,
            skip_fix,
            ..
        } => {
            assert!(!skip_discover);
            assert!(!skip_resolve);
            assert!(skip_download);
            assert!(skip_fix);
        }
        _ => panic!("expected Run with skips"),
    }
}

#[test]
fn cli_run_without_username_needs_skip_discover() {
    assert!(Cli::try_parse_from(["favdl", "run"]).is_err());
    match parse(&["favdl", "run", "--skip-discover"]).command {
        CliCommand::Run {
            username,
            skip_discover,
            ..
        } => {
            assert!(username.is_none());
            assert!(skip_discover);
        }
        _ => panic!("expected Run --skip-discover"),
    }
}
