use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_rename_defaults() {
    match parse(&["mdretitle", "rename"]) {
        CliCommand::Rename { target } => {
            assert!(target.root.is_none());
            assert!(!target.dry_run);
        }
        _ => panic!("expected Rename"),
    }
}

#[test]
fn cli_parse_rename_root_and_dry_run() {
    match parse(&["mdretitle", "rename", "--root", "website/docs", "--dry-run"]) {
        CliCommand::Rename { target } => {
            assert_eq!(target.root, Some(PathBuf::from("website/docs")));
            assert!(target.dry_run);
        }
        _ => panic!("expected Rename with root and dry_run"),
    }
}

#[test]
fn cli_parse_strip() {
    match parse(&["mdretitle", "strip"]) {
        CliCommand::Strip { target } => {
            assert!(target.root.is_none());
            assert!(!target.dry_run);
        }
        _ => panic!("expected Strip"),
    }
}

#[test]
fn cli_parse_strip_dry_run() {
    match parse(&["mdretitle", "strip", "--dry-run"]) {
        CliCommand::Strip { target } => assert!(target.dry_run),
        _ => panic!("expected Strip with dry_run"),
    }
}
