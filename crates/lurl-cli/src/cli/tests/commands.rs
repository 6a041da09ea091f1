//! Tests for parse, format and resolve subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_parse() {
    let cli = parse(&["lurl", "parse", "/test/1?a=1"]);
    assert!(cli.base.is_none());
    match cli.command {
        CliCommand::Parse { url } => assert_eq!(url, "/test/1?a=1"),
        _ => panic!("expected Parse"),
    }
}

#[test]
fn cli_parse_format_stdin() {
    match parse(&["lurl", "format", "-"]).command {
        CliCommand::Format { record } => assert_eq!(record, "-"),
        _ => panic!("expected Format"),
    }
}

#[test]
fn cli_parse_resolve() {
    match parse(&["lurl", "resolve", "http://example.com/a/b", "c"]).command {
        CliCommand::Resolve { from, to } => {
            assert_eq!(from, "http://example.com/a/b");
            assert_eq!(to, "c");
        }
        _ => panic!("expected Resolve"),
    }
}

#[test]
fn cli_parse_global_base_after_subcommand() {
    let cli = parse(&["lurl", "resolve", "a/", "b", "--base", "https://site.example/"]);
    assert_eq!(cli.base.as_deref(), Some("https://site.example/"));
}

#[test]
fn cli_parse_base_before_subcommand() {
    let cli = parse(&["lurl", "--base", "https://site.example/", "parse", "x"]);
    assert_eq!(cli.base.as_deref(), Some("https://site.example/"));
}

#[test]
fn cli_resolve_requires_two_args() {
    assert!(Cli::try_parse_from(["lurl", "resolve", "only-one"]).is_err());
}
