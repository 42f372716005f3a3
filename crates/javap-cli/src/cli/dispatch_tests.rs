//! Tests for CLI dispatch logic: argument parsing and params extraction.

use std::path::PathBuf;

use javap_peg::Verbosity;

use super::*;
use crate::cli::commands::{convert_command, grammar_command, parse_command, trace_command};

#[test]
fn parse_defaults() {
    let m = parse_command()
        .try_get_matches_from(["parse", "Foo.txt"])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("Foo.txt")));
    assert_eq!(params.source_text, None);
    assert_eq!(params.grammar, "javap");
    assert_eq!(params.rule, None);
    assert!(!params.json);
    assert_eq!(params.fuel, 10_000_000);
    assert!(params.memoize);
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn parse_params_extracts_all_fields() {
    let m = parse_command()
        .try_get_matches_from([
            "parse",
            "-s",
            "a + b",
            "-g",
            "java",
            "--rule",
            "Expression",
            "--json",
            "--fuel",
            "500",
            "--no-memo",
            "--color",
            "never",
        ])
        .unwrap();
    let params = ParseParams::from_matches(&m);

    assert_eq!(params.source_path, None);
    assert_eq!(params.source_text, Some("a + b".to_string()));
    assert_eq!(params.grammar, "java");
    assert_eq!(params.rule, Some("Expression".to_string()));
    assert!(params.json);
    assert_eq!(params.fuel, 500);
    assert!(!params.memoize);
    assert_eq!(params.color, ColorChoice::Never);
}

#[test]
fn parse_rejects_file_and_inline_text() {
    let result = parse_command().try_get_matches_from(["parse", "Foo.txt", "-s", "x"]);
    assert!(result.is_err());
}

#[test]
fn parse_rejects_unknown_grammar() {
    let result = parse_command().try_get_matches_from(["parse", "-g", "kotlin", "Foo.kt"]);
    assert!(result.is_err());
}

#[test]
fn trace_params_extracts_verbosity() {
    let cases = [
        (vec!["trace", "Foo.txt"], Verbosity::Default),
        (vec!["trace", "Foo.txt", "-v"], Verbosity::Verbose),
        (vec!["trace", "Foo.txt", "-vv"], Verbosity::VeryVerbose),
        (vec!["trace", "Foo.txt", "-vvv"], Verbosity::VeryVerbose),
    ];
    for (argv, expected) in cases {
        let m = trace_command().try_get_matches_from(argv.clone()).unwrap();
        assert_eq!(TraceParams::from_matches(&m).verbosity, expected, "{argv:?}");
    }
}

#[test]
fn trace_params_extracts_all_fields() {
    let m = trace_command()
        .try_get_matches_from([
            "trace",
            "Foo.java",
            "-g",
            "java",
            "--rule",
            "CompilationUnit",
            "--fuel",
            "42",
            "--color",
            "always",
        ])
        .unwrap();
    let params = TraceParams::from_matches(&m);

    assert_eq!(params.source_path, Some(PathBuf::from("Foo.java")));
    assert_eq!(params.grammar, "java");
    assert_eq!(params.rule, Some("CompilationUnit".to_string()));
    assert_eq!(params.fuel, 42);
    assert!(params.memoize);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn trace_does_not_accept_json() {
    let result = trace_command().try_get_matches_from(["trace", "Foo.txt", "--json"]);
    assert!(result.is_err());
}

#[test]
fn grammar_defaults_to_javap() {
    let m = grammar_command().try_get_matches_from(["grammar"]).unwrap();
    let params = GrammarParams::from_matches(&m);

    assert_eq!(params.grammar, "javap");
    assert!(!params.json);
}

#[test]
fn grammar_params_extracts_all_fields() {
    let m = grammar_command()
        .try_get_matches_from(["grammar", "java", "--json"])
        .unwrap();
    let params = GrammarParams::from_matches(&m);

    assert_eq!(params.grammar, "java");
    assert!(params.json);
}

#[test]
fn convert_requires_both_directories() {
    assert!(
        convert_command()
            .try_get_matches_from(["convert", "classes"])
            .is_err()
    );
}

#[test]
fn convert_params_extracts_all_fields() {
    let m = convert_command()
        .try_get_matches_from([
            "convert",
            "target/classes",
            "target/json",
            "--javap",
            "/opt/jdk/bin/javap",
        ])
        .unwrap();
    let params = ConvertParams::from_matches(&m);

    assert_eq!(params.classes_dir, PathBuf::from("target/classes"));
    assert_eq!(params.output_dir, PathBuf::from("target/json"));
    assert_eq!(params.javap, "/opt/jdk/bin/javap");
    assert_eq!(params.color, ColorChoice::Auto);
}

#[test]
fn convert_uses_javap_from_path_by_default() {
    let m = convert_command()
        .try_get_matches_from(["convert", "in", "out"])
        .unwrap();
    assert_eq!(ConvertParams::from_matches(&m).javap, "javap");
}

#[test]
fn parse_help_lists_flags() {
    let mut cmd = parse_command();
    let help = cmd.render_help().to_string();

    assert!(help.contains("--grammar"));
    assert!(help.contains("--no-memo"));
}

#[test]
fn cli_lists_all_commands() {
    let mut cmd = build_cli();
    let help = cmd.render_help().to_string();

    for name in ["parse", "trace", "grammar", "convert"] {
        assert!(help.contains(name), "missing {name}");
    }
}
