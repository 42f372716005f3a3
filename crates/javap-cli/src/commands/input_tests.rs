use std::fs;
use std::path::Path;

use javap_lib::{java, javap};

use super::input::{InputArgs, load_input, resolve_rule};

fn args(grammar: &str, rule: Option<&str>) -> InputArgs {
    InputArgs {
        source_path: None,
        source_text: Some("x".to_owned()),
        grammar: grammar.to_owned(),
        rule: rule.map(str::to_owned),
        fuel: 1_000,
        memoize: true,
    }
}

#[test]
fn inline_text_has_no_name() {
    let input = load_input(None, Some("a + b")).unwrap();
    assert_eq!(input.text, "a + b");
    assert_eq!(input.name, None);
}

#[test]
fn file_input_is_named_by_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Foo.txt");
    fs::write(&path, "Compiled from").unwrap();

    let input = load_input(Some(&path), None).unwrap();
    assert_eq!(input.text, "Compiled from");
    assert_eq!(input.name, Some(path.display().to_string()));
}

#[test]
fn missing_file_is_an_error() {
    let err = load_input(Some(Path::new("no/such/Foo.txt")), None)
        .err()
        .unwrap();
    assert!(err.starts_with("failed to read 'no/such/Foo.txt'"), "{err}");
}

#[test]
fn input_is_required() {
    assert!(load_input(None, None).is_err());
}

#[test]
fn rules_resolve_by_name() {
    let grammar = java::grammar();
    assert_eq!(resolve_rule(grammar, None), Ok(grammar.root()));
    assert_eq!(
        resolve_rule(grammar, Some("Expression")),
        Ok(grammar.rule_id("Expression").unwrap())
    );
    assert_eq!(
        resolve_rule(grammar, Some("Nope")),
        Err("unknown rule 'Nope'".to_owned())
    );
}

#[test]
fn prepare_selects_grammar_and_rule() {
    let prepared = args("java", Some("Literal")).prepare().ok().unwrap();
    assert!(std::ptr::eq(prepared.grammar, java::grammar()));
    assert_eq!(prepared.rule, java::grammar().rule_id("Literal").unwrap());

    let prepared = args("javap", None).prepare().ok().unwrap();
    assert!(std::ptr::eq(prepared.grammar, javap::grammar()));
    assert_eq!(prepared.rule, javap::grammar().root());
}

#[test]
fn only_whole_transcripts_are_projected() {
    assert!(args("javap", None).is_transcript());
    assert!(!args("javap", Some("LineNumberTable")).is_transcript());
    assert!(!args("java", None).is_transcript());
}

#[test]
fn parser_honors_fuel() {
    let args = args("java", None);
    let parser = args.parser(java::grammar());
    assert_eq!(parser.limits().get_exec_fuel(), 1_000);
}
