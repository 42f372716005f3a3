use indoc::indoc;

use crate::expr::{eoi, java_letter, opt, plus, r, star};
use crate::{GrammarBuilder, GrammarError, MemoPolicy, choice, seq};

#[test]
fn rule_ids_follow_definition_order() {
    let mut builder = GrammarBuilder::new();
    builder.rule("B", "b");
    builder.rule("A", seq![r("B"), "a"]);
    let grammar = builder.build().unwrap();

    let b = grammar.rule_id("B").unwrap();
    let a = grammar.rule_id("A").unwrap();
    assert!(b < a);
    assert_eq!(grammar.root(), b);
    assert_eq!(grammar.len(), 2);
    assert_eq!(grammar.rule(a).name(), "A");
    assert!(grammar.rule_id("C").is_none());
}

#[test]
fn explicit_root() {
    let mut builder = GrammarBuilder::new();
    builder.rule("Item", "x");
    builder.rule("Top", plus(r("Item")));
    builder.root("Top");
    let grammar = builder.build().unwrap();

    assert_eq!(grammar.rule(grammar.root()).name(), "Top");
}

#[test]
fn flags_and_label() {
    let mut builder = GrammarBuilder::new();
    builder.rule("Semi", ";").label("';'").suppress_subnodes().memo_mismatches();
    builder.rule("Ws", star(" ")).suppress_node();
    let grammar = builder.build().unwrap();

    let semi = grammar.rule(grammar.rule_id("Semi").unwrap());
    assert_eq!(&**semi.label(), "';'");
    assert!(semi.suppresses_subnodes());
    assert!(!semi.suppresses_node());
    assert_eq!(semi.memo(), MemoPolicy::Mismatches);

    let ws = grammar.rule(grammar.rule_id("Ws").unwrap());
    assert!(ws.suppresses_node());
    assert!(ws.is_nullable());
    assert!(!semi.is_nullable());
}

#[test]
fn nullable_through_references() {
    let mut builder = GrammarBuilder::new();
    builder.rule("A", seq![r("B"), opt("a")]);
    builder.rule("B", choice!["b", r("C")]);
    builder.rule("C", star("c"));
    let grammar = builder.build().unwrap();

    for name in ["A", "B", "C"] {
        let id = grammar.rule_id(name).unwrap();
        assert!(grammar.rule(id).is_nullable(), "{name} should be nullable");
    }
}

#[test]
fn rejects_empty_grammar() {
    assert_eq!(GrammarBuilder::new().build().unwrap_err(), GrammarError::Empty);
}

#[test]
fn rejects_duplicate_rule() {
    let mut builder = GrammarBuilder::new();
    builder.rule("A", "a");
    builder.rule("A", "b");

    let err = builder.build().unwrap_err();
    assert_eq!(err.to_string(), "rule `A` is defined more than once");
}

#[test]
fn rejects_undefined_reference() {
    let mut builder = GrammarBuilder::new();
    builder.rule("A", seq!["a", r("Missing")]);

    let err = builder.build().unwrap_err();
    assert_eq!(
        err,
        GrammarError::UndefinedRule {
            rule: "A".into(),
            name: "Missing".into()
        }
    );
    assert_eq!(
        err.to_string(),
        "rule `A` references undefined rule `Missing`"
    );
}

#[test]
fn rejects_unknown_root() {
    let mut builder = GrammarBuilder::new();
    builder.rule("A", "a");
    builder.root("B");

    assert_eq!(
        builder.build().unwrap_err(),
        GrammarError::UnknownRoot { name: "B".into() }
    );
}

#[test]
fn rejects_repetition_of_nullable_body() {
    let mut builder = GrammarBuilder::new();
    builder.rule("A", star(r("B")));
    builder.rule("B", opt("b"));

    let err = builder.build().unwrap_err();
    assert_eq!(
        err.to_string(),
        "rule `A` repeats an expression that can match empty input"
    );
}

#[test]
fn rejects_direct_left_recursion() {
    let mut builder = GrammarBuilder::new();
    builder.rule("Expr", choice![seq![r("Expr"), "+", "x"], "x"]);

    assert_eq!(
        builder.build().unwrap_err(),
        GrammarError::LeftRecursion {
            cycle: vec!["Expr".into(), "Expr".into()]
        }
    );
}

#[test]
fn rejects_left_recursion_behind_nullable_prefix() {
    let mut builder = GrammarBuilder::new();
    builder.rule("A", seq![r("B"), "x"]);
    builder.rule("B", seq![opt("y"), r("A")]);

    let err = builder.build().unwrap_err();
    assert_eq!(err.to_string(), "left recursion: A -> B -> A");
}

#[test]
fn accepts_guarded_recursion() {
    let mut builder = GrammarBuilder::new();
    builder.rule("Paren", choice![seq!["(", r("Paren"), ")"], "x"]);

    assert!(builder.build().is_ok());
}

#[test]
fn display_lists_rules_with_flags() {
    let mut builder = GrammarBuilder::new();
    builder.rule("Greeting", seq![r("Word"), plus(seq![" ", r("Word")]), eoi()]);
    builder.rule("Word", plus(java_letter())).suppress_subnodes().memo();
    builder.rule("Space", star(" ")).suppress_node().label("ws");
    let grammar = builder.build().unwrap();

    insta::assert_snapshot!(grammar.to_string(), @r#"
    Greeting <- Word (" " Word)+ EOI
    Word <- [:letter:]+  # leaf, memo
    Space <- " "*  # label "ws", no node
    "#);
}

#[test]
fn serializes_rules_in_order() {
    let mut builder = GrammarBuilder::new();
    builder.rule("Word", plus(java_letter())).memo();
    let grammar = builder.build().unwrap();

    let json = serde_json::to_string_pretty(&grammar).unwrap();
    assert_eq!(
        json,
        indoc! {r#"
            [
              {
                "name": "Word",
                "label": "Word",
                "body": {
                  "one_or_more": {
                    "class": "java_letter"
                  }
                },
                "suppress_node": false,
                "suppress_subnodes": false,
                "memo": "all",
                "nullable": false
              }
            ]"#}
    );
}
