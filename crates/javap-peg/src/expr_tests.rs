use crate::expr::*;
use crate::{CharClass, Expr, choice, seq};

#[test]
fn display_uses_peg_notation() {
    let identifier = seq![
        not(r("Keyword")),
        java_letter(),
        star(java_letter_or_digit()),
        r("Spacing")
    ];

    assert_eq!(
        identifier.to_string(),
        "!Keyword [:letter:] [:letter-or-digit:]* Spacing"
    );
}

#[test]
fn display_parenthesizes_by_precedence() {
    assert_eq!(star(choice!["a", "b"]).to_string(), r#"("a" / "b")*"#);
    assert_eq!(opt(seq!["a", "b"]).to_string(), r#"("a" "b")?"#);
    assert_eq!(not(seq!["a", "b"]).to_string(), r#"!("a" "b")"#);
    assert_eq!(
        seq![choice!["a", seq!["b", "c"]], "d"].to_string(),
        r#"("a" / "b" "c") "d""#
    );
    assert_eq!(seq![choice!["a"]].to_string(), r#""a""#);
}

#[test]
fn display_terminals() {
    assert_eq!(none_of(";\n").to_string(), r"[^;\n]");
    assert_eq!(range('a', 'z').to_string(), "[a-z]");
    assert_eq!(any_of("+-").to_string(), r"[+\-]");
    assert_eq!(ch('x').to_string(), "'x'");
    assert_eq!(any().to_string(), ".");
    assert_eq!(eoi().to_string(), "EOI");
    assert_eq!(seq![].to_string(), "()");
    assert_eq!(lit("from \"").to_string(), r#""from \"""#);
}

#[test]
fn char_class_membership() {
    assert!(CharClass::JavaLetter.matches('é'));
    assert!(CharClass::JavaLetter.matches('$'));
    assert!(CharClass::JavaLetter.matches('_'));
    assert!(!CharClass::JavaLetter.matches('1'));
    assert!(CharClass::JavaLetterOrDigit.matches('1'));
    assert!(!CharClass::JavaLetterOrDigit.matches(';'));

    assert!(CharClass::Range('0', '7').matches('7'));
    assert!(!CharClass::Range('0', '7').matches('8'));
    assert!(CharClass::AnyOf("=&".into()).matches('&'));
    assert!(!CharClass::NoneOf(";\n".into()).matches('\n'));
    assert!(CharClass::NoneOf(";\n".into()).matches('/'));
}

#[test]
fn expectation_only_for_terminals() {
    assert_eq!(lit("class").expectation().as_deref(), Some("\"class\""));
    assert_eq!(eoi().expectation().as_deref(), Some("end of input"));
    assert_eq!(r("Type").expectation(), None);
    assert!(any().is_terminal());
    assert!(!star("a").is_terminal());
}

#[test]
fn conversions() {
    assert_eq!(Expr::from("ab"), Expr::Literal("ab".into()));
    assert_eq!(Expr::from('a'), Expr::Class(CharClass::Char('a')));
    assert_eq!(
        seq!["a", 'b'],
        Expr::Seq(vec![
            Expr::Literal("a".into()),
            Expr::Class(CharClass::Char('b'))
        ])
    );
}

#[test]
fn serializes_externally_tagged() {
    let json = serde_json::to_string(&seq!["a", r("B"), any()]).unwrap();
    assert_eq!(json, r#"{"seq":[{"literal":"a"},{"ref":"B"},"any"]}"#);
}
