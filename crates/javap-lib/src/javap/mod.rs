//! Grammar for `javap -l` transcripts.
//!
//! The transcript layout is line oriented: a `Compiled from` header, the
//! class header, then per member a signature line followed by a line number
//! table and a local variable table, each closed by a blank line. Java rules
//! supply modifiers, type names and generics. Java tokens skip newlines along
//! with other whitespace, so tokens that can end a line use the line-local
//! variants defined here instead.
//!
//! ```text
//! Compiled from "Greeter.java"
//! public class demo.Greeter extends java.lang.Object{
//! public demo.Greeter();
//!   LineNumberTable:
//!    line 3: 0
//!
//!   LocalVariableTable:
//!    Start  Length  Slot  Name   Signature
//!    0      5      0    this       Ldemo/Greeter;
//!
//!
//! }
//! ```


use std::sync::LazyLock;

use javap_peg::expr::{any_of, eoi, none_of, not, opt, plus, r, star};
use javap_peg::{Grammar, GrammarBuilder, choice, seq};

use crate::java::{self, JavaRules};

/// Rule that matches a whole transcript.
pub const ROOT: &str = "JavapOutput";

/// Adds the transcript rules to a builder that already holds the Java
/// grammar.
pub fn define(b: &mut GrammarBuilder, java: &JavaRules) {
    layout(b);
    document(b, java);
    class_header(b, java);
    members(b, java);
    tables(b, java);
    descriptors(b);
}

/// Java grammar extended with the transcript rules, rooted at [`ROOT`].
pub fn grammar() -> &'static Grammar {
    static GRAMMAR: LazyLock<Grammar> = LazyLock::new(|| {
        let mut b = GrammarBuilder::new();
        let java = java::define(&mut b);
        define(&mut b, &java);
        b.root(ROOT);
        b.build().expect("javap grammar is well-formed")
    });
    &GRAMMAR
}

fn layout(b: &mut GrammarBuilder) {
    b.rule("Newline", choice!["\r\n", '\r', '\n']).suppress_node();
    b.rule("InlineSpacing", star(any_of(" \t"))).suppress_node();
    b.rule("RowSpacing", plus(any_of(" \t"))).suppress_node();
}

fn document(b: &mut GrammarBuilder, java: &JavaRules) {
    b.rule(
        ROOT,
        seq![
            r("SourceHeader"),
            r("ClassHeader"),
            '{',
            r("Newline"),
            plus(r("JavapMember")),
            star(r("JavapField")),
            '}',
            star(r("Newline")),
            eoi()
        ],
    );
    b.rule(
        "SourceHeader",
        seq!["Compiled from ", r("SourceFile"), r("Newline")],
    );
    b.rule("SourceFile", java.string_literal());
}

fn class_header(b: &mut GrammarBuilder, java: &JavaRules) {
    b.rule(
        "ClassHeader",
        seq![
            star(java.modifier()),
            r("TypeKind"),
            r("JavapQualifiedIdentifier"),
            opt(java.type_parameters()),
            opt(r("ExtendsClause")),
            opt(r("ImplementsClause"))
        ],
    );
    b.rule(
        "TypeKind",
        choice![java.terminal("CLASS"), java.terminal("INTERFACE")],
    )
    .suppress_subnodes();
    b.rule(
        "ExtendsClause",
        seq![java.terminal("EXTENDS"), r("JavapTypeList")],
    );
    b.rule(
        "ImplementsClause",
        seq![java.terminal("IMPLEMENTS"), r("JavapTypeList")],
    );
    b.rule(
        "JavapTypeList",
        seq![
            r("JavapClassType"),
            star(seq![java.terminal("COMMA"), r("JavapClassType")])
        ],
    );
    b.rule(
        "JavapClassType",
        seq![r("JavapQualifiedIdentifier"), opt(java.type_arguments())],
    )
    .suppress_subnodes()
    .memo();
    b.rule(
        "JavapQualifiedIdentifier",
        seq![
            r("JavapIdentifier"),
            star(seq![java.terminal("DOT"), r("JavapIdentifier")])
        ],
    )
    .suppress_subnodes();
    b.rule(
        "JavapIdentifier",
        seq![
            not(java.keyword()),
            java.letter(),
            star(java.letter_or_digit()),
            r("InlineSpacing")
        ],
    )
    .suppress_subnodes()
    .memo_mismatches();
}

fn members(b: &mut GrammarBuilder, java: &JavaRules) {
    b.rule(
        "JavapMember",
        seq![
            star(r("JavapField")),
            r("MemberSignature"),
            r("LineNumberTable"),
            r("LocalVariableTable"),
            r("Newline")
        ],
    );
    b.rule(
        "JavapField",
        seq![
            star(java.modifier()),
            r("JavapType"),
            r("JavapIdentifier"),
            ';',
            r("InlineSpacing"),
            r("Newline"),
            opt(r("Newline"))
        ],
    );
    b.rule(
        "MemberSignature",
        seq![
            star(java.modifier()),
            opt(java.type_parameters()),
            choice![
                r("MethodSignature"),
                r("ConstructorSignature"),
                r("StaticInitializer"),
            ],
            ';',
            r("InlineSpacing"),
            r("Newline")
        ],
    );
    b.rule(
        "MethodSignature",
        seq![
            r("ResultType"),
            r("JavapIdentifier"),
            r("JavapParameters"),
            opt(r("ThrowsClause"))
        ],
    );
    b.rule(
        "ResultType",
        choice![java.terminal("VOID"), r("JavapType")],
    )
    .suppress_subnodes();
    b.rule(
        "ConstructorSignature",
        seq![
            r("JavapQualifiedIdentifier"),
            r("JavapParameters"),
            opt(r("ThrowsClause"))
        ],
    );
    b.rule(
        "StaticInitializer",
        seq!['{', r("InlineSpacing"), '}'],
    );
    b.rule(
        "JavapParameters",
        seq![
            java.terminal("LPAR"),
            opt(seq![
                r("JavapParameter"),
                star(seq![java.terminal("COMMA"), r("JavapParameter")])
            ]),
            java.terminal("RPAR")
        ],
    );
    b.rule(
        "JavapParameter",
        seq![r("JavapType"), opt(java.terminal("ELLIPSIS"))],
    )
    .suppress_subnodes();
    b.rule(
        "JavapType",
        seq![
            choice![java.basic_type(), r("JavapClassType")],
            star(java.dim())
        ],
    )
    .suppress_subnodes()
    .memo();
    b.rule(
        "ThrowsClause",
        seq![java.terminal("THROWS"), r("JavapTypeList")],
    );
}

fn tables(b: &mut GrammarBuilder, java: &JavaRules) {
    b.rule(
        "LineNumberTable",
        seq![
            r("InlineSpacing"),
            "LineNumberTable:",
            r("InlineSpacing"),
            r("Newline"),
            plus(r("LineNumberRow")),
            r("Newline")
        ],
    );
    b.rule(
        "LineNumberRow",
        seq![
            r("RowSpacing"),
            "line",
            r("RowSpacing"),
            java.decimal_numeral(),
            ':',
            r("RowSpacing"),
            java.decimal_numeral(),
            r("InlineSpacing"),
            r("Newline")
        ],
    );
    b.rule(
        "LocalVariableTable",
        seq![
            r("InlineSpacing"),
            "LocalVariableTable:",
            r("InlineSpacing"),
            r("Newline"),
            r("LocalVariableColumns"),
            plus(r("LocalVariableRow")),
            r("Newline")
        ],
    );
    b.rule(
        "LocalVariableColumns",
        seq![
            r("RowSpacing"),
            "Start",
            r("RowSpacing"),
            "Length",
            r("RowSpacing"),
            "Slot",
            r("RowSpacing"),
            "Name",
            r("RowSpacing"),
            "Signature",
            r("InlineSpacing"),
            r("Newline")
        ],
    )
    .suppress_node();
    b.rule(
        "LocalVariableRow",
        seq![
            r("RowSpacing"),
            java.decimal_numeral(),
            r("RowSpacing"),
            java.decimal_numeral(),
            r("RowSpacing"),
            java.decimal_numeral(),
            r("RowSpacing"),
            r("LocalName"),
            r("RowSpacing"),
            r("FieldDescriptor"),
            r("InlineSpacing"),
            r("Newline")
        ],
    );
    b.rule(
        "LocalName",
        choice![
            seq!["this", not(java.letter_or_digit())],
            seq![
                not(java.keyword()),
                java.letter(),
                star(java.letter_or_digit())
            ],
        ],
    )
    .suppress_subnodes();
}

fn descriptors(b: &mut GrammarBuilder) {
    b.rule(
        "FieldDescriptor",
        choice![
            r("BaseDescriptor"),
            r("ObjectDescriptor"),
            r("ArrayDescriptor"),
        ],
    );
    b.rule("BaseDescriptor", any_of("BCDFIJSZ"));
    b.rule("ObjectDescriptor", seq!['L', r("InternalName"), ';']);
    b.rule("InternalName", plus(none_of(";\r\n")));
    b.rule("ArrayDescriptor", seq!['[', r("FieldDescriptor")]);
}
