//! Types, generics and modifiers.

use javap_peg::expr::{not, opt, plus, r, star};
use javap_peg::{GrammarBuilder, choice, seq};

use super::lexical::words;

const BASIC_TYPES: &[&str] = &[
    "byte", "short", "char", "int", "long", "float", "double", "boolean",
];

const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "abstract",
    "final",
    "native",
    "synchronized",
    "transient",
    "volatile",
    "strictfp",
];

pub(super) fn define(b: &mut GrammarBuilder) {
    b.rule(
        "Type",
        seq![choice![r("BasicType"), r("ClassType")], star(r("Dim"))],
    )
    .memo();
    b.rule(
        "ReferenceType",
        choice![
            seq![r("BasicType"), plus(r("Dim"))],
            seq![r("ClassType"), star(r("Dim"))],
        ],
    );
    b.rule(
        "ClassType",
        seq![
            r("Identifier"),
            opt(r("TypeArguments")),
            star(seq![r("DOT"), r("Identifier"), opt(r("TypeArguments"))])
        ],
    );
    b.rule(
        "ClassTypeList",
        seq![r("ClassType"), star(seq![r("COMMA"), r("ClassType")])],
    );
    b.rule(
        "TypeArguments",
        seq![
            r("LPOINT"),
            r("TypeArgument"),
            star(seq![r("COMMA"), r("TypeArgument")]),
            r("RPOINT")
        ],
    );
    b.rule(
        "TypeArgument",
        choice![
            r("ReferenceType"),
            seq![
                r("QUERY"),
                opt(seq![choice![r("EXTENDS"), r("SUPER")], r("ReferenceType")])
            ],
        ],
    );
    b.rule(
        "TypeParameters",
        seq![
            r("LPOINT"),
            r("TypeParameter"),
            star(seq![r("COMMA"), r("TypeParameter")]),
            r("RPOINT")
        ],
    );
    b.rule(
        "TypeParameter",
        seq![r("Identifier"), opt(seq![r("EXTENDS"), r("Bound")])],
    );
    b.rule(
        "Bound",
        seq![r("ClassType"), star(seq![r("AND"), r("ClassType")])],
    );

    b.rule(
        "BasicType",
        seq![words(BASIC_TYPES), not(r("LetterOrDigit")), r("Spacing")],
    )
    .memo_mismatches();

    // One modifier list for every declaration kind.
    b.rule(
        "Modifier",
        choice![
            r("Annotation"),
            seq![words(MODIFIERS), not(r("LetterOrDigit")), r("Spacing")],
        ],
    );

    b.rule(
        "QualifiedIdentifier",
        seq![r("Identifier"), star(seq![r("DOT"), r("Identifier")])],
    );
    b.rule("Dim", seq![r("LBRK"), r("RBRK")]);
    b.rule("DimExpr", seq![r("LBRK"), r("Expression"), r("RBRK")]);
}
