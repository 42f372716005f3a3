//! The expression precedence ladder, primaries and creators.
//!
//! Each binary level is "next level, then zero or more (operator, next
//! level)". Any conditional expression is accepted on the left of an
//! assignment, so `5 = a` parses; the grammar does not check l-values.

use javap_peg::expr::{opt, r, star};
use javap_peg::{Expr, GrammarBuilder, choice, seq};

fn refs(names: &[&str]) -> Expr {
    Expr::Choice(names.iter().map(|&n| r(n)).collect())
}

/// `next (op next)*`
fn binary(b: &mut GrammarBuilder, name: &str, operator: Expr, next: &str) {
    b.rule(name, seq![r(next), star(seq![operator, r(next)])]);
}

pub(super) fn define(b: &mut GrammarBuilder) {
    ladder(b);
    primaries(b);
    creators(b);
}

fn ladder(b: &mut GrammarBuilder) {
    b.rule("StatementExpression", r("Expression"));
    b.rule("ConstantExpression", r("Expression"));
    b.rule(
        "Expression",
        seq![
            r("ConditionalExpression"),
            star(seq![r("AssignmentOperator"), r("ConditionalExpression")])
        ],
    );
    b.rule(
        "AssignmentOperator",
        refs(&[
            "EQU", "PLUSEQU", "MINUSEQU", "STAREQU", "DIVEQU", "ANDEQU", "OREQU", "HATEQU",
            "MODEQU", "SLEQU", "SREQU", "BSREQU",
        ]),
    );
    b.rule(
        "ConditionalExpression",
        seq![
            r("ConditionalOrExpression"),
            star(seq![
                r("QUERY"),
                r("Expression"),
                r("COLON"),
                r("ConditionalOrExpression")
            ])
        ],
    );
    binary(b, "ConditionalOrExpression", r("OROR"), "ConditionalAndExpression");
    binary(b, "ConditionalAndExpression", r("ANDAND"), "InclusiveOrExpression");
    binary(b, "InclusiveOrExpression", r("OR"), "ExclusiveOrExpression");
    binary(b, "ExclusiveOrExpression", r("HAT"), "AndExpression");
    binary(b, "AndExpression", r("AND"), "EqualityExpression");
    binary(
        b,
        "EqualityExpression",
        refs(&["EQUAL", "NOTEQUAL"]),
        "RelationalExpression",
    );
    b.rule(
        "RelationalExpression",
        seq![
            r("ShiftExpression"),
            star(choice![
                seq![refs(&["LE", "GE", "LT", "GT"]), r("ShiftExpression")],
                seq![r("INSTANCEOF"), r("ReferenceType")],
            ])
        ],
    );
    binary(
        b,
        "ShiftExpression",
        refs(&["SL", "SR", "BSR"]),
        "AdditiveExpression",
    );
    binary(
        b,
        "AdditiveExpression",
        refs(&["PLUS", "MINUS"]),
        "MultiplicativeExpression",
    );
    binary(
        b,
        "MultiplicativeExpression",
        refs(&["STAR", "DIV", "MOD"]),
        "UnaryExpression",
    );
    b.rule(
        "UnaryExpression",
        choice![
            seq![r("PrefixOp"), r("UnaryExpression")],
            seq![r("LPAR"), r("Type"), r("RPAR"), r("UnaryExpression")],
            seq![r("Primary"), star(r("Selector")), star(r("PostFixOp"))],
        ],
    );
    b.rule(
        "PrefixOp",
        refs(&["INC", "DEC", "BANG", "TILDA", "PLUS", "MINUS"]),
    );
    b.rule("PostFixOp", refs(&["INC", "DEC"]));
}

fn primaries(b: &mut GrammarBuilder) {
    b.rule(
        "Primary",
        choice![
            r("ParExpression"),
            seq![
                r("NonWildcardTypeArguments"),
                choice![
                    r("ExplicitGenericInvocationSuffix"),
                    seq![r("THIS"), r("Arguments")],
                ]
            ],
            seq![r("THIS"), opt(r("Arguments"))],
            seq![r("SUPER"), r("SuperSuffix")],
            r("Literal"),
            seq![r("NEW"), r("Creator")],
            seq![r("QualifiedIdentifier"), opt(r("IdentifierSuffix"))],
            seq![r("BasicType"), star(r("Dim")), r("DOT"), r("CLASS")],
            seq![r("VOID"), r("DOT"), r("CLASS")],
        ],
    );
    b.rule(
        "IdentifierSuffix",
        choice![
            seq![
                r("LBRK"),
                choice![
                    seq![r("RBRK"), star(r("Dim")), r("DOT"), r("CLASS")],
                    seq![r("Expression"), r("RBRK")],
                ]
            ],
            r("Arguments"),
            seq![
                r("DOT"),
                choice![
                    r("CLASS"),
                    r("ExplicitGenericInvocation"),
                    r("THIS"),
                    seq![r("SUPER"), r("Arguments")],
                    seq![
                        r("NEW"),
                        opt(r("NonWildcardTypeArguments")),
                        r("InnerCreator")
                    ],
                ]
            ],
        ],
    );
    b.rule(
        "ExplicitGenericInvocation",
        seq![
            r("NonWildcardTypeArguments"),
            r("ExplicitGenericInvocationSuffix")
        ],
    );
    b.rule(
        "NonWildcardTypeArguments",
        seq![
            r("LPOINT"),
            r("ReferenceType"),
            star(seq![r("COMMA"), r("ReferenceType")]),
            r("RPOINT")
        ],
    );
    b.rule(
        "ExplicitGenericInvocationSuffix",
        choice![
            seq![r("SUPER"), r("SuperSuffix")],
            seq![r("Identifier"), r("Arguments")],
        ],
    );
    b.rule(
        "Selector",
        choice![
            seq![r("DOT"), r("Identifier"), opt(r("Arguments"))],
            seq![r("DOT"), r("ExplicitGenericInvocation")],
            seq![r("DOT"), r("THIS")],
            seq![r("DOT"), r("SUPER"), r("SuperSuffix")],
            seq![
                r("DOT"),
                r("NEW"),
                opt(r("NonWildcardTypeArguments")),
                r("InnerCreator")
            ],
            r("DimExpr"),
        ],
    );
    b.rule(
        "SuperSuffix",
        choice![
            r("Arguments"),
            seq![r("DOT"), r("Identifier"), opt(r("Arguments"))],
        ],
    );
    b.rule(
        "Arguments",
        seq![
            r("LPAR"),
            opt(seq![
                r("Expression"),
                star(seq![r("COMMA"), r("Expression")])
            ]),
            r("RPAR")
        ],
    );
    b.rule(
        "ParExpression",
        seq![r("LPAR"), r("Expression"), r("RPAR")],
    );
}

fn creators(b: &mut GrammarBuilder) {
    b.rule(
        "Creator",
        choice![
            seq![
                opt(r("NonWildcardTypeArguments")),
                r("CreatedName"),
                r("ClassCreatorRest")
            ],
            seq![
                opt(r("NonWildcardTypeArguments")),
                choice![r("ClassType"), r("BasicType")],
                r("ArrayCreatorRest")
            ],
        ],
    );
    b.rule(
        "CreatedName",
        seq![
            r("Identifier"),
            opt(r("NonWildcardTypeArguments")),
            star(seq![
                r("DOT"),
                r("Identifier"),
                opt(r("NonWildcardTypeArguments"))
            ])
        ],
    );
    b.rule(
        "InnerCreator",
        seq![r("Identifier"), r("ClassCreatorRest")],
    );
    // More lenient than the language: a basic type may be followed by
    // neither a dimension expression nor an initializer.
    b.rule(
        "ArrayCreatorRest",
        seq![
            r("LBRK"),
            choice![
                seq![r("RBRK"), star(r("Dim")), r("ArrayInitializer")],
                seq![
                    r("Expression"),
                    r("RBRK"),
                    star(r("DimExpr")),
                    star(r("Dim"))
                ],
            ]
        ],
    );
    b.rule(
        "ClassCreatorRest",
        seq![r("Arguments"), opt(r("ClassBody"))],
    );
    b.rule(
        "ArrayInitializer",
        seq![
            r("LWING"),
            opt(seq![
                r("VariableInitializer"),
                star(seq![r("COMMA"), r("VariableInitializer")])
            ]),
            opt(r("COMMA")),
            r("RWING")
        ],
    );
    b.rule(
        "VariableInitializer",
        choice![r("ArrayInitializer"), r("Expression")],
    );
}
