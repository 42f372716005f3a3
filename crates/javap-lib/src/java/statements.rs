//! Blocks and statements.

use javap_peg::expr::{opt, plus, r, star};
use javap_peg::{GrammarBuilder, choice, seq};

pub(super) fn define(b: &mut GrammarBuilder) {
    b.rule("Block", seq![r("LWING"), r("BlockStatements"), r("RWING")]);
    b.rule("BlockStatements", star(r("BlockStatement")));
    b.rule(
        "BlockStatement",
        choice![
            r("LocalVariableDeclarationStatement"),
            seq![
                star(r("Modifier")),
                choice![r("ClassDeclaration"), r("EnumDeclaration")]
            ],
            r("Statement"),
        ],
    );
    b.rule(
        "Statement",
        choice![
            r("Block"),
            seq![
                r("ASSERT"),
                r("Expression"),
                opt(seq![r("COLON"), r("Expression")]),
                r("SEMI")
            ],
            seq![
                r("IF"),
                r("ParExpression"),
                r("Statement"),
                opt(seq![r("ELSE"), r("Statement")])
            ],
            seq![
                r("FOR"),
                r("LPAR"),
                opt(r("ForInit")),
                r("SEMI"),
                opt(r("Expression")),
                r("SEMI"),
                opt(r("ForUpdate")),
                r("RPAR"),
                r("Statement")
            ],
            seq![
                r("FOR"),
                r("LPAR"),
                r("FormalParameter"),
                r("COLON"),
                r("Expression"),
                r("RPAR"),
                r("Statement")
            ],
            seq![r("WHILE"), r("ParExpression"), r("Statement")],
            seq![
                r("DO"),
                r("Statement"),
                r("WHILE"),
                r("ParExpression"),
                r("SEMI")
            ],
            seq![
                r("TRY"),
                r("Block"),
                choice![
                    seq![plus(r("CatchClause")), opt(r("FinallyClause"))],
                    r("FinallyClause"),
                ]
            ],
            seq![
                r("SWITCH"),
                r("ParExpression"),
                r("LWING"),
                r("SwitchBlockStatementGroups"),
                r("RWING")
            ],
            seq![r("SYNCHRONIZED"), r("ParExpression"), r("Block")],
            seq![r("RETURN"), opt(r("Expression")), r("SEMI")],
            seq![r("THROW"), r("Expression"), r("SEMI")],
            seq![r("BREAK"), opt(r("Identifier")), r("SEMI")],
            seq![r("CONTINUE"), opt(r("Identifier")), r("SEMI")],
            seq![r("Identifier"), r("COLON"), r("Statement")],
            seq![r("StatementExpression"), r("SEMI")],
            r("SEMI"),
        ],
    );
    b.rule(
        "CatchClause",
        seq![
            r("CATCH"),
            r("LPAR"),
            r("FormalParameter"),
            r("RPAR"),
            r("Block")
        ],
    );
    b.rule("FinallyClause", seq![r("FINALLY"), r("Block")]);
    b.rule(
        "SwitchBlockStatementGroups",
        star(r("SwitchBlockStatementGroup")),
    );
    b.rule(
        "SwitchBlockStatementGroup",
        seq![r("SwitchLabel"), r("BlockStatements")],
    );
    b.rule(
        "SwitchLabel",
        choice![
            seq![r("CASE"), r("ConstantExpression"), r("COLON")],
            seq![r("CASE"), r("EnumConstantName"), r("COLON")],
            seq![r("DEFAULT"), r("COLON")],
        ],
    );
    b.rule(
        "ForInit",
        choice![
            seq![
                star(choice![r("FINAL"), r("Annotation")]),
                r("Type"),
                r("VariableDeclarators")
            ],
            seq![
                r("StatementExpression"),
                star(seq![r("COMMA"), r("StatementExpression")])
            ],
        ],
    );
    b.rule(
        "ForUpdate",
        seq![
            r("StatementExpression"),
            star(seq![r("COMMA"), r("StatementExpression")])
        ],
    );
    b.rule("EnumConstantName", r("Identifier"));
}
