//! Compilation units and declarations: types, members, variables,
//! parameters and annotations.

use javap_peg::expr::{eoi, opt, r, star};
use javap_peg::{GrammarBuilder, choice, seq};

pub(super) fn define(b: &mut GrammarBuilder) {
    compilation_unit(b);
    classes(b);
    interfaces(b);
    enums(b);
    variables(b);
    parameters(b);
    annotations(b);
}

fn compilation_unit(b: &mut GrammarBuilder) {
    b.rule(
        "CompilationUnit",
        seq![
            r("Spacing"),
            opt(r("PackageDeclaration")),
            star(r("ImportDeclaration")),
            star(r("TypeDeclaration")),
            eoi()
        ],
    );
    b.rule(
        "PackageDeclaration",
        seq![
            star(r("Annotation")),
            r("PACKAGE"),
            r("QualifiedIdentifier"),
            r("SEMI")
        ],
    );
    b.rule(
        "ImportDeclaration",
        seq![
            r("IMPORT"),
            opt(r("STATIC")),
            r("QualifiedIdentifier"),
            opt(seq![r("DOT"), r("STAR")]),
            r("SEMI")
        ],
    );
    b.rule(
        "TypeDeclaration",
        choice![
            seq![
                star(r("Modifier")),
                choice![
                    r("ClassDeclaration"),
                    r("EnumDeclaration"),
                    r("InterfaceDeclaration"),
                    r("AnnotationTypeDeclaration"),
                ]
            ],
            r("SEMI"),
        ],
    );
}

fn classes(b: &mut GrammarBuilder) {
    b.rule(
        "ClassDeclaration",
        seq![
            r("CLASS"),
            r("Identifier"),
            opt(r("TypeParameters")),
            opt(seq![r("EXTENDS"), r("ClassType")]),
            opt(seq![r("IMPLEMENTS"), r("ClassTypeList")]),
            r("ClassBody")
        ],
    );
    b.rule(
        "ClassBody",
        seq![r("LWING"), star(r("ClassBodyDeclaration")), r("RWING")],
    );
    b.rule(
        "ClassBodyDeclaration",
        choice![
            r("SEMI"),
            seq![opt(r("STATIC")), r("Block")],
            seq![star(r("Modifier")), r("MemberDecl")],
        ],
    );
    b.rule(
        "MemberDecl",
        choice![
            seq![r("TypeParameters"), r("GenericMethodOrConstructorRest")],
            seq![r("Type"), r("Identifier"), r("MethodDeclaratorRest")],
            seq![r("Type"), r("VariableDeclarators"), r("SEMI")],
            seq![r("VOID"), r("Identifier"), r("VoidMethodDeclaratorRest")],
            seq![r("Identifier"), r("ConstructorDeclaratorRest")],
            r("InterfaceDeclaration"),
            r("ClassDeclaration"),
            r("EnumDeclaration"),
            r("AnnotationTypeDeclaration"),
        ],
    );
    b.rule(
        "GenericMethodOrConstructorRest",
        choice![
            seq![
                choice![r("Type"), r("VOID")],
                r("Identifier"),
                r("MethodDeclaratorRest")
            ],
            seq![r("Identifier"), r("ConstructorDeclaratorRest")],
        ],
    );
    b.rule(
        "MethodDeclaratorRest",
        seq![
            r("FormalParameters"),
            star(r("Dim")),
            opt(seq![r("THROWS"), r("ClassTypeList")]),
            choice![r("MethodBody"), r("SEMI")]
        ],
    );
    b.rule(
        "VoidMethodDeclaratorRest",
        seq![
            r("FormalParameters"),
            opt(seq![r("THROWS"), r("ClassTypeList")]),
            choice![r("MethodBody"), r("SEMI")]
        ],
    );
    b.rule(
        "ConstructorDeclaratorRest",
        seq![
            r("FormalParameters"),
            opt(seq![r("THROWS"), r("ClassTypeList")]),
            r("MethodBody")
        ],
    );
    b.rule("MethodBody", r("Block"));
}

fn interfaces(b: &mut GrammarBuilder) {
    b.rule(
        "InterfaceDeclaration",
        seq![
            r("INTERFACE"),
            r("Identifier"),
            opt(r("TypeParameters")),
            opt(seq![r("EXTENDS"), r("ClassTypeList")]),
            r("InterfaceBody")
        ],
    );
    b.rule(
        "InterfaceBody",
        seq![r("LWING"), star(r("InterfaceBodyDeclaration")), r("RWING")],
    );
    b.rule(
        "InterfaceBodyDeclaration",
        choice![
            seq![star(r("Modifier")), r("InterfaceMemberDecl")],
            r("SEMI"),
        ],
    );
    b.rule(
        "InterfaceMemberDecl",
        choice![
            r("InterfaceMethodOrFieldDecl"),
            r("InterfaceGenericMethodDecl"),
            seq![
                r("VOID"),
                r("Identifier"),
                r("VoidInterfaceMethodDeclaratorsRest")
            ],
            r("InterfaceDeclaration"),
            r("AnnotationTypeDeclaration"),
            r("ClassDeclaration"),
            r("EnumDeclaration"),
        ],
    );
    b.rule(
        "InterfaceMethodOrFieldDecl",
        seq![r("Type"), r("Identifier"), r("InterfaceMethodOrFieldRest")],
    );
    b.rule(
        "InterfaceMethodOrFieldRest",
        choice![
            seq![r("ConstantDeclaratorsRest"), r("SEMI")],
            r("InterfaceMethodDeclaratorRest"),
        ],
    );
    b.rule(
        "InterfaceMethodDeclaratorRest",
        seq![
            r("FormalParameters"),
            star(r("Dim")),
            opt(seq![r("THROWS"), r("ClassTypeList")]),
            r("SEMI")
        ],
    );
    b.rule(
        "InterfaceGenericMethodDecl",
        seq![
            r("TypeParameters"),
            choice![r("Type"), r("VOID")],
            r("Identifier"),
            r("InterfaceMethodDeclaratorRest")
        ],
    );
    b.rule(
        "VoidInterfaceMethodDeclaratorsRest",
        seq![
            r("FormalParameters"),
            opt(seq![r("THROWS"), r("ClassTypeList")]),
            r("SEMI")
        ],
    );
    b.rule(
        "ConstantDeclaratorsRest",
        seq![
            r("ConstantDeclaratorRest"),
            star(seq![r("COMMA"), r("ConstantDeclarator")])
        ],
    );
    b.rule(
        "ConstantDeclarator",
        seq![r("Identifier"), r("ConstantDeclaratorRest")],
    );
    b.rule(
        "ConstantDeclaratorRest",
        seq![star(r("Dim")), r("EQU"), r("VariableInitializer")],
    );
}

fn enums(b: &mut GrammarBuilder) {
    b.rule(
        "EnumDeclaration",
        seq![
            r("ENUM"),
            r("Identifier"),
            opt(seq![r("IMPLEMENTS"), r("ClassTypeList")]),
            r("EnumBody")
        ],
    );
    b.rule(
        "EnumBody",
        seq![
            r("LWING"),
            opt(r("EnumConstants")),
            opt(r("COMMA")),
            opt(r("EnumBodyDeclarations")),
            r("RWING")
        ],
    );
    b.rule(
        "EnumConstants",
        seq![
            r("EnumConstant"),
            star(seq![r("COMMA"), r("EnumConstant")])
        ],
    );
    b.rule(
        "EnumConstant",
        seq![
            star(r("Annotation")),
            r("Identifier"),
            opt(r("Arguments")),
            opt(r("ClassBody"))
        ],
    );
    b.rule(
        "EnumBodyDeclarations",
        seq![r("SEMI"), star(r("ClassBodyDeclaration"))],
    );
}

fn variables(b: &mut GrammarBuilder) {
    b.rule(
        "LocalVariableDeclarationStatement",
        seq![
            star(choice![r("FINAL"), r("Annotation")]),
            r("Type"),
            r("VariableDeclarators"),
            r("SEMI")
        ],
    );
    b.rule(
        "VariableDeclarators",
        seq![
            r("VariableDeclarator"),
            star(seq![r("COMMA"), r("VariableDeclarator")])
        ],
    );
    b.rule(
        "VariableDeclarator",
        seq![
            r("Identifier"),
            star(r("Dim")),
            opt(seq![r("EQU"), r("VariableInitializer")])
        ],
    );
}

fn parameters(b: &mut GrammarBuilder) {
    b.rule(
        "FormalParameters",
        seq![r("LPAR"), opt(r("FormalParameterDecls")), r("RPAR")],
    );
    b.rule(
        "FormalParameter",
        seq![
            star(choice![r("FINAL"), r("Annotation")]),
            r("Type"),
            r("VariableDeclaratorId")
        ],
    );
    b.rule(
        "FormalParameterDecls",
        seq![
            star(choice![r("FINAL"), r("Annotation")]),
            r("Type"),
            r("FormalParameterDeclsRest")
        ],
    );
    b.rule(
        "FormalParameterDeclsRest",
        choice![
            seq![
                r("VariableDeclaratorId"),
                opt(seq![r("COMMA"), r("FormalParameterDecls")])
            ],
            seq![r("ELLIPSIS"), r("VariableDeclaratorId")],
        ],
    );
    b.rule(
        "VariableDeclaratorId",
        seq![r("Identifier"), star(r("Dim"))],
    );
}

fn annotations(b: &mut GrammarBuilder) {
    b.rule(
        "AnnotationTypeDeclaration",
        seq![
            r("AT"),
            r("INTERFACE"),
            r("Identifier"),
            r("AnnotationTypeBody")
        ],
    );
    b.rule(
        "AnnotationTypeBody",
        seq![
            r("LWING"),
            star(r("AnnotationTypeElementDeclaration")),
            r("RWING")
        ],
    );
    b.rule(
        "AnnotationTypeElementDeclaration",
        choice![
            seq![star(r("Modifier")), r("AnnotationTypeElementRest")],
            r("SEMI"),
        ],
    );
    b.rule(
        "AnnotationTypeElementRest",
        choice![
            seq![r("Type"), r("AnnotationMethodOrConstantRest"), r("SEMI")],
            r("ClassDeclaration"),
            r("EnumDeclaration"),
            r("InterfaceDeclaration"),
            r("AnnotationTypeDeclaration"),
        ],
    );
    b.rule(
        "AnnotationMethodOrConstantRest",
        choice![r("AnnotationMethodRest"), r("AnnotationConstantRest")],
    );
    b.rule(
        "AnnotationMethodRest",
        seq![
            r("Identifier"),
            r("LPAR"),
            r("RPAR"),
            opt(r("DefaultValue"))
        ],
    );
    b.rule("AnnotationConstantRest", r("VariableDeclarators"));
    b.rule("DefaultValue", seq![r("DEFAULT"), r("ElementValue")]);

    b.rule(
        "Annotation",
        seq![
            r("AT"),
            r("QualifiedIdentifier"),
            opt(r("AnnotationRest"))
        ],
    )
    .memo_mismatches();
    b.rule(
        "AnnotationRest",
        choice![r("NormalAnnotationRest"), r("SingleElementAnnotationRest")],
    );
    b.rule(
        "NormalAnnotationRest",
        seq![r("LPAR"), opt(r("ElementValuePairs")), r("RPAR")],
    );
    b.rule(
        "ElementValuePairs",
        seq![
            r("ElementValuePair"),
            star(seq![r("COMMA"), r("ElementValuePair")])
        ],
    );
    b.rule(
        "ElementValuePair",
        seq![r("Identifier"), r("EQU"), r("ElementValue")],
    );
    b.rule(
        "ElementValue",
        choice![
            r("ConditionalExpression"),
            r("Annotation"),
            r("ElementValueArrayInitializer"),
        ],
    );
    b.rule(
        "ElementValueArrayInitializer",
        seq![
            r("LWING"),
            opt(r("ElementValues")),
            opt(r("COMMA")),
            r("RWING")
        ],
    );
    b.rule(
        "ElementValues",
        seq![
            r("ElementValue"),
            star(seq![r("COMMA"), r("ElementValue")])
        ],
    );
    b.rule(
        "SingleElementAnnotationRest",
        seq![r("LPAR"), r("ElementValue"), r("RPAR")],
    );
}
