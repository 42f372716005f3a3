use indoc::indoc;
use javap_peg::Parser;

use super::{ClassRecord, LineNumber, LocalVariable, MemberKind, ProjectError, TypeKind, unescape};
use crate::{Error, java, parse_transcript};

const CANONICAL: &str = concat!(
    "Compiled from \"JavapJsonMojo.java\"\n",
    "public class nl.bneijt.javapjson.JavapJsonMojo extends org.apache.maven.plugin.AbstractMojo{\n",
    "public nl.bneijt.javapjson.JavapJsonMojo();\n",
    "  LineNumberTable: \n",
    "   line 41: 0\n",
    "\n",
    "  LocalVariableTable: \n",
    "   Start  Length  Slot  Name   Signature\n",
    "   0      5      0    this       Lnl/bneijt/javapjson/JavapJsonMojo;\n",
    "\n",
    "\n",
    "public void execute()   throws org.apache.maven.plugin.MojoExecutionException;\n",
    "  LineNumberTable: \n",
    "   line 92: 0\n",
    "\n",
    "  LocalVariableTable: \n",
    "   Start  Length  Slot  Name   Signature\n",
    "   0      10      0    this       Lnl/bneijt/javapjson/JavapJsonMojo;\n",
    "\n",
    "\n",
    "}\n",
    "\n",
);

#[test]
fn canonical_transcript_projection() {
    let class = parse_transcript(CANONICAL).unwrap();

    assert_eq!(class.source_file, "JavapJsonMojo.java");
    assert_eq!(class.kind, TypeKind::Class);
    assert_eq!(class.name, "nl.bneijt.javapjson.JavapJsonMojo");
    assert_eq!(class.descriptor(), "Lnl/bneijt/javapjson/JavapJsonMojo;");
    assert_eq!(class.extends, vec!["org.apache.maven.plugin.AbstractMojo"]);
    assert!(class.fields.is_empty());

    let [ctor, execute] = class.members.as_slice() else {
        panic!("expected two members, got {}", class.members.len());
    };
    assert_eq!(ctor.kind, MemberKind::Constructor);
    assert_eq!(ctor.name, class.name);
    assert_eq!(ctor.line_numbers, vec![LineNumber { line: 41, offset: 0 }]);

    assert_eq!(execute.kind, MemberKind::Method);
    assert_eq!(execute.name, "execute");
    assert_eq!(execute.return_type.as_deref(), Some("void"));
    assert_eq!(
        execute.local_variables,
        vec![LocalVariable {
            start: 0,
            length: 10,
            slot: 0,
            name: "this".to_owned(),
            descriptor: class.descriptor(),
        }]
    );
}

#[test]
fn canonical_transcript_json() {
    let class = parse_transcript(CANONICAL).unwrap();
    let json = serde_json::to_string_pretty(&class).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "source_file": "JavapJsonMojo.java",
      "kind": "class",
      "modifiers": [
        "public"
      ],
      "name": "nl.bneijt.javapjson.JavapJsonMojo",
      "internal_name": "nl/bneijt/javapjson/JavapJsonMojo",
      "extends": [
        "org.apache.maven.plugin.AbstractMojo"
      ],
      "implements": [],
      "fields": [],
      "members": [
        {
          "kind": "constructor",
          "signature": "public nl.bneijt.javapjson.JavapJsonMojo()",
          "name": "nl.bneijt.javapjson.JavapJsonMojo",
          "modifiers": [
            "public"
          ],
          "parameters": [],
          "line_numbers": [
            {
              "line": 41,
              "offset": 0
            }
          ],
          "local_variables": [
            {
              "start": 0,
              "length": 5,
              "slot": 0,
              "name": "this",
              "descriptor": "Lnl/bneijt/javapjson/JavapJsonMojo;"
            }
          ]
        },
        {
          "kind": "method",
          "signature": "public void execute()   throws org.apache.maven.plugin.MojoExecutionException",
          "name": "execute",
          "modifiers": [
            "public"
          ],
          "return_type": "void",
          "parameters": [],
          "throws": [
            "org.apache.maven.plugin.MojoExecutionException"
          ],
          "line_numbers": [
            {
              "line": 92,
              "offset": 0
            }
          ],
          "local_variables": [
            {
              "start": 0,
              "length": 10,
              "slot": 0,
              "name": "this",
              "descriptor": "Lnl/bneijt/javapjson/JavapJsonMojo;"
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn generic_interface_with_fields() {
    let source = indoc! {r#"
        Compiled from "Registry.java"
        public abstract interface demo.Registry<K> extends demo.Base{
        public static final int LIMIT;

        public static {};
          LineNumberTable:
           line 5: 0

          LocalVariableTable:
           Start  Length  Slot  Name   Signature
           0      12      0    count       I


        public abstract <V> V lookup(K, java.lang.String...)   throws java.io.IOException;
          LineNumberTable:
           line 9: 0

          LocalVariableTable:
           Start  Length  Slot  Name   Signature
           0      3      0    this       Ldemo/Registry;
           0      3      2    names       [Ljava/lang/String;


        }
    "#};

    let class = parse_transcript(source).unwrap();

    assert_eq!(class.kind, TypeKind::Interface);
    assert_eq!(class.modifiers, vec!["public", "abstract"]);
    assert_eq!(class.type_parameters.as_deref(), Some("<K>"));
    assert_eq!(class.fields.len(), 1);
    assert_eq!(class.fields[0].type_name, "int");
    assert_eq!(class.fields[0].name, "LIMIT");
    assert_eq!(class.fields[0].modifiers, vec!["public", "static", "final"]);

    let clinit = &class.members[0];
    assert_eq!(clinit.kind, MemberKind::StaticInitializer);
    assert_eq!(clinit.name, "<clinit>");
    assert_eq!(clinit.signature, "public static {}");

    let lookup = &class.members[1];
    assert_eq!(lookup.type_parameters.as_deref(), Some("<V>"));
    assert_eq!(lookup.return_type.as_deref(), Some("V"));
    assert_eq!(lookup.parameters, vec!["K", "java.lang.String..."]);
    assert_eq!(lookup.throws, vec!["java.io.IOException"]);
    assert_eq!(lookup.local_variables[1].slot, 2);
    assert_eq!(lookup.local_variables[1].descriptor, "[Ljava/lang/String;");
}

#[test]
fn oversized_line_number_is_reported() {
    let source = CANONICAL.replacen("line 41: 0", "line 99999999999: 0", 1);
    let err = parse_transcript(&source).unwrap_err();

    let Error::Project(ProjectError::InvalidNumber { text, span, what }) = err else {
        panic!("expected an invalid number");
    };
    assert_eq!(text, "99999999999");
    assert_eq!(span.slice(&source), "99999999999");
    assert_eq!(what, "line number");
}

#[test]
fn mismatch_is_passed_through() {
    let err = parse_transcript("Compiled from Foo.java\n").unwrap_err();
    let Error::Mismatch(mismatch) = err else {
        panic!("expected a mismatch");
    };
    assert_eq!(mismatch.furthest, "Compiled from ".len());
}

#[test]
fn tree_from_another_grammar_is_rejected() {
    let source = "class A {}";
    let tree = Parser::new(java::grammar())
        .parse(source)
        .into_result()
        .unwrap();

    assert_eq!(
        ClassRecord::from_tree(&tree, source),
        Err(ProjectError::MissingNode {
            label: "SourceHeader"
        })
    );
}

#[test]
fn string_escapes() {
    assert_eq!(unescape("plain.java"), "plain.java");
    assert_eq!(unescape(r#"a\tb\\c\"d"#), "a\tb\\c\"d");
    assert_eq!(unescape(r"A\uu0042"), "AB");
    assert_eq!(unescape(r"\101\7"), "A\u{7}");
    assert_eq!(unescape(r"\400"), " 0");
    assert_eq!(unescape(r"bad\uZZ"), r"bad\uZZ");
    assert_eq!(unescape("trailing\\"), "trailing\\");
}
