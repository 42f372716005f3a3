use indoc::indoc;
use javap_peg::{Cause, ParseOutcome, Parser};

use super::grammar;

fn parse_rule(rule: &str, source: &str) -> ParseOutcome {
    let grammar = grammar();
    let id = grammar.rule_id(rule).unwrap();
    Parser::new(grammar).parse_rule(id, source)
}

/// Offset where `rule` stops matching `source`, if it matches.
fn end(rule: &str, source: &str) -> Option<usize> {
    parse_rule(rule, source).tree().map(|t| t.end())
}

fn matches_fully(rule: &str, source: &str) -> bool {
    end(rule, source) == Some(source.len())
}

#[test]
fn grammar_is_rooted_at_compilation_unit() {
    let grammar = grammar();
    assert_eq!(grammar.rule(grammar.root()).name(), "CompilationUnit");
}

#[test]
fn identifier_is_not_a_keyword() {
    assert_eq!(end("Identifier", "class"), None);
    assert_eq!(end("Identifier", "classify"), Some(8));
    assert_eq!(end("Identifier", "class1"), Some(6));
    assert_eq!(end("Identifier", "$outer_1 "), Some(9));
    assert_eq!(end("Identifier", "\\u0041bc"), Some(8));
}

#[test]
fn identifier_is_a_leaf() {
    let source = "héllo /* c */ x";
    let tree = parse_rule("Identifier", source).into_result().unwrap();

    assert_eq!(tree.root().label(), "Identifier");
    assert!(tree.root().children().is_empty());
    assert_eq!(tree.end(), source.len() - 1);
}

#[test]
fn keyword_terminals_need_a_word_boundary() {
    assert_eq!(end("CLASS", "class Foo"), Some(6));
    assert_eq!(end("CLASS", "classify"), None);
    assert_eq!(end("FINAL", "finally"), None);
    assert_eq!(end("FINALLY", "finally {"), Some(8));
}

#[test]
fn operator_guards() {
    assert_eq!(end("AND", "&&"), None);
    assert_eq!(end("AND", "&="), None);
    assert_eq!(end("AND", "& b"), Some(2));
    assert_eq!(end("LT", "<<"), None);
    assert_eq!(end("LPOINT", "<<"), Some(1));
    assert_eq!(end("SR", ">>>"), None);
    assert_eq!(end("BSR", ">>> 1"), Some(4));
}

#[test]
fn literals() {
    for literal in [
        "0",
        "42L",
        "0x7fFF",
        "0777",
        "3.14",
        ".5e-3",
        "1e10f",
        "2d",
        "0x1.8p1",
        "'a'",
        "'\\n'",
        "'\\u0041'",
        "\"tab\\there\"",
        "\"\\101\"",
        "true",
        "null",
    ] {
        assert!(matches_fully("Literal", literal), "{literal}");
    }
    assert_eq!(end("Literal", "nullable"), None);
    assert_eq!(end("Literal", "\"open"), None);
}

#[test]
fn expressions() {
    for expr in [
        "a = b ? c : d + e * -f",
        "x >>>= 2",
        "a &= b && c & d",
        "(int) y + (T[]) z",
        "i < size && j >= 0",
        "o instanceof java.util.List<?>",
        "new int[] { 1, 2, }",
        "new Foo<Bar>(1) { }",
        "this.<T>cast(x).y[0]++",
        "String.class",
        "int[][].class",
        "super.toString()",
        "!done || ~mask != 0",
    ] {
        assert!(matches_fully("Expression", expr), "{expr}");
    }
}

#[test]
fn compilation_unit() {
    let source = indoc! {r#"
        package demo.util;

        import java.util.*;
        import static java.lang.Math.max;

        /** Holds values. */
        @SuppressWarnings("unchecked")
        public final class Box<T extends Comparable<T>> implements Iterable<T> {
            private static final int LIMIT = 0x7f;
            private T[] items;
            private int size; // trailing comment

            public Box(int capacity) {
                items = (T[]) new Comparable[capacity];
            }

            public <R> R apply(Function<? super T, R> f) throws Exception {
                for (int i = 0; i < size; i++) {
                    if (items[i] == null) continue;
                }
                for (T item : this) {
                    System.out.println("item: " + item + '\n');
                }
                try {
                    return f.apply(items[0]);
                } catch (RuntimeException e) {
                    throw new IllegalStateException(e);
                } finally {
                    size >>>= 1;
                }
            }

            enum Mode { ON, OFF; }

            public Iterator<T> iterator() {
                return new Iterator<T>() {
                    public boolean hasNext() { return false; }
                    public T next() { return null; }
                    public void remove() {}
                };
            }
        }
    "#};

    let tree = Parser::new(grammar()).parse(source).into_result().unwrap();
    let root = tree.root();

    assert_eq!(tree.end(), source.len());
    assert_eq!(root.children_labeled("ImportDeclaration").count(), 2);
    assert_eq!(root.find_all("CatchClause").count(), 1);
    assert_eq!(root.find_all("EnumConstant").count(), 2);
    let names: Vec<_> = root
        .find_all("ClassDeclaration")
        .filter_map(|c| c.child("Identifier"))
        .map(|id| id.text(source).trim())
        .collect();
    assert_eq!(names, vec!["Box"]);
}

#[test]
fn interfaces_and_annotation_types() {
    let source = indoc! {r#"
        public interface Shape extends Comparable<Shape> {
            double PI = 3.14;
            double area();
            <T> T accept(Visitor<T> v);
        }

        @interface Marker {
            String value() default "x";
            int[] ids() default { 1, 2 };
        }
    "#};

    assert!(matches_fully("CompilationUnit", source));
}

#[test]
fn statements() {
    let source = indoc! {"
        {
            label: while (true) { break label; }
            do x--; while (x > 0);
            switch (k) { case 1: case A: f(); default: }
            synchronized (lock) { assert ok : \"msg\"; }
            final int[] a = {1}, b[] = null;
            class Local {}
            ;
        }
    "};

    assert!(matches_fully("Block", source.trim_end()));
}

#[test]
fn mismatch_points_at_furthest_failure() {
    let source = "class Foo { int x = ; }";
    let mismatch = Parser::new(grammar())
        .parse(source)
        .into_result()
        .unwrap_err();

    assert_eq!(mismatch.cause, Cause::Grammar);
    assert_eq!(mismatch.furthest, source.find(';').unwrap());
    assert!(!mismatch.expected.is_empty());
    let mut sorted = mismatch.expected.clone();
    sorted.sort();
    assert_eq!(sorted, mismatch.expected);
}

#[test]
fn memoization_is_transparent_on_java() {
    let source = "class A { int f(int a) { return a * (a + 1); } String s = \"x\"; }";
    let memoized = Parser::new(grammar()).parse(source).into_result().unwrap();
    let plain = Parser::builder(grammar())
        .memoize(false)
        .build()
        .parse(source)
        .into_result()
        .unwrap();

    assert_eq!(memoized.root(), plain.root());
    assert!(memoized.stats().memo_hits > 0);
    assert!(memoized.stats().rule_evaluations < plain.stats().rule_evaluations);
}
