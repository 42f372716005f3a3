use javap_peg::{Cause, LimitError, Mismatch, ParseStats};

use super::MismatchPrinter;

fn mismatch(furthest: usize, expected: &[&str], cause: Cause) -> Mismatch {
    Mismatch {
        furthest,
        expected: expected.iter().map(|e| e.to_string()).collect(),
        cause,
        stats: ParseStats::default(),
    }
}

#[test]
fn summary_lists_expectations() {
    let m = mismatch(4, &["'x'", "\"y\""], Cause::Grammar);
    let printer = MismatchPrinter::new(&m, "ab\ncd");

    insta::assert_snapshot!(printer.summary(), @r#"no match at 2:2, expected 'x', "y""#);
}

#[test]
fn summary_without_expectations() {
    let m = mismatch(2, &[], Cause::Grammar);
    insta::assert_snapshot!(MismatchPrinter::new(&m, "abc").summary(), @"no match at 1:3");
}

#[test]
fn summary_for_limits() {
    let m = mismatch(
        0,
        &["'a'"],
        Cause::Limit(LimitError::RecursionLimitExceeded),
    );
    insta::assert_snapshot!(
        MismatchPrinter::new(&m, "aaaa").summary(),
        @"recursion limit exceeded at 1:1"
    );
}

#[test]
fn render_shows_source_line_and_path() {
    let source = "public class A{\n}\n";
    let m = mismatch(14, &["'{'"], Cause::Grammar);
    let rendered = MismatchPrinter::new(&m, source).path("A.txt").render();

    assert!(rendered.starts_with("error: no match at 1:15"), "{rendered}");
    assert!(rendered.contains("A.txt"), "{rendered}");
    assert!(rendered.contains("public class A{"), "{rendered}");
    assert!(rendered.contains('^'), "{rendered}");
}

#[test]
fn render_at_end_of_input() {
    let source = "Compiled from ";
    let m = mismatch(source.len(), &["'\"'"], Cause::Grammar);
    let rendered = MismatchPrinter::new(&m, source).render();

    assert!(rendered.starts_with("error: no match at 1:15"), "{rendered}");
    assert!(rendered.contains("Compiled from"), "{rendered}");
}

#[test]
fn plain_render_has_no_escape_codes() {
    let m = mismatch(0, &[], Cause::Grammar);
    let rendered = MismatchPrinter::new(&m, "x").render();
    assert!(!rendered.contains('\x1b'));
}
