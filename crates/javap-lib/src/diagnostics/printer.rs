//! Builder-pattern printer for rendering mismatches against their source.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Level, Renderer, Snippet};
use javap_core::LineIndex;
use javap_peg::{Cause, Mismatch};

/// Builder for rendering a [`Mismatch`] as an annotated source excerpt.
pub struct MismatchPrinter<'m, 's> {
    mismatch: &'m Mismatch,
    source: &'s str,
    path: Option<&'s str>,
    colored: bool,
}

impl<'m, 's> MismatchPrinter<'m, 's> {
    pub fn new(mismatch: &'m Mismatch, source: &'s str) -> Self {
        Self {
            mismatch,
            source,
            path: None,
            colored: false,
        }
    }

    pub fn path(mut self, path: &'s str) -> Self {
        self.path = Some(path);
        self
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    /// One line: what failed and where, as `line:column`.
    pub fn summary(&self) -> String {
        let position = LineIndex::new(self.source).position(self.mismatch.furthest);
        match self.mismatch.cause {
            Cause::Limit(limit) => format!("{limit} at {position}"),
            Cause::Grammar if self.mismatch.expected.is_empty() => {
                format!("no match at {position}")
            }
            Cause::Grammar => format!(
                "no match at {position}, expected {}",
                self.mismatch.expected.join(", ")
            ),
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        let label = match self.mismatch.cause {
            Cause::Limit(_) => "parsing stopped here".to_owned(),
            Cause::Grammar if self.mismatch.expected.is_empty() => {
                "unexpected input".to_owned()
            }
            Cause::Grammar => format!("expected {}", self.mismatch.expected.join(", ")),
        };

        let range = adjust_range(self.mismatch.furthest, self.source);
        let mut snippet = Snippet::source(self.source)
            .line_start(1)
            .annotation(AnnotationKind::Primary.span(range).label(&label));
        if let Some(p) = self.path {
            snippet = snippet.path(p);
        }

        let title = self.summary();
        let report = vec![Level::ERROR.primary_title(&title).element(snippet)];
        write!(w, "{}", renderer.render(&report))
    }
}

/// One character wide span at `offset`, empty at the end of the source.
fn adjust_range(offset: usize, source: &str) -> std::ops::Range<usize> {
    let start = offset.min(source.len());
    let width = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + width
}
