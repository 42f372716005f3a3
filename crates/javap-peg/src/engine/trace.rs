//! Tracing infrastructure for debugging rule evaluation.
//!
//! The tracer is a zero-cost abstraction: with [`NoopTracer`] every hook is an
//! empty `#[inline(always)]` function and the calls compile away. Tracers get
//! raw ids and offsets; name resolution and formatting happen in the tracer.

use javap_core::Colors;
use javap_core::text::preview;

use crate::grammar::{Grammar, RuleId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Rules that produce nodes: entry and result.
    #[default]
    Default,
    /// (-v): every rule, plus memo hits.
    Verbose,
    /// (-vv): everything, with matched text on success.
    VeryVerbose,
}

/// Hooks called by the evaluator.
///
/// - `trace_enter` - before a rule body is evaluated
/// - `trace_exit` - after it, with the end offset on success
/// - `trace_memo_hit` - when a cached result replaces evaluation
/// - `trace_backtrack` - when an ordered choice moves to its next alternative
pub trait Tracer {
    fn trace_enter(&mut self, rule: RuleId, offset: usize);

    fn trace_exit(&mut self, rule: RuleId, start: usize, end: Option<usize>);

    fn trace_memo_hit(&mut self, rule: RuleId, offset: usize, end: Option<usize>);

    fn trace_backtrack(&mut self, offset: usize);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _rule: RuleId, _offset: usize) {}

    #[inline(always)]
    fn trace_exit(&mut self, _rule: RuleId, _start: usize, _end: Option<usize>) {}

    #[inline(always)]
    fn trace_memo_hit(&mut self, _rule: RuleId, _offset: usize, _end: Option<usize>) {}

    #[inline(always)]
    fn trace_backtrack(&mut self, _offset: usize) {}
}

const PREVIEW_CHARS: usize = 40;

/// Tracer that collects an indented call log.
///
/// ```text
/// Sum @0
///   Num @0
///   Num @0 ✓ 0..1
/// Sum @0 ✓ 0..3
/// ```
pub struct PrintTracer<'g, 's> {
    grammar: &'g Grammar,
    source: &'s str,
    verbosity: Verbosity,
    colors: Colors,
    lines: Vec<String>,
    /// Depth of shown calls; hidden rules do not indent.
    depth: usize,
    /// Whether each open call was shown, for matching exits.
    shown: Vec<bool>,
}

impl<'g, 's> PrintTracer<'g, 's> {
    pub fn new(grammar: &'g Grammar, source: &'s str) -> Self {
        Self {
            grammar,
            source,
            verbosity: Verbosity::Default,
            colors: Colors::OFF,
            lines: Vec::new(),
            depth: 0,
            shown: Vec::new(),
        }
    }

    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn print(&self) {
        for line in &self.lines {
            println!("{line}");
        }
    }

    fn is_shown(&self, rule: RuleId) -> bool {
        self.verbosity != Verbosity::Default || !self.grammar.rule(rule).suppresses_node()
    }

    fn push_line(&mut self, body: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{body}"));
    }

    fn result(&self, start: usize, end: Option<usize>) -> String {
        let c = self.colors;
        match end {
            Some(end) => {
                let mut out = format!("{}✓{} {}{start}..{end}{}", c.green, c.reset, c.dim, c.reset);
                if self.verbosity == Verbosity::VeryVerbose {
                    let text = self.source.get(start..end).unwrap_or("");
                    out.push(' ');
                    out.push_str(c.green);
                    out.push_str(&preview(text, PREVIEW_CHARS));
                    out.push_str(c.reset);
                }
                out
            }
            None => format!("{}✗{}", c.red, c.reset),
        }
    }
}

impl Tracer for PrintTracer<'_, '_> {
    fn trace_enter(&mut self, rule: RuleId, offset: usize) {
        let shown = self.is_shown(rule);
        self.shown.push(shown);
        if !shown {
            return;
        }
        let c = self.colors;
        let grammar = self.grammar;
        let name = grammar.rule(rule).name();
        self.push_line(format!("{}{name}{} {}@{offset}{}", c.blue, c.reset, c.dim, c.reset));
        self.depth += 1;
    }

    fn trace_exit(&mut self, rule: RuleId, start: usize, end: Option<usize>) {
        if !self.shown.pop().unwrap_or(false) {
            return;
        }
        self.depth = self.depth.saturating_sub(1);
        let c = self.colors;
        let grammar = self.grammar;
        let name = grammar.rule(rule).name();
        let result = self.result(start, end);
        self.push_line(format!("{}{name}{} {}@{start}{} {result}", c.blue, c.reset, c.dim, c.reset));
    }

    fn trace_memo_hit(&mut self, rule: RuleId, offset: usize, end: Option<usize>) {
        if self.verbosity == Verbosity::Default {
            return;
        }
        let c = self.colors;
        let grammar = self.grammar;
        let name = grammar.rule(rule).name();
        let result = self.result(offset, end);
        self.push_line(format!(
            "{}{name}{} {}@{offset} (memo){} {result}",
            c.blue, c.reset, c.dim, c.reset
        ));
    }

    fn trace_backtrack(&mut self, offset: usize) {
        if self.verbosity != Verbosity::VeryVerbose {
            return;
        }
        let c = self.colors;
        self.push_line(format!("{}↩ @{offset}{}", c.dim, c.reset));
    }
}
