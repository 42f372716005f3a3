//! The backtracking, memoizing evaluator.
//!
//! [`Parser`] is a cheap, reusable handle over a [`Grammar`]. Every call to
//! [`Parser::parse`] creates its own context (offset, node stack, memo table,
//! failure tracking), so one grammar serves any number of parses, including
//! concurrent ones on separate threads.

mod context;
mod memo;
mod outcome;
mod stack;
mod trace;


pub use outcome::{Cause, LimitError, Mismatch, ParseOutcome, ParseStats};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};

use crate::grammar::{Grammar, RuleId};

use context::ParseContext;

/// Resource bounds for a single parse.
///
/// Exceeding any of them ends the parse with [`Cause::Limit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    recursion_limit: u32,
    exec_fuel: u64,
    memo_limit: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            recursion_limit: 4096,
            exec_fuel: 10_000_000,
            memo_limit: 1_000_000,
        }
    }
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maximum nesting of rule calls.
    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.recursion_limit = limit;
        self
    }

    /// Maximum number of evaluation steps.
    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.exec_fuel = fuel;
        self
    }

    /// Maximum number of memo table entries.
    pub fn memo_limit(mut self, limit: usize) -> Self {
        self.memo_limit = limit;
        self
    }

    pub fn get_recursion_limit(&self) -> u32 {
        self.recursion_limit
    }

    pub fn get_exec_fuel(&self) -> u64 {
        self.exec_fuel
    }

    pub fn get_memo_limit(&self) -> usize {
        self.memo_limit
    }
}

/// Parses text against a grammar.
#[derive(Clone, Copy, Debug)]
pub struct Parser<'g> {
    grammar: &'g Grammar,
    limits: Limits,
    memoize: bool,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self::builder(grammar).build()
    }

    pub fn builder(grammar: &'g Grammar) -> ParserBuilder<'g> {
        ParserBuilder {
            grammar,
            limits: Limits::default(),
            memoize: true,
        }
    }

    pub fn grammar(&self) -> &'g Grammar {
        self.grammar
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Match the grammar's root rule against a prefix of `text`.
    pub fn parse(&self, text: &str) -> ParseOutcome {
        self.parse_rule(self.grammar.root(), text)
    }

    /// Match `rule` against a prefix of `text`.
    pub fn parse_rule(&self, rule: RuleId, text: &str) -> ParseOutcome {
        self.parse_rule_with(rule, text, &mut NoopTracer)
    }

    /// Like [`Parser::parse_rule`], reporting evaluation to `tracer`.
    pub fn parse_rule_with<T: Tracer>(
        &self,
        rule: RuleId,
        text: &str,
        tracer: &mut T,
    ) -> ParseOutcome {
        ParseContext::new(self.grammar, text, self.limits, self.memoize, tracer).run(rule)
    }
}

/// Builder for [`Parser`].
pub struct ParserBuilder<'g> {
    grammar: &'g Grammar,
    limits: Limits,
    memoize: bool,
}

impl<'g> ParserBuilder<'g> {
    pub fn limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn exec_fuel(mut self, fuel: u64) -> Self {
        self.limits = self.limits.exec_fuel(fuel);
        self
    }

    pub fn recursion_limit(mut self, limit: u32) -> Self {
        self.limits = self.limits.recursion_limit(limit);
        self
    }

    /// Honor per-rule memo policies. On by default; turning it off must not
    /// change any outcome, only the amount of work.
    pub fn memoize(mut self, enabled: bool) -> Self {
        self.memoize = enabled;
        self
    }

    pub fn build(self) -> Parser<'g> {
        Parser {
            grammar: self.grammar,
            limits: self.limits,
            memoize: self.memoize,
        }
    }
}
