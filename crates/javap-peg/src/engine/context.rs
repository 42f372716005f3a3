//! Per-parse evaluation state and the backtracking evaluator.

use std::sync::Arc;

use javap_core::Span;

use crate::grammar::{Grammar, MemoPolicy, Op, RuleId};
use crate::tree::{ParseNode, ParseTree};

use super::memo::{MemoEntry, MemoTable};
use super::outcome::{Cause, LimitError, Mismatch, ParseOutcome, ParseStats};
use super::stack::ensure_sufficient_stack;
use super::trace::Tracer;
use super::Limits;

/// Position to restore on failure: input offset plus node stack height.
#[derive(Clone, Copy)]
struct Mark {
    pos: usize,
    nodes: usize,
}

pub(crate) struct ParseContext<'g, 's, 't, T: Tracer> {
    grammar: &'g Grammar,
    text: &'s str,
    pos: usize,
    /// Nodes produced by finished rules, not yet claimed by a parent.
    nodes: Vec<ParseNode>,
    memo: MemoTable,
    memoize: bool,
    limits: Limits,
    depth: u32,
    /// Nesting of lookahead predicates; expectations are not tracked inside.
    lookahead: u32,
    furthest: usize,
    expected: Vec<u32>,
    abort: Option<LimitError>,
    stats: ParseStats,
    tracer: &'t mut T,
}

impl<'g, 's, 't, T: Tracer> ParseContext<'g, 's, 't, T> {
    pub(crate) fn new(
        grammar: &'g Grammar,
        text: &'s str,
        limits: Limits,
        memoize: bool,
        tracer: &'t mut T,
    ) -> Self {
        Self {
            grammar,
            text,
            pos: 0,
            nodes: Vec::new(),
            memo: MemoTable::default(),
            memoize,
            limits,
            depth: 0,
            lookahead: 0,
            furthest: 0,
            expected: Vec::new(),
            abort: None,
            stats: ParseStats::default(),
            tracer,
        }
    }

    pub(crate) fn run(mut self, entry: RuleId) -> ParseOutcome {
        let matched = self.call(entry);
        self.stats.memo_entries = self.memo.len();

        if let Some(limit) = self.abort {
            return ParseOutcome::Mismatched(Mismatch {
                furthest: self.furthest.max(self.pos),
                expected: Vec::new(),
                cause: Cause::Limit(limit),
                stats: self.stats,
            });
        }

        if !matched {
            return ParseOutcome::Mismatched(self.mismatch());
        }

        let rule = self.grammar.rule(entry);
        let root = match self.nodes.pop() {
            Some(node) if self.nodes.is_empty() && !rule.suppresses_node() => node,
            _ => ParseNode::new(
                rule.label().clone(),
                entry,
                Span::new(0, self.pos),
                Vec::new(),
            ),
        };
        ParseOutcome::Matched(ParseTree::new(root, self.pos, self.stats))
    }

    fn mismatch(&self) -> Mismatch {
        let mut expected: Vec<String> = self
            .expected
            .iter()
            .map(|&term| self.grammar.terminal(term).to_owned())
            .collect();
        expected.sort();
        expected.dedup();
        Mismatch {
            furthest: self.furthest,
            expected,
            cause: Cause::Grammar,
            stats: self.stats,
        }
    }

    #[inline]
    fn mark(&self) -> Mark {
        Mark {
            pos: self.pos,
            nodes: self.nodes.len(),
        }
    }

    #[inline]
    fn reset(&mut self, mark: Mark) {
        self.pos = mark.pos;
        self.nodes.truncate(mark.nodes);
    }

    #[inline]
    fn aborted(&self) -> bool {
        self.abort.is_some()
    }

    fn stop(&mut self, limit: LimitError) -> bool {
        self.abort.get_or_insert(limit);
        false
    }

    fn expect(&mut self, term: u32) {
        if self.lookahead > 0 || self.pos < self.furthest {
            return;
        }
        if self.pos > self.furthest {
            self.furthest = self.pos;
            self.expected.clear();
        }
        if !self.expected.contains(&term) {
            self.expected.push(term);
        }
    }

    #[inline]
    fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    /// Evaluate `op` at the current offset.
    ///
    /// On failure the offset and node stack are back where they started.
    fn eval(&mut self, op: &'g Op) -> bool {
        if self.aborted() {
            return false;
        }
        self.stats.steps += 1;
        if self.stats.steps > self.limits.get_exec_fuel() {
            return self.stop(LimitError::ExecFuelExhausted);
        }

        match op {
            Op::Literal { text, term } => {
                if self.text[self.pos..].starts_with(&**text) {
                    self.pos += text.len();
                    true
                } else {
                    self.expect(*term);
                    false
                }
            }
            Op::Class { class, term } => match self.peek() {
                Some(c) if class.matches(c) => {
                    self.pos += c.len_utf8();
                    true
                }
                _ => {
                    self.expect(*term);
                    false
                }
            },
            Op::Any { term } => match self.peek() {
                Some(c) => {
                    self.pos += c.len_utf8();
                    true
                }
                None => {
                    self.expect(*term);
                    false
                }
            },
            Op::Eoi { term } => {
                if self.pos == self.text.len() {
                    true
                } else {
                    self.expect(*term);
                    false
                }
            }
            Op::Seq(items) => {
                let mark = self.mark();
                for item in items.iter() {
                    if !self.eval(item) {
                        self.reset(mark);
                        return false;
                    }
                }
                true
            }
            Op::Choice(alts) => {
                let mark = self.mark();
                for alt in alts.iter() {
                    if self.eval(alt) {
                        return true;
                    }
                    if self.aborted() {
                        return false;
                    }
                    self.reset(mark);
                    self.tracer.trace_backtrack(mark.pos);
                }
                false
            }
            Op::ZeroOrMore(body) => {
                self.repeat(body);
                !self.aborted()
            }
            Op::OneOrMore(body) => {
                if !self.eval(body) {
                    return false;
                }
                self.repeat(body);
                !self.aborted()
            }
            Op::Optional(body) => {
                let mark = self.mark();
                if !self.eval(body) {
                    self.reset(mark);
                }
                !self.aborted()
            }
            Op::And(body) => self.lookahead(body) && !self.aborted(),
            Op::Not(body) => !self.lookahead(body) && !self.aborted(),
            Op::Call(rule) => self.call(*rule),
        }
    }

    fn repeat(&mut self, body: &'g Op) {
        loop {
            let mark = self.mark();
            if !self.eval(body) {
                self.reset(mark);
                return;
            }
            if self.pos == mark.pos {
                return;
            }
        }
    }

    /// Evaluate `body` without consuming input or keeping nodes.
    fn lookahead(&mut self, body: &'g Op) -> bool {
        let mark = self.mark();
        self.lookahead += 1;
        let matched = self.eval(body);
        self.lookahead -= 1;
        self.reset(mark);
        matched
    }

    fn call(&mut self, id: RuleId) -> bool {
        let grammar = self.grammar;
        let rule = grammar.rule(id);
        let start = self.pos;
        let memo = if self.memoize { rule.memo() } else { MemoPolicy::Off };

        if memo != MemoPolicy::Off
            && let Some(entry) = self.memo.get(id, start, self.lookahead == 0)
        {
            self.stats.memo_hits += 1;
            return match entry {
                MemoEntry::Matched { end, nodes } => {
                    self.tracer.trace_memo_hit(id, start, Some(*end));
                    self.pos = *end;
                    self.nodes.extend(nodes.iter().cloned());
                    true
                }
                MemoEntry::Failed => {
                    self.tracer.trace_memo_hit(id, start, None);
                    false
                }
            };
        }

        if self.depth >= self.limits.get_recursion_limit() {
            return self.stop(LimitError::RecursionLimitExceeded);
        }
        self.depth += 1;
        self.stats.max_depth = self.stats.max_depth.max(self.depth);
        self.stats.rule_evaluations += 1;
        self.tracer.trace_enter(id, start);

        let watermark = self.nodes.len();
        let matched = ensure_sufficient_stack(|| self.eval(&rule.op));
        self.depth -= 1;

        if matched {
            if rule.suppresses_node() {
                self.nodes.truncate(watermark);
            } else {
                let children = if rule.suppresses_subnodes() {
                    self.nodes.truncate(watermark);
                    Vec::new()
                } else {
                    self.nodes.split_off(watermark)
                };
                let label: Arc<str> = rule.label().clone();
                self.nodes
                    .push(ParseNode::new(label, id, Span::new(start, self.pos), children));
            }
        }
        self.tracer
            .trace_exit(id, start, matched.then_some(self.pos));

        if self.aborted() {
            return false;
        }
        if memo == MemoPolicy::Off || self.memo.contains(id, start) {
            return matched;
        }

        match (memo, matched) {
            (MemoPolicy::All, true) => {
                let entry = MemoEntry::Matched {
                    end: self.pos,
                    nodes: self.nodes[watermark..].to_vec(),
                };
                self.remember(id, start, entry);
            }
            (MemoPolicy::All | MemoPolicy::Mismatches, false) => {
                self.remember(id, start, MemoEntry::Failed);
            }
            _ => {}
        }
        !self.aborted() && matched
    }

    fn remember(&mut self, id: RuleId, offset: usize, entry: MemoEntry) {
        if self.memo.len() >= self.limits.get_memo_limit() {
            self.stop(LimitError::MemoLimitExceeded);
            return;
        }
        self.memo.insert(id, offset, entry, self.lookahead > 0);
    }
}
