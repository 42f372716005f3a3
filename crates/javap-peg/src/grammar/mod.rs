//! Grammar construction and the immutable, linked rule set.
//!
//! A [`GrammarBuilder`] collects named rule bodies in definition order.
//! [`GrammarBuilder::build`] resolves rule references to dense [`RuleId`]s,
//! compiles bodies for evaluation and rejects grammars the evaluator cannot
//! run to completion (undefined references, repetition of expressions that
//! match empty input, left recursion).

mod analysis;
mod compile;

#[cfg(test)]
mod grammar_tests;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::Serialize;

use crate::expr::Expr;

pub(crate) use compile::Op;

/// Dense index of a rule inside its [`Grammar`].
///
/// Ids follow definition order.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RuleId(u32);

impl RuleId {
    #[inline]
    pub fn as_u32(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Which invocation results a rule caches per input offset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoPolicy {
    #[default]
    Off,
    /// Cache successes and failures.
    All,
    /// Cache failures only.
    Mismatches,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("grammar defines no rules")]
    Empty,

    #[error("rule `{name}` is defined more than once")]
    DuplicateRule { name: String },

    #[error("rule `{rule}` references undefined rule `{name}`")]
    UndefinedRule { rule: String, name: String },

    #[error("root rule `{name}` is not defined")]
    UnknownRoot { name: String },

    #[error("rule `{rule}` repeats an expression that can match empty input")]
    NullableRepetition { rule: String },

    #[error("left recursion: {}", .cycle.join(" -> "))]
    LeftRecursion { cycle: Vec<String> },
}

/// Rule definition under construction.
#[derive(Debug, Clone)]
pub struct RuleDef {
    body: Expr,
    label: Option<String>,
    suppress_node: bool,
    suppress_subnodes: bool,
    memo: MemoPolicy,
}

impl RuleDef {
    fn new(body: Expr) -> Self {
        Self {
            body,
            label: None,
            suppress_node: false,
            suppress_subnodes: false,
            memo: MemoPolicy::Off,
        }
    }

    /// Label of the produced node. Defaults to the rule name.
    pub fn label(&mut self, label: impl Into<String>) -> &mut Self {
        self.label = Some(label.into());
        self
    }

    /// Produce no node; everything matched inside is discarded from the tree.
    pub fn suppress_node(&mut self) -> &mut Self {
        self.suppress_node = true;
        self
    }

    /// Produce a leaf node covering the whole match.
    pub fn suppress_subnodes(&mut self) -> &mut Self {
        self.suppress_subnodes = true;
        self
    }

    pub fn memo(&mut self) -> &mut Self {
        self.memo = MemoPolicy::All;
        self
    }

    pub fn memo_mismatches(&mut self) -> &mut Self {
        self.memo = MemoPolicy::Mismatches;
        self
    }
}

/// Collects rules before linking.
#[derive(Debug, Clone, Default)]
pub struct GrammarBuilder {
    rules: IndexMap<String, RuleDef>,
    duplicates: Vec<String>,
    root: Option<String>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define rule `name`. Flags are set on the returned definition.
    ///
    /// Defining the same name twice fails the build.
    pub fn rule(&mut self, name: &str, body: impl Into<Expr>) -> &mut RuleDef {
        let def = RuleDef::new(body.into());
        match self.rules.entry(name.to_owned()) {
            Entry::Occupied(mut entry) => {
                self.duplicates.push(name.to_owned());
                entry.insert(def);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(def),
        }
    }

    /// Rule used by [`crate::Parser::parse`]. Defaults to the first rule.
    pub fn root(&mut self, name: &str) -> &mut Self {
        self.root = Some(name.to_owned());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn build(self) -> Result<Grammar, GrammarError> {
        if let Some(name) = self.duplicates.into_iter().next() {
            return Err(GrammarError::DuplicateRule { name });
        }
        if self.rules.is_empty() {
            return Err(GrammarError::Empty);
        }

        let by_name: HashMap<String, RuleId> = self
            .rules
            .keys()
            .enumerate()
            .map(|(i, name)| (name.clone(), RuleId(i as u32)))
            .collect();

        let root = match &self.root {
            Some(name) => *by_name
                .get(name)
                .ok_or_else(|| GrammarError::UnknownRoot { name: name.clone() })?,
            None => RuleId(0),
        };

        let mut compiler = compile::Compiler::new(&by_name);
        let mut rules = Vec::with_capacity(self.rules.len());
        for (name, def) in self.rules {
            let op = compiler.compile(&name, &def.body)?;
            let label: Arc<str> = def.label.as_deref().unwrap_or(&name).into();
            rules.push(Rule {
                name,
                label,
                expr: def.body,
                op,
                suppress_node: def.suppress_node,
                suppress_subnodes: def.suppress_subnodes,
                memo: def.memo,
                nullable: false,
            });
        }

        let terminals = compiler.into_terminals();
        let mut grammar = Grammar {
            rules,
            by_name,
            terminals,
            root,
        };
        analysis::check(&mut grammar)?;
        Ok(grammar)
    }
}

/// A linked rule.
#[derive(Debug, Serialize)]
pub struct Rule {
    name: String,
    label: Arc<str>,
    #[serde(rename = "body")]
    expr: Expr,
    #[serde(skip)]
    pub(crate) op: Op,
    suppress_node: bool,
    suppress_subnodes: bool,
    memo: MemoPolicy,
    nullable: bool,
}

impl Rule {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn label(&self) -> &Arc<str> {
        &self.label
    }

    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn memo(&self) -> MemoPolicy {
        self.memo
    }

    pub fn suppresses_node(&self) -> bool {
        self.suppress_node
    }

    pub fn suppresses_subnodes(&self) -> bool {
        self.suppress_subnodes
    }

    /// Whether the rule can succeed without consuming input.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <- {}", self.name, self.expr)?;

        let mut notes = Vec::new();
        if *self.label != *self.name {
            notes.push(format!("label {:?}", &*self.label));
        }
        if self.suppress_node {
            notes.push("no node".to_owned());
        }
        if self.suppress_subnodes {
            notes.push("leaf".to_owned());
        }
        match self.memo {
            MemoPolicy::Off => {}
            MemoPolicy::All => notes.push("memo".to_owned()),
            MemoPolicy::Mismatches => notes.push("memo mismatches".to_owned()),
        }
        if !notes.is_empty() {
            write!(f, "  # {}", notes.join(", "))?;
        }
        Ok(())
    }
}

/// Immutable, linked rule set. Shareable across threads.
#[derive(Debug)]
pub struct Grammar {
    rules: Vec<Rule>,
    by_name: HashMap<String, RuleId>,
    terminals: Vec<String>,
    root: RuleId,
}

impl Grammar {
    pub fn root(&self) -> RuleId {
        self.root
    }

    pub fn rule_id(&self, name: &str) -> Option<RuleId> {
        self.by_name.get(name).copied()
    }

    /// # Panics
    /// Panics if `id` was not produced by this grammar.
    pub fn rule(&self, id: RuleId) -> &Rule {
        &self.rules[id.index()]
    }

    pub fn rules(&self) -> impl Iterator<Item = (RuleId, &Rule)> {
        self.rules
            .iter()
            .enumerate()
            .map(|(i, rule)| (RuleId(i as u32), rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub(crate) fn terminal(&self, term: u32) -> &str {
        &self.terminals[term as usize]
    }
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(f, "{rule}")?;
        }
        Ok(())
    }
}

impl Serialize for Grammar {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.rules)
    }
}
