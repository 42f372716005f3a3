//! Lowering of [`Expr`] bodies into the evaluator's instruction tree.

use std::collections::HashMap;

use crate::expr::{CharClass, Expr};

use super::{GrammarError, RuleId};

/// Evaluator form of a rule body.
///
/// Terminals carry an index into the grammar's terminal table, which holds the
/// descriptions reported in mismatch expected-sets.
#[derive(Debug, Clone)]
pub(crate) enum Op {
    Literal { text: Box<str>, term: u32 },
    Class { class: CharClass, term: u32 },
    Any { term: u32 },
    Eoi { term: u32 },
    Seq(Box<[Op]>),
    Choice(Box<[Op]>),
    ZeroOrMore(Box<Op>),
    OneOrMore(Box<Op>),
    Optional(Box<Op>),
    And(Box<Op>),
    Not(Box<Op>),
    Call(RuleId),
}

pub(crate) struct Compiler<'a> {
    by_name: &'a HashMap<String, RuleId>,
    terminals: Vec<String>,
    term_ids: HashMap<String, u32>,
}

impl<'a> Compiler<'a> {
    pub(crate) fn new(by_name: &'a HashMap<String, RuleId>) -> Self {
        Self {
            by_name,
            terminals: Vec::new(),
            term_ids: HashMap::new(),
        }
    }

    pub(crate) fn into_terminals(self) -> Vec<String> {
        self.terminals
    }

    pub(crate) fn compile(&mut self, rule: &str, expr: &Expr) -> Result<Op, GrammarError> {
        let op = match expr {
            Expr::Literal(text) => Op::Literal {
                text: text.as_str().into(),
                term: self.term(expr),
            },
            Expr::Class(class) => Op::Class {
                class: class.clone(),
                term: self.term(expr),
            },
            Expr::Any => Op::Any {
                term: self.term(expr),
            },
            Expr::Eoi => Op::Eoi {
                term: self.term(expr),
            },
            Expr::Seq(items) if items.len() == 1 => self.compile(rule, &items[0])?,
            Expr::Choice(alts) if alts.len() == 1 => self.compile(rule, &alts[0])?,
            Expr::Seq(items) => Op::Seq(self.compile_all(rule, items)?),
            Expr::Choice(alts) => Op::Choice(self.compile_all(rule, alts)?),
            Expr::ZeroOrMore(body) => Op::ZeroOrMore(Box::new(self.compile(rule, body)?)),
            Expr::OneOrMore(body) => Op::OneOrMore(Box::new(self.compile(rule, body)?)),
            Expr::Optional(body) => Op::Optional(Box::new(self.compile(rule, body)?)),
            Expr::And(body) => Op::And(Box::new(self.compile(rule, body)?)),
            Expr::Not(body) => Op::Not(Box::new(self.compile(rule, body)?)),
            Expr::Ref(name) => match self.by_name.get(name) {
                Some(&id) => Op::Call(id),
                None => {
                    return Err(GrammarError::UndefinedRule {
                        rule: rule.to_owned(),
                        name: name.clone(),
                    });
                }
            },
        };
        Ok(op)
    }

    fn compile_all(&mut self, rule: &str, exprs: &[Expr]) -> Result<Box<[Op]>, GrammarError> {
        exprs.iter().map(|e| self.compile(rule, e)).collect()
    }

    fn term(&mut self, expr: &Expr) -> u32 {
        let description = expr.expectation().unwrap_or_default();
        if let Some(&id) = self.term_ids.get(&description) {
            return id;
        }
        let id = self.terminals.len() as u32;
        self.terminals.push(description.clone());
        self.term_ids.insert(description, id);
        id
    }
}
