#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Packrat parsing-expression-grammar engine.
//!
//! Grammars are built from named rules whose bodies are [`Expr`] values:
//! literals, character classes, sequences, ordered choices, repetitions,
//! optionals and lookahead predicates. Rules refer to each other by name, so
//! large mutually recursive grammars are declared without ordering concerns
//! and extended by later definitions in the same [`GrammarBuilder`].
//!
//! # Example
//!
//! ```
//! use javap_peg::{GrammarBuilder, Parser, seq, expr::{eoi, plus, r, range, star}};
//!
//! let mut builder = GrammarBuilder::new();
//! builder.rule("Sum", seq![r("Num"), star(seq!["+", r("Num")]), eoi()]);
//! builder.rule("Num", plus(range('0', '9'))).suppress_subnodes();
//! let grammar = builder.build().expect("valid grammar");
//!
//! let outcome = Parser::new(&grammar).parse("1+22");
//! let tree = outcome.tree().expect("matches");
//! assert_eq!(tree.root().children().len(), 2);
//! ```

pub mod engine;
pub mod expr;
pub mod grammar;
pub mod tree;

#[cfg(test)]
mod expr_tests;

pub use engine::{
    Cause, LimitError, Limits, Mismatch, NoopTracer, ParseOutcome, ParseStats, Parser,
    ParserBuilder, PrintTracer, Tracer, Verbosity,
};
pub use expr::{CharClass, Expr};
pub use grammar::{Grammar, GrammarBuilder, GrammarError, MemoPolicy, Rule, RuleDef, RuleId};
pub use tree::{ParseNode, ParseTree};
