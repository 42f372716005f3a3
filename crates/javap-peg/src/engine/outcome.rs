//! Results of a parse.

use std::fmt;

use serde::Serialize;

use crate::tree::ParseTree;

/// Resource bound that stopped a parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[serde(rename_all = "snake_case")]
pub enum LimitError {
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    #[error("memo table limit exceeded")]
    MemoLimitExceeded,
}

/// Why a parse did not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cause {
    /// The input is not in the language of the grammar.
    Grammar,
    Limit(LimitError),
}

/// Counters collected during one parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Rule bodies actually evaluated.
    pub rule_evaluations: u64,
    /// Rule invocations answered from the memo table.
    pub memo_hits: u64,
    pub memo_entries: usize,
    /// Evaluation steps, counted against the execution limit.
    pub steps: u64,
    pub max_depth: u32,
}

/// A failed parse.
///
/// `expected` lists the terminals that failed at `furthest`, sorted. Failures
/// inside lookahead predicates are not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mismatch {
    pub furthest: usize,
    pub expected: Vec<String>,
    pub cause: Cause,
    pub stats: ParseStats,
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Cause::Limit(limit) = self.cause {
            return write!(f, "{limit} at offset {}", self.furthest);
        }
        write!(f, "no match at offset {}", self.furthest)?;
        if !self.expected.is_empty() {
            write!(f, ", expected {}", self.expected.join(", "))?;
        }
        Ok(())
    }
}

impl std::error::Error for Mismatch {}

/// Result of [`crate::Parser::parse`].
///
/// A mismatch is an ordinary outcome, not an error.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    Matched(ParseTree),
    Mismatched(Mismatch),
}

impl ParseOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, ParseOutcome::Matched(_))
    }

    pub fn tree(&self) -> Option<&ParseTree> {
        match self {
            ParseOutcome::Matched(tree) => Some(tree),
            ParseOutcome::Mismatched(_) => None,
        }
    }

    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            ParseOutcome::Matched(_) => None,
            ParseOutcome::Mismatched(mismatch) => Some(mismatch),
        }
    }

    pub fn stats(&self) -> ParseStats {
        match self {
            ParseOutcome::Matched(tree) => tree.stats(),
            ParseOutcome::Mismatched(mismatch) => mismatch.stats,
        }
    }

    pub fn into_result(self) -> Result<ParseTree, Mismatch> {
        match self {
            ParseOutcome::Matched(tree) => Ok(tree),
            ParseOutcome::Mismatched(mismatch) => Err(mismatch),
        }
    }
}
