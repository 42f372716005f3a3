//! Parse trees.
//!
//! Nodes hold byte spans into the input, not copies of it. Pass the parsed
//! text back in to read matched text.

use std::fmt::Write;
use std::sync::Arc;

use javap_core::text::preview;
use javap_core::{Colors, Span};
use serde::Serialize;

use crate::engine::ParseStats;
use crate::grammar::RuleId;

const PREVIEW_CHARS: usize = 60;

/// A matched rule invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseNode {
    label: Arc<str>,
    #[serde(skip)]
    rule: RuleId,
    span: Span,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<ParseNode>,
}

impl ParseNode {
    pub(crate) fn new(label: Arc<str>, rule: RuleId, span: Span, children: Vec<ParseNode>) -> Self {
        Self {
            label,
            rule,
            span,
            children,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn rule(&self) -> RuleId {
        self.rule
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn children(&self) -> &[ParseNode] {
        &self.children
    }

    /// Matched text. `source` must be the parsed input.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.slice(source)
    }

    /// First direct child labeled `label`.
    pub fn child(&self, label: &str) -> Option<&ParseNode> {
        self.children.iter().find(|c| c.label() == label)
    }

    /// Direct children labeled `label`.
    pub fn children_labeled<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ParseNode> {
        self.children.iter().filter(move |c| c.label() == label)
    }

    /// This node and all nodes below it, in pre-order.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants { stack: vec![self] }
    }

    /// First node labeled `label` in pre-order, including this one.
    pub fn first(&self, label: &str) -> Option<&ParseNode> {
        self.descendants().find(|n| n.label() == label)
    }

    /// All nodes labeled `label` in pre-order, including this one.
    pub fn find_all<'a>(&'a self, label: &'a str) -> impl Iterator<Item = &'a ParseNode> {
        self.descendants().filter(move |n| n.label() == label)
    }

    pub fn dump(&self, source: &str) -> String {
        self.dump_colored(source, Colors::OFF)
    }

    /// Indented outline; leaves show a preview of their text.
    pub fn dump_colored(&self, source: &str, colors: Colors) -> String {
        let mut out = String::new();
        self.write_outline(&mut out, source, colors, 0);
        out
    }

    fn write_outline(&self, out: &mut String, source: &str, c: Colors, depth: usize) {
        let indent = "  ".repeat(depth);
        let _ = write!(
            out,
            "{indent}{}{}{} {}{}{}",
            c.blue, self.label, c.reset, c.dim, self.span, c.reset
        );
        if self.children.is_empty() {
            let _ = write!(
                out,
                " {}{}{}",
                c.green,
                preview(self.text(source), PREVIEW_CHARS),
                c.reset
            );
        }
        out.push('\n');
        for child in &self.children {
            child.write_outline(out, source, c, depth + 1);
        }
    }
}

/// Pre-order walk over a subtree. See [`ParseNode::descendants`].
pub struct Descendants<'a> {
    stack: Vec<&'a ParseNode>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ParseNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// Successful parse: the root node plus how far the match reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseTree {
    root: ParseNode,
    end: usize,
    #[serde(skip)]
    stats: ParseStats,
}

impl ParseTree {
    pub(crate) fn new(root: ParseNode, end: usize, stats: ParseStats) -> Self {
        Self { root, end, stats }
    }

    pub fn root(&self) -> &ParseNode {
        &self.root
    }

    /// Offset where the match ended. Rules match prefixes; grammars that must
    /// consume everything end in an end-of-input check.
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn stats(&self) -> ParseStats {
        self.stats
    }

    pub fn dump(&self, source: &str) -> String {
        self.root.dump(source)
    }
}
