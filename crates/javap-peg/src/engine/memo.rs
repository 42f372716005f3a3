//! Packrat memo table.

use std::collections::HashMap;

use crate::grammar::RuleId;
use crate::tree::ParseNode;

/// Cached result of invoking a rule at an offset.
#[derive(Debug, Clone)]
pub(crate) enum MemoEntry {
    /// The nodes the invocation pushed, replayed on a hit.
    Matched { end: usize, nodes: Vec<ParseNode> },
    Failed,
}

#[derive(Debug)]
struct Slot {
    entry: MemoEntry,
    /// Recorded inside a lookahead predicate, where expectations go untracked.
    silent: bool,
}

/// Results keyed by `(rule, offset)`. Each key is written at most once per
/// parse.
#[derive(Debug, Default)]
pub(crate) struct MemoTable {
    entries: HashMap<(RuleId, usize), Slot>,
}

impl MemoTable {
    /// Cached result usable by a caller. A caller that tracks expectations
    /// cannot reuse a silent entry: replaying it would skip the expectations
    /// a fresh evaluation records.
    pub(crate) fn get(&self, rule: RuleId, offset: usize, tracking: bool) -> Option<&MemoEntry> {
        self.entries
            .get(&(rule, offset))
            .filter(|slot| !(tracking && slot.silent))
            .map(|slot| &slot.entry)
    }

    pub(crate) fn contains(&self, rule: RuleId, offset: usize) -> bool {
        self.entries.contains_key(&(rule, offset))
    }

    pub(crate) fn insert(&mut self, rule: RuleId, offset: usize, entry: MemoEntry, silent: bool) {
        let previous = self.entries.insert((rule, offset), Slot { entry, silent });
        debug_assert!(
            previous.is_none(),
            "memo entry for rule {} at {offset} written twice",
            rule.as_u32()
        );
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
