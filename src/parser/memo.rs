//! Packrat memo table
//!
//! Results are keyed by `(Rule, start offset)` and live for one parse. A
//! stored failure is as useful as a stored success: it stops ordered choice
//! and repetition from re-running a rule that already failed at that offset.

use rustc_hash::FxHashMap;

use super::ast::Node;
use super::rule_parser::Rule;

/// A stored rule outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoEntry {
    /// `None` records a failure
    pub result: Option<Node>,
    /// Cursor position after the rule ran
    pub end: usize,
}

/// Hit/miss counters for one parse
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoStats {
    pub hits: usize,
    pub misses: usize,
    pub entries: usize,
}

#[derive(Debug, Default)]
pub struct MemoTable {
    entries: FxHashMap<(Rule, usize), MemoEntry>,
    hits: usize,
    misses: usize,
}

impl MemoTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a stored outcome, counting the hit or miss
    pub fn get(&mut self, rule: Rule, offset: usize) -> Option<&MemoEntry> {
        match self.entries.get(&(rule, offset)) {
            Some(entry) => {
                self.hits += 1;
                Some(entry)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn insert(&mut self, rule: Rule, offset: usize, entry: MemoEntry) {
        self.entries.insert((rule, offset), entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> MemoStats {
        MemoStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_then_hit() {
        let mut table = MemoTable::new();
        assert!(table.get(Rule::Negation, 0).is_none());
        table.insert(Rule::Negation, 0, MemoEntry { result: None, end: 0 });
        let entry = table.get(Rule::Negation, 0).cloned();
        assert_eq!(entry, Some(MemoEntry { result: None, end: 0 }));
        assert_eq!(
            table.stats(),
            MemoStats {
                hits: 1,
                misses: 1,
                entries: 1
            }
        );
    }

    #[test]
    fn test_keys_distinguish_rule_and_offset() {
        let mut table = MemoTable::new();
        table.insert(Rule::Negation, 0, MemoEntry { result: None, end: 0 });
        assert!(table.get(Rule::Negation, 1).is_none());
        assert!(table.get(Rule::BinaryOp, 0).is_none());
        assert_eq!(table.len(), 1);
        assert!(!table.is_empty());
    }
}
