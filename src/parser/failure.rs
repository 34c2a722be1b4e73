//! Furthest-failure tracking
//!
//! Only failures at the highest offset seen so far are kept. A failure
//! further right clears the set before being recorded; one further left is
//! dropped.

use indexmap::IndexSet;

use super::errors::Expected;

#[derive(Debug, Clone, Default)]
pub struct FailureState {
    offset: usize,
    expected: IndexSet<Expected>,
}

impl FailureState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `expected` failed to match at `offset`
    pub fn record(&mut self, offset: usize, expected: Expected) {
        if offset > self.offset {
            self.offset = offset;
            self.expected.clear();
        }
        if offset == self.offset {
            self.expected.insert(expected);
        }
    }

    /// Furthest offset any terminal failed at
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.expected.is_empty()
    }

    /// Recorded entries in first-recorded order
    pub fn expected(&self) -> impl Iterator<Item = &Expected> {
        self.expected.iter()
    }

    pub fn into_expected(self) -> Vec<Expected> {
        self.expected.into_iter().collect()
    }
}
