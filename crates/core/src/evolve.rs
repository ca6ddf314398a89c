//! Row-by-row evolution of an elementary cellular automaton.
//!
//! Each row depends only on its predecessor and the rule table, so the same
//! rows come out whether they are pulled one at a time through [`Rows`] or
//! collected at once with [`generate`]. Cells beyond either edge read as empty;
//! rows never wrap.

use tracing::trace;

use crate::rule::RuleTable;

/// Computes the row that follows `previous` under `table`.
///
/// The output has the same length as the input. Neighbors outside the row
/// are treated as `false`.
pub fn step_row(previous: &[bool], table: &RuleTable) -> Vec<bool> {
    let n = previous.len();
    (0..n)
        .map(|i| {
            let left = i > 0 && previous[i - 1];
            let right = i + 1 < n && previous[i + 1];
            table.lookup(left, previous[i], right)
        })
        .collect()
}

/// Lazy, finite sequence of rows starting at the seed row.
///
/// Cloning a `Rows` snapshots its position, so a consumer can restart or fork
/// the sequence without recomputing earlier rows.
#[derive(Debug, Clone)]
pub struct Rows {
    table: RuleTable,
    next: Vec<bool>,
    remaining: usize,
}

impl Rows {
    /// Creates a sequence of `count` rows, the first being `seed`.
    pub fn new(seed: &[bool], table: RuleTable, count: usize) -> Self {
        Self {
            table,
            next: seed.to_vec(),
            remaining: count,
        }
    }
}

impl Iterator for Rows {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let following = if self.remaining > 0 {
            step_row(&self.next, &self.table)
        } else {
            Vec::new()
        };
        trace!(remaining = self.remaining, "row emitted");
        Some(std::mem::replace(&mut self.next, following))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Rows {}

impl std::iter::FusedIterator for Rows {}

/// Generates `row_count` rows from `seed`, the seed itself being row 0.
pub fn generate(seed: &[bool], table: &RuleTable, row_count: usize) -> Vec<Vec<bool>> {
    Rows::new(seed, *table, row_count).collect()
}
