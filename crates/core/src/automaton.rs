//! Resumable, row-at-a-time generation of a [`Grid`].
//!
//! An [`Automaton`] owns a grid and a compiled rule. Each [`Automaton::step`]
//! fills exactly one more row, so a caller can reveal the image at whatever
//! cadence it likes; stopping early leaves every computed row valid.

use tracing::debug;

use crate::error::GridError;
use crate::evolve::step_row;
use crate::grid::Grid;
use crate::rule::{Rule, RuleTable};

/// Incremental generator that fills a grid one row at a time.
#[derive(Debug, Clone)]
pub struct Automaton {
    grid: Grid,
    rule: Rule,
    table: RuleTable,
    next_row: usize,
}

impl Automaton {
    /// Wraps `grid`, discarding any rows below the seed.
    pub fn new(mut grid: Grid, rule: Rule) -> Self {
        grid.invalidate_from(1);
        Self {
            grid,
            rule,
            table: rule.table(),
            next_row: 1,
        }
    }

    /// Creates an automaton over a fresh `rows`-row grid seeded with `seed`.
    pub fn seeded(seed: &[bool], rule: Rule, rows: usize) -> Result<Self, GridError> {
        Ok(Self::new(Grid::with_seed(seed, rows)?, rule))
    }

    /// The grid in its current, possibly partial, state.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Consumes the automaton, returning its grid.
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// The active rule.
    pub fn rule(&self) -> Rule {
        self.rule
    }

    /// Number of fully defined rows, seed included.
    pub fn defined_rows(&self) -> usize {
        self.next_row
    }

    /// Whether every row has been generated.
    pub fn is_complete(&self) -> bool {
        self.next_row >= self.grid.rows()
    }

    /// Generates the next row and returns its index, or `None` once complete.
    pub fn step(&mut self) -> Option<usize> {
        if self.is_complete() {
            return None;
        }
        let r = self.next_row;
        let previous: Vec<bool> = self.grid.row(r - 1).iter().map(|c| c.is_filled()).collect();
        let next = step_row(&previous, &self.table);
        self.grid.write_row(r, &next);
        self.next_row += 1;
        Some(r)
    }

    /// Generates all remaining rows.
    pub fn run(&mut self) -> &Grid {
        while self.step().is_some() {}
        debug!(
            rule = self.rule.index(),
            rows = self.grid.rows(),
            cols = self.grid.cols(),
            filled = self.grid.filled_count(),
            "grid generated"
        );
        &self.grid
    }

    /// Clears generated rows, keeping the seed and rule.
    pub fn reset(&mut self) {
        self.grid.invalidate_from(1);
        self.next_row = 1;
    }

    /// Replaces the seed row and clears generated rows.
    ///
    /// Returns `GridError::DimensionMismatch` if the length is wrong.
    pub fn set_seed(&mut self, seed: &[bool]) -> Result<(), GridError> {
        self.grid.set_seed(seed)?;
        self.next_row = 1;
        Ok(())
    }

    /// Switches to a different rule and clears generated rows.
    pub fn set_rule(&mut self, rule: Rule) {
        self.rule = rule;
        self.table = rule.table();
        self.reset();
    }

    /// Recreates the grid at new dimensions.
    ///
    /// Every row is invalidated, the seed included: the new seed row is all
    /// empty. On error the automaton is unchanged.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<(), GridError> {
        self.grid = Grid::new(rows, cols)?;
        self.next_row = 1;
        debug!(rows, cols, "grid resized");
        Ok(())
    }
}

/// Generates a complete grid of `rows` rows from `seed` under `rule`.
pub fn generate_grid(seed: &[bool], rule: Rule, rows: usize) -> Result<Grid, GridError> {
    let mut automaton = Automaton::seeded(seed, rule, rows)?;
    automaton.run();
    Ok(automaton.into_grid())
}
