#![deny(unsafe_code)]
//! Core types for rulegrid: expanding a one-dimensional seed row into a
//! two-dimensional image with an elementary cellular automaton.
//!
//! Provides `Rule`/`RuleTable` compilation, the pure `step_row` function and
//! lazy `Rows` sequence, the `Grid` model, the resumable `Automaton`, seed-row
//! helpers, parameter validation, the `Recipe` record and the `Xorshift64` PRNG.

pub mod automaton;
pub mod error;
pub mod evolve;
pub mod grid;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod rule;
pub mod seed_row;

pub use automaton::{generate_grid, Automaton};
pub use error::GridError;
pub use evolve::{generate, step_row, Rows};
pub use grid::{CellState, Grid};
pub use prng::Xorshift64;
pub use recipe::{Recipe, SeedSpec};
pub use rule::{compile_rule, Rule, RuleTable};
