//! Helpers for building seed rows: pattern strings, random rows and the
//! classic single centered cell.

use crate::error::GridError;
use crate::prng::Xorshift64;

/// Parses a seed pattern such as `"..#.."` or `"00100"`.
///
/// `1` and `#` are filled, `0` and `.` are empty. Any other character yields
/// `GridError::InvalidSeedPattern` with its zero-based position.
pub fn parse_seed_row(pattern: &str) -> Result<Vec<bool>, GridError> {
    pattern
        .chars()
        .enumerate()
        .map(|(position, c)| match c {
            '1' | '#' => Ok(true),
            '0' | '.' => Ok(false),
            found => Err(GridError::InvalidSeedPattern { position, found }),
        })
        .collect()
}

/// Formats a row as `#` (filled) and `.` (empty).
pub fn format_seed_row(row: &[bool]) -> String {
    row.iter().map(|&c| if c { '#' } else { '.' }).collect()
}

/// A row of `cols` cells filled by coin flips from a seeded PRNG.
pub fn random_seed_row(cols: usize, seed: u64) -> Vec<bool> {
    let mut rng = Xorshift64::new(seed);
    (0..cols).map(|_| rng.next_bool()).collect()
}

/// A row of `cols` empty cells with only the cell at `cols / 2` filled.
pub fn centered_seed_row(cols: usize) -> Vec<bool> {
    (0..cols).map(|c| c == cols / 2).collect()
}
