//! Error types for the rulegrid core.

use thiserror::Error;

/// Errors produced by rule compilation, grid construction and export.
///
/// Every variant is a validation failure reported at the boundary; the
/// algorithms themselves assume well-formed input and never fail.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    /// A rule index was outside [0, 255].
    #[error("invalid rule index {0}: must be in 0..=255")]
    InvalidRuleIndex(u32),

    /// A row or column count was outside the allowed range.
    #[error("invalid {name} count {value}: must be in {min}..={max}")]
    InvalidDimension {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },

    /// A seed row did not match the grid's column count.
    #[error("dimension mismatch: expected {expected} cells, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// A cell pixel size was outside the allowed range.
    #[error("invalid cell size {0}px: must be in 8..=32")]
    InvalidCellSize(u32),

    /// A corner radius was outside the allowed range.
    #[error("invalid corner radius {0}px: must be in 0..=10")]
    InvalidCornerRadius(u32),

    /// A seed pattern string contained a character other than `0`, `1`, `.`, `#`.
    #[error("invalid seed pattern: unexpected '{found}' at position {position}")]
    InvalidSeedPattern { position: usize, found: char },

    /// Writing an exported file failed.
    #[error("i/o error: {0}")]
    Io(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_rule_index_includes_value() {
        let msg = GridError::InvalidRuleIndex(300).to_string();
        assert!(msg.contains("300"), "missing index in: {msg}");
        assert!(msg.contains("255"), "missing upper bound in: {msg}");
    }

    #[test]
    fn invalid_dimension_includes_name_and_range() {
        let err = GridError::InvalidDimension {
            name: "row",
            value: 4,
            min: 5,
            max: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("row"), "missing name in: {msg}");
        assert!(msg.contains('4'), "missing value in: {msg}");
        assert!(msg.contains("5..=50"), "missing range in: {msg}");
    }

    #[test]
    fn dimension_mismatch_includes_both_lengths() {
        let msg = GridError::DimensionMismatch {
            expected: 14,
            got: 12,
        }
        .to_string();
        assert!(msg.contains("14"), "missing expected in: {msg}");
        assert!(msg.contains("12"), "missing got in: {msg}");
    }

    #[test]
    fn invalid_seed_pattern_includes_position_and_char() {
        let msg = GridError::InvalidSeedPattern {
            position: 3,
            found: 'x',
        }
        .to_string();
        assert!(msg.contains('3'), "missing position in: {msg}");
        assert!(msg.contains('x'), "missing char in: {msg}");
    }

    #[test]
    fn io_includes_message() {
        let msg = GridError::Io("disk full".into()).to_string();
        assert!(msg.contains("disk full"), "missing message in: {msg}");
    }

    #[test]
    fn grid_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GridError>();
    }

    #[test]
    fn grid_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<GridError>();
    }
}
