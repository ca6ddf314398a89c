//! Accepted ranges for every user-facing parameter and their validators.
//!
//! Validation happens once, at the boundary; nothing here clamps or falls
//! back to a default.

use std::ops::RangeInclusive;

use crate::error::GridError;

/// Smallest allowed row or column count.
pub const MIN_DIMENSION: usize = 5;
/// Largest allowed row or column count.
pub const MAX_DIMENSION: usize = 50;
/// Allowed cell edge length in pixels.
pub const CELL_SIZE_RANGE: RangeInclusive<u32> = 8..=32;
/// Allowed corner radius in pixels.
pub const CORNER_RADIUS_RANGE: RangeInclusive<u32> = 0..=10;
/// Cell size used when none is given.
pub const DEFAULT_CELL_SIZE: u32 = 10;

/// Checks that a row or column count lies in [`MIN_DIMENSION`]..=[`MAX_DIMENSION`].
///
/// `name` ("row" or "column") is carried into the error.
pub fn validate_dimension(name: &'static str, value: usize) -> Result<(), GridError> {
    if (MIN_DIMENSION..=MAX_DIMENSION).contains(&value) {
        Ok(())
    } else {
        Err(GridError::InvalidDimension {
            name,
            value,
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        })
    }
}

/// Checks a cell size against [`CELL_SIZE_RANGE`].
pub fn validate_cell_size(px: u32) -> Result<(), GridError> {
    if CELL_SIZE_RANGE.contains(&px) {
        Ok(())
    } else {
        Err(GridError::InvalidCellSize(px))
    }
}

/// Checks a corner radius against [`CORNER_RADIUS_RANGE`].
pub fn validate_corner_radius(px: u32) -> Result<(), GridError> {
    if CORNER_RADIUS_RANGE.contains(&px) {
        Ok(())
    } else {
        Err(GridError::InvalidCornerRadius(px))
    }
}
