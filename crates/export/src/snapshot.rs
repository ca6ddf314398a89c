//! PNG snapshot of a [`Grid`].
//!
//! Feature-gated behind `png` (default on) so SVG-only consumers don't pull
//! in the `image` crate. The pixel conversion lives in [`crate::pixel`].

use rulegrid_core::params::validate_cell_size;
use rulegrid_core::{Grid, GridError};
use std::path::Path;
use tracing::debug;

use crate::pixel::grid_to_rgba;

/// Writes `grid` as a PNG with `cell_size_px` pixels per cell.
///
/// Returns `GridError::InvalidCellSize` for an out-of-range cell size, or
/// `GridError::Io` on write failure.
pub fn write_png(grid: &Grid, cell_size_px: u32, path: &Path) -> Result<(), GridError> {
    validate_cell_size(cell_size_px)?;
    let rgba = grid_to_rgba(grid, cell_size_px);
    let w = grid.cols() as u32 * cell_size_px;
    let h = grid.rows() as u32 * cell_size_px;
    let img = image::RgbaImage::from_raw(w, h, rgba)
        .ok_or_else(|| GridError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| GridError::Io(e.to_string()))?;
    debug!(path = %path.display(), width = w, height = h, "png written");
    Ok(())
}
