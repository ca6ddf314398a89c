//! Pure-computation RGBA buffer conversion from a [`Grid`].
//!
//! Always available (no feature gate) so callers that draw into their own
//! surface can reuse it without pulling in the `png` encoder.

use rulegrid_core::Grid;

const INK: [u8; 4] = [0, 0, 0, 255];
const PAPER: [u8; 4] = [255, 255, 255, 255];

/// Rasterises `grid` with square cells of `cell_size_px` pixels.
///
/// Filled cells are black, empty and unset cells white. The buffer is
/// row-major RGBA8 of length `(cols * cell) * (rows * cell) * 4`.
pub fn grid_to_rgba(grid: &Grid, cell_size_px: u32) -> Vec<u8> {
    let cell = cell_size_px as usize;
    let width = grid.cols() * cell;
    let height = grid.rows() * cell;
    let mut buf = Vec::with_capacity(width * height * 4);
    for y in 0..height {
        for x in 0..width {
            let color = if grid.is_filled(y / cell, x / cell) {
                INK
            } else {
                PAPER
            };
            buf.extend_from_slice(&color);
        }
    }
    buf
}
