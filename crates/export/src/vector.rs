//! Conversion of a [`Grid`] into pixel-space rectangles.
//!
//! Without rounding every filled cell becomes its own square. With rounding,
//! each 4-connected component becomes a single rectangle spanning its
//! bounding box. A concave component (an L, a U) is therefore over-filled by
//! its box; downstream consumers rely on that shape, so it is kept.

use rulegrid_core::params::{validate_cell_size, validate_corner_radius};
use rulegrid_core::{Grid, GridError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::components::find_components;

/// An axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Uniform corner radius; `None` for square corners.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<u32>,
}

/// An ordered list of rectangles on a `width x height` pixel canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorDocument {
    pub width: u32,
    pub height: u32,
    pub rects: Vec<Rect>,
}

/// Exports `grid` as rectangles of `cell_size_px` cells.
///
/// With `corner_radius_px == 0` one square per filled cell is emitted in
/// row-major order. Otherwise one rounded rectangle per 4-connected component
/// is emitted, covering the component's bounding box, in the row-major order
/// of each component's first cell. Unset cells count as empty.
///
/// Returns `GridError::InvalidCellSize` or `GridError::InvalidCornerRadius`
/// for out-of-range settings.
pub fn to_vector_document(
    grid: &Grid,
    cell_size_px: u32,
    corner_radius_px: u32,
) -> Result<VectorDocument, GridError> {
    validate_cell_size(cell_size_px)?;
    validate_corner_radius(corner_radius_px)?;

    let cell = cell_size_px;
    let rects = if corner_radius_px == 0 {
        cell_rects(grid, cell)
    } else {
        merged_rects(grid, cell, corner_radius_px)
    };

    debug!(
        rows = grid.rows(),
        cols = grid.cols(),
        cell_size_px,
        corner_radius_px,
        rects = rects.len(),
        "vector document built"
    );

    Ok(VectorDocument {
        width: px(grid.cols(), cell),
        height: px(grid.rows(), cell),
        rects,
    })
}

fn cell_rects(grid: &Grid, cell: u32) -> Vec<Rect> {
    (0..grid.rows())
        .flat_map(|row| (0..grid.cols()).map(move |col| (row, col)))
        .filter(|&(row, col)| grid.is_filled(row, col))
        .map(|(row, col)| Rect {
            x: px(col, cell),
            y: px(row, cell),
            width: cell,
            height: cell,
            radius: None,
        })
        .collect()
}

fn merged_rects(grid: &Grid, cell: u32, radius: u32) -> Vec<Rect> {
    find_components(grid)
        .iter()
        .map(|comp| {
            let b = comp.bounds;
            Rect {
                x: px(b.min_col, cell),
                y: px(b.min_row, cell),
                width: px(b.width(), cell),
                height: px(b.height(), cell),
                radius: Some(radius),
            }
        })
        .collect()
}

/// Cell count to pixels. Grid dimensions are at most 50 and cells at most
/// 32px, so this never overflows.
fn px(cells: usize, cell: u32) -> u32 {
    cells as u32 * cell
}
