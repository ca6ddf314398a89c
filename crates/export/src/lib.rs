#![deny(unsafe_code)]
//! Export of rulegrid grids to vector geometry and raster snapshots.
//!
//! [`to_vector_document`] turns a [`Grid`](rulegrid_core::Grid) into
//! rectangles (per cell, or merged per 4-connected component when corners
//! are rounded); [`VectorDocument::to_svg`] serialises them. The `png`
//! feature adds [`snapshot::write_png`].

pub mod components;
pub mod pixel;
pub mod svg;
pub mod vector;

#[cfg(feature = "png")]
pub mod snapshot;

pub use components::{find_components, Bounds, Component};
pub use svg::write_svg;
pub use vector::{to_vector_document, Rect, VectorDocument};
