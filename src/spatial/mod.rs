//! Spatial tiling of the analysis region.

mod grid;

pub use grid::{poyang_region, spatial_grid, GridTile};
