//! Regular grid over a lon/lat bounding box.

use crate::error::{DecomposeError, Result};
use geo::{coord, Contains, Point, Rect};

/// One cell of a [`spatial_grid`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridTile {
    /// `i * grid_size + j` for column `i` (longitude) and row `j` (latitude).
    pub tile_id: usize,
    pub bounds: Rect<f64>,
}

impl GridTile {
    /// True if the point lies strictly inside the tile.
    pub fn contains_lon_lat(&self, lon: f64, lat: f64) -> bool {
        self.bounds.contains(&Point::new(lon, lat))
    }
}

/// Lake bounding box: longitude 115..117, latitude 28..29.
pub fn poyang_region() -> Rect<f64> {
    Rect::new(coord! { x: 115.0, y: 28.0 }, coord! { x: 117.0, y: 29.0 })
}

/// Split `region` into `grid_size x grid_size` equal tiles.
///
/// Tiles are ordered by longitude column first, then latitude row.
pub fn spatial_grid(region: Rect<f64>, grid_size: usize) -> Result<Vec<GridTile>> {
    if grid_size == 0 {
        return Err(DecomposeError::InvalidParameter(
            "grid size must be positive".to_string(),
        ));
    }

    let min = region.min();
    let lon_step = region.width() / grid_size as f64;
    let lat_step = region.height() / grid_size as f64;

    let tile_count = grid_size.checked_mul(grid_size).ok_or_else(|| {
        DecomposeError::InvalidParameter(format!("grid size {} is too large", grid_size))
    })?;

    let mut tiles = Vec::with_capacity(tile_count);
    for i in 0..grid_size {
        for j in 0..grid_size {
            let min_lon = min.x + lon_step * i as f64;
            let min_lat = min.y + lat_step * j as f64;
            tiles.push(GridTile {
                tile_id: i * grid_size + j,
                bounds: Rect::new(
                    coord! { x: min_lon, y: min_lat },
                    coord! { x: min_lon + lon_step, y: min_lat + lat_step },
                ),
            });
        }
    }

    Ok(tiles)
}
