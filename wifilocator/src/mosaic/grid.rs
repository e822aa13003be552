//! Tile grid selection around a center position.

use crate::coord::{tiles_per_axis, TileCoordinate, TileIndex};

/// Edge length of a map tile in pixels.
pub const TILE_SIZE: u32 = 256;

/// Number of tiles on each side of the center tile.
pub const GRID_RADIUS: i64 = 1;

/// Tiles per grid edge.
pub const GRID_DIM: u32 = (2 * GRID_RADIUS + 1) as u32;

/// One cell of the grid.
///
/// `tile` is `None` when the cell lies above the north edge or below the
/// south edge of the map; such cells are never fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCell {
    /// Column within the grid, 0 = west
    pub column: u32,
    /// Row within the grid, 0 = north
    pub row: u32,
    /// Map tile shown in this cell
    pub tile: Option<TileIndex>,
}

impl GridCell {
    /// Top-left pixel of this cell in the mosaic.
    pub fn pixel_origin(&self) -> (i64, i64) {
        (
            i64::from(self.column * TILE_SIZE),
            i64::from(self.row * TILE_SIZE),
        )
    }
}

/// Square block of tiles centered on the tile containing a position.
///
/// Columns wrap around the antimeridian; rows outside the map are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    center_x: i64,
    center_y: i64,
    zoom: u8,
    cells: Vec<GridCell>,
}

impl TileGrid {
    /// Selects the grid surrounding `center`.
    pub fn around(center: &TileCoordinate) -> Self {
        let n = tiles_per_axis(center.zoom);
        let center_x = center.tile_x();
        let center_y = center.tile_y();

        let mut cells = Vec::with_capacity((GRID_DIM * GRID_DIM) as usize);
        for (row, dy) in (-GRID_RADIUS..=GRID_RADIUS).enumerate() {
            for (column, dx) in (-GRID_RADIUS..=GRID_RADIUS).enumerate() {
                let x = center_x.saturating_add(dx).rem_euclid(n);
                let y = center_y.saturating_add(dy);

                let tile = if (0..n).contains(&y) {
                    match (u32::try_from(x), u32::try_from(y)) {
                        (Ok(x), Ok(y)) => Some(TileIndex {
                            x,
                            y,
                            zoom: center.zoom,
                        }),
                        _ => None,
                    }
                } else {
                    None
                };

                cells.push(GridCell {
                    column: column as u32,
                    row: row as u32,
                    tile,
                });
            }
        }

        Self {
            center_x,
            center_y,
            zoom: center.zoom,
            cells,
        }
    }

    /// All cells, row-major from the north-west corner.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells that map onto a real tile.
    pub fn fetchable(&self) -> impl Iterator<Item = &GridCell> {
        self.cells.iter().filter(|cell| cell.tile.is_some())
    }

    /// Number of cells outside the map.
    pub fn skipped(&self) -> usize {
        self.cells.iter().filter(|cell| cell.tile.is_none()).count()
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Mosaic edge length in pixels.
    pub fn pixel_size(&self) -> u32 {
        GRID_DIM * TILE_SIZE
    }

    /// Pixel position of `point` within the mosaic.
    pub fn pixel_position(&self, point: &TileCoordinate) -> (f64, f64) {
        let size = f64::from(TILE_SIZE);
        let origin_x = (self.center_x - GRID_RADIUS) as f64;
        let origin_y = (self.center_y - GRID_RADIUS) as f64;
        ((point.x - origin_x) * size, (point.y - origin_y) * size)
    }
}
