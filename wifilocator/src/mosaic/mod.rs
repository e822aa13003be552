//! Tile mosaic rendering
//!
//! Builds a map image around a point from a 3×3 block of slippy-map tiles:
//!
//! 1. Project the point into tile space and pick the surrounding tiles
//!    ([`TileGrid`]). Columns wrap around the antimeridian, rows beyond the
//!    poles are skipped.
//! 2. Fetch the tiles in parallel from a [`TileSource`]. A tile that cannot
//!    be fetched or decoded leaves its cell transparent.
//! 3. Stitch, crop the requested size centered on the point, then draw the
//!    marker and attribution strip.
//!
//! # Example
//!
//! ```ignore
//! use wifilocator::mosaic::{MosaicBuilder, OsmTileSource};
//! use wifilocator::provider::ReqwestClient;
//!
//! let source = OsmTileSource::new(ReqwestClient::new()?, &["tile.openstreetmap.org"]);
//! let map = MosaicBuilder::new(source).build(51.5074, -0.1278, 15, 600, 400)?;
//! ```

mod builder;
mod error;
mod grid;
mod overlay;
mod source;

pub use builder::{crop_centered, FetchStats, MosaicBuilder};
pub use error::{MosaicError, TileError};
pub use grid::{GridCell, TileGrid, GRID_DIM, GRID_RADIUS, TILE_SIZE};
pub use overlay::{annotate, ATTRIBUTION, STRIP_HEIGHT};
pub use source::{
    OsmTileSource, TileSource, DEFAULT_TILE_HOSTS, DEFAULT_TILE_TIMEOUT, TILE_USER_AGENT,
};
