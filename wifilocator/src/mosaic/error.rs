//! Mosaic error types

use crate::coord::TileIndex;
use crate::provider::HttpError;
use thiserror::Error;

/// Failure to obtain a single tile.
///
/// These are absorbed by the builder: the affected cell stays blank.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TileError {
    /// Transport failure while fetching the tile
    #[error("failed to fetch tile {tile}: {source}")]
    Fetch {
        tile: TileIndex,
        #[source]
        source: HttpError,
    },

    /// Tile body was not a decodable image
    #[error("failed to decode tile {tile}: {message}")]
    Decode { tile: TileIndex, message: String },

    /// Fetch task could not be started
    #[error("cannot start fetch task for tile {tile}: {message}")]
    Spawn { tile: TileIndex, message: String },

    /// Fetch task terminated abnormally
    #[error("fetch task for tile {0} panicked")]
    Panicked(TileIndex),
}

/// Fatal failure while rendering a mosaic.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MosaicError {
    /// Requested output has no area
    #[error("output size {width}x{height} has no area")]
    EmptyViewport { width: u32, height: u32 },

    /// Zoom level beyond what tile servers provide
    #[error("zoom level {zoom} is out of range (0-{max})")]
    InvalidZoom { zoom: u8, max: u8 },

    /// Drawing surface could not be created over the canvas
    #[error("cannot create a {width}x{height} drawing surface")]
    Surface { width: u32, height: u32 },

    /// Embedded attribution font failed to load
    #[error("attribution font unavailable: {0}")]
    Font(String),
}
