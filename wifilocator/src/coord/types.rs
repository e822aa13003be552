//! Coordinate type definitions

use std::fmt;

/// Web Mercator valid latitude range
pub const MIN_LAT: f64 = -85.0511287798;
pub const MAX_LAT: f64 = 85.0511287798;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic position in decimal degrees.
///
/// No plausibility checks are applied; latitude is clamped to the Web
/// Mercator range only when projected into tile space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Fractional position in the Web Mercator / Slippy Map tile grid.
///
/// The integer part selects a tile, the fractional part is the position
/// inside that tile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileCoordinate {
    /// X position (east-west), 0 at the antimeridian going east
    pub x: f64,
    /// Y position (north-south), 0 at the northern Mercator limit
    pub y: f64,
    /// Zoom level
    pub zoom: u8,
}

impl TileCoordinate {
    /// Column of the tile containing this position.
    #[inline]
    pub fn tile_x(&self) -> i64 {
        self.x.floor() as i64
    }

    /// Row of the tile containing this position.
    #[inline]
    pub fn tile_y(&self) -> i64 {
        self.y.floor() as i64
    }

    /// Pixel offset of this position inside its tile.
    #[inline]
    pub fn pixel_offset(&self, tile_size: u32) -> (f64, f64) {
        let size = tile_size as f64;
        (self.x.fract() * size, self.y.fract() * size)
    }
}

/// Integer address of a single map tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileIndex {
    /// Column, 0 to 2^zoom - 1
    pub x: u32,
    /// Row, 0 to 2^zoom - 1
    pub y: u32,
    /// Zoom level
    pub zoom: u8,
}

impl fmt::Display for TileIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.zoom, self.x, self.y)
    }
}
