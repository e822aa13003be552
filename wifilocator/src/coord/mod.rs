//! Coordinate conversion module
//!
//! Projects geographic coordinates (latitude/longitude) into fractional Web
//! Mercator tile space, which is what tiled map servers address.

mod types;

pub use types::{GeoPoint, TileCoordinate, TileIndex, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

use std::f64::consts::PI;

/// Clamps a latitude to the range Web Mercator can represent.
#[inline]
pub fn clamp_latitude(lat: f64) -> f64 {
    lat.clamp(MIN_LAT, MAX_LAT)
}

/// Highest zoom level served by the map providers.
pub const MAX_ZOOM: u8 = 20;

/// Number of tiles along one axis at the given zoom level.
///
/// Levels above 62 are treated as 62 so the count fits in an `i64`.
#[inline]
pub fn tiles_per_axis(zoom: u8) -> i64 {
    1_i64 << zoom.min(62)
}

/// Converts geographic coordinates to a fractional tile position.
///
/// Latitude is clamped to ±85.0511287798° first, so poles map onto the
/// top and bottom edges of the tile grid.
///
/// # Arguments
///
/// * `lat` - Latitude in degrees
/// * `lon` - Longitude in degrees (-180.0 to 180.0)
/// * `zoom` - Zoom level
#[inline]
pub fn to_tile_space(lat: f64, lon: f64, zoom: u8) -> TileCoordinate {
    let lat = clamp_latitude(lat);

    // Calculate number of tiles at this zoom level
    let n = 2.0_f64.powi(zoom as i32);

    let x = (lon + 180.0) / 360.0 * n;

    // asinh(tan φ) == ln(tan φ + sec φ)
    let lat_rad = lat.to_radians();
    let y = (1.0 - lat_rad.tan().asinh() / PI) / 2.0 * n;

    TileCoordinate {
        x,
        y: y.clamp(0.0, n),
        zoom,
    }
}
