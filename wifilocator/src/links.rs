//! External map links and coordinate text.

use crate::coord::GeoPoint;

/// Google Maps page with a pin at `point`.
pub fn google_maps_url(point: GeoPoint, zoom: u8) -> String {
    let (lat, lon) = (point.latitude, point.longitude);
    format!("https://www.google.com/maps/place/{lat},{lon}/@{lat},{lon},{zoom}z")
}

/// OpenStreetMap page with a marker at `point`.
pub fn openstreetmap_url(point: GeoPoint, zoom: u8) -> String {
    let (lat, lon) = (point.latitude, point.longitude);
    format!("https://www.openstreetmap.org/?mlat={lat}&mlon={lon}#map={zoom}/{lat}/{lon}")
}

/// `lat,lon` with eight decimals, the precision of the WLOC fixed-point format.
pub fn format_coordinates(point: GeoPoint) -> String {
    format!("{:.8},{:.8}", point.latitude, point.longitude)
}
