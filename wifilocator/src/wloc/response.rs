//! WLOC reply decoding.

use super::error::WlocError;
use super::proto::WlocMessage;
use crate::coord::GeoPoint;
use prost::Message;
use tracing::{debug, trace};

/// Length of the transport header that precedes the protobuf body.
pub const RESPONSE_HEADER_LEN: usize = 10;

/// Fixed-point scale of reply coordinates (degrees × 10^8).
pub const COORDINATE_SCALE: i64 = 100_000_000;

/// Latitude the service reports for access points it cannot place.
///
/// 180° is outside the valid latitude range, so it can never be a real fix.
pub const NOT_FOUND_LATITUDE: i64 = 180 * COORDINATE_SCALE;

/// Outcome of a well-formed WLOC reply.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reply {
    /// The service placed the access point
    Located(GeoPoint),
    /// The service has no location for the access point
    NotFound,
}

/// Decodes a raw WLOC reply.
///
/// Only the first location record is considered; any further records are
/// ignored. An empty record list, a record without a location, or the
/// sentinel latitude all mean [`Reply::NotFound`].
///
/// # Errors
///
/// Returns [`WlocError`] if the reply is shorter than the transport header
/// or its body is not a valid WLOC message.
pub fn decode(raw: &[u8]) -> Result<Reply, WlocError> {
    if raw.len() < RESPONSE_HEADER_LEN {
        return Err(WlocError::Truncated { len: raw.len() });
    }

    let message = WlocMessage::decode(&raw[RESPONSE_HEADER_LEN..])?;
    trace!(records = message.wifi_devices.len(), "WLOC reply decoded");

    let Some(record) = message.wifi_devices.first() else {
        return Ok(Reply::NotFound);
    };
    let Some(location) = record.location.as_ref() else {
        return Ok(Reply::NotFound);
    };

    let latitude = location.latitude.unwrap_or_default();
    let longitude = location.longitude.unwrap_or_default();
    if latitude == NOT_FOUND_LATITUDE {
        return Ok(Reply::NotFound);
    }

    debug!(
        bssid = %record.bssid,
        accuracy_m = ?location.horizontal_accuracy,
        "WLOC record located"
    );

    Ok(Reply::Located(GeoPoint::new(
        latitude as f64 / COORDINATE_SCALE as f64,
        longitude as f64 / COORDINATE_SCALE as f64,
    )))
}
