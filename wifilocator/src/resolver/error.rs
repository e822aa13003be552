//! Resolution error types

use crate::bssid::BssidError;
use crate::provider::HttpError;
use crate::wloc::WlocError;
use thiserror::Error;

/// Failure to resolve a BSSID to a position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolutionError {
    /// Input is not a six-octet hardware address; nothing was sent
    #[error(transparent)]
    InvalidFormat(#[from] BssidError),

    /// The geolocation service could not be reached or answered non-2xx
    #[error("geolocation request failed: {0}")]
    Network(#[from] HttpError),

    /// The reply could not be decoded
    #[error("geolocation reply could not be decoded: {0}")]
    Decode(#[from] WlocError),

    /// The service has no position for this access point
    #[error("no location known for {bssid}")]
    NotFound { bssid: String },
}
