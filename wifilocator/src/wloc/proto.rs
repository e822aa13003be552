//! Protobuf messages carried inside WLOC frames.
//!
//! The same top-level message is used in both directions: requests list the
//! queried BSSIDs, replies list the access points the service knows about.

use prost::Message;

#[derive(Clone, PartialEq, Message)]
pub(crate) struct WlocMessage {
    #[prost(message, repeated, tag = "2")]
    pub wifi_devices: Vec<WifiDevice>,
    /// Always zero in requests.
    #[prost(int32, optional, tag = "3")]
    pub unknown_value: Option<i32>,
    /// Ask for the queried device only, without neighbours.
    #[prost(int32, optional, tag = "4")]
    pub return_single_result: Option<i32>,
}

#[derive(Clone, PartialEq, Message)]
pub(crate) struct WifiDevice {
    #[prost(string, tag = "1")]
    pub bssid: String,
    #[prost(message, optional, tag = "2")]
    pub location: Option<Location>,
}

/// Fixed-point location; every integer field is scaled by 10^8 except the
/// accuracy and altitude values, which are in metres.
#[derive(Clone, PartialEq, Message)]
pub(crate) struct Location {
    #[prost(int64, optional, tag = "1")]
    pub latitude: Option<i64>,
    #[prost(int64, optional, tag = "2")]
    pub longitude: Option<i64>,
    #[prost(int64, optional, tag = "3")]
    pub horizontal_accuracy: Option<i64>,
    #[prost(int64, optional, tag = "5")]
    pub altitude: Option<i64>,
    #[prost(int64, optional, tag = "6")]
    pub vertical_accuracy: Option<i64>,
}
