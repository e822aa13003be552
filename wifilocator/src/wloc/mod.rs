//! WLOC protocol codec.
//!
//! WLOC is the binary request/response format spoken by Apple's Wi-Fi
//! geolocation service. A request is a fixed preamble followed by a
//! length-prefixed protobuf sub-record naming the queried BSSID; a reply is a
//! 10-byte transport header followed by a protobuf message listing zero or
//! more located access points.
//!
//! # Request layout
//!
//! ```text
//! offset  bytes                          field
//! 0       00 01                          protocol version (u16 BE)
//! 2       00 05 "en_US"                  locale (u16 BE length + ASCII)
//! 9       00 13 "com.apple.locationd"    client identifier
//! 30      00 0a "8.1.12B411"             client version
//! 42      00 00 00 01 00 00 00           empty field, request code 1, padding
//! 49      19                             sub-record length (25)
//! 50      12 13                          field 2 (wifi device), length 19
//! 52      0a 11                          field 1 (bssid), length 17
//! 54      "aa:bb:cc:dd:ee:ff"            canonical BSSID text
//! 71      18 00                          field 3 = 0
//! 73      20 01                          field 4 = 1 (single result)
//! ```
//!
//! Coordinates in replies are fixed-point integers scaled by 10^8.

mod error;
pub(crate) mod proto;
mod request;
mod response;

pub use error::WlocError;
pub use request::{encode, encode_with, FramePreamble, RequestFrame};
pub use response::{decode, Reply, COORDINATE_SCALE, NOT_FOUND_LATITUDE, RESPONSE_HEADER_LEN};
