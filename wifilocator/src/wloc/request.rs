//! WLOC request frame construction.

use super::proto::{WifiDevice, WlocMessage};
use crate::bssid::HardwareAddress;
use prost::Message;

/// Empty field, request code 1 and three bytes of zero padding that sit
/// between the preamble strings and the sub-record length.
const PREAMBLE_TRAILER: [u8; 7] = [0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00];

/// Fixed fields at the start of every request, identifying the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FramePreamble {
    pub protocol_version: u16,
    pub locale: &'static str,
    pub client_id: &'static str,
    pub client_version: &'static str,
}

impl FramePreamble {
    /// The preamble sent by iOS 8.1 `locationd`, which the service accepts.
    pub const LOCATIOND: FramePreamble = FramePreamble {
        protocol_version: 1,
        locale: "en_US",
        client_id: "com.apple.locationd",
        client_version: "8.1.12B411",
    };

    fn write_to(&self, buf: &mut Vec<u8>) {
        buf.extend_from_slice(&self.protocol_version.to_be_bytes());
        put_string(buf, self.locale);
        put_string(buf, self.client_id);
        put_string(buf, self.client_version);
        buf.extend_from_slice(&PREAMBLE_TRAILER);
    }
}

impl Default for FramePreamble {
    fn default() -> Self {
        Self::LOCATIOND
    }
}

/// Writes a u16 big-endian length followed by the string bytes.
fn put_string(buf: &mut Vec<u8>, value: &str) {
    buf.extend_from_slice(&(value.len() as u16).to_be_bytes());
    buf.extend_from_slice(value.as_bytes());
}

/// A serialized WLOC request, ready to be used as an HTTP body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestFrame {
    bytes: Vec<u8>,
    sub_record_offset: usize,
}

impl RequestFrame {
    /// The full frame.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The one-byte length prefix of the sub-record.
    pub fn sub_record_len(&self) -> u8 {
        self.bytes[self.sub_record_offset - 1]
    }

    /// The protobuf sub-record following the length prefix.
    pub fn sub_record(&self) -> &[u8] {
        &self.bytes[self.sub_record_offset..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Builds the request frame querying a single BSSID.
///
/// The sub-record carries the address in canonical text form, so its length
/// is the same for every address (25 bytes).
pub fn encode(address: &HardwareAddress) -> RequestFrame {
    encode_with(&FramePreamble::LOCATIOND, address)
}

/// Builds a request frame with an explicit preamble.
pub fn encode_with(preamble: &FramePreamble, address: &HardwareAddress) -> RequestFrame {
    let sub_record = WlocMessage {
        wifi_devices: vec![WifiDevice {
            bssid: address.to_string(),
            location: None,
        }],
        unknown_value: Some(0),
        return_single_result: Some(1),
    }
    .encode_to_vec();

    let mut bytes = Vec::with_capacity(64 + sub_record.len());
    preamble.write_to(&mut bytes);
    bytes.push(sub_record.len() as u8);
    let sub_record_offset = bytes.len();
    bytes.extend_from_slice(&sub_record);

    RequestFrame {
        bytes,
        sub_record_offset,
    }
}
