//! BSSID type definitions

use std::fmt;
use thiserror::Error;

/// Human-readable description of the accepted BSSID format.
pub const EXPECTED_FORMAT: &str = "XX:XX:XX:XX:XX:XX";

/// A validated 48-bit access point hardware address.
///
/// Always rendered in canonical form: lower-case hex pairs joined by colons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HardwareAddress([u8; 6]);

impl HardwareAddress {
    /// Creates an address from raw octets.
    pub fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Returns the six octets of the address.
    pub fn octets(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Display for HardwareAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            a, b, c, d, e, g
        )
    }
}

/// Errors from BSSID validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BssidError {
    /// Input does not match the canonical BSSID pattern
    #[error("Invalid BSSID format '{input}'. Use {expected}")]
    InvalidFormat {
        input: String,
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_canonical() {
        let address = HardwareAddress::new([0x00, 0x1A, 0x2b, 0xFF, 0x09, 0x10]);
        assert_eq!(address.to_string(), "00:1a:2b:ff:09:10");
        assert_eq!(address.to_string().len(), 17);
    }
}
