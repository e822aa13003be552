//! Wi-Fi access point identifier (BSSID) validation.
//!
//! A BSSID is written as six colon-separated hex octets, e.g.
//! `aa:bb:cc:dd:ee:ff`. Validation happens before any network activity so
//! malformed input never reaches the geolocation service.
//!
//! # Example
//!
//! ```
//! use wifilocator::bssid::validate;
//!
//! let address = validate("AA:BB:CC:DD:EE:FF").unwrap();
//! assert_eq!(address.to_string(), "aa:bb:cc:dd:ee:ff");
//! ```

mod types;

pub use types::{BssidError, HardwareAddress, EXPECTED_FORMAT};

use regex::Regex;
use std::sync::OnceLock;

/// Canonical BSSID pattern: six two-digit hex groups joined by colons.
fn bssid_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{2}(:[0-9A-Fa-f]{2}){5}$").unwrap())
}

/// Validates a textual BSSID and returns it normalized to lower case.
///
/// Surrounding whitespace is ignored. Any other deviation from the
/// `XX:XX:XX:XX:XX:XX` form is rejected.
///
/// # Errors
///
/// Returns [`BssidError::InvalidFormat`] carrying the rejected input and the
/// expected pattern description.
pub fn validate(text: &str) -> Result<HardwareAddress, BssidError> {
    let trimmed = text.trim();
    if !bssid_pattern().is_match(trimmed) {
        return Err(BssidError::InvalidFormat {
            input: text.to_string(),
            expected: EXPECTED_FORMAT,
        });
    }

    let mut octets = [0u8; 6];
    for (octet, group) in octets.iter_mut().zip(trimmed.split(':')) {
        *octet = u8::from_str_radix(group, 16).map_err(|_| BssidError::InvalidFormat {
            input: text.to_string(),
            expected: EXPECTED_FORMAT,
        })?;
    }

    Ok(HardwareAddress::new(octets))
}
