//! BSSID to position resolution
//!
//! Validates the identifier, sends one WLOC request and decodes the reply.
//! There are no retries: each call makes at most one network request, and
//! none at all when the identifier is malformed.

mod error;

pub use error::ResolutionError;

use crate::bssid;
use crate::config::{DEFAULT_GEOLOCATION_TIMEOUT_SECS, DEFAULT_GEOLOCATION_URL};
use crate::coord::GeoPoint;
use crate::provider::HttpClient;
use crate::wloc::{self, Reply};
use std::time::Duration;
use tracing::{debug, info};

/// Headers the geolocation service expects from `locationd`.
///
/// `Accept-Encoding` is added by the transport, which also inflates the reply.
pub const WLOC_HEADERS: [(&str, &str); 5] = [
    ("Content-Type", "application/x-www-form-urlencoded"),
    ("Accept", "*/*"),
    ("Accept-Charset", "utf-8"),
    ("Accept-Language", "en-us"),
    ("User-Agent", "locationd/1753.17 CFNetwork/711.1.12 Darwin/14.0.0"),
];

/// Resolves access point identifiers through a WLOC endpoint.
///
/// # Example
///
/// ```ignore
/// use wifilocator::provider::ReqwestClient;
/// use wifilocator::resolver::LocationResolver;
///
/// let resolver = LocationResolver::new(ReqwestClient::new()?);
/// let point = resolver.resolve("aa:bb:cc:dd:ee:ff")?;
/// ```
pub struct LocationResolver<C: HttpClient> {
    http_client: C,
    endpoint: String,
    timeout: Duration,
}

impl<C: HttpClient> LocationResolver<C> {
    /// Creates a resolver for the default endpoint with a 15 s timeout.
    pub fn new(http_client: C) -> Self {
        Self {
            http_client,
            endpoint: DEFAULT_GEOLOCATION_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_GEOLOCATION_TIMEOUT_SECS),
        }
    }

    /// Overrides the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Resolves `text` to a position.
    ///
    /// # Errors
    ///
    /// * [`ResolutionError::InvalidFormat`] - not `XX:XX:XX:XX:XX:XX`; no request made
    /// * [`ResolutionError::Network`] - timeout, connection failure or non-2xx status
    /// * [`ResolutionError::Decode`] - truncated or malformed reply
    /// * [`ResolutionError::NotFound`] - the service has no position for the address
    pub fn resolve(&self, text: &str) -> Result<GeoPoint, ResolutionError> {
        let address = bssid::validate(text)?;
        let frame = wloc::encode(&address);

        debug!(
            bssid = %address,
            endpoint = %self.endpoint,
            bytes = frame.as_bytes().len(),
            "Sending WLOC request"
        );
        let response = self.http_client.post(
            &self.endpoint,
            &WLOC_HEADERS,
            frame.as_bytes(),
            self.timeout,
        )?;

        match wloc::decode(&response.body)? {
            Reply::Located(point) => {
                info!(bssid = %address, location = %point, "BSSID located");
                Ok(point)
            }
            Reply::NotFound => {
                info!(bssid = %address, "BSSID not known to geolocation service");
                Err(ResolutionError::NotFound {
                    bssid: address.to_string(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{HttpError, HttpResponse, MockHttpClient};
    use crate::wloc::COORDINATE_SCALE;

    /// Builds a reply: 10 header bytes then one WifiDevice record.
    fn reply(lat: i64, lon: i64) -> Vec<u8> {
        use crate::wloc::proto::{Location, WifiDevice, WlocMessage};
        use prost::Message;

        let message = WlocMessage {
            wifi_devices: vec![WifiDevice {
                bssid: "aa:bb:cc:dd:ee:ff".to_string(),
                location: Some(Location {
                    latitude: Some(lat),
                    longitude: Some(lon),
                    ..Default::default()
                }),
            }],
            ..Default::default()
        };
        let mut body = vec![0u8; 10];
        body.extend(message.encode_to_vec());
        body
    }

    fn mock_with(body: Vec<u8>) -> MockHttpClient {
        MockHttpClient::new().route("wloc", Ok(HttpResponse::new(None, body)))
    }

    #[test]
    fn test_resolves_location() {
        let mock = mock_with(reply(4_071_280_000, -7_400_600_000));
        let resolver = LocationResolver::new(mock.clone());

        let point = resolver.resolve("AA:BB:CC:DD:EE:FF").unwrap();
        assert!((point.latitude - 40.7128).abs() < 1e-9);
        assert!((point.longitude + 74.006).abs() < 1e-9);
        assert_eq!(
            mock.requested_urls(),
            vec!["https://gs-loc.apple.com/clls/wloc".to_string()]
        );
    }

    #[test]
    fn test_request_carries_protocol_headers_and_timeout() {
        let mock = mock_with(reply(4_071_280_000, -7_400_600_000));
        LocationResolver::new(mock.clone())
            .resolve("aa:bb:cc:dd:ee:ff")
            .unwrap();

        let request = &mock.requests()[0];
        assert_eq!(
            request.header("Content-Type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(request.header("Accept"), Some("*/*"));
        assert_eq!(request.header("Accept-Charset"), Some("utf-8"));
        assert_eq!(request.header("Accept-Language"), Some("en-us"));
        assert_eq!(
            request.header("User-Agent"),
            Some("locationd/1753.17 CFNetwork/711.1.12 Darwin/14.0.0")
        );
        assert_eq!(request.timeout, Duration::from_secs(15));
    }

    #[test]
    fn test_invalid_input_makes_no_request() {
        let mock = MockHttpClient::new();
        let resolver = LocationResolver::new(mock.clone());

        let err = resolver.resolve("not-a-mac").unwrap_err();
        assert!(matches!(err, ResolutionError::InvalidFormat(_)));
        assert_eq!(mock.call_count(), 0);
    }

    #[test]
    fn test_sentinel_is_not_found() {
        let resolver = LocationResolver::new(mock_with(reply(180 * COORDINATE_SCALE, 0)));

        let err = resolver.resolve("aa:bb:cc:dd:ee:ff").unwrap_err();
        assert_eq!(
            err,
            ResolutionError::NotFound {
                bssid: "aa:bb:cc:dd:ee:ff".to_string()
            }
        );
    }

    #[test]
    fn test_transport_failure_is_network_error() {
        let mock = MockHttpClient::new().route(
            "wloc",
            Err(HttpError::Timeout {
                url: "wloc".to_string(),
            }),
        );
        let err = LocationResolver::new(mock)
            .resolve("aa:bb:cc:dd:ee:ff")
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Network(HttpError::Timeout { .. })));
    }

    #[test]
    fn test_non_2xx_is_network_error() {
        let mock = MockHttpClient::new().status("wloc", 502);
        let err = LocationResolver::new(mock)
            .resolve("aa:bb:cc:dd:ee:ff")
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Network(ref e) if e.status() == Some(502)));
    }

    #[test]
    fn test_short_reply_is_decode_error() {
        let err = LocationResolver::new(mock_with(vec![0; 4]))
            .resolve("aa:bb:cc:dd:ee:ff")
            .unwrap_err();
        assert!(matches!(err, ResolutionError::Decode(_)));
    }

    #[test]
    fn test_custom_endpoint() {
        let mock = MockHttpClient::new().route(
            "localhost",
            Ok(HttpResponse::new(None, reply(100_000_000, 200_000_000))),
        );
        let resolver = LocationResolver::new(mock.clone())
            .with_endpoint("http://localhost:8080/wloc")
            .with_timeout(Duration::from_secs(1));

        let point = resolver.resolve("00:11:22:33:44:55").unwrap();
        assert_eq!(point, GeoPoint::new(1.0, 2.0));
        assert_eq!(resolver.endpoint(), "http://localhost:8080/wloc");
        assert_eq!(mock.requests()[0].timeout, Duration::from_secs(1));
    }
}
