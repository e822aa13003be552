//! Google Static Maps provider.
//!
//! Fetches one finished map image, marker included, from the Maps Static API.
//! Requires an API key with the Maps Static API enabled.
//!
//! # API Endpoint
//!
//! `https://maps.googleapis.com/maps/api/staticmap?center={lat},{lon}&zoom={z}&size={w}x{h}&...`

use crate::coord::GeoPoint;
use crate::provider::{HttpClient, HttpError, MapProvider, ProviderError, ProviderKind};
use image::RgbaImage;
use reqwest::Url;
use std::time::Duration;
use tracing::{debug, warn};

/// Maps Static API endpoint.
pub const STATIC_MAP_URL: &str = "https://maps.googleapis.com/maps/api/staticmap";

/// Default request timeout.
pub const DEFAULT_STATIC_MAP_TIMEOUT: Duration = Duration::from_secs(15);

/// Single-image provider backed by the Google Maps Static API.
///
/// # Example
///
/// ```ignore
/// use wifilocator::provider::{ReqwestClient, StaticMapProvider};
///
/// let client = ReqwestClient::new()?;
/// let provider = StaticMapProvider::new(client, "YOUR_API_KEY", (600, 400));
/// ```
pub struct StaticMapProvider<C: HttpClient> {
    http_client: C,
    api_key: String,
    size: (u32, u32),
    timeout: Duration,
}

impl<C: HttpClient> StaticMapProvider<C> {
    /// Creates a new static map provider.
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client for making requests
    /// * `api_key` - Google Maps Platform API key
    /// * `size` - Output image size as (width, height)
    pub fn new(http_client: C, api_key: impl Into<String>, size: (u32, u32)) -> Self {
        Self {
            http_client,
            api_key: api_key.into(),
            size,
            timeout: DEFAULT_STATIC_MAP_TIMEOUT,
        }
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the request URL for a map centered on `center`.
    fn build_url(&self, center: GeoPoint, zoom: u8) -> Result<Url, ProviderError> {
        let position = format!("{},{}", center.latitude, center.longitude);
        let params = [
            ("center", position.clone()),
            ("zoom", zoom.to_string()),
            ("size", format!("{}x{}", self.size.0, self.size.1)),
            ("maptype", "roadmap".to_string()),
            ("markers", format!("color:red|size:mid|{}", position)),
            ("key", self.api_key.clone()),
            ("format", "png".to_string()),
            ("scale", "1".to_string()),
        ];

        Url::parse_with_params(STATIC_MAP_URL, &params).map_err(|e| {
            ProviderError::Http(HttpError::Request {
                url: STATIC_MAP_URL.to_string(),
                message: e.to_string(),
            })
        })
    }
}

impl<C: HttpClient> MapProvider for StaticMapProvider<C> {
    fn name(&self) -> &str {
        "Google Static Maps"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::SingleImage
    }

    fn try_render(&self, center: GeoPoint, zoom: u8) -> Result<RgbaImage, ProviderError> {
        let url = self.build_url(center, zoom)?;
        debug!(center = %center, zoom = zoom, "Requesting static map");

        let response = match self.http_client.get(url.as_str(), &[], self.timeout) {
            Ok(response) => response,
            Err(HttpError::Status { status: 403, .. }) => {
                warn!("Static map request forbidden (HTTP 403); enable the Maps Static API for this key");
                return Err(ProviderError::Forbidden);
            }
            Err(e) => return Err(ProviderError::Http(e)),
        };

        if let Some(content_type) = response
            .content_type
            .as_deref()
            .filter(|ct| ct.to_ascii_lowercase().contains("error"))
        {
            return Err(ProviderError::ErrorPayload {
                content_type: content_type.to_string(),
            });
        }

        image::load_from_memory(&response.body)
            .map(|img| img.to_rgba8())
            .map_err(|e| ProviderError::InvalidImage(e.to_string()))
    }
}
