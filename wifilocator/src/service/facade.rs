//! wifilocator service facade implementation.

use crate::config::ConfigFile;
use crate::coord::GeoPoint;
use crate::provider::{
    HttpClient, MapSelector, ProviderFactory, ProviderResult, ReqwestClient, RenderError,
};
use crate::resolver::{LocationResolver, ResolutionError};
use crate::service::ServiceError;
use tracing::info;

/// A resolved position together with its rendered map.
#[derive(Debug, Clone)]
pub struct LocatedMap {
    pub location: GeoPoint,
    pub map: ProviderResult,
}

/// High-level facade over resolution and map rendering.
///
/// Encapsulates all component creation and wiring: one HTTP client is
/// shared by the resolver and every map provider, and all settings come
/// from a single [`ConfigFile`].
///
/// # Example
///
/// ```ignore
/// use wifilocator::config::ConfigFile;
/// use wifilocator::service::WifiLocator;
///
/// let locator = WifiLocator::new(ConfigFile::load()?)?;
/// let point = locator.resolve("aa:bb:cc:dd:ee:ff")?;
/// let map = locator.get_map(point.latitude, point.longitude, 15)?;
/// map.image.save("map.png")?;
/// ```
pub struct WifiLocator<C: HttpClient + Clone + 'static = ReqwestClient> {
    config: ConfigFile,
    resolver: LocationResolver<C>,
    selector: MapSelector,
}

impl WifiLocator<ReqwestClient> {
    /// Creates a locator backed by a real HTTP client.
    pub fn new(config: ConfigFile) -> Result<Self, ServiceError> {
        let http_client = ReqwestClient::new()?;
        Ok(Self::with_client(config, http_client))
    }
}

impl<C: HttpClient + Clone + 'static> WifiLocator<C> {
    /// Creates a locator using the given HTTP client.
    pub fn with_client(config: ConfigFile, http_client: C) -> Self {
        let selector = ProviderFactory::new(http_client.clone()).selector(&config);
        let resolver = LocationResolver::new(http_client)
            .with_endpoint(config.network.geolocation_url.clone())
            .with_timeout(config.network.geolocation_timeout());

        Self {
            config,
            resolver,
            selector,
        }
    }

    /// Configuration the locator was built from.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Resolves a BSSID such as `aa:bb:cc:dd:ee:ff` to a position.
    pub fn resolve(&self, bssid: &str) -> Result<GeoPoint, ResolutionError> {
        self.resolver.resolve(bssid)
    }

    /// Renders a map centered on (`lat`, `lon`) using the provider chain.
    pub fn get_map(&self, lat: f64, lon: f64, zoom: u8) -> Result<ProviderResult, RenderError> {
        self.selector.get_map(lat, lon, zoom)
    }

    /// Resolves `bssid`, then renders a map around the result.
    ///
    /// `zoom` defaults to the configured zoom level.
    pub fn locate_and_render(
        &self,
        bssid: &str,
        zoom: Option<u8>,
    ) -> Result<LocatedMap, ServiceError> {
        let location = self.resolve(bssid)?;
        let zoom = zoom.unwrap_or(self.config.map.zoom);
        let map = self.get_map(location.latitude, location.longitude, zoom)?;

        info!(
            location = %location,
            provider = map.label(),
            "Location rendered"
        );
        Ok(LocatedMap { location, map })
    }
}
