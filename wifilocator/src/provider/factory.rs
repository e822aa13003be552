//! Provider factory for centralized provider creation.
//!
//! Builds the ordered [`MapSelector`] chain from user configuration, so the
//! service facade and the CLI share one definition of the fallback order.

use super::mosaic::TileMosaicProvider;
use super::selector::MapSelector;
use super::static_map::StaticMapProvider;
use super::HttpClient;
use crate::config::ConfigFile;
use crate::mosaic::OsmTileSource;
use tracing::debug;

/// Creates map provider chains that share one HTTP client.
///
/// # Example
///
/// ```ignore
/// use wifilocator::config::ConfigFile;
/// use wifilocator::provider::{ProviderFactory, ReqwestClient};
///
/// let factory = ProviderFactory::new(ReqwestClient::new()?);
/// let selector = factory.selector(&ConfigFile::default());
/// ```
pub struct ProviderFactory<C: HttpClient + Clone + 'static> {
    http_client: C,
}

impl<C: HttpClient + Clone + 'static> ProviderFactory<C> {
    pub fn new(http_client: C) -> Self {
        Self { http_client }
    }

    /// Builds the fallback chain described by `config`.
    ///
    /// The single-image provider leads the chain only when it is switched on
    /// and an API key is configured. The tile mosaic is always present.
    pub fn selector(&self, config: &ConfigFile) -> MapSelector {
        let size = config.map.size();
        let mut selector = MapSelector::new();

        if config.single_image_enabled() {
            if let Some(api_key) = config.provider.api_key.as_deref() {
                let provider = StaticMapProvider::new(self.http_client.clone(), api_key, size)
                    .with_timeout(config.network.static_map_timeout());
                selector = selector.with_provider(Box::new(provider));
            }
        }

        let source = OsmTileSource::new(self.http_client.clone(), &config.tiles.hosts)
            .with_timeout(config.network.tile_timeout());
        selector = selector.with_provider(Box::new(TileMosaicProvider::new(source, size)));

        debug!(providers = ?selector.kinds(), "Map provider chain built");
        selector
    }
}
