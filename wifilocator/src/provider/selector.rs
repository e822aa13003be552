//! Ordered fallback across map providers.

use crate::coord::{GeoPoint, MAX_ZOOM};
use crate::provider::{
    MapProvider, ProviderAttempt, ProviderKind, ProviderResult, RenderError,
};
use tracing::{debug, info, warn};

/// Tries each provider in order until one produces a map.
///
/// Providers are consulted front to back; a soft failure is logged and the
/// next provider is tried.
#[derive(Default)]
pub struct MapSelector {
    providers: Vec<Box<dyn MapProvider>>,
}

impl MapSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider to the end of the chain.
    pub fn with_provider(mut self, provider: Box<dyn MapProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Kinds of the configured providers, in order.
    pub fn kinds(&self) -> Vec<ProviderKind> {
        self.providers.iter().map(|p| p.kind()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    /// Renders a map centered on (`lat`, `lon`).
    ///
    /// Returns the first successful rendering with its provider label. When
    /// every provider fails, the error lists each attempt. Zoom levels above
    /// [`MAX_ZOOM`] are rejected before any provider runs.
    pub fn get_map(&self, lat: f64, lon: f64, zoom: u8) -> Result<ProviderResult, RenderError> {
        if zoom > MAX_ZOOM {
            return Err(RenderError::InvalidZoom {
                zoom,
                max: MAX_ZOOM,
            });
        }

        let center = GeoPoint::new(lat, lon);
        let mut attempts = Vec::new();

        for provider in &self.providers {
            debug!(provider = provider.name(), kind = %provider.kind(), "Trying map provider");
            match provider.try_render(center, zoom) {
                Ok(image) => {
                    info!(
                        provider = provider.name(),
                        kind = %provider.kind(),
                        width = image.width(),
                        height = image.height(),
                        "Map rendered"
                    );
                    return Ok(ProviderResult {
                        image,
                        provider: provider.kind(),
                    });
                }
                Err(error) => {
                    warn!(
                        provider = provider.name(),
                        kind = %provider.kind(),
                        error = %error,
                        "Map provider failed"
                    );
                    attempts.push(ProviderAttempt {
                        provider: provider.kind(),
                        error,
                    });
                }
            }
        }

        match attempts.len() {
            0 => Err(RenderError::NoProviders),
            1 => Err(RenderError::ProviderFailed(attempts.remove(0))),
            _ => Err(RenderError::AllProvidersFailed { attempts }),
        }
    }
}
