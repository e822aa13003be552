//! Tile mosaic provider.
//!
//! Adapts [`MosaicBuilder`] to the [`MapProvider`] chain. Needs no
//! credentials, so it serves as the last resort.

use crate::coord::GeoPoint;
use crate::mosaic::{MosaicBuilder, TileSource};
use crate::provider::{MapProvider, ProviderError, ProviderKind};
use image::RgbaImage;

/// Map provider that stitches slippy-map tiles.
pub struct TileMosaicProvider<S: TileSource> {
    builder: MosaicBuilder<S>,
    size: (u32, u32),
}

impl<S: TileSource> TileMosaicProvider<S> {
    /// Creates a provider rendering `size` (width, height) maps from `source`.
    pub fn new(source: S, size: (u32, u32)) -> Self {
        Self {
            builder: MosaicBuilder::new(source),
            size,
        }
    }
}

impl<S: TileSource> MapProvider for TileMosaicProvider<S> {
    fn name(&self) -> &str {
        self.builder.source().name()
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::TileMosaic
    }

    fn try_render(&self, center: GeoPoint, zoom: u8) -> Result<RgbaImage, ProviderError> {
        let (width, height) = self.size;
        Ok(self
            .builder
            .build(center.latitude, center.longitude, zoom, width, height)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mosaic::{MosaicError, OsmTileSource};
    use crate::provider::{solid_png, MockHttpClient};

    #[test]
    fn test_renders_requested_size() {
        let mock = MockHttpClient::new().png(".png", solid_png(256, 256, [0, 128, 0, 255]));
        let provider = TileMosaicProvider::new(OsmTileSource::new(mock.clone(), &["t"]), (600, 400));

        let img = provider
            .try_render(GeoPoint::new(51.5074, -0.1278), 15)
            .unwrap();
        assert_eq!(img.dimensions(), (600, 400));
        assert_eq!(provider.kind(), ProviderKind::TileMosaic);
        assert_eq!(mock.call_count(), 9);
    }

    #[test]
    fn test_zero_size_is_mosaic_error() {
        let provider = TileMosaicProvider::new(OsmTileSource::new(MockHttpClient::new(), &["t"]), (0, 0));
        let err = provider.try_render(GeoPoint::new(0.0, 0.0), 3).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Mosaic(MosaicError::EmptyViewport { .. })
        ));
    }

    #[test]
    fn test_out_of_range_zoom_is_soft_failure() {
        let mock = MockHttpClient::new().png(".png", solid_png(256, 256, [0, 128, 0, 255]));
        let provider = TileMosaicProvider::new(OsmTileSource::new(mock.clone(), &["t"]), (600, 400));

        let err = provider.try_render(GeoPoint::new(40.7, 100.0), 255).unwrap_err();
        assert_eq!(
            err,
            ProviderError::Mosaic(MosaicError::InvalidZoom { zoom: 255, max: 20 })
        );
        assert_eq!(mock.call_count(), 0);
    }
}
