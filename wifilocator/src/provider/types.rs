//! Provider types and traits

use crate::coord::GeoPoint;
use crate::mosaic::MosaicError;
use crate::provider::HttpError;
use image::RgbaImage;
use std::fmt;
use thiserror::Error;

/// Kind of map a provider produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    /// One pre-rendered static map image
    SingleImage,
    /// Map assembled from slippy-map tiles
    TileMosaic,
}

impl ProviderKind {
    /// Stable label reported alongside rendered maps.
    pub fn label(&self) -> &'static str {
        match self {
            ProviderKind::SingleImage => "single-image",
            ProviderKind::TileMosaic => "tile-mosaic",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Recoverable failure of a single provider.
///
/// The selector logs these and moves on to the next provider.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    /// Credential rejected (HTTP 403)
    #[error("access denied by map service (HTTP 403); enable the Maps Static API for this key")]
    Forbidden,

    /// Any other transport failure
    #[error("map request failed: {0}")]
    Http(#[from] HttpError),

    /// Service answered with an error document instead of an image
    #[error("map service returned an error payload ({content_type})")]
    ErrorPayload { content_type: String },

    /// Body could not be decoded as an image
    #[error("map image could not be decoded: {0}")]
    InvalidImage(String),

    /// Mosaic rendering failed
    #[error(transparent)]
    Mosaic(#[from] MosaicError),
}

/// A map rendering strategy.
///
/// Implementors produce a finished map image centered on a point, or a
/// soft failure that lets the caller try another strategy.
pub trait MapProvider: Send + Sync {
    /// Returns the provider's name for logging and identification.
    fn name(&self) -> &str;

    /// Returns the kind of map this provider produces.
    fn kind(&self) -> ProviderKind;

    /// Renders a map centered on `center` at `zoom`.
    fn try_render(&self, center: GeoPoint, zoom: u8) -> Result<RgbaImage, ProviderError>;
}

/// A rendered map and the kind of provider that produced it.
#[derive(Debug, Clone)]
pub struct ProviderResult {
    pub image: RgbaImage,
    pub provider: ProviderKind,
}

impl ProviderResult {
    /// Label of the producing provider (`"single-image"` or `"tile-mosaic"`).
    pub fn label(&self) -> &'static str {
        self.provider.label()
    }
}

/// One failed provider attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderAttempt {
    pub provider: ProviderKind,
    pub error: ProviderError,
}

impl fmt::Display for ProviderAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.provider, self.error)
    }
}

/// No map could be produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RenderError {
    /// The chain is empty
    #[error("no map providers configured")]
    NoProviders,

    /// Zoom level outside the range every provider accepts
    #[error("zoom level {zoom} is out of range (0-{max})")]
    InvalidZoom { zoom: u8, max: u8 },

    /// The only provider tried failed
    #[error("{} map failed: {}", .0.provider, .0.error)]
    ProviderFailed(ProviderAttempt),

    /// Every provider in the fallback chain failed
    #[error("all map providers failed: {}", format_attempts(.attempts))]
    AllProvidersFailed { attempts: Vec<ProviderAttempt> },
}

fn format_attempts(attempts: &[ProviderAttempt]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_labels() {
        assert_eq!(ProviderKind::SingleImage.label(), "single-image");
        assert_eq!(ProviderKind::TileMosaic.to_string(), "tile-mosaic");
    }

    #[test]
    fn test_forbidden_message_has_hint() {
        let msg = ProviderError::Forbidden.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("Maps Static API"));
    }

    #[test]
    fn test_http_error_converts() {
        let err: ProviderError = HttpError::Timeout {
            url: "u".to_string(),
        }
        .into();
        assert!(matches!(err, ProviderError::Http(HttpError::Timeout { .. })));
    }

    #[test]
    fn test_all_failed_lists_each_attempt() {
        let err = RenderError::AllProvidersFailed {
            attempts: vec![
                ProviderAttempt {
                    provider: ProviderKind::SingleImage,
                    error: ProviderError::Forbidden,
                },
                ProviderAttempt {
                    provider: ProviderKind::TileMosaic,
                    error: ProviderError::Mosaic(MosaicError::EmptyViewport {
                        width: 0,
                        height: 0,
                    }),
                },
            ],
        };
        let msg = err.to_string();
        assert!(msg.contains("single-image: access denied"));
        assert!(msg.contains("tile-mosaic: output size 0x0"));
    }

    #[test]
    fn test_single_failure_message() {
        let err = RenderError::ProviderFailed(ProviderAttempt {
            provider: ProviderKind::TileMosaic,
            error: ProviderError::InvalidImage("bad".to_string()),
        });
        assert_eq!(
            err.to_string(),
            "tile-mosaic map failed: map image could not be decoded: bad"
        );
    }
}
