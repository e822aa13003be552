//! Map provider abstraction
//!
//! This module provides the HTTP transport used throughout the crate and the
//! map rendering strategies the selector falls back across:
//!
//! - [`StaticMapProvider`] - one pre-rendered image from Google Static Maps
//! - [`TileMosaicProvider`] - OpenStreetMap tiles stitched locally
//!
//! # Factory Pattern
//!
//! For building the configured chain, use the [`ProviderFactory`]:
//!
//! ```ignore
//! use wifilocator::config::ConfigFile;
//! use wifilocator::provider::{ProviderFactory, ReqwestClient};
//!
//! let factory = ProviderFactory::new(ReqwestClient::new()?);
//! let selector = factory.selector(&ConfigFile::load()?);
//! let map = selector.get_map(40.7128, -74.0060, 15)?;
//! println!("rendered by {}", map.label());
//! ```

mod factory;
mod http;
mod mosaic;
mod selector;
mod static_map;
mod types;

pub use factory::ProviderFactory;
pub use http::{HttpClient, HttpError, HttpResponse, ReqwestClient};
pub use mosaic::TileMosaicProvider;
pub use selector::MapSelector;
pub use static_map::{StaticMapProvider, DEFAULT_STATIC_MAP_TIMEOUT, STATIC_MAP_URL};
pub use types::{
    MapProvider, ProviderAttempt, ProviderError, ProviderKind, ProviderResult, RenderError,
};

#[cfg(test)]
pub use http::tests::{solid_png, MockHttpClient, RecordedRequest};
