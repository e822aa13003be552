//! wifilocator - Wi-Fi access point geolocation
//!
//! This library resolves a Wi-Fi access point's hardware address (BSSID) to
//! an approximate position using the WLOC protocol, and renders that
//! position on a map.
//!
//! # High-Level API
//!
//! For most use cases, the [`service`] module provides a simplified facade:
//!
//! ```ignore
//! use wifilocator::config::ConfigFile;
//! use wifilocator::service::WifiLocator;
//!
//! let locator = WifiLocator::new(ConfigFile::load()?)?;
//! let point = locator.resolve("aa:bb:cc:dd:ee:ff")?;
//! let map = locator.get_map(point.latitude, point.longitude, 15)?;
//! println!("{} rendered by {}", point, map.label());
//! ```

pub mod bssid;
pub mod config;
pub mod coord;
pub mod links;
pub mod logging;
pub mod mosaic;
pub mod provider;
pub mod resolver;
pub mod service;
pub mod wloc;

/// Version of the wifilocator library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
