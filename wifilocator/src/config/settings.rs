//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;
use std::time::Duration;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    /// Map provider settings
    pub provider: ProviderSettings,
    /// Rendered map settings
    pub map: MapSettings,
    /// Tile server settings
    pub tiles: TileSettings,
    /// Endpoints and timeouts
    pub network: NetworkSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

impl ConfigFile {
    /// Whether the single-image provider should lead the fallback chain.
    ///
    /// Requires both the switch and an API key.
    pub fn single_image_enabled(&self) -> bool {
        self.provider.use_single_image && self.provider.api_key.is_some()
    }
}

/// Map provider configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderSettings {
    /// Try the single-image (static map) provider before the tile mosaic
    pub use_single_image: bool,
    /// Google Maps Platform API key for the single-image provider
    pub api_key: Option<String>,
}

/// Rendered map configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSettings {
    /// Default zoom level
    pub zoom: u8,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
}

impl MapSettings {
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

/// Tile server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSettings {
    /// Equivalent tile hosts, used round-robin
    pub hosts: Vec<String>,
}

/// Network configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetworkSettings {
    /// WLOC geolocation endpoint
    pub geolocation_url: String,
    /// Geolocation request timeout in seconds
    pub geolocation_timeout: u64,
    /// Static map request timeout in seconds
    pub static_map_timeout: u64,
    /// Per-tile request timeout in seconds
    pub tile_timeout: u64,
}

impl NetworkSettings {
    pub fn geolocation_timeout(&self) -> Duration {
        Duration::from_secs(self.geolocation_timeout)
    }

    pub fn static_map_timeout(&self) -> Duration {
        Duration::from_secs(self.static_map_timeout)
    }

    pub fn tile_timeout(&self) -> Duration {
        Duration::from_secs(self.tile_timeout)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
