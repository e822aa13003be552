//! Default values and constants for all configuration settings.
//!
//! Contains all `DEFAULT_*` constants, validation ranges, and the
//! `ConfigFile::default()` implementation.

use super::file::config_directory;
use super::settings::*;
use crate::mosaic::DEFAULT_TILE_HOSTS;

/// Default WLOC endpoint.
pub const DEFAULT_GEOLOCATION_URL: &str = "https://gs-loc.apple.com/clls/wloc";

/// Default geolocation timeout in seconds.
pub const DEFAULT_GEOLOCATION_TIMEOUT_SECS: u64 = 15;

/// Default static map timeout in seconds.
pub const DEFAULT_STATIC_MAP_TIMEOUT_SECS: u64 = 15;

/// Default per-tile timeout in seconds.
pub const DEFAULT_TILE_TIMEOUT_SECS: u64 = 10;

/// Default zoom level.
pub const DEFAULT_ZOOM: u8 = 15;

pub use crate::coord::MAX_ZOOM;

/// Default output width in pixels.
pub const DEFAULT_MAP_WIDTH: u32 = 600;

/// Default output height in pixels.
pub const DEFAULT_MAP_HEIGHT: u32 = 400;

/// Largest accepted output edge in pixels.
pub const MAX_MAP_EDGE: u32 = 4096;

/// Default log file name inside the config directory.
pub const DEFAULT_LOG_FILE: &str = "wifilocator.log";

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            provider: ProviderSettings {
                use_single_image: true,
                api_key: None,
            },
            map: MapSettings {
                zoom: DEFAULT_ZOOM,
                width: DEFAULT_MAP_WIDTH,
                height: DEFAULT_MAP_HEIGHT,
            },
            tiles: TileSettings {
                hosts: DEFAULT_TILE_HOSTS.iter().map(|h| h.to_string()).collect(),
            },
            network: NetworkSettings {
                geolocation_url: DEFAULT_GEOLOCATION_URL.to_string(),
                geolocation_timeout: DEFAULT_GEOLOCATION_TIMEOUT_SECS,
                static_map_timeout: DEFAULT_STATIC_MAP_TIMEOUT_SECS,
                tile_timeout: DEFAULT_TILE_TIMEOUT_SECS,
            },
            logging: LoggingSettings {
                file: config_directory().join(DEFAULT_LOG_FILE),
            },
        }
    }
}
