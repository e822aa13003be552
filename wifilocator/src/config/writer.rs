//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let api_key = config.provider.api_key.as_deref().unwrap_or("");
    let hosts = config.tiles.hosts.join(", ");

    format!(
        r#"[provider]
; Try Google Static Maps first, falling back to OpenStreetMap tiles (default: true)
; Only used when api_key is set
use_single_image = {}
; Google Maps Platform API key
; Get one at: https://console.cloud.google.com (enable Maps Static API)
api_key = {}

[map]
; Default zoom level, 0-20 (default: 15)
zoom = {}
; Output image size as WIDTHxHEIGHT (default: 600x400)
size = {}x{}

[tiles]
; Comma-separated OpenStreetMap tile servers, used round-robin
; Bare host names are fetched over https://
hosts = {}

[network]
; Wi-Fi geolocation endpoint
geolocation_url = {}
; Timeouts in seconds
geolocation_timeout = {}
static_map_timeout = {}
tile_timeout = {}

[logging]
; Log file path (default: ~/.wifilocator/wifilocator.log)
file = {}
"#,
        config.provider.use_single_image,
        api_key,
        config.map.zoom,
        config.map.width,
        config.map.height,
        hosts,
        config.network.geolocation_url,
        config.network.geolocation_timeout,
        config.network.static_map_timeout,
        config.network.tile_timeout,
        path_to_string(&config.logging.file),
    )
}

/// Shortens paths under the home directory to `~/...`.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_has_every_section() {
        let content = to_config_string(&ConfigFile::default());
        for section in ["[provider]", "[map]", "[tiles]", "[network]", "[logging]"] {
            assert!(content.contains(section), "missing {section}");
        }
        assert!(content.contains("size = 600x400"));
        assert!(content.contains("zoom = 15"));
        assert!(content.contains(
            "hosts = a.tile.openstreetmap.org, b.tile.openstreetmap.org, c.tile.openstreetmap.org"
        ));
    }

    #[test]
    fn test_home_paths_are_shortened() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("a/b.log")), "~/a/b.log");
        }
        assert_eq!(
            path_to_string(Path::new("/definitely/elsewhere.log")),
            "/definitely/elsewhere.log"
        );
    }
}
