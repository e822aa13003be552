//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;
use std::str::FromStr;

use super::defaults::{MAX_MAP_EDGE, MAX_ZOOM};
use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [provider] section
    if let Some(section) = ini.section(Some("provider")) {
        if let Some(v) = section.get("use_single_image") {
            config.provider.use_single_image = parse_bool("provider", "use_single_image", v)?;
        }
        if let Some(v) = section.get("api_key") {
            let v = v.trim();
            config.provider.api_key = (!v.is_empty()).then(|| v.to_string());
        }
    }

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("zoom") {
            let zoom: u8 = parse_number("map", "zoom", v, "must be an integer from 0 to 20")?;
            if zoom > MAX_ZOOM {
                return Err(invalid("map", "zoom", v, "must be an integer from 0 to 20"));
            }
            config.map.zoom = zoom;
        }
        if let Some(v) = section.get("size") {
            let (width, height) = parse_dimensions(v).ok_or_else(|| {
                invalid(
                    "map",
                    "size",
                    v,
                    &format!("expected WIDTHxHEIGHT with each edge from 1 to {MAX_MAP_EDGE}"),
                )
            })?;
            config.map.width = width;
            config.map.height = height;
        }
    }

    // [tiles] section
    if let Some(section) = ini.section(Some("tiles")) {
        if let Some(v) = section.get("hosts") {
            let hosts: Vec<String> = v
                .split(',')
                .map(str::trim)
                .filter(|h| !h.is_empty())
                .map(str::to_string)
                .collect();
            if hosts.is_empty() {
                return Err(invalid(
                    "tiles",
                    "hosts",
                    v,
                    "must list at least one tile server",
                ));
            }
            config.tiles.hosts = hosts;
        }
    }

    // [network] section
    if let Some(section) = ini.section(Some("network")) {
        if let Some(v) = section.get("geolocation_url") {
            let v = v.trim();
            if !v.starts_with("http://") && !v.starts_with("https://") {
                return Err(invalid(
                    "network",
                    "geolocation_url",
                    v,
                    "must be an http:// or https:// URL",
                ));
            }
            config.network.geolocation_url = v.to_string();
        }
        if let Some(v) = section.get("geolocation_timeout") {
            config.network.geolocation_timeout = parse_timeout("geolocation_timeout", v)?;
        }
        if let Some(v) = section.get("static_map_timeout") {
            config.network.static_map_timeout = parse_timeout("static_map_timeout", v)?;
        }
        if let Some(v) = section.get("tile_timeout") {
            config.network.tile_timeout = parse_timeout("tile_timeout", v)?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

fn invalid(section: &str, key: &str, value: &str, reason: &str) -> ConfigFileError {
    ConfigFileError::InvalidValue {
        section: section.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

fn parse_bool(section: &str, key: &str, value: &str) -> Result<bool, ConfigFileError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "yes" | "1" | "on" => Ok(true),
        "false" | "no" | "0" | "off" => Ok(false),
        _ => Err(invalid(section, key, value, "must be 'true' or 'false'")),
    }
}

fn parse_number<T: FromStr>(
    section: &str,
    key: &str,
    value: &str,
    reason: &str,
) -> Result<T, ConfigFileError> {
    value
        .trim()
        .parse()
        .map_err(|_| invalid(section, key, value, reason))
}

fn parse_timeout(key: &str, value: &str) -> Result<u64, ConfigFileError> {
    const REASON: &str = "must be a positive integer (seconds)";
    let secs: u64 = parse_number("network", key, value, REASON)?;
    if secs == 0 {
        return Err(invalid("network", key, value, REASON));
    }
    Ok(secs)
}

/// Parses `WIDTHxHEIGHT`, e.g. `600x400`.
pub(super) fn parse_dimensions(value: &str) -> Option<(u32, u32)> {
    let (w, h) = value.trim().to_lowercase().split_once('x').map(|(w, h)| {
        (w.trim().parse::<u32>(), h.trim().parse::<u32>())
    })?;
    let (w, h) = (w.ok()?, h.ok()?);
    let edge = 1..=MAX_MAP_EDGE;
    (edge.contains(&w) && edge.contains(&h)).then_some((w, h))
}

/// Expand `~/` at the start of a path to the user's home directory.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}
