//! Tile sources for the mosaic builder.

use crate::coord::TileIndex;
use crate::mosaic::TileError;
use crate::provider::HttpClient;
use image::RgbaImage;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tracing::trace;

/// User-Agent sent with every tile request.
pub const TILE_USER_AGENT: &str = "wifi-locator/2.0 (+modern-gui)";

/// Default per-tile request timeout.
pub const DEFAULT_TILE_TIMEOUT: Duration = Duration::from_secs(10);

/// Default OpenStreetMap tile servers.
pub const DEFAULT_TILE_HOSTS: [&str; 3] = [
    "a.tile.openstreetmap.org",
    "b.tile.openstreetmap.org",
    "c.tile.openstreetmap.org",
];

/// Something that can deliver decoded map tiles.
///
/// Called concurrently from the builder's fetch tasks.
pub trait TileSource: Send + Sync {
    /// Fetches and decodes one tile.
    fn fetch(&self, tile: TileIndex) -> Result<RgbaImage, TileError>;

    /// Returns the source's name for logging.
    fn name(&self) -> &str;
}

/// Slippy-map tile server pool.
///
/// Spreads requests over equivalent hosts in round-robin order and fetches
/// `{host}/{z}/{x}/{y}.png`.
pub struct OsmTileSource<C: HttpClient> {
    http_client: C,
    hosts: Vec<String>,
    /// Counter for round-robin host selection
    host_counter: AtomicUsize,
    timeout: Duration,
}

impl<C: HttpClient> OsmTileSource<C> {
    /// Creates a source over the given hosts.
    ///
    /// Hosts without a scheme are served over `https://`. An empty list
    /// selects [`DEFAULT_TILE_HOSTS`].
    pub fn new<S: AsRef<str>>(http_client: C, hosts: &[S]) -> Self {
        let mut hosts: Vec<String> = hosts
            .iter()
            .map(|h| h.as_ref().trim())
            .filter(|h| !h.is_empty())
            .map(normalize_host)
            .collect();
        if hosts.is_empty() {
            hosts = DEFAULT_TILE_HOSTS.iter().map(|h| normalize_host(h)).collect();
        }

        Self {
            http_client,
            hosts,
            host_counter: AtomicUsize::new(0),
            timeout: DEFAULT_TILE_TIMEOUT,
        }
    }

    /// Overrides the per-tile timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Normalized base URLs in rotation order.
    pub fn hosts(&self) -> &[String] {
        &self.hosts
    }

    /// Builds the URL for a tile using the next host in rotation.
    fn tile_url(&self, tile: TileIndex) -> String {
        let n = self.host_counter.fetch_add(1, Ordering::Relaxed) % self.hosts.len();
        format!("{}/{}/{}/{}.png", self.hosts[n], tile.zoom, tile.x, tile.y)
    }
}

fn normalize_host(host: &str) -> String {
    let host = host.trim_end_matches('/');
    if host.contains("://") {
        host.to_string()
    } else {
        format!("https://{}", host)
    }
}

impl<C: HttpClient> TileSource for OsmTileSource<C> {
    fn fetch(&self, tile: TileIndex) -> Result<RgbaImage, TileError> {
        let url = self.tile_url(tile);
        trace!(tile = %tile, url = %url, "Fetching tile");

        let response = self
            .http_client
            .get(&url, &[("User-Agent", TILE_USER_AGENT)], self.timeout)
            .map_err(|source| TileError::Fetch { tile, source })?;

        image::load_from_memory(&response.body)
            .map(|img| img.to_rgba8())
            .map_err(|e| TileError::Decode {
                tile,
                message: e.to_string(),
            })
    }

    fn name(&self) -> &str {
        "OpenStreetMap"
    }
}
