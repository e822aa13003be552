//! Mosaic assembly: fetch, stitch, crop, annotate.

use crate::coord::{to_tile_space, MAX_ZOOM};
use crate::mosaic::grid::{GridCell, TileGrid};
use crate::mosaic::{overlay, MosaicError, TileError, TileSource};
use image::{imageops, RgbaImage};
use std::thread;
use tracing::{debug, info, warn};

/// Outcome counts for one mosaic's tile fetches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchStats {
    /// Tiles fetched and pasted
    pub fetched: usize,
    /// Tiles whose fetch or decode failed
    pub failed: usize,
    /// Cells outside the map
    pub skipped: usize,
}

/// Renders a map around a point from a grid of tiles.
///
/// Tile failures are tolerated: the affected cells stay transparent and
/// the rest of the map is still produced.
pub struct MosaicBuilder<S: TileSource> {
    source: S,
}

impl<S: TileSource> MosaicBuilder<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Renders a `width`×`height` map centered on (`lat`, `lon`).
    ///
    /// The result carries a marker at its center and an attribution strip
    /// along the bottom.
    pub fn build(
        &self,
        lat: f64,
        lon: f64,
        zoom: u8,
        width: u32,
        height: u32,
    ) -> Result<RgbaImage, MosaicError> {
        if width == 0 || height == 0 {
            return Err(MosaicError::EmptyViewport { width, height });
        }
        if zoom > MAX_ZOOM {
            return Err(MosaicError::InvalidZoom {
                zoom,
                max: MAX_ZOOM,
            });
        }

        let center = to_tile_space(lat, lon, zoom);
        let grid = TileGrid::around(&center);
        debug!(
            source = self.source.name(),
            zoom = zoom,
            tile_x = center.tile_x(),
            tile_y = center.tile_y(),
            "Assembling tile mosaic"
        );

        let (mosaic, stats) = self.assemble(&grid);
        info!(
            fetched = stats.fetched,
            failed = stats.failed,
            skipped = stats.skipped,
            "Tile mosaic assembled"
        );

        let (px, py) = grid.pixel_position(&center);
        let mut canvas = crop_centered(&mosaic, px, py, width, height);
        overlay::annotate(&mut canvas)?;
        Ok(canvas)
    }

    /// Fetches every in-map cell and pastes the results into one image.
    pub fn assemble(&self, grid: &TileGrid) -> (RgbaImage, FetchStats) {
        let size = grid.pixel_size();
        let mut mosaic = RgbaImage::new(size, size);
        let mut stats = FetchStats {
            skipped: grid.skipped(),
            ..Default::default()
        };

        for (cell, result) in self.fetch_cells(grid) {
            match result {
                Ok(tile) => {
                    let (x, y) = cell.pixel_origin();
                    imageops::replace(&mut mosaic, &tile, x, y);
                    stats.fetched += 1;
                }
                Err(e) => {
                    warn!(error = %e, "Tile unavailable, leaving cell blank");
                    stats.failed += 1;
                }
            }
        }

        (mosaic, stats)
    }

    /// One scoped task per fetchable cell; each task yields only its own cell.
    fn fetch_cells(&self, grid: &TileGrid) -> Vec<(GridCell, Result<RgbaImage, TileError>)> {
        let source = &self.source;

        thread::scope(|scope| {
            let handles: Vec<_> = grid
                .fetchable()
                .filter_map(|cell| cell.tile.map(|tile| (*cell, tile)))
                .map(|(cell, tile)| {
                    let handle = thread::Builder::new()
                        .name(format!("tile-{}-{}", tile.x, tile.y))
                        .spawn_scoped(scope, move || source.fetch(tile));
                    (cell, tile, handle)
                })
                .collect();

            handles
                .into_iter()
                .map(|(cell, tile, handle)| {
                    let result = match handle {
                        Ok(handle) => handle
                            .join()
                            .unwrap_or_else(|_| Err(TileError::Panicked(tile))),
                        Err(e) => Err(TileError::Spawn {
                            tile,
                            message: e.to_string(),
                        }),
                    };
                    (cell, result)
                })
                .collect()
        })
    }
}

/// Cuts a `width`×`height` window centered on (`px`, `py`) out of `mosaic`.
///
/// Parts of the window beyond the mosaic stay transparent.
pub fn crop_centered(mosaic: &RgbaImage, px: f64, py: f64, width: u32, height: u32) -> RgbaImage {
    let left = (px - f64::from(width) / 2.0).round() as i64;
    let top = (py - f64::from(height) / 2.0).round() as i64;

    let mut out = RgbaImage::new(width, height);
    imageops::replace(&mut out, mosaic, -left, -top);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coord::TileIndex;
    use crate::provider::HttpError;
    use image::Rgba;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Colours each tile by its grid position; fails tiles in `failing`.
    struct ColourSource {
        failing: HashSet<(u32, u32)>,
        calls: AtomicUsize,
        seen: Mutex<Vec<TileIndex>>,
    }

    impl ColourSource {
        fn new(failing: &[(u32, u32)]) -> Self {
            Self {
                failing: failing.iter().copied().collect(),
                calls: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    fn colour_of(tile: TileIndex) -> Rgba<u8> {
        Rgba([(tile.x % 251) as u8, (tile.y % 251) as u8, 200, 255])
    }

    impl TileSource for ColourSource {
        fn fetch(&self, tile: TileIndex) -> Result<RgbaImage, TileError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(tile);
            if self.failing.contains(&(tile.x, tile.y)) {
                return Err(TileError::Fetch {
                    tile,
                    source: HttpError::Status {
                        url: tile.to_string(),
                        status: 503,
                    },
                });
            }
            Ok(RgbaImage::from_pixel(256, 256, colour_of(tile)))
        }

        fn name(&self) -> &str {
            "colour"
        }
    }

    #[test]
    fn test_build_returns_requested_size() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));
        let img = builder.build(40.7128, -74.0060, 15, 600, 400).unwrap();

        assert_eq!(img.dimensions(), (600, 400));
        assert_eq!(builder.source().calls.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn test_empty_viewport_is_fatal() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));
        let err = builder.build(0.0, 0.0, 3, 0, 400).unwrap_err();
        assert_eq!(
            err,
            MosaicError::EmptyViewport {
                width: 0,
                height: 400
            }
        );
        assert_eq!(builder.source().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_zoom_above_maximum_is_rejected() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));

        for zoom in [21, 40, u8::MAX] {
            let err = builder.build(40.7, 100.0, zoom, 600, 400).unwrap_err();
            assert_eq!(err, MosaicError::InvalidZoom { zoom, max: 20 });
        }
        assert_eq!(builder.source().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_maximum_zoom_renders() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));
        let img = builder.build(40.7128, -74.0060, MAX_ZOOM, 64, 64).unwrap();

        assert_eq!(img.dimensions(), (64, 64));
        assert_eq!(builder.source().calls.load(Ordering::SeqCst), 9);
    }

    #[test]
    fn test_tiles_are_placed_by_grid_position() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));
        let center = to_tile_space(10.0, 10.0, 6);
        let grid = TileGrid::around(&center);
        let (mosaic, stats) = builder.assemble(&grid);

        assert_eq!(stats.fetched, 9);
        for cell in grid.cells() {
            let (x, y) = cell.pixel_origin();
            let expected = colour_of(cell.tile.unwrap());
            assert_eq!(*mosaic.get_pixel(x as u32 + 10, y as u32 + 10), expected);
        }
    }

    #[test]
    fn test_failed_tiles_stay_transparent() {
        let center = to_tile_space(10.0, 10.0, 6);
        let cx = center.tile_x() as u32;
        let cy = center.tile_y() as u32;
        let builder = MosaicBuilder::new(ColourSource::new(&[(cx - 1, cy - 1), (cx + 1, cy)]));
        let grid = TileGrid::around(&center);
        let (mosaic, stats) = builder.assemble(&grid);

        assert_eq!(stats.fetched, 7);
        assert_eq!(stats.failed, 2);
        assert_eq!(mosaic.get_pixel(5, 5).0, [0, 0, 0, 0]);
        assert_eq!(mosaic.get_pixel(512 + 5, 256 + 5).0, [0, 0, 0, 0]);
        let surviving = TileIndex {
            x: cx,
            y: cy,
            zoom: 6,
        };
        assert_eq!(*mosaic.get_pixel(256 + 5, 256 + 5), colour_of(surviving));
    }

    #[test]
    fn test_all_tiles_failing_still_renders() {
        let center = to_tile_space(10.0, 10.0, 6);
        let cx = center.tile_x() as u32;
        let cy = center.tile_y() as u32;
        let failing: Vec<_> = (cx - 1..=cx + 1)
            .flat_map(|x| (cy - 1..=cy + 1).map(move |y| (x, y)))
            .collect();
        let builder = MosaicBuilder::new(ColourSource::new(&failing));

        let img = builder.build(10.0, 10.0, 6, 300, 200).unwrap();
        assert_eq!(img.dimensions(), (300, 200));
        assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }

    /// Panics on the center tile, succeeds elsewhere.
    struct PanickingSource;

    impl TileSource for PanickingSource {
        fn fetch(&self, tile: TileIndex) -> Result<RgbaImage, TileError> {
            if (tile.x, tile.y) == (32, 32) {
                panic!("tile decoder blew up");
            }
            Ok(RgbaImage::from_pixel(256, 256, colour_of(tile)))
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    #[test]
    fn test_panicking_task_only_loses_its_cell() {
        let builder = MosaicBuilder::new(PanickingSource);
        let grid = TileGrid::around(&to_tile_space(0.0, 0.0, 6));
        let (mosaic, stats) = builder.assemble(&grid);

        assert_eq!(stats.fetched, 8);
        assert_eq!(stats.failed, 1);
        assert_eq!(mosaic.get_pixel(256 + 5, 256 + 5).0, [0, 0, 0, 0]);
        assert_eq!(mosaic.get_pixel(5, 5).0[3], 255);
    }

    #[test]
    fn test_spawn_failure_names_tile() {
        let err = TileError::Spawn {
            tile: TileIndex { x: 1, y: 2, zoom: 3 },
            message: "resource unavailable".to_string(),
        };
        assert!(err.to_string().contains("resource unavailable"));
    }

    #[test]
    fn test_polar_rows_are_skipped() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));
        let grid = TileGrid::around(&to_tile_space(85.0, 0.0, 4));
        let (_, stats) = builder.assemble(&grid);

        assert_eq!(stats.skipped, 3);
        assert_eq!(stats.fetched, 6);
        assert_eq!(builder.source().calls.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_antimeridian_requests_wrapped_column() {
        let builder = MosaicBuilder::new(ColourSource::new(&[]));
        builder.build(0.0, -179.99, 3, 100, 100).unwrap();

        let seen = builder.source().seen.lock().unwrap();
        assert!(seen.iter().any(|t| t.x == 7));
        assert!(seen.iter().all(|t| t.x < 8));
    }

    #[test]
    fn test_crop_is_centered_on_point() {
        let mut mosaic = RgbaImage::new(768, 768);
        mosaic.put_pixel(400, 300, Rgba([9, 9, 9, 255]));

        let out = crop_centered(&mosaic, 400.0, 300.0, 100, 50);
        assert_eq!(out.get_pixel(50, 25).0, [9, 9, 9, 255]);
    }

    #[test]
    fn test_crop_beyond_mosaic_is_transparent() {
        let mosaic = RgbaImage::from_pixel(768, 768, Rgba([1, 1, 1, 255]));

        let out = crop_centered(&mosaic, 10.0, 10.0, 100, 100);
        assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0, 0]);
        assert_eq!(out.get_pixel(99, 99).0, [1, 1, 1, 255]);
    }
}
