//! Map command - resolve a BSSID and save a rendered map.

use std::path::PathBuf;
use tracing::info;
use wifilocator::links::format_coordinates;

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the map command.
pub struct MapArgs {
    pub bssid: String,
    pub output: PathBuf,
    pub zoom: Option<u8>,
    pub no_static_map: bool,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Run the map command.
pub fn run(args: MapArgs) -> Result<(), CliError> {
    let mut runner = CliRunner::new(args.config.as_deref(), args.verbose)?;
    runner.log_startup("map");

    if args.no_static_map {
        runner.config_mut().provider.use_single_image = false;
    }
    let locator = runner.create_locator()?;

    println!("Locating {}...", args.bssid.trim());
    let start = std::time::Instant::now();
    let located = locator.locate_and_render(&args.bssid, args.zoom)?;
    let elapsed = start.elapsed();

    println!("  Coordinates: {}", format_coordinates(located.location));
    println!(
        "  Map: {}x{} from {} in {:.2}s",
        located.map.image.width(),
        located.map.image.height(),
        located.map.label(),
        elapsed.as_secs_f64()
    );

    located
        .map
        .image
        .save_with_format(&args.output, image::ImageFormat::Png)
        .map_err(|e| CliError::FileWrite {
            path: args.output.display().to_string(),
            error: e.to_string(),
        })?;

    info!(path = %args.output.display(), "Map saved");
    println!("Saved map to {}", args.output.display());

    Ok(())
}
