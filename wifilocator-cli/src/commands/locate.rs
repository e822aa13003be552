//! Locate command - resolve a BSSID and print its position.

use std::path::PathBuf;
use wifilocator::links::{format_coordinates, google_maps_url, openstreetmap_url};

use crate::error::CliError;
use crate::runner::CliRunner;

/// Arguments for the locate command.
pub struct LocateArgs {
    pub bssid: String,
    pub zoom: Option<u8>,
    pub config: Option<PathBuf>,
    pub verbose: bool,
}

/// Run the locate command.
pub fn run(args: LocateArgs) -> Result<(), CliError> {
    let runner = CliRunner::new(args.config.as_deref(), args.verbose)?;
    runner.log_startup("locate");

    let zoom = args.zoom.unwrap_or(runner.config().map.zoom);
    let locator = runner.create_locator()?;

    println!("Locating {}...", args.bssid.trim());
    let point = locator.resolve(&args.bssid)?;

    println!();
    println!("  Latitude:  {:.8}", point.latitude);
    println!("  Longitude: {:.8}", point.longitude);
    println!("  Coordinates: {}", format_coordinates(point));
    println!();
    println!("  Google Maps:   {}", google_maps_url(point, zoom));
    println!("  OpenStreetMap: {}", openstreetmap_url(point, zoom));

    Ok(())
}
