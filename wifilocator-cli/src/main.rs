//! wifilocator CLI - Command-line interface
//!
//! This binary provides a command-line interface to the wifilocator library.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use commands::config::ConfigCommands;
use commands::locate::LocateArgs;
use commands::map::MapArgs;

#[derive(Parser)]
#[command(name = "wifilocator")]
#[command(version = wifilocator::VERSION)]
#[command(about = "Locate Wi-Fi access points by BSSID and render them on a map", long_about = None)]
struct Cli {
    /// Configuration file (default: ~/.wifilocator/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a BSSID and print its coordinates and map links
    Locate {
        /// Access point hardware address (XX:XX:XX:XX:XX:XX)
        bssid: String,

        /// Zoom level used in the printed map links
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=20))]
        zoom: Option<u8>,
    },

    /// Resolve a BSSID and save a map of its location as PNG
    Map {
        /// Access point hardware address (XX:XX:XX:XX:XX:XX)
        bssid: String,

        /// Output PNG file
        #[arg(short, long, default_value = "wifi-location.png")]
        output: PathBuf,

        /// Zoom level (0-20, default from config)
        #[arg(long, value_parser = clap::value_parser!(u8).range(0..=20))]
        zoom: Option<u8>,

        /// Skip Google Static Maps and render from OpenStreetMap tiles
        #[arg(long)]
        no_static_map: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Locate { bssid, zoom } => commands::locate::run(LocateArgs {
            bssid,
            zoom,
            config: cli.config,
            verbose: cli.verbose,
        }),
        Commands::Map {
            bssid,
            output,
            zoom,
            no_static_map,
        } => commands::map::run(MapArgs {
            bssid,
            output,
            zoom,
            no_static_map,
            config: cli.config,
            verbose: cli.verbose,
        }),
        Commands::Config { command } => commands::config::run(command, cli.config.as_deref()),
    };

    if let Err(e) = result {
        e.exit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_map_arguments() {
        let cli = Cli::try_parse_from([
            "wifilocator",
            "map",
            "aa:bb:cc:dd:ee:ff",
            "--output",
            "out.png",
            "--zoom",
            "12",
            "--no-static-map",
        ])
        .unwrap();

        match cli.command {
            Commands::Map {
                bssid,
                output,
                zoom,
                no_static_map,
            } => {
                assert_eq!(bssid, "aa:bb:cc:dd:ee:ff");
                assert_eq!(output, PathBuf::from("out.png"));
                assert_eq!(zoom, Some(12));
                assert!(no_static_map);
            }
            _ => panic!("expected map command"),
        }
    }

    #[test]
    fn test_zoom_range_is_enforced() {
        assert!(Cli::try_parse_from(["wifilocator", "locate", "x", "--zoom", "21"]).is_err());
    }

    #[test]
    fn test_global_config_after_subcommand() {
        let cli = Cli::try_parse_from([
            "wifilocator",
            "config",
            "path",
            "--config",
            "/tmp/w.ini",
        ])
        .unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/w.ini")));
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Path
            }
        ));
    }
}
