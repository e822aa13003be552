//! Configuration management CLI commands.
//!
//! Provides `config init`, `config show` and `config path` for creating and
//! inspecting the configuration file.

use clap::Subcommand;
use std::path::Path;
use wifilocator::config::ConfigFile;

use crate::error::CliError;
use crate::runner::resolve_config_path;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Create the configuration file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Show the effective configuration
    Show,

    /// Show the configuration file path
    Path,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands, config_path: Option<&Path>) -> Result<(), CliError> {
    let path = resolve_config_path(config_path);
    match command {
        ConfigCommands::Init { force } => run_init(&path, force),
        ConfigCommands::Show => run_show(&path),
        ConfigCommands::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

fn run_init(path: &Path, force: bool) -> Result<(), CliError> {
    if force {
        ConfigFile::default().save_to(path)?;
        println!("Wrote default configuration to {}", path.display());
    } else if ConfigFile::ensure_exists_at(path)? {
        println!("Created {}", path.display());
    } else {
        println!("{} already exists (use --force to overwrite)", path.display());
    }
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    let source = if path.exists() {
        path.display().to_string()
    } else {
        "built-in defaults".to_string()
    };

    println!("Configuration ({})", source);
    println!();
    println!("[provider]");
    println!("  use_single_image    = {}", config.provider.use_single_image);
    println!(
        "  api_key             = {}",
        if config.provider.api_key.is_some() {
            "(set)"
        } else {
            "(not set)"
        }
    );
    println!("[map]");
    println!("  zoom                = {}", config.map.zoom);
    println!(
        "  size                = {}x{}",
        config.map.width, config.map.height
    );
    println!("[tiles]");
    println!("  hosts               = {}", config.tiles.hosts.join(", "));
    println!("[network]");
    println!("  geolocation_url     = {}", config.network.geolocation_url);
    println!("  geolocation_timeout = {}s", config.network.geolocation_timeout);
    println!("  static_map_timeout  = {}s", config.network.static_map_timeout);
    println!("  tile_timeout        = {}s", config.network.tile_timeout);
    println!("[logging]");
    println!("  file                = {}", config.logging.file.display());
    println!();
    println!(
        "Map provider chain: {}",
        if config.single_image_enabled() {
            "single-image -> tile-mosaic"
        } else {
            "tile-mosaic"
        }
    );

    Ok(())
}
