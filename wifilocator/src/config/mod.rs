//! User configuration for wifilocator.
//!
//! Settings are read from `~/.wifilocator/config.ini`. Missing files and
//! missing keys fall back to the defaults in [`defaults`]; present but
//! invalid values are rejected with [`ConfigFileError::InvalidValue`].
//!
//! # Example
//!
//! ```ignore
//! use wifilocator::config::ConfigFile;
//!
//! let config = ConfigFile::load()?;
//! println!("zoom {}", config.map.zoom);
//! ```

pub mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::*;
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{
    ConfigFile, LoggingSettings, MapSettings, NetworkSettings, ProviderSettings, TileSettings,
};
