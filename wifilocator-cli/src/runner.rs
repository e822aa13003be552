//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and service creation
//! to reduce duplication across command handlers.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use tracing::info;
use wifilocator::config::{config_file_path, ConfigFile};
use wifilocator::logging::{init_logging, split_log_path, LoggingGuard};
use wifilocator::service::WifiLocator;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
}

impl CliRunner {
    /// Create a new CLI runner, loading config and initializing logging.
    ///
    /// # Arguments
    ///
    /// * `config_path` - Config file to use instead of ~/.wifilocator/config.ini
    /// * `verbose` - When true, defaults to debug-level logging if RUST_LOG is unset
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load_from(&resolve_config_path(config_path))?;

        let (log_dir, log_file) = split_log_path(&config.logging.file);
        let level = if verbose { "debug" } else { "info" };
        let logging_guard = init_logging(log_dir, log_file, level)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    /// Mutable access for command-line overrides.
    pub fn config_mut(&mut self) -> &mut ConfigFile {
        &mut self.config
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("wifilocator v{}", wifilocator::VERSION);
        info!("wifilocator CLI: {} command", command);
    }

    /// Create a locator from the current configuration.
    pub fn create_locator(&self) -> Result<WifiLocator, CliError> {
        WifiLocator::new(self.config.clone())
            .map_err(CliError::ServiceCreation)
            .inspect(|_| info!("Locator created successfully"))
    }
}

/// The explicit path, or the default config file location.
pub fn resolve_config_path(config_path: Option<&Path>) -> PathBuf {
    config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}
