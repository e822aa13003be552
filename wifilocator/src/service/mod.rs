//! High-level service facade for wifilocator operations.
//!
//! This module provides a simplified API that encapsulates all component
//! wiring and configuration, following the Facade pattern.
//!
//! # Example
//!
//! ```ignore
//! use wifilocator::config::ConfigFile;
//! use wifilocator::service::WifiLocator;
//!
//! let locator = WifiLocator::new(ConfigFile::default())?;
//! let located = locator.locate_and_render("aa:bb:cc:dd:ee:ff", Some(16))?;
//! println!("{} via {}", located.location, located.map.label());
//! ```

mod error;
mod facade;

pub use error::ServiceError;
pub use facade::{LocatedMap, WifiLocator};
