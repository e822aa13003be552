//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (init, show, path)
//! - [`locate`] - Resolve a BSSID and print its coordinates
//! - [`map`] - Resolve a BSSID and save a rendered map

pub mod config;
pub mod locate;
pub mod map;
