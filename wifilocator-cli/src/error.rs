//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;
use wifilocator::bssid::EXPECTED_FORMAT;
use wifilocator::config::ConfigFileError;
use wifilocator::provider::{ProviderError, RenderError};
use wifilocator::resolver::ResolutionError;
use wifilocator::service::ServiceError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Failed to create service
    ServiceCreation(ServiceError),
    /// BSSID could not be resolved
    Resolution(ResolutionError),
    /// No map could be rendered
    Render(RenderError),
    /// Failed to write output file
    FileWrite { path: String, error: String },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Resolution(ResolutionError::InvalidFormat(_)) => {
                eprintln!();
                eprintln!("A BSSID is six hex pairs separated by colons: {EXPECTED_FORMAT}");
                eprintln!("  e.g. wifilocator locate 00:1a:2b:3c:4d:5e");
            }
            CliError::Resolution(ResolutionError::Network(_)) => {
                eprintln!();
                eprintln!("Check your network connection, or raise");
                eprintln!("  [network] geolocation_timeout in the config file.");
            }
            CliError::Resolution(ResolutionError::NotFound { .. }) => {
                eprintln!();
                eprintln!("The access point is not in the location database.");
                eprintln!("Newly installed or rarely seen access points are often unknown.");
            }
            CliError::Render(error) if mentions_forbidden(error) => {
                eprintln!();
                eprintln!("If using Google Static Maps, make sure:");
                eprintln!("  1. Maps Static API is enabled in Google Cloud Console");
                eprintln!("  2. Billing is enabled for your project");
                eprintln!("  3. Your API key is valid and not restricted from this API");
                eprintln!("Or skip it with --no-static-map.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

fn mentions_forbidden(error: &RenderError) -> bool {
    match error {
        RenderError::ProviderFailed(attempt) => attempt.error == ProviderError::Forbidden,
        RenderError::AllProvidersFailed { attempts } => attempts
            .iter()
            .any(|attempt| attempt.error == ProviderError::Forbidden),
        RenderError::NoProviders | RenderError::InvalidZoom { .. } => false,
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ServiceCreation(e) => write!(f, "Failed to create service: {}", e),
            CliError::Resolution(e) => write!(f, "Failed to locate BSSID: {}", e),
            CliError::Render(e) => write!(f, "Failed to render map: {}", e),
            CliError::FileWrite { path, error } => {
                write!(f, "Failed to write file '{}': {}", path, error)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ServiceCreation(e) => Some(e),
            CliError::Resolution(e) => Some(e),
            CliError::Render(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e.to_string())
    }
}

impl From<ResolutionError> for CliError {
    fn from(e: ResolutionError) -> Self {
        CliError::Resolution(e)
    }
}

impl From<RenderError> for CliError {
    fn from(e: RenderError) -> Self {
        CliError::Render(e)
    }
}

impl From<ServiceError> for CliError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Resolution(e) => CliError::Resolution(e),
            ServiceError::Render(e) => CliError::Render(e),
            other => CliError::ServiceCreation(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wifilocator::provider::{ProviderAttempt, ProviderKind};

    #[test]
    fn test_service_errors_are_unwrapped() {
        let err: CliError = ServiceError::Resolution(ResolutionError::NotFound {
            bssid: "aa:bb:cc:dd:ee:ff".to_string(),
        })
        .into();
        assert!(matches!(err, CliError::Resolution(_)));
        assert_eq!(
            err.to_string(),
            "Failed to locate BSSID: no location known for aa:bb:cc:dd:ee:ff"
        );
    }

    #[test]
    fn test_forbidden_detection() {
        let forbidden = ProviderAttempt {
            provider: ProviderKind::SingleImage,
            error: ProviderError::Forbidden,
        };
        assert!(mentions_forbidden(&RenderError::AllProvidersFailed {
            attempts: vec![forbidden.clone()],
        }));
        assert!(mentions_forbidden(&RenderError::ProviderFailed(forbidden)));
        assert!(!mentions_forbidden(&RenderError::NoProviders));
    }
}
