//! Service error types.

use crate::provider::{HttpError, RenderError};
use crate::resolver::ResolutionError;
use thiserror::Error;

/// Errors that can occur during service operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ServiceError {
    /// Failed to create HTTP client
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] HttpError),

    /// BSSID could not be resolved
    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    /// No map could be rendered
    #[error(transparent)]
    Render(#[from] RenderError),
}
