//! Error types for the WLOC codec.

use super::response::RESPONSE_HEADER_LEN;
use thiserror::Error;

/// Errors that can occur while decoding a WLOC reply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WlocError {
    /// Reply is shorter than the transport header
    #[error("response truncated: {len} bytes, expected at least {}", RESPONSE_HEADER_LEN)]
    Truncated { len: usize },

    /// Reply body is not a valid WLOC message
    #[error("malformed response body: {0}")]
    Malformed(#[from] prost::DecodeError),
}
