//! Error Handling Module
//!
//! One crate-wide error type covers transport, decoding, configuration, and
//! lookup failures. Nothing in the crate catches and suppresses these
//! internally; every error surfaces to the immediate caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use modelhub::error::HubError;
//!
//! let error = HubError::NotFound("provider 'acme'".into());
//! assert!(matches!(error, HubError::NotFound(_)));
//! ```

use crate::types::ResponseShape;
use bytes::Bytes;

/// Errors produced by the registry, catalog, and dispatch pipeline.
#[derive(Debug, thiserror::Error)]
pub enum HubError {
    /// The HTTP call itself could not complete (connect/read failure).
    #[error("HTTP error: {0}")]
    HttpError(String),

    /// A completed exchange the caller chose to treat as an error
    /// (see `DispatchResponse::error_for_status`).
    #[error("API error {status}: {message}")]
    ApiError {
        status: u16,
        message: String,
        /// Decoded response body, when one was available.
        details: Option<serde_json::Value>,
    },

    /// The response body could not be interpreted as the expected shape.
    /// The raw body is retained for diagnostics.
    #[error("decode error (expected {shape}): {message}")]
    DecodeError {
        shape: ResponseShape,
        message: String,
        raw: Bytes,
    },

    /// JSON serialization/deserialization failure outside of body decoding.
    #[error("JSON error: {0}")]
    JsonError(String),

    /// Malformed configuration detected at load time.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// A descriptor field could not be used to build the outbound request.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Lookup miss on a key that does not exist at all.
    #[error("not found: {0}")]
    NotFound(String),

    /// Filesystem failure while loading configuration.
    #[error("I/O error: {0}")]
    IoError(String),
}

impl HubError {
    /// Raw response body retained by a decode error, if any.
    pub fn raw_body(&self) -> Option<&[u8]> {
        match self {
            Self::DecodeError { raw, .. } => Some(raw.as_ref()),
            _ => None,
        }
    }
}

// From implementations
impl From<reqwest::Error> for HubError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpError(err.to_string())
    }
}

impl From<serde_json::Error> for HubError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

impl From<std::io::Error> for HubError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}
