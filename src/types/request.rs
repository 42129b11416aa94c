//! Request descriptors and the decoded response surface.
//!
//! A `RequestDescriptor` declaratively describes one outbound call before
//! substitution and dispatch. Descriptors are constructed fresh per call,
//! never mutated after being handed to the dispatcher, and never persisted.

use std::collections::HashMap;

use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// How the response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseShape {
    /// Decode as JSON (the default).
    #[default]
    Json,
    /// Decode as UTF-8 text.
    Text,
    /// Keep the bytes together with the response media type.
    Blob,
    /// Keep the raw bytes.
    Bytes,
}

impl std::fmt::Display for ResponseShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Blob => "blob",
            Self::Bytes => "bytes",
        };
        f.write_str(s)
    }
}

/// Declarative description of one outbound HTTP call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// Endpoint template, relative to the dispatcher's base URL. May
    /// contain `{name}` placeholders resolved from `params`.
    pub endpoint: String,
    /// HTTP method; `GET` when unspecified.
    pub method: Method,
    /// Headers passed through to the transport unmodified. Credentials
    /// belong here; the dispatcher never injects them.
    pub headers: HashMap<String, String>,
    /// Request body, opaque to this layer.
    pub body: Option<serde_json::Value>,
    /// Placeholder name -> value. Strings substitute as-is; other values
    /// are stringified canonically.
    pub params: HashMap<String, serde_json::Value>,
    /// Expected response shape; `Json` when unspecified.
    pub shape: ResponseShape,
}

impl RequestDescriptor {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            method: Method::GET,
            headers: HashMap::new(),
            body: None,
            params: HashMap::new(),
            shape: ResponseShape::default(),
        }
    }

    /// Shorthand for a `POST` descriptor.
    pub fn post(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint).method(Method::POST)
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn json_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn params(mut self, params: HashMap<String, serde_json::Value>) -> Self {
        self.params.extend(params);
        self
    }

    pub fn shape(mut self, shape: ResponseShape) -> Self {
        self.shape = shape;
        self
    }
}

/// Response body after shape-driven decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedBody {
    Json(serde_json::Value),
    Text(String),
    Blob {
        bytes: Bytes,
        /// Media type from the response `Content-Type`, when present.
        media_type: Option<String>,
    },
    Bytes(Bytes),
}

impl DecodedBody {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&Bytes> {
        match self {
            Self::Blob { bytes, .. } | Self::Bytes(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn media_type(&self) -> Option<&str> {
        match self {
            Self::Blob { media_type, .. } => media_type.as_deref(),
            _ => None,
        }
    }
}

/// Outcome of one completed dispatch.
///
/// Non-2xx statuses complete the exchange and still decode; status
/// tolerance is the caller's call. Use `error_for_status` for the strict
/// path.
#[derive(Debug, Clone)]
pub struct DispatchResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: DecodedBody,
}

impl DispatchResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Convert a non-2xx response into `HubError::ApiError`, keeping the
    /// decoded body as details.
    pub fn error_for_status(self) -> Result<Self, HubError> {
        if self.is_success() {
            return Ok(self);
        }
        let (message, details) = match &self.body {
            DecodedBody::Json(value) => (value.to_string(), Some(value.clone())),
            DecodedBody::Text(text) => (text.clone(), None),
            DecodedBody::Blob { bytes, .. } | DecodedBody::Bytes(bytes) => {
                (format!("{} byte body", bytes.len()), None)
            }
        };
        Err(HubError::ApiError {
            status: self.status,
            message,
            details,
        })
    }
}
