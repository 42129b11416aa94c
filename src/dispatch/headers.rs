//! Header builder for request descriptors.
//!
//! The dispatcher never injects credentials; callers assemble descriptor
//! headers themselves, typically with this builder. Token material stays
//! wrapped in `SecretString` until it is written into the header map.

use std::collections::HashMap;

use secrecy::{ExposeSecret, SecretString};

/// Builder for the descriptor's header map.
///
/// No `Debug` impl: built headers may carry credential material.
#[derive(Clone, Default)]
pub struct HeaderBuilder {
    headers: HashMap<String, String>,
}

impl HeaderBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add Bearer token authorization.
    pub fn with_bearer_auth(mut self, token: &SecretString) -> Self {
        self.headers.insert(
            "Authorization".into(),
            format!("Bearer {}", token.expose_secret()),
        );
        self
    }

    /// Add a custom authorization header (e.g. `x-api-key`).
    pub fn with_api_key(mut self, header_name: impl Into<String>, key: &SecretString) -> Self {
        self.headers
            .insert(header_name.into(), key.expose_secret().to_owned());
        self
    }

    /// Add JSON content type.
    pub fn with_json_content_type(mut self) -> Self {
        self.headers
            .insert("Content-Type".into(), "application/json".into());
        self
    }

    /// Add user agent.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.headers.insert("User-Agent".into(), user_agent.into());
        self
    }

    /// Add a custom header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Build the header map for a `RequestDescriptor`.
    pub fn build(self) -> HashMap<String, String> {
        self.headers
    }
}
