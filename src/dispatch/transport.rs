//! HTTP transport abstraction.
//!
//! The dispatcher talks to an injectable transport that can observe the
//! final URL/headers/body and return a synthetic response without going
//! through `reqwest`. Production code uses `ReqwestTransport`; tests can
//! substitute their own implementation.

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Method;
use reqwest::header::HeaderMap;

use crate::dispatch::observer::DispatchContext;
use crate::error::HubError;

/// Transport-level request data.
#[derive(Debug, Clone)]
pub struct TransportRequest {
    pub ctx: DispatchContext,
    pub method: Method,
    pub url: String,
    pub headers: HeaderMap,
    pub body: Option<serde_json::Value>,
}

/// Transport-level response data: the completed exchange before
/// shape-driven decoding.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Custom HTTP transport.
///
/// One call to `execute` is one attempt on the wire: implementations must
/// not retry, and timeout behavior is whatever the underlying client
/// defaults to.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, HubError>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: TransportRequest) -> Result<TransportResponse, HubError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| HubError::HttpError(e.to_string()))?;

        let status = response.status().as_u16();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| HubError::HttpError(e.to_string()))?;

        Ok(TransportResponse {
            status,
            headers,
            body,
        })
    }
}
