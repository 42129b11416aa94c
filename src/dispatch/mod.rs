//! Request dispatch pipeline.
//!
//! Turns a `RequestDescriptor` plus a configured base URL into exactly one
//! outbound HTTP call and a shape-decoded response. The dispatcher holds no
//! call-scoped mutable state, so concurrent dispatches through one instance
//! are independent; it performs no retry, injects no credentials, and
//! exposes no cancellation beyond dropping the future.

pub mod headers;
pub mod observer;
pub mod template;
pub mod transport;

pub use headers::HeaderBuilder;
pub use observer::{DispatchContext, DispatchObserver, TracingObserver};
pub use template::substitute_params;
pub use transport::{HttpTransport, ReqwestTransport, TransportRequest, TransportResponse};

use std::collections::HashMap;
use std::sync::Arc;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use uuid::Uuid;

use crate::error::HubError;
use crate::types::{DecodedBody, DispatchResponse, RequestDescriptor, ResponseShape};

/// Dispatches declarative request descriptors against one base URL.
pub struct RequestDispatcher {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    observers: Vec<Arc<dyn DispatchObserver>>,
}

impl RequestDispatcher {
    /// Dispatcher with the default `reqwest` transport and a tracing
    /// observer.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::default()))
            .with_observer(Arc::new(TracingObserver))
    }

    /// Dispatcher over a caller-supplied `reqwest::Client`.
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        Self::with_transport(base_url, Arc::new(ReqwestTransport::new(client)))
            .with_observer(Arc::new(TracingObserver))
    }

    /// Dispatcher over a custom transport. No observers are attached.
    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            observers: Vec::new(),
        }
    }

    /// Attach an observer. Observers see every completed call.
    pub fn with_observer(mut self, observer: Arc<dyn DispatchObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Perform exactly one outbound call for `descriptor` and decode the
    /// response according to its expected shape.
    pub async fn dispatch(
        &self,
        descriptor: &RequestDescriptor,
    ) -> Result<DispatchResponse, HubError> {
        // 1. Resolve the endpoint template and final URL
        let endpoint = substitute_params(&descriptor.endpoint, &descriptor.params);
        let url = join_url(&self.base_url, &endpoint);
        let ctx = DispatchContext {
            request_id: Uuid::new_v4(),
            endpoint: descriptor.endpoint.clone(),
            url: url.clone(),
        };

        // 2. Validate descriptor headers into a HeaderMap
        let headers = match build_header_map(&descriptor.headers) {
            Ok(headers) => headers,
            Err(err) => {
                self.notify_error(&ctx, &err);
                return Err(err);
            }
        };

        // 3. One attempt on the wire
        let request = TransportRequest {
            ctx: ctx.clone(),
            method: descriptor.method.clone(),
            url,
            headers,
            body: descriptor.body.clone(),
        };
        let raw = match self.transport.execute(request).await {
            Ok(raw) => raw,
            Err(err) => {
                self.notify_error(&ctx, &err);
                return Err(err);
            }
        };

        // 4. Decode per the expected shape
        match decode_body(descriptor.shape, raw) {
            Ok(response) => {
                self.notify_dispatch(&ctx, &response);
                Ok(response)
            }
            Err(err) => {
                self.notify_error(&ctx, &err);
                Err(err)
            }
        }
    }

    fn notify_dispatch(&self, ctx: &DispatchContext, response: &DispatchResponse) {
        for observer in &self.observers {
            observer.on_dispatch(ctx, response);
        }
    }

    fn notify_error(&self, ctx: &DispatchContext, error: &HubError) {
        for observer in &self.observers {
            observer.on_error(ctx, error);
        }
    }
}

/// Join base URL and endpoint with a single separator slash.
fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Convert descriptor headers into a validated `HeaderMap`.
///
/// Values are not echoed into errors; they may carry credentials.
fn build_header_map(headers: &HashMap<String, String>) -> Result<HeaderMap, HubError> {
    let mut map = HeaderMap::with_capacity(headers.len());
    for (name, value) in headers {
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|e| HubError::InvalidParameter(format!("invalid header name '{name}': {e}")))?;
        let header_value = HeaderValue::from_str(value).map_err(|e| {
            HubError::InvalidParameter(format!("invalid value for header '{name}': {e}"))
        })?;
        map.insert(header_name, header_value);
    }
    Ok(map)
}

/// Decode the raw exchange according to the expected shape. Decode
/// failures keep the raw body inspectable.
fn decode_body(shape: ResponseShape, raw: TransportResponse) -> Result<DispatchResponse, HubError> {
    let TransportResponse {
        status,
        headers,
        body,
    } = raw;

    let decoded = match shape {
        ResponseShape::Json => match serde_json::from_slice(&body) {
            Ok(value) => DecodedBody::Json(value),
            Err(e) => {
                return Err(HubError::DecodeError {
                    shape,
                    message: e.to_string(),
                    raw: body,
                });
            }
        },
        ResponseShape::Text => match std::str::from_utf8(&body) {
            Ok(text) => DecodedBody::Text(text.to_owned()),
            Err(e) => {
                return Err(HubError::DecodeError {
                    shape,
                    message: e.to_string(),
                    raw: body,
                });
            }
        },
        ResponseShape::Blob => {
            let media_type = headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_owned);
            DecodedBody::Blob {
                bytes: body,
                media_type,
            }
        }
        ResponseShape::Bytes => DecodedBody::Bytes(body),
    };

    Ok(DispatchResponse {
        status,
        headers,
        body: decoded,
    })
}
