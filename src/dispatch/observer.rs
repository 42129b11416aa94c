//! Dispatch observability hooks.
//!
//! Observers receive every completed call, success or failure. The hooks
//! are best-effort by construction: they return nothing, so observability
//! can never fail or abort a dispatch.

use uuid::Uuid;

use crate::error::HubError;
use crate::types::DispatchResponse;

/// Context passed to observers describing the call.
#[derive(Clone, Debug)]
pub struct DispatchContext {
    /// Per-call id, fresh for every dispatch.
    pub request_id: Uuid,
    /// Endpoint template as written in the descriptor (before
    /// substitution), the stable identifier for the operation.
    pub endpoint: String,
    /// Final request URL after substitution and base-URL join.
    pub url: String,
}

/// Dispatch observer trait.
pub trait DispatchObserver: Send + Sync {
    /// Called once per completed exchange with the decoded response.
    fn on_dispatch(&self, _ctx: &DispatchContext, _response: &DispatchResponse) {}

    /// Called once when a dispatch fails (transport or decode).
    fn on_error(&self, _ctx: &DispatchContext, _error: &HubError) {}
}

/// Default observer backed by `tracing`.
///
/// The decoded payload is logged at `debug` so normal operation stays
/// quiet at `info`.
#[derive(Clone, Default)]
pub struct TracingObserver;

impl DispatchObserver for TracingObserver {
    fn on_dispatch(&self, ctx: &DispatchContext, response: &DispatchResponse) {
        tracing::info!(
            target: "modelhub::dispatch",
            request_id = %ctx.request_id,
            endpoint = %ctx.endpoint,
            status = response.status,
            "dispatch completed"
        );
        tracing::debug!(
            target: "modelhub::dispatch",
            request_id = %ctx.request_id,
            endpoint = %ctx.endpoint,
            payload = ?response.body,
            "decoded payload"
        );
    }

    fn on_error(&self, ctx: &DispatchContext, error: &HubError) {
        tracing::warn!(
            target: "modelhub::dispatch",
            request_id = %ctx.request_id,
            endpoint = %ctx.endpoint,
            url = %ctx.url,
            err = %error,
            "dispatch failed"
        );
    }
}
