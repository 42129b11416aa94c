//! # Modelhub - Provider Registry & Request Dispatch Core
//!
//! Modelhub is the core behind a multi-provider AI dashboard: it lets an
//! application browse and invoke unrelated third-party AI-provider HTTP
//! APIs (text/video generation, object storage, audio/video summarization)
//! through one uniform interface.
//!
//! Two pieces do the real work:
//!
//! - **Provider Registry**: an immutable aggregation of provider/model
//!   descriptors and a validated pricing catalog, built once at startup
//!   from static configuration. Consumers read choices through the
//!   registry; updates mean rebuilding it, never patching in place.
//! - **Request Dispatcher**: turns a declarative [`RequestDescriptor`]
//!   (endpoint template, method, headers, body, parameter bag, expected
//!   response shape) into exactly one outbound HTTP call and a typed
//!   decoded response.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modelhub::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Browse the built-in catalog
//!     let registry = ProviderRegistry::with_builtin_providers()?;
//!     for (provider, series) in registry.list_by_category(SeriesCategory::TextGeneration) {
//!         println!("{}: {}", provider.id, series.name);
//!     }
//!
//!     // Invoke one provider API
//!     let dispatcher = RequestDispatcher::new("https://open.bigmodel.cn/api/paas/v4");
//!     let descriptor = RequestDescriptor::post("/chat/completions")
//!         .header("Authorization", "Bearer your-api-key")
//!         .json_body(json!({"model": "glm-4-flash", "messages": []}));
//!     let response = dispatcher.dispatch(&descriptor).await?.error_for_status()?;
//!     println!("{:?}", response.body.as_json());
//!     Ok(())
//! }
//! ```
//!
//! ## Known limitations
//!
//! By design this core performs a single best-effort attempt per call:
//! there is no retry, no backoff, no timeout beyond the transport default,
//! and no cancellation primitive. Credential handling is limited to
//! placing plain token strings into descriptor headers. Streaming
//! responses are not supported.

pub mod dispatch;
pub mod error;
pub mod registry;
pub mod types;

pub use error::HubError;

/// Common surface for dashboard integrations.
pub mod prelude {
    pub use crate::dispatch::{
        DispatchContext, DispatchObserver, HeaderBuilder, RequestDispatcher, TracingObserver,
        substitute_params,
    };
    pub use crate::error::HubError;
    pub use crate::registry::{
        CostError, PricingCatalog, PricingRecord, ProviderRegistry, RegistryBuilder,
    };
    pub use crate::types::{
        BrandStyle, DecodedBody, DispatchResponse, LinkKind, Model, ModelInfo, ModelSeries,
        PricingTier, Provider, RequestDescriptor, ResponseShape, SeriesCategory,
    };
}
