//! Core data types
//!
//! Provider/model descriptors consumed by the registry, and the request
//! descriptor + decoded response surface consumed by the dispatcher.

pub mod model;
pub mod provider;
pub mod request;

pub use model::{Model, ModelInfo, PricingTier};
pub use provider::{BrandStyle, LinkKind, ModelSeries, Provider, SeriesCategory};
pub use request::{DecodedBody, DispatchResponse, RequestDescriptor, ResponseShape};
