//! Model records: lifecycle timestamps, pricing tiers, and capability info.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::HubError;

/// One invocable model offered by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Model {
    /// Model identifier as the provider's API expects it.
    pub name: String,
    /// Release timestamp; `None` means unknown or unannounced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub released_at: Option<DateTime<Utc>>,
    /// Shutdown timestamp; `None` means no announced shutdown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shutdown_at: Option<DateTime<Utc>>,
    /// Pricing tiers in provider order. May be empty for unpriced models.
    #[serde(default)]
    pub pricing: Vec<PricingTier>,
    /// Capability flags.
    #[serde(default)]
    pub info: ModelInfo,
}

impl Model {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            released_at: None,
            shutdown_at: None,
            pricing: Vec::new(),
            info: ModelInfo::default(),
        }
    }

    pub fn released_at(mut self, at: DateTime<Utc>) -> Self {
        self.released_at = Some(at);
        self
    }

    pub fn shutdown_at(mut self, at: DateTime<Utc>) -> Self {
        self.shutdown_at = Some(at);
        self
    }

    /// Append a pricing tier. `None` costs mean "not priced", not "free".
    pub fn with_pricing(mut self, input: Option<f64>, output: Option<f64>) -> Self {
        self.pricing.push(PricingTier { input, output });
        self
    }

    pub fn with_info(mut self, info: ModelInfo) -> Self {
        self.info = info;
        self
    }

    /// Check the schema invariants. Invariant: when both timestamps are
    /// known, shutdown must not precede release.
    pub fn validate(&self) -> Result<(), HubError> {
        if let (Some(released), Some(shutdown)) = (self.released_at, self.shutdown_at)
            && shutdown < released
        {
            return Err(HubError::ConfigurationError(format!(
                "model '{}': shutdownAt {shutdown} precedes releasedAt {released}",
                self.name
            )));
        }
        Ok(())
    }
}

/// Per-tier cost pair. Either side may be absent, meaning "not priced"
/// rather than "free".
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingTier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<f64>,
}

/// Capability flags for a model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModelInfo {
    /// Maximum context length in tokens.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_context: Option<u32>,
    /// Maximum output tokens per response.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    /// Supported temperature range as `[min, max]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_range: Option<(f32, f32)>,
    /// Function-calling support.
    #[serde(default)]
    pub function_call: bool,
    /// Tool-choice support.
    #[serde(default)]
    pub tool_choice: bool,
    /// Built-in network search support.
    #[serde(default)]
    pub network_search: bool,
    /// Accepts image input.
    #[serde(default)]
    pub image_input: bool,
    /// Produces image output.
    #[serde(default)]
    pub image_output: bool,
    /// Training-data cutoff date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub training_cutoff: Option<NaiveDate>,
}
