//! Pricing catalog: validated per-model cost/capability records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::types::{Model, PricingTier, Provider};

/// One catalog record: a model owned by a provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PricingRecord {
    pub provider: String,
    pub model: Model,
}

impl PricingRecord {
    pub fn new(provider: impl Into<String>, model: Model) -> Self {
        Self {
            provider: provider.into(),
            model,
        }
    }

    /// Flatten a provider descriptor's series into catalog records.
    pub fn records_for_provider(provider: &Provider) -> Vec<Self> {
        provider
            .series
            .iter()
            .flat_map(|series| series.models.iter())
            .map(|model| Self::new(provider.id.clone(), model.clone()))
            .collect()
    }
}

/// Lookup failure for `cost_for`: an unknown model is distinct from a
/// known model with no tier at the requested index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    #[error("unknown model: {provider}/{model}")]
    UnknownModel { provider: String, model: String },
    #[error("model {provider}/{model} has no pricing tier {tier}")]
    Unpriced {
        provider: String,
        model: String,
        tier: usize,
    },
}

/// Validated table of model records keyed by (provider, model).
///
/// Load is all-or-nothing: one malformed record fails the whole catalog,
/// so no partially valid catalog is ever observable.
#[derive(Debug, Clone, Default)]
pub struct PricingCatalog {
    records: HashMap<String, HashMap<String, Model>>,
    len: usize,
}

impl PricingCatalog {
    /// Build a catalog, validating every record against the model schema.
    pub fn from_records(records: Vec<PricingRecord>) -> Result<Self, HubError> {
        let mut by_provider: HashMap<String, HashMap<String, Model>> = HashMap::new();
        let mut len = 0;
        for record in records {
            record.model.validate()?;
            let models = by_provider.entry(record.provider.clone()).or_default();
            let name = record.model.name.clone();
            if models.insert(name.clone(), record.model).is_some() {
                return Err(HubError::ConfigurationError(format!(
                    "duplicate pricing record for {}/{name}",
                    record.provider
                )));
            }
            len += 1;
        }
        Ok(Self {
            records: by_provider,
            len,
        })
    }

    /// Full model record for a (provider, model) pair.
    pub fn get(&self, provider: &str, model: &str) -> Option<&Model> {
        self.records.get(provider)?.get(model)
    }

    /// Pricing tier at `tier` for a (provider, model) pair.
    pub fn cost_for(
        &self,
        provider: &str,
        model: &str,
        tier: usize,
    ) -> Result<&PricingTier, CostError> {
        let record = self
            .get(provider, model)
            .ok_or_else(|| CostError::UnknownModel {
                provider: provider.to_owned(),
                model: model.to_owned(),
            })?;
        record.pricing.get(tier).ok_or_else(|| CostError::Unpriced {
            provider: provider.to_owned(),
            model: model.to_owned(),
            tier,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
