//! Provider registry: the immutable composition root.
//!
//! The registry aggregates provider descriptors and the pricing catalog.
//! It is built once from static or deserialized configuration and holds no
//! mutation API; updates mean rebuilding from new configuration, so a
//! caller holding a registry reference never observes a torn read. Tests
//! construct isolated registries; there is no ambient global instance.

pub mod builtin;
pub mod pricing;

pub use pricing::{CostError, PricingCatalog, PricingRecord};

use std::collections::HashMap;
use std::path::Path;

use crate::error::HubError;
use crate::types::{ModelSeries, PricingTier, Provider, SeriesCategory};

/// Read-only aggregation of providers and the pricing catalog.
#[derive(Debug, Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Provider>,
    /// Canonical ids in registration order.
    order: Vec<String>,
    pricing: PricingCatalog,
}

impl ProviderRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Registry populated with the feature-enabled built-in catalog.
    /// Pricing records are derived from the built-in provider tables.
    pub fn with_builtin_providers() -> Result<Self, HubError> {
        let mut builder = Self::builder();
        for provider in builtin::builtin_providers() {
            builder = builder
                .pricing_records(PricingRecord::records_for_provider(&provider))
                .provider(provider);
        }
        builder.build()
    }

    /// Build a registry from JSON configuration: an array of provider
    /// records and an array of pricing records.
    pub fn from_json_str(providers_json: &str, pricing_json: &str) -> Result<Self, HubError> {
        let providers: Vec<Provider> = serde_json::from_str(providers_json)?;
        let records: Vec<PricingRecord> = serde_json::from_str(pricing_json)?;
        Self::builder()
            .providers(providers)
            .pricing_records(records)
            .build()
    }

    /// Build a registry from JSON configuration files.
    pub fn from_json_file(
        providers_path: impl AsRef<Path>,
        pricing_path: impl AsRef<Path>,
    ) -> Result<Self, HubError> {
        let providers = std::fs::read_to_string(providers_path)?;
        let pricing = std::fs::read_to_string(pricing_path)?;
        Self::from_json_str(&providers, &pricing)
    }

    /// Provider with the given canonical id. O(1).
    pub fn get(&self, id: &str) -> Option<&Provider> {
        self.providers.get(id)
    }

    /// All providers in registration order.
    pub fn providers(&self) -> impl Iterator<Item = &Provider> {
        self.order.iter().filter_map(|id| self.providers.get(id))
    }

    /// Series matching `category` across all providers, ordered by
    /// provider registration order, then series order within a provider.
    pub fn list_by_category(&self, category: SeriesCategory) -> Vec<(&Provider, &ModelSeries)> {
        self.providers()
            .flat_map(|provider| {
                provider
                    .series
                    .iter()
                    .filter(move |series| series.category == category)
                    .map(move |series| (provider, series))
            })
            .collect()
    }

    pub fn pricing(&self) -> &PricingCatalog {
        &self.pricing
    }

    /// Pricing tier lookup, delegated to the catalog.
    pub fn cost_for(
        &self,
        provider: &str,
        model: &str,
        tier: usize,
    ) -> Result<&PricingTier, CostError> {
        self.pricing.cost_for(provider, model, tier)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Builder for `ProviderRegistry`. Construction either completes or fails
/// atomically; no partial registry is ever observable.
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    providers: Vec<Provider>,
    records: Vec<PricingRecord>,
}

impl RegistryBuilder {
    pub fn provider(mut self, provider: Provider) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn providers(mut self, providers: impl IntoIterator<Item = Provider>) -> Self {
        self.providers.extend(providers);
        self
    }

    pub fn pricing_record(mut self, record: PricingRecord) -> Self {
        self.records.push(record);
        self
    }

    pub fn pricing_records(mut self, records: impl IntoIterator<Item = PricingRecord>) -> Self {
        self.records.extend(records);
        self
    }

    /// Validate and build. Duplicate canonical ids and schema violations
    /// fail the whole build.
    pub fn build(self) -> Result<ProviderRegistry, HubError> {
        let pricing = PricingCatalog::from_records(self.records)?;

        let mut providers = HashMap::with_capacity(self.providers.len());
        let mut order = Vec::with_capacity(self.providers.len());
        for provider in self.providers {
            provider.validate()?;
            let id = provider.id.clone();
            if providers.insert(id.clone(), provider).is_some() {
                return Err(HubError::ConfigurationError(format!(
                    "duplicate provider id '{id}'"
                )));
            }
            order.push(id);
        }

        Ok(ProviderRegistry {
            providers,
            order,
            pricing,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Model, ModelSeries, SeriesCategory};

    fn provider(id: &str) -> Provider {
        Provider::new(id).with_name("en", id.to_uppercase())
    }

    #[test]
    fn test_duplicate_provider_id_fails_build() {
        let result = ProviderRegistry::builder()
            .provider(provider("zhipu"))
            .provider(provider("zhipu"))
            .build();
        let err = result.unwrap_err();
        assert!(err.to_string().contains("duplicate provider id"));
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let registry = ProviderRegistry::builder()
            .provider(provider("zhipu"))
            .build()
            .unwrap();
        assert!(registry.get("zhipu").is_some());
        assert!(registry.get("unknown").is_none());
    }

    #[test]
    fn test_list_by_category_follows_registration_then_series_order() {
        let a = provider("a")
            .with_series(ModelSeries::new("a-video", SeriesCategory::VideoGeneration))
            .with_series(ModelSeries::new("a-text", SeriesCategory::TextGeneration))
            .with_series(ModelSeries::new("a-video-2", SeriesCategory::VideoGeneration));
        let b = provider("b")
            .with_series(ModelSeries::new("b-video", SeriesCategory::VideoGeneration));

        let registry = ProviderRegistry::builder()
            .provider(a)
            .provider(b)
            .build()
            .unwrap();

        let names: Vec<&str> = registry
            .list_by_category(SeriesCategory::VideoGeneration)
            .into_iter()
            .map(|(_, series)| series.name.as_str())
            .collect();
        assert_eq!(names, ["a-video", "a-video-2", "b-video"]);
    }

    #[test]
    fn test_invalid_provider_fails_build() {
        let result = ProviderRegistry::builder()
            .provider(Provider::new("nameless"))
            .build();
        assert!(matches!(result, Err(HubError::ConfigurationError(_))));
    }

    #[test]
    fn test_invalid_pricing_record_fails_build() {
        use chrono::TimeZone;
        let broken = Model::new("m")
            .released_at(chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap())
            .shutdown_at(chrono::Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let result = ProviderRegistry::builder()
            .provider(provider("zhipu"))
            .pricing_record(PricingRecord::new("zhipu", broken))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_with_builtin_providers_builds() {
        let registry = ProviderRegistry::with_builtin_providers().unwrap();
        // Whatever the feature set, the build must validate cleanly.
        assert_eq!(registry.len(), builtin::builtin_providers().len());
    }

    #[test]
    #[cfg(feature = "zhipu")]
    fn test_builtin_registry_resolves_zhipu() {
        let registry = ProviderRegistry::with_builtin_providers().unwrap();
        let zhipu = registry.get("zhipu").unwrap();
        assert_eq!(zhipu.display_name("zh"), Some("智谱AI"));
        assert!(registry.cost_for("zhipu", "glm-4-plus", 0).is_ok());
    }

    #[test]
    #[cfg(feature = "kling")]
    fn test_builtin_registry_lists_video_generation() {
        let registry = ProviderRegistry::with_builtin_providers().unwrap();
        let video = registry.list_by_category(SeriesCategory::VideoGeneration);
        assert!(video.iter().any(|(p, _)| p.id == "kling"));
    }
}
