//! Provider descriptors: identity, branding, links, and model series.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::HubError;
use crate::types::model::Model;

/// One AI vendor as presented by the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Provider {
    /// Canonical provider key, unique within a registry.
    pub id: String,
    /// Localized display names, locale tag -> name.
    pub names: HashMap<String, String>,
    /// Brand assets by style variant. Values are asset references
    /// (paths or URLs) resolved by the UI layer.
    #[serde(default)]
    pub branding: HashMap<BrandStyle, String>,
    /// Outbound links by purpose. Every present value must be an
    /// absolute URL.
    #[serde(default)]
    pub links: HashMap<LinkKind, String>,
    /// Model series in display order.
    #[serde(default)]
    pub series: Vec<ModelSeries>,
}

impl Provider {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            names: HashMap::new(),
            branding: HashMap::new(),
            links: HashMap::new(),
            series: Vec::new(),
        }
    }

    pub fn with_name(mut self, locale: impl Into<String>, name: impl Into<String>) -> Self {
        self.names.insert(locale.into(), name.into());
        self
    }

    pub fn with_branding(mut self, style: BrandStyle, asset: impl Into<String>) -> Self {
        self.branding.insert(style, asset.into());
        self
    }

    pub fn with_link(mut self, kind: LinkKind, url: impl Into<String>) -> Self {
        self.links.insert(kind, url.into());
        self
    }

    pub fn with_series(mut self, series: ModelSeries) -> Self {
        self.series.push(series);
        self
    }

    /// Display name for a locale, falling back to any available name.
    pub fn display_name(&self, locale: &str) -> Option<&str> {
        self.names
            .get(locale)
            .or_else(|| self.names.values().next())
            .map(String::as_str)
    }

    /// Check the descriptor invariants: non-empty id, at least one
    /// non-empty localized name, absolute link URLs, and valid models.
    pub fn validate(&self) -> Result<(), HubError> {
        if self.id.trim().is_empty() {
            return Err(HubError::ConfigurationError(
                "provider id must not be empty".into(),
            ));
        }
        if !self.names.values().any(|name| !name.trim().is_empty()) {
            return Err(HubError::ConfigurationError(format!(
                "provider '{}': at least one locale must have a non-empty name",
                self.id
            )));
        }
        for (kind, url) in &self.links {
            reqwest::Url::parse(url).map_err(|e| {
                HubError::ConfigurationError(format!(
                    "provider '{}': link '{kind}' is not an absolute URL ({url}): {e}",
                    self.id
                ))
            })?;
        }
        for series in &self.series {
            for model in &series.models {
                model.validate()?;
            }
        }
        Ok(())
    }
}

/// Brand asset style variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrandStyle {
    Monochrome,
    FullColor,
}

/// Link purposes a provider may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LinkKind {
    Home,
    ApiDocs,
    Pricing,
}

impl std::fmt::Display for LinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Home => "home",
            Self::ApiDocs => "api-docs",
            Self::Pricing => "pricing",
        };
        f.write_str(s)
    }
}

/// A named group of models sharing one capability category.
///
/// `models` may be empty: a series can be a placeholder pending detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ModelSeries {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub category: SeriesCategory,
    #[serde(default)]
    pub models: Vec<Model>,
}

impl ModelSeries {
    pub fn new(name: impl Into<String>, category: SeriesCategory) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            category,
            models: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_model(mut self, model: Model) -> Self {
        self.models.push(model);
        self
    }
}

/// Fixed capability categories a series belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeriesCategory {
    TextGeneration,
    ImageGeneration,
    VideoGeneration,
    AudioGeneration,
    Summarization,
    ObjectStorage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_non_empty_name() {
        let provider = Provider::new("zhipu");
        assert!(provider.validate().is_err());

        let provider = Provider::new("zhipu").with_name("en", "");
        assert!(provider.validate().is_err());

        let provider = Provider::new("zhipu").with_name("en", "Zhipu AI");
        assert!(provider.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_relative_link() {
        let provider = Provider::new("zhipu")
            .with_name("en", "Zhipu AI")
            .with_link(LinkKind::Home, "bigmodel.cn");
        let err = provider.validate().unwrap_err();
        assert!(err.to_string().contains("absolute URL"));
    }

    #[test]
    fn test_validate_rejects_empty_id() {
        let provider = Provider::new("  ").with_name("en", "Anon");
        assert!(provider.validate().is_err());
    }

    #[test]
    fn test_display_name_falls_back() {
        let provider = Provider::new("kling").with_name("zh", "可灵");
        assert_eq!(provider.display_name("zh"), Some("可灵"));
        assert_eq!(provider.display_name("en"), Some("可灵"));
    }

    #[test]
    fn test_provider_json_shape() {
        let json = serde_json::json!({
            "id": "kling",
            "names": {"en": "Kling", "zh": "可灵"},
            "branding": {"monochrome": "logos/kling-mono.svg"},
            "links": {"home": "https://klingai.com", "api-docs": "https://docs.klingai.com"},
            "series": [{
                "name": "Kling Video",
                "category": "video-generation",
                "models": [{"name": "kling-v1"}]
            }]
        });
        let provider: Provider = serde_json::from_value(json).unwrap();
        assert!(provider.validate().is_ok());
        assert_eq!(provider.series[0].category, SeriesCategory::VideoGeneration);
        assert_eq!(
            provider.branding.get(&BrandStyle::Monochrome).unwrap(),
            "logos/kling-mono.svg"
        );
    }

    #[test]
    fn test_placeholder_series_is_legal() {
        let provider = Provider::new("tingwu")
            .with_name("en", "Tingwu")
            .with_series(ModelSeries::new("Meeting Minutes", SeriesCategory::Summarization));
        assert!(provider.validate().is_ok());
        assert!(provider.series[0].models.is_empty());
    }
}
