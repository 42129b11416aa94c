//! Configuration loading tests for the provider registry and pricing
//! catalog.

use std::io::Write;

use modelhub::prelude::*;

fn providers_json() -> String {
    serde_json::json!([
        {
            "id": "zhipu",
            "names": {"en": "Zhipu AI", "zh": "智谱AI"},
            "links": {"home": "https://open.bigmodel.cn"},
            "series": [
                {
                    "name": "GLM-4",
                    "description": "Flagship chat models",
                    "category": "text-generation",
                    "models": [{"name": "glm-4-plus"}]
                }
            ]
        },
        {
            "id": "kling",
            "names": {"en": "Kling"},
            "branding": {"full-color": "logos/kling.svg"},
            "series": [
                {"name": "Kling Video", "category": "video-generation"}
            ]
        }
    ])
    .to_string()
}

fn pricing_json() -> String {
    serde_json::json!([
        {
            "provider": "zhipu",
            "model": {
                "name": "glm-4-plus",
                "releasedAt": "2024-08-29T00:00:00Z",
                "pricing": [{"input": 0.05, "output": 0.05}],
                "info": {"maxContext": 128000, "functionCall": true}
            }
        },
        {
            "provider": "zhipu",
            "model": {"name": "glm-4v"}
        }
    ])
    .to_string()
}

#[test]
fn test_registry_loads_from_json() {
    let registry = ProviderRegistry::from_json_str(&providers_json(), &pricing_json()).unwrap();

    assert_eq!(registry.len(), 2);
    let zhipu = registry.get("zhipu").unwrap();
    assert_eq!(zhipu.display_name("zh"), Some("智谱AI"));

    let text = registry.list_by_category(SeriesCategory::TextGeneration);
    assert_eq!(text.len(), 1);
    assert_eq!(text[0].1.name, "GLM-4");

    let tier = registry.cost_for("zhipu", "glm-4-plus", 0).unwrap();
    assert_eq!(tier.input, Some(0.05));
}

#[test]
fn test_cost_for_distinguishes_miss_kinds() {
    let registry = ProviderRegistry::from_json_str(&providers_json(), &pricing_json()).unwrap();

    assert!(matches!(
        registry.cost_for("unknownProvider", "unknownModel", 0),
        Err(CostError::UnknownModel { .. })
    ));
    // glm-4v exists in the catalog but carries no tiers.
    assert!(matches!(
        registry.cost_for("zhipu", "glm-4v", 0),
        Err(CostError::Unpriced { .. })
    ));
}

#[test]
fn test_duplicate_provider_ids_fail_load() {
    let providers = serde_json::json!([
        {"id": "zhipu", "names": {"en": "Zhipu AI"}},
        {"id": "zhipu", "names": {"en": "Zhipu AI (again)"}}
    ])
    .to_string();
    let result = ProviderRegistry::from_json_str(&providers, "[]");
    assert!(matches!(result, Err(HubError::ConfigurationError(_))));
}

#[test]
fn test_invalid_pricing_timestamps_fail_whole_load() {
    let pricing = serde_json::json!([
        {
            "provider": "zhipu",
            "model": {"name": "glm-4-plus", "pricing": [{"input": 0.05}]}
        },
        {
            "provider": "zhipu",
            "model": {
                "name": "glm-3-turbo",
                "releasedAt": "2024-01-16T00:00:00Z",
                "shutdownAt": "2023-12-01T00:00:00Z"
            }
        }
    ])
    .to_string();

    // One malformed record poisons the load; no registry (and therefore
    // no partial catalog) is exposed.
    let result = ProviderRegistry::from_json_str(&providers_json(), &pricing);
    assert!(matches!(result, Err(HubError::ConfigurationError(_))));
}

#[test]
fn test_unknown_fields_are_rejected() {
    let providers = serde_json::json!([
        {"id": "zhipu", "names": {"en": "Zhipu AI"}, "homepage": "https://example.com"}
    ])
    .to_string();
    let result = ProviderRegistry::from_json_str(&providers, "[]");
    assert!(matches!(result, Err(HubError::JsonError(_))));
}

#[test]
fn test_relative_link_url_fails_load() {
    let providers = serde_json::json!([
        {"id": "zhipu", "names": {"en": "Zhipu AI"}, "links": {"home": "open.bigmodel.cn"}}
    ])
    .to_string();
    let result = ProviderRegistry::from_json_str(&providers, "[]");
    assert!(matches!(result, Err(HubError::ConfigurationError(_))));
}

#[test]
fn test_registry_loads_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let providers_path = dir.path().join("providers.json");
    let pricing_path = dir.path().join("pricing.json");
    std::fs::File::create(&providers_path)
        .unwrap()
        .write_all(providers_json().as_bytes())
        .unwrap();
    std::fs::File::create(&pricing_path)
        .unwrap()
        .write_all(pricing_json().as_bytes())
        .unwrap();

    let registry = ProviderRegistry::from_json_file(&providers_path, &pricing_path).unwrap();
    assert!(registry.get("kling").is_some());
}

#[test]
fn test_missing_config_file_is_an_io_error() {
    let result = ProviderRegistry::from_json_file("/does/not/exist.json", "/nor/this.json");
    assert!(matches!(result, Err(HubError::IoError(_))));
}

#[test]
#[cfg(feature = "all-providers")]
fn test_builtin_catalog_covers_all_categories_shipped() {
    let registry = ProviderRegistry::with_builtin_providers().unwrap();
    assert!(!registry.list_by_category(SeriesCategory::TextGeneration).is_empty());
    assert!(!registry.list_by_category(SeriesCategory::VideoGeneration).is_empty());
    assert!(!registry.list_by_category(SeriesCategory::Summarization).is_empty());
    assert!(!registry.list_by_category(SeriesCategory::ObjectStorage).is_empty());
}
