//! Static tables for the built-in provider catalog.
//!
//! This module centralizes the provider descriptors the dashboard ships
//! with so that the registry and any documentation helpers read from a
//! single source. Each provider sits behind its own cargo feature and is
//! compiled out when disabled.

use crate::types::Provider;

#[cfg(any(feature = "zhipu", feature = "kling", feature = "tingwu", feature = "oss"))]
use crate::types::{BrandStyle, LinkKind, ModelSeries, SeriesCategory};

#[cfg(any(feature = "zhipu", feature = "kling"))]
use crate::types::Model;
#[cfg(feature = "zhipu")]
use crate::types::ModelInfo;

#[cfg(any(feature = "zhipu", feature = "kling"))]
use chrono::{DateTime, TimeZone, Utc};
#[cfg(feature = "zhipu")]
use chrono::NaiveDate;

/// Midnight-UTC release date for the static tables below.
#[cfg(any(feature = "zhipu", feature = "kling"))]
fn released(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .expect("static release date should be valid")
}

/// Return descriptors for all built-in providers enabled in this build.
///
/// Registration order here is the display order the dashboard uses.
#[allow(clippy::vec_init_then_push)]
pub fn builtin_providers() -> Vec<Provider> {
    #[allow(unused_mut)]
    let mut out = Vec::new();

    // Zhipu AI (GLM text generation)
    #[cfg(feature = "zhipu")]
    out.push(
        Provider::new("zhipu")
            .with_name("en", "Zhipu AI")
            .with_name("zh", "智谱AI")
            .with_branding(BrandStyle::Monochrome, "logos/zhipu-mono.svg")
            .with_branding(BrandStyle::FullColor, "logos/zhipu.svg")
            .with_link(LinkKind::Home, "https://open.bigmodel.cn")
            .with_link(LinkKind::ApiDocs, "https://open.bigmodel.cn/dev/api")
            .with_link(LinkKind::Pricing, "https://open.bigmodel.cn/pricing")
            .with_series(
                ModelSeries::new("GLM-4", SeriesCategory::TextGeneration)
                    .with_description("Flagship GLM chat models")
                    .with_model(
                        Model::new("glm-4-plus")
                            .released_at(released(2024, 8, 29))
                            .with_pricing(Some(0.05), Some(0.05))
                            .with_info(ModelInfo {
                                max_context: Some(128_000),
                                max_output_tokens: Some(4_096),
                                temperature_range: Some((0.0, 1.0)),
                                function_call: true,
                                tool_choice: true,
                                network_search: true,
                                training_cutoff: NaiveDate::from_ymd_opt(2024, 4, 1),
                                ..ModelInfo::default()
                            }),
                    )
                    .with_model(
                        Model::new("glm-4-flash")
                            .released_at(released(2024, 6, 5))
                            .with_pricing(Some(0.0001), Some(0.0001))
                            .with_info(ModelInfo {
                                max_context: Some(128_000),
                                max_output_tokens: Some(4_096),
                                temperature_range: Some((0.0, 1.0)),
                                function_call: true,
                                network_search: true,
                                ..ModelInfo::default()
                            }),
                    ),
            )
            .with_series(
                ModelSeries::new("GLM-4V", SeriesCategory::TextGeneration)
                    .with_description("Vision-language GLM models")
                    .with_model(
                        Model::new("glm-4v")
                            .with_pricing(Some(0.05), None)
                            .with_info(ModelInfo {
                                max_context: Some(8_192),
                                image_input: true,
                                ..ModelInfo::default()
                            }),
                    ),
            ),
    );

    // Kling (Kuaishou video generation)
    #[cfg(feature = "kling")]
    out.push(
        Provider::new("kling")
            .with_name("en", "Kling")
            .with_name("zh", "可灵")
            .with_branding(BrandStyle::FullColor, "logos/kling.svg")
            .with_link(LinkKind::Home, "https://klingai.com")
            .with_link(LinkKind::ApiDocs, "https://docs.qingque.cn/klingai")
            .with_series(
                ModelSeries::new("Kling Video", SeriesCategory::VideoGeneration)
                    .with_description("Text-to-video and image-to-video generation")
                    .with_model(
                        Model::new("kling-v1")
                            .released_at(released(2024, 6, 6))
                            .with_pricing(Some(0.8), None),
                    )
                    .with_model(
                        Model::new("kling-v1-5")
                            .released_at(released(2024, 9, 19))
                            .with_pricing(Some(1.2), None),
                    ),
            ),
    );

    // Aliyun Tingwu (audio/video summarization)
    #[cfg(feature = "tingwu")]
    out.push(
        Provider::new("tingwu")
            .with_name("en", "Aliyun Tingwu")
            .with_name("zh", "通义听悟")
            .with_branding(BrandStyle::FullColor, "logos/tingwu.svg")
            .with_link(LinkKind::Home, "https://tingwu.aliyun.com")
            .with_link(LinkKind::ApiDocs, "https://help.aliyun.com/product/tingwu")
            // Placeholder series: summarization tasks are keyed by task
            // type, not by a caller-selectable model id.
            .with_series(
                ModelSeries::new("Meeting Minutes", SeriesCategory::Summarization)
                    .with_description("Audio and video transcription with summary extraction"),
            ),
    );

    // Aliyun OSS (object storage)
    #[cfg(feature = "oss")]
    out.push(
        Provider::new("aliyun-oss")
            .with_name("en", "Aliyun OSS")
            .with_name("zh", "阿里云对象存储")
            .with_branding(BrandStyle::Monochrome, "logos/oss-mono.svg")
            .with_link(LinkKind::Home, "https://www.aliyun.com/product/oss")
            .with_link(LinkKind::Pricing, "https://www.aliyun.com/price/product#/oss")
            .with_series(
                ModelSeries::new("Object Storage", SeriesCategory::ObjectStorage)
                    .with_description("Bucket upload targets for generated media"),
            ),
    );

    out
}
