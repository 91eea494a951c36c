//! # bias-report
//!
//! Typed data model, result normalization, and Leptos components for the
//! bias analysis dashboard.
//!
//! The external analysis service returns an untyped JSON payload with
//! optional, historically inconsistent category shapes. This crate decodes
//! that payload into one canonical [`types::AnalysisResult`] and normalizes
//! it into chart-ready series the dashboard components render directly.
//!
//! ## Quick Start
//!
//! ```rust
//! use bias_report::series::{ChartData, Tab};
//! use bias_report::types::AnalysisResponse;
//!
//! let body = r#"{"results": {"emotion": [{"label": "joy", "score": 0.8}]}}"#;
//! let response: AnalysisResponse = serde_json::from_str(body).unwrap();
//!
//! let data = ChartData::from_result(&response.results);
//! assert_eq!(data.sentiment[0].name, "Joy");
//! assert_eq!(data.sentiment[0].value, 80.0);
//! assert_eq!(data.tabs(), vec![Tab::Overview, Tab::Sentiment]);
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - wire contract with the analyze/extraction endpoints
//! - [`series`] - pure result-to-chart-series normalization
//! - [`components`] - Leptos UI components (charts, cards, tabs)
//! - [`styles`] - CSS constant injected by the app shell

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod series;
pub mod styles;
pub mod types;

pub use series::{ChartData, ChartSeriesEntry, Tab};

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use types::AnalysisResponse;

    fn decode(body: &str) -> ChartData {
        let response: AnalysisResponse = serde_json::from_str(body).expect("fixture decodes");
        ChartData::from_result(&response.results)
    }

    #[test]
    fn single_emotion_reply_renders_one_sentiment_entry() {
        let data = decode(r#"{"summary":"ok","emotion":[{"label":"joy","score":0.8}]}"#);

        assert_eq!(
            data.sentiment,
            vec![ChartSeriesEntry {
                name: "Joy".into(),
                value: 80.0,
                color: "#fbbf24".into(),
            }]
        );
        assert_eq!(data.tabs(), vec![Tab::Overview, Tab::Sentiment]);
        assert_eq!(data.summary.as_deref(), Some("ok"));
    }

    #[test]
    fn missing_political_field_omits_political_tab() {
        let data = decode(
            r#"{"results": {"sentiment": {"all_scores": [{"label": "fear", "score": 0.6}]}}}"#,
        );

        assert!(data.political.is_empty());
        assert!(!data.tabs().contains(&Tab::Political));
    }

    #[test]
    fn full_canonical_reply_populates_every_tab() {
        let data = decode(
            r#"{
                "results": {
                    "summary": "Mostly neutral.",
                    "sentiment": {
                        "top": {"label": "joy", "score": 0.62},
                        "all_scores": [
                            {"label": "joy", "score": 0.62},
                            {"label": "sadness", "score": 0.21},
                            {"label": "anger", "score": 0.17}
                        ]
                    },
                    "political": [
                        {"label": "Left", "score": 0.28},
                        {"label": "Center", "score": 0.51},
                        {"label": "Right", "score": 0.21}
                    ],
                    "toxicity": {
                        "Toxicity": 0.031,
                        "Severe Toxicity": 0.0004,
                        "Insult": 0.012
                    }
                },
                "sensitivity": "medium"
            }"#,
        );

        assert_eq!(
            data.tabs(),
            vec![Tab::Overview, Tab::Sentiment, Tab::Political, Tab::Toxicity]
        );

        // Ranked copy is sorted descending while the distribution keeps
        // model order.
        assert_eq!(data.sentiment[1].name, "Sadness");
        assert_eq!(data.sentiment_ranked[0].name, "Joy");

        assert_eq!(data.political[1].name, "Center");
        assert_eq!(data.political[1].color, "#35bb47");

        // Toxicity keeps document order and two-decimal percent precision.
        let toxicity: Vec<(&str, f64)> = data
            .toxicity
            .iter()
            .map(|entry| (entry.name.as_str(), entry.value))
            .collect();
        assert_eq!(
            toxicity,
            vec![("Toxicity", 3.1), ("Severe Toxicity", 0.04), ("Insult", 1.2)]
        );
    }

    #[test]
    fn legacy_political_mapping_normalizes_with_palette() {
        let data = decode(r#"{"political_bias": {"left": 0.1, "center": 0.7, "right": 0.2}}"#);

        assert_eq!(
            data.political,
            vec![
                ChartSeriesEntry {
                    name: "Left".into(),
                    value: 10.0,
                    color: "#3b82f6".into(),
                },
                ChartSeriesEntry {
                    name: "Center".into(),
                    value: 70.0,
                    color: "#35bb47".into(),
                },
                ChartSeriesEntry {
                    name: "Right".into(),
                    value: 20.0,
                    color: "#d52629".into(),
                },
            ]
        );
        assert_eq!(data.tabs(), vec![Tab::Overview, Tab::Political]);
    }

    #[test]
    fn toxicity_model_error_degrades_to_remaining_scores() {
        let data = decode(r#"{"results": {"toxicity": {"error": "model unavailable"}}}"#);

        assert!(data.toxicity.is_empty());
        assert_eq!(data.tabs(), vec![Tab::Overview]);
    }

    #[test]
    fn unknown_labels_use_the_fallback_color() {
        let data = decode(r#"{"emotion": [{"label": "nostalgia", "score": 0.4}]}"#);

        assert_eq!(data.sentiment[0].color, series::FALLBACK_COLOR);
    }

    #[test]
    fn normalizing_twice_yields_identical_sequences() {
        let body = r#"{
            "results": {
                "sentiment": {"all_scores": [{"label": "joy", "score": 0.5}]},
                "toxicity": {"Threat": 0.002, "Insult": 0.2}
            }
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            ChartData::from_result(&response.results),
            ChartData::from_result(&response.results)
        );
    }
}
