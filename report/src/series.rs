//! Chart-series normalization.
//!
//! Converts one [`AnalysisResult`] into per-category, chart-ready series:
//! display-capitalized labels, percent values at a fixed two-decimal
//! precision, and a color from the category palette. Everything here is a
//! pure function of its input and tolerant of missing categories: an absent
//! category yields an empty series, never an error, and the matching tab is
//! simply not offered.
//!
//! # Example
//!
//! ```rust
//! use bias_report::series::ChartData;
//! use bias_report::types::AnalysisResult;
//!
//! let data = ChartData::from_result(&AnalysisResult::default());
//! assert!(data.sentiment.is_empty());
//! assert_eq!(data.tabs().len(), 1); // Overview is always offered
//! ```

use crate::types::{AnalysisResult, LabelScore};
use serde::{Deserialize, Serialize};

/// Fallback color for labels outside a palette.
pub const FALLBACK_COLOR: &str = "#6b7280";

/// Percent threshold separating "high occurrence" from "low occurrence"
/// copy on the stat cards.
pub const HIGH_OCCURRENCE_THRESHOLD: f64 = 30.0;

/// Emotion palette, keyed by the lowercase labels the sentiment model emits.
pub const EMOTION_PALETTE: &[(&str, &str)] = &[
    ("sadness", "#3b82f6"),
    ("joy", "#fbbf24"),
    ("love", "#ec4899"),
    ("anger", "#ef4444"),
    ("fear", "#8b5cf6"),
    ("surprise", "#14b8a6"),
];

/// Political-lean palette. Lookup is case-insensitive: the ranked wire shape
/// capitalizes the bucket labels, the legacy mapping shape does not.
pub const POLITICAL_PALETTE: &[(&str, &str)] = &[
    ("left", "#3b82f6"),
    ("center", "#35bb47"),
    ("right", "#d52629"),
];

/// Toxicity palette, keyed by the exact pre-formatted labels of the service.
pub const TOXICITY_PALETTE: &[(&str, &str)] = &[
    ("Toxicity", "#ef4444"),
    ("Severe Toxicity", "#b91c1c"),
    ("Obscene", "#f97316"),
    ("Identity Attack", "#a855f7"),
    ("Insult", "#eab308"),
    ("Threat", "#000000"),
    ("Sexual Explicit", "#ec4899"),
];

/// One chart-ready datum: display label, percent value, slice color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSeriesEntry {
    /// Display-capitalized label.
    pub name: String,
    /// Score scaled to a percent, rounded to two decimal places.
    pub value: f64,
    /// Slice/bar color, from the palette or [`FALLBACK_COLOR`].
    pub color: String,
}

impl ChartSeriesEntry {
    fn from_score(raw: &LabelScore, color: &'static str) -> Self {
        Self {
            name: display_label(&raw.label),
            value: to_percent(raw.score),
            color: color.to_string(),
        }
    }

    /// Percent formatted the way the dashboard displays it: up to two
    /// decimals, trailing zeros trimmed (`"80%"` rather than `"80.00%"`).
    pub fn percent_label(&self) -> String {
        format_percent(self.value)
    }

    /// Whether the entry crosses the high-occurrence threshold.
    pub fn is_high(&self) -> bool {
        self.value >= HIGH_OCCURRENCE_THRESHOLD
    }
}

/// Score in `[0, 1]` scaled to a percent, rounded to two decimal places.
pub fn to_percent(score: f64) -> f64 {
    (score * 10_000.0).round() / 100.0
}

/// Display form of a label: first character uppercased, remainder unchanged.
pub fn display_label(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Percent value rendered without trailing zero noise.
pub fn format_percent(value: f64) -> String {
    let text = format!("{value:.2}");
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed}%")
}

fn color_for(palette: &'static [(&'static str, &'static str)], label: &str, exact: bool) -> &'static str {
    palette
        .iter()
        .find(|(key, _)| {
            if exact {
                *key == label
            } else {
                key.eq_ignore_ascii_case(label)
            }
        })
        .map(|(_, color)| *color)
        .unwrap_or(FALLBACK_COLOR)
}

/// Emotion distribution in the order the model ranked it.
pub fn sentiment_series(result: &AnalysisResult) -> Vec<ChartSeriesEntry> {
    result
        .sentiment
        .as_ref()
        .map(|sentiment| {
            sentiment
                .scores()
                .iter()
                .map(|raw| ChartSeriesEntry::from_score(raw, color_for(EMOTION_PALETTE, &raw.label, false)))
                .collect()
        })
        .unwrap_or_default()
}

/// Political-lean buckets in wire order; absent or empty input yields an
/// empty series.
pub fn political_series(result: &AnalysisResult) -> Vec<ChartSeriesEntry> {
    result
        .political
        .as_ref()
        .map(|political| {
            political
                .entries()
                .iter()
                .map(|raw| ChartSeriesEntry::from_score(raw, color_for(POLITICAL_PALETTE, &raw.label, false)))
                .collect()
        })
        .unwrap_or_default()
}

/// Toxicity sub-scores in document order.
pub fn toxicity_series(result: &AnalysisResult) -> Vec<ChartSeriesEntry> {
    result
        .toxicity
        .as_ref()
        .map(|toxicity| {
            toxicity
                .0
                .iter()
                .map(|raw| ChartSeriesEntry::from_score(raw, color_for(TOXICITY_PALETTE, &raw.label, true)))
                .collect()
        })
        .unwrap_or_default()
}

/// Copy of a series sorted descending by value, for ranked stat cards.
/// The sort is stable, so ties keep their distribution order.
pub fn rank_descending(series: &[ChartSeriesEntry]) -> Vec<ChartSeriesEntry> {
    let mut ranked = series.to_vec();
    ranked.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal));
    ranked
}

/// A dashboard tab. Overview is always offered; category tabs only when the
/// category produced a non-empty series.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tab {
    /// Cross-category summary view.
    Overview,
    /// Emotion distribution view.
    Sentiment,
    /// Political-lean view.
    Political,
    /// Toxicity view.
    Toxicity,
}

impl Tab {
    /// Sidebar label for the tab.
    pub fn label(self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::Sentiment => "Sentiment Bias",
            Tab::Political => "Political Bias",
            Tab::Toxicity => "Toxicity",
        }
    }
}

/// All chart-ready series derived from one analysis result.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChartData {
    /// Emotion distribution in model order.
    pub sentiment: Vec<ChartSeriesEntry>,
    /// Emotion distribution sorted descending, for ranked stat cards.
    pub sentiment_ranked: Vec<ChartSeriesEntry>,
    /// Political-lean buckets in wire order.
    pub political: Vec<ChartSeriesEntry>,
    /// Toxicity sub-scores in document order.
    pub toxicity: Vec<ChartSeriesEntry>,
    /// Model-generated summary, when the service sent one.
    pub summary: Option<String>,
}

impl ChartData {
    /// Derive every category series from one result.
    ///
    /// Pure: equal inputs produce equal outputs, and nothing in the result
    /// is mutated.
    pub fn from_result(result: &AnalysisResult) -> Self {
        let sentiment = sentiment_series(result);
        let sentiment_ranked = rank_descending(&sentiment);
        Self {
            sentiment,
            sentiment_ranked,
            political: political_series(result),
            toxicity: toxicity_series(result),
            summary: result.summary.clone(),
        }
    }

    /// The tab list: Overview plus each category with data, in fixed order.
    pub fn tabs(&self) -> Vec<Tab> {
        let mut tabs = vec![Tab::Overview];
        if !self.sentiment.is_empty() {
            tabs.push(Tab::Sentiment);
        }
        if !self.political.is_empty() {
            tabs.push(Tab::Political);
        }
        if !self.toxicity.is_empty() {
            tabs.push(Tab::Toxicity);
        }
        tabs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KeyedScores, ScoreSet, SentimentScores};
    use pretty_assertions::assert_eq;

    fn label_scores(pairs: &[(&str, f64)]) -> Vec<LabelScore> {
        pairs
            .iter()
            .map(|(label, score)| LabelScore {
                label: (*label).to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn percent_rounds_to_two_places() {
        assert_eq!(to_percent(0.8), 80.0);
        assert_eq!(to_percent(0.79857), 79.86);
        assert_eq!(to_percent(0.0001), 0.01);
        assert_eq!(to_percent(1.0), 100.0);
    }

    #[test]
    fn percent_label_trims_trailing_zeros() {
        assert_eq!(format_percent(80.0), "80%");
        assert_eq!(format_percent(79.86), "79.86%");
        assert_eq!(format_percent(12.5), "12.5%");
        assert_eq!(format_percent(0.0), "0%");
    }

    #[test]
    fn labels_capitalize_first_character_only() {
        assert_eq!(display_label("joy"), "Joy");
        assert_eq!(display_label("Severe Toxicity"), "Severe Toxicity");
        assert_eq!(display_label(""), "");
    }

    #[test]
    fn unknown_labels_fall_back_to_gray() {
        let result = AnalysisResult {
            sentiment: Some(SentimentScores::Flat(label_scores(&[("confusion", 0.5)]))),
            ..Default::default()
        };

        let series = sentiment_series(&result);
        assert_eq!(series[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn sentiment_series_preserves_input_order() {
        let result = AnalysisResult {
            sentiment: Some(SentimentScores::Flat(label_scores(&[
                ("sadness", 0.1),
                ("joy", 0.8),
                ("fear", 0.1),
            ]))),
            ..Default::default()
        };

        let series = sentiment_series(&result);
        let names: Vec<&str> = series.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["Sadness", "Joy", "Fear"]);
        assert_eq!(series[1].color, "#fbbf24");
    }

    #[test]
    fn ranking_sorts_descending_and_keeps_ties_stable() {
        let series = vec![
            ChartSeriesEntry {
                name: "A".into(),
                value: 10.0,
                color: FALLBACK_COLOR.into(),
            },
            ChartSeriesEntry {
                name: "B".into(),
                value: 40.0,
                color: FALLBACK_COLOR.into(),
            },
            ChartSeriesEntry {
                name: "C".into(),
                value: 40.0,
                color: FALLBACK_COLOR.into(),
            },
        ];

        let ranked = rank_descending(&series);
        let names: Vec<&str> = ranked.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["B", "C", "A"]);
    }

    #[test]
    fn political_palette_lookup_is_case_insensitive() {
        let result = AnalysisResult {
            political: Some(ScoreSet::Keyed(KeyedScores(label_scores(&[
                ("left", 0.2),
                ("center", 0.5),
                ("right", 0.3),
            ])))),
            ..Default::default()
        };

        let series = political_series(&result);
        assert_eq!(series[0].color, "#3b82f6");
        assert_eq!(series[1].color, "#35bb47");
        assert_eq!(series[2].color, "#d52629");
        assert_eq!(series[0].name, "Left");
    }

    #[test]
    fn toxicity_palette_is_keyed_exactly() {
        let result = AnalysisResult {
            toxicity: Some(KeyedScores(label_scores(&[
                ("Identity Attack", 0.02),
                ("identity attack", 0.02),
            ]))),
            ..Default::default()
        };

        let series = toxicity_series(&result);
        assert_eq!(series[0].color, "#a855f7");
        assert_eq!(series[1].color, FALLBACK_COLOR);
    }

    #[test]
    fn missing_categories_yield_empty_series_and_no_tabs() {
        let data = ChartData::from_result(&AnalysisResult::default());
        assert!(data.sentiment.is_empty());
        assert!(data.political.is_empty());
        assert!(data.toxicity.is_empty());
        assert_eq!(data.tabs(), vec![Tab::Overview]);
    }

    #[test]
    fn tabs_follow_available_categories() {
        let result = AnalysisResult {
            sentiment: Some(SentimentScores::Flat(label_scores(&[("joy", 0.8)]))),
            toxicity: Some(KeyedScores(label_scores(&[("Toxicity", 0.1)]))),
            ..Default::default()
        };

        let data = ChartData::from_result(&result);
        assert_eq!(data.tabs(), vec![Tab::Overview, Tab::Sentiment, Tab::Toxicity]);
    }

    #[test]
    fn normalization_is_idempotent() {
        let result = AnalysisResult {
            sentiment: Some(SentimentScores::Flat(label_scores(&[
                ("joy", 0.8),
                ("sadness", 0.2),
            ]))),
            political: Some(ScoreSet::Ranked(label_scores(&[("Left", 0.4)]))),
            toxicity: Some(KeyedScores(label_scores(&[("Threat", 0.01)]))),
            summary: Some("ok".into()),
        };

        assert_eq!(ChartData::from_result(&result), ChartData::from_result(&result));
    }
}
