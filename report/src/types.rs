//! Request/response data model for the analysis service.
//!
//! These types define the wire contract with the external analyze and
//! file-extraction endpoints. They're designed to be:
//!
//! - **Tolerant** - every result category is optional, and legacy reply
//!   shapes decode into the same canonical structures
//! - **Serializable** - plain serde derives wherever the shape allows it
//! - **Clone-friendly** - pages and components can share data without
//!   borrowing issues
//!
//! # Example
//!
//! ```rust
//! use bias_report::types::{AnalysisRequest, Sensitivity, SelectedCategories};
//!
//! let request = AnalysisRequest {
//!     entry: "Paste content here".into(),
//!     sensitivity: Sensitivity::Medium,
//!     selected: SelectedCategories::default(),
//! };
//! ```

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Detection sensitivity requested by the user.
///
/// The service currently echoes this back without changing its models;
/// it is reserved wire surface, carried for forward compatibility.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sensitivity {
    /// Flag only strong bias.
    Low,
    /// Balanced detection (the default).
    #[default]
    Medium,
    /// Flag all potential bias.
    High,
}

impl Sensitivity {
    /// Every level, in menu order.
    pub const ALL: [Sensitivity; 3] = [Sensitivity::Low, Sensitivity::Medium, Sensitivity::High];

    /// Display form of the level.
    pub fn label(self) -> &'static str {
        match self {
            Sensitivity::Low => "Low",
            Sensitivity::Medium => "Medium",
            Sensitivity::High => "High",
        }
    }
}

/// Which analysis categories the service should run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedCategories {
    /// Emotion/sentiment distribution.
    pub sentiment: bool,
    /// Political-lean buckets.
    pub political: bool,
    /// Toxicity sub-scores.
    pub toxicity: bool,
}

impl Default for SelectedCategories {
    fn default() -> Self {
        Self {
            sentiment: true,
            political: true,
            toxicity: true,
        }
    }
}

/// Canonical body for `POST /api/analyze`.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Trimmed input text.
    pub entry: String,
    /// Requested detection sensitivity.
    pub sensitivity: Sensitivity,
    /// Categories to run.
    pub selected: SelectedCategories,
}

/// One label with its confidence score in `[0, 1]`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Category label as the model emitted it.
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

/// Reply of `POST /api/analyze-file`: the text extracted from an upload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExtractedText {
    /// Plain text pulled out of the uploaded `.txt`/`.pdf`.
    pub extracted_text: String,
}

/// Reply of `POST /api/analyze`.
///
/// The service wraps per-category results in a `results` object and echoes
/// the requested sensitivity. An earlier service revision returned the
/// categories at the top level; both shapes decode into the same
/// [`AnalysisResult`], so nothing past this boundary sees the difference.
#[derive(Clone, Debug, Deserialize)]
#[serde(from = "ResponseShape")]
pub struct AnalysisResponse {
    /// Per-category scores.
    pub results: AnalysisResult,
    /// Sensitivity echoed by the service, when present.
    pub sensitivity: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ResponseShape {
    Wrapped {
        results: AnalysisResult,
        #[serde(default)]
        sensitivity: Option<String>,
    },
    Flat(AnalysisResult),
}

impl From<ResponseShape> for AnalysisResponse {
    fn from(shape: ResponseShape) -> Self {
        match shape {
            ResponseShape::Wrapped {
                results,
                sensitivity,
            } => Self {
                results,
                sensitivity,
            },
            ResponseShape::Flat(results) => Self {
                results,
                sensitivity: None,
            },
        }
    }
}

/// Per-category scores returned by the analysis service.
///
/// Every category is optional: the service only runs what was selected,
/// and a missing category renders as an absent tab rather than an error.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct AnalysisResult {
    /// Model-generated interpretation of the combined results.
    #[serde(default)]
    pub summary: Option<String>,
    /// Emotion distribution. `emotion` is the field name the earlier
    /// service revision used.
    #[serde(default, alias = "emotion")]
    pub sentiment: Option<SentimentScores>,
    /// Political-lean buckets, ranked or keyed (see [`ScoreSet`]).
    #[serde(default, alias = "political_bias")]
    pub political: Option<ScoreSet>,
    /// Toxicity sub-scores keyed by pre-formatted label.
    #[serde(default)]
    pub toxicity: Option<KeyedScores>,
}

/// Emotion scores as returned by the sentiment model.
///
/// The current service wraps the full distribution together with the
/// top-scoring label; the earlier revision returned the bare distribution.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SentimentScores {
    /// `{ top, all_scores }` shape.
    Detailed {
        /// Highest-scoring emotion, when the service includes it.
        #[serde(default)]
        top: Option<LabelScore>,
        /// Full ordered distribution.
        all_scores: Vec<LabelScore>,
    },
    /// Bare ordered distribution (legacy).
    Flat(Vec<LabelScore>),
}

impl SentimentScores {
    /// Ordered emotion distribution, whichever shape the service sent.
    pub fn scores(&self) -> &[LabelScore] {
        match self {
            Self::Detailed { all_scores, .. } => all_scores,
            Self::Flat(scores) => scores,
        }
    }
}

/// Ordered label/score sequence that also accepts the legacy mapping shape.
///
/// The canonical wire form is a ranked array; the earlier service revision
/// emitted `{label: score}` mappings. Mappings are converted to a sequence
/// in document order when decoded, so downstream code only ever sees one
/// shape.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ScoreSet {
    /// Canonical ranked sequence.
    Ranked(Vec<LabelScore>),
    /// Legacy mapping, normalized at decode time.
    Keyed(KeyedScores),
}

impl ScoreSet {
    /// The ordered entries, whichever wire shape was sent.
    pub fn entries(&self) -> &[LabelScore] {
        match self {
            Self::Ranked(entries) => entries,
            Self::Keyed(keyed) => &keyed.0,
        }
    }
}

/// Label→score mapping decoded into a sequence that preserves document order.
///
/// Going through `serde_json::Value` would re-sort the keys, so the mapping
/// is walked directly. Non-numeric values are skipped: the service reports a
/// model failure as an `error` key inside the mapping, and that must degrade
/// to a shorter series, not a decode failure.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyedScores(pub Vec<LabelScore>);

impl<'de> Deserialize<'de> for KeyedScores {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyedVisitor;

        impl<'de> Visitor<'de> for KeyedVisitor {
            type Value = KeyedScores;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping of labels to scores")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((label, value)) = map.next_entry::<String, MaybeScore>()? {
                    if let MaybeScore::Number(score) = value {
                        entries.push(LabelScore { label, score });
                    }
                }
                Ok(KeyedScores(entries))
            }
        }

        deserializer.deserialize_map(KeyedVisitor)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MaybeScore {
    Number(f64),
    Other(IgnoredAny),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scores(pairs: &[(&str, f64)]) -> Vec<LabelScore> {
        pairs
            .iter()
            .map(|(label, score)| LabelScore {
                label: (*label).to_string(),
                score: *score,
            })
            .collect()
    }

    #[test]
    fn decodes_wrapped_response() {
        let body = r#"{
            "results": {
                "summary": "ok",
                "sentiment": {
                    "top": {"label": "joy", "score": 0.8},
                    "all_scores": [
                        {"label": "joy", "score": 0.8},
                        {"label": "sadness", "score": 0.2}
                    ]
                }
            },
            "sensitivity": "medium"
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.sensitivity.as_deref(), Some("medium"));
        assert_eq!(response.results.summary.as_deref(), Some("ok"));
        let sentiment = response.results.sentiment.unwrap();
        assert_eq!(
            sentiment.scores(),
            &scores(&[("joy", 0.8), ("sadness", 0.2)])[..]
        );
    }

    #[test]
    fn decodes_legacy_flat_response() {
        let body = r#"{
            "summary": "legacy",
            "emotion": [{"label": "anger", "score": 0.9}],
            "political_bias": {"left": 0.1, "center": 0.7, "right": 0.2}
        }"#;

        let response: AnalysisResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.sensitivity, None);
        assert_eq!(response.results.summary.as_deref(), Some("legacy"));
        assert_eq!(
            response.results.sentiment.unwrap().scores(),
            &scores(&[("anger", 0.9)])[..]
        );
        // Mapping shape normalized in document order, not alphabetically.
        assert_eq!(
            response.results.political.unwrap().entries(),
            &scores(&[("left", 0.1), ("center", 0.7), ("right", 0.2)])[..]
        );
    }

    #[test]
    fn keyed_scores_skip_non_numeric_values() {
        let body = r#"{"Toxicity": 0.4, "error": "model unavailable", "Insult": 0.1}"#;
        let keyed: KeyedScores = serde_json::from_str(body).unwrap();
        assert_eq!(keyed.0, scores(&[("Toxicity", 0.4), ("Insult", 0.1)]));
    }

    #[test]
    fn ranked_score_set_preserves_order() {
        let body = r#"[{"label": "Right", "score": 0.5}, {"label": "Left", "score": 0.3}]"#;
        let set: ScoreSet = serde_json::from_str(body).unwrap();
        assert_eq!(set.entries(), &scores(&[("Right", 0.5), ("Left", 0.3)])[..]);
    }

    #[test]
    fn empty_response_has_no_categories() {
        let response: AnalysisResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.results, AnalysisResult::default());
    }

    #[test]
    fn request_serializes_canonical_shape() {
        let request = AnalysisRequest {
            entry: "Hello world".into(),
            sensitivity: Sensitivity::High,
            selected: SelectedCategories {
                sentiment: true,
                political: false,
                toxicity: true,
            },
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["entry"], "Hello world");
        assert_eq!(value["sensitivity"], "high");
        assert_eq!(value["selected"]["sentiment"], true);
        assert_eq!(value["selected"]["political"], false);
        assert_eq!(value["selected"]["toxicity"], true);
    }
}
