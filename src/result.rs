//! result.rs — Output records for a single analysis call.
//!
//! These are the shapes consumed by the renderer and the `--json` output
//! mode; immutable once constructed.

use serde::{Deserialize, Serialize};

use crate::classify::Sentiment;

/// One matched lexicon word, with its effective (intensity-adjusted) weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordMatch {
    pub word: String,
    /// Final weight after intensification; base weight otherwise.
    pub weight: f32,
    /// True if negation redirected this word to the opposite bucket.
    pub negated: bool,
    pub intensified: bool,
    /// Multiplier that was applied, kept for display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity_factor: Option<f32>,
}

/// Complete result of analyzing one line of text.
///
/// `total_score == positive_score + negative_score` and both scores are
/// non-negative; scores carry two decimals, confidence one decimal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub sentiment: Sentiment,
    /// Heuristic certainty in [0, 100]; not a probability.
    pub confidence: f32,
    pub positive_score: f32,
    pub negative_score: f32,
    pub total_score: f32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub positive_matches: Vec<WordMatch>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub negative_matches: Vec<WordMatch>,
    /// Original input line, carried for rendering.
    pub text: String,
}
