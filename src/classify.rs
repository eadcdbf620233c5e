//! Ratio classifier and confidence heuristic.
//! Pure logic that maps `(positive, negative)` score buckets to a label,
//! suitable for unit tests in isolation. No I/O.

use serde::{Deserialize, Serialize};

/// Sentiment label for one analyzed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

/// Ratio above which the line counts as positive.
pub const POSITIVE_RATIO: f32 = 0.7;
/// Ratio below which the line counts as negative.
pub const NEGATIVE_RATIO: f32 = 0.3;

/// Map raw score buckets to a label and a confidence percentage.
///
/// Confidence is the score imbalance scaled by 10 and capped at 100. It is
/// computed whenever `total > 0`, independently of the ratio thresholds, so
/// a neutral label can still carry nonzero confidence (e.g. positive=40,
/// negative=35 → neutral at confidence 50). Known asymmetry of the heuristic;
/// kept as-is.
pub fn classify(positive: f32, negative: f32) -> (Sentiment, f32) {
    let total = positive + negative;
    if total == 0.0 {
        return (Sentiment::Neutral, 0.0);
    }

    let ratio = positive / total;
    let label = if ratio > POSITIVE_RATIO {
        Sentiment::Positive
    } else if ratio < NEGATIVE_RATIO {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    };

    let confidence = ((positive - negative).abs() * 10.0).min(100.0);
    (label, confidence)
}
