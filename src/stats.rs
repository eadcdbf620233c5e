//! # Summary Statistics
//! Simple roll-up over a batch of analyses: counts per label and mean
//! confidence. Informational only; plain arithmetic, no state.

use serde::Serialize;

use crate::classify::Sentiment;
use crate::result::AnalysisResult;

/// Aggregate view over an ordered sequence of results.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct SummaryStats {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    /// Mean of per-result confidence values; 0 for an empty batch.
    pub mean_confidence: f32,
}

impl SummaryStats {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let mut stats = Self {
            total: results.len(),
            ..Self::default()
        };
        let mut confidence_sum = 0.0f32;

        for r in results {
            match r.sentiment {
                Sentiment::Positive => stats.positive += 1,
                Sentiment::Negative => stats.negative += 1,
                Sentiment::Neutral => stats.neutral += 1,
            }
            confidence_sum += r.confidence;
        }

        stats.mean_confidence = confidence_sum / results.len() as f32;
        stats
    }

    /// Percentage share of one label count within the batch.
    pub fn share(&self, count: usize) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            count as f32 / self.total as f32 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::SentimentAnalyzer;

    #[test]
    fn empty_batch_is_all_zero() {
        let s = SummaryStats::from_results(&[]);
        assert_eq!(s.total, 0);
        assert!((s.mean_confidence - 0.0).abs() < 1e-6);
        assert!((s.share(s.positive) - 0.0).abs() < 1e-6);
    }

    #[test]
    fn counts_and_mean_confidence() {
        let analyzer = SentimentAnalyzer::new();
        let results: Vec<_> = ["excellent", "horrible", "le chat dort"]
            .iter()
            .map(|t| analyzer.analyze(t))
            .collect();

        let s = SummaryStats::from_results(&results);
        assert_eq!(s.total, 3);
        assert_eq!(s.positive, 1);
        assert_eq!(s.negative, 1);
        assert_eq!(s.neutral, 1);

        // excellent → 30, horrible → 30, neutral → 0
        assert!((s.mean_confidence - 20.0).abs() < 1e-6);
        assert!((s.share(s.neutral) - 33.333_332).abs() < 1e-3);
    }
}
