//! # Sentiment Analyzer
//! Entry point of the scoring pipeline: tokenize → annotate context → score
//! against the lexicons → classify. Pure computation, no I/O; any input,
//! including the empty string, yields a well-formed result.

use tracing::debug;

use crate::classify::classify;
use crate::lexicon;
use crate::result::{AnalysisResult, WordMatch};
use crate::tokenize::{annotate_context, tokenize};

/// Stateless scorer over the embedded read-only lexicons. One instance can be
/// shared freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct SentimentAnalyzer;

impl SentimentAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Analyze one line of text.
    ///
    /// Lookup order is positive lexicon first, then negative; unmatched
    /// tokens contribute nothing. An intensified match has its weight
    /// multiplied before any negation handling; a negated match contributes
    /// its full weight to the *opposite* bucket ("not good" scores negative,
    /// "not bad" scores positive).
    pub fn analyze(&self, text: &str) -> AnalysisResult {
        let mut tokens = tokenize(text);
        annotate_context(&mut tokens);

        let mut positive = 0.0f32;
        let mut negative = 0.0f32;
        let mut positive_matches = Vec::new();
        let mut negative_matches = Vec::new();

        for tok in &tokens {
            let (base, from_positive) = match lexicon::positive_weight(&tok.word) {
                Some(w) => (w, true),
                None => match lexicon::negative_weight(&tok.word) {
                    Some(w) => (w, false),
                    None => continue,
                },
            };

            let mut weight = base as f32;
            if let Some(f) = tok.intensity_factor {
                weight *= f;
            }

            let matched = WordMatch {
                word: tok.word.clone(),
                weight,
                negated: tok.negated,
                intensified: tok.intensified,
                intensity_factor: tok.intensity_factor,
            };

            // Polarity flip: negation redirects to the opposite bucket.
            let to_positive = from_positive != tok.negated;
            if to_positive {
                positive += weight;
                positive_matches.push(matched);
            } else {
                negative += weight;
                negative_matches.push(matched);
            }
        }

        let (sentiment, confidence) = classify(positive, negative);
        debug!(
            label = sentiment.as_str(),
            positive, negative, "scored line"
        );

        // Rounding happens only here, at the result boundary; accumulation
        // above runs at full float precision.
        AnalysisResult {
            sentiment,
            confidence: round1(confidence),
            positive_score: round2(positive),
            negative_score: round2(negative),
            total_score: round2(positive + negative),
            positive_matches,
            negative_matches,
            text: text.to_string(),
        }
    }
}

#[inline]
fn round2(x: f32) -> f32 {
    (x * 100.0).round() / 100.0
}

#[inline]
fn round1(x: f32) -> f32 {
    (x * 10.0).round() / 10.0
}
