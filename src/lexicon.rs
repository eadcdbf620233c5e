//! # Lexicon Tables
//! Embedded sentiment vocabulary: weighted positive/negative word lists and
//! intensity multipliers, tuned for French customer testimonials.
//!
//! All tables are loaded once from the embedded JSON and never mutated, so a
//! single analyzer instance is safe to share across threads.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
struct LexiconFile {
    /// Positive words with severity weights (1..=3).
    positive: HashMap<String, i32>,
    /// Negative words with severity weights (1..=3).
    negative: HashMap<String, i32>,
    /// Degree adverbs amplifying the following word (multiplier > 1.0).
    intensifiers: HashMap<String, f32>,
}

static LEXICON: Lazy<LexiconFile> = Lazy::new(|| {
    let raw = include_str!("../sentiment_lexicon.json");
    serde_json::from_str::<LexiconFile>(raw).expect("valid sentiment lexicon")
});

/// Weight of a word in the positive lexicon, if present.
#[inline]
pub fn positive_weight(word: &str) -> Option<i32> {
    LEXICON.positive.get(word).copied()
}

/// Weight of a word in the negative lexicon, if present.
#[inline]
pub fn negative_weight(word: &str) -> Option<i32> {
    LEXICON.negative.get(word).copied()
}

/// Multiplier applied to the next word, if this word is an intensifier.
#[inline]
pub fn intensity_factor(word: &str) -> Option<f32> {
    LEXICON.intensifiers.get(word).copied()
}

/// Negation markers that flip the polarity of a nearby sentiment word.
pub fn is_negation(tok: &str) -> bool {
    matches!(
        tok,
        "pas" | "non" | "ne" | "ni" | "aucun" | "aucune" | "jamais" | "sans"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_positive_weights() {
        assert_eq!(positive_weight("excellent"), Some(3));
        assert_eq!(positive_weight("rapide"), Some(2));
        assert_eq!(positive_weight("merci"), Some(1));
    }

    #[test]
    fn known_negative_weights() {
        assert_eq!(negative_weight("mauvais"), Some(3));
        assert_eq!(negative_weight("lent"), Some(2));
    }

    #[test]
    fn lexicons_are_disjoint() {
        // A word in both tables would make the positive-first lookup order
        // silently shadow the negative entry.
        for word in super::LEXICON.positive.keys() {
            assert!(
                !super::LEXICON.negative.contains_key(word),
                "{word} appears in both lexicons"
            );
        }
    }

    #[test]
    fn intensifiers_amplify() {
        let f = intensity_factor("très").unwrap();
        assert!((f - 1.5).abs() < 1e-6);
        for (w, f) in super::LEXICON.intensifiers.iter() {
            assert!(*f > 1.0, "intensifier {w} must amplify, got {f}");
        }
    }

    #[test]
    fn negation_membership() {
        assert!(is_negation("pas"));
        assert!(is_negation("sans"));
        assert!(!is_negation("très"));
        assert!(!is_negation("chat"));
    }

    #[test]
    fn unknown_words_have_no_weight() {
        assert_eq!(positive_weight("chat"), None);
        assert_eq!(negative_weight("chat"), None);
        assert_eq!(intensity_factor("chat"), None);
    }
}
