//! Tokenizer and local-context annotation (negations, intensifiers).
//!
//! Normalization collapses punctuation to separators, so negation words glued
//! to apostrophes ("n'est") still land in their own token.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lexicon;

// \w covers [A-Za-z0-9_]; (?u) enables Unicode so accented words match whole.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?u)\w+").expect("tokenizer regex"));

/// A single normalized word with its local sentiment context.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub word: String,
    /// 0-based position in the token sequence.
    pub index: usize,
    /// True if one of the two preceding tokens is a negation marker.
    pub negated: bool,
    /// True if the immediately preceding token is an intensifier.
    pub intensified: bool,
    pub intensity_factor: Option<f32>,
}

/// Lowercase the input and split it into word tokens, punctuation acting as
/// a separator. Context flags start cleared; see [`annotate_context`].
pub fn tokenize(input: &str) -> Vec<Token> {
    let lowered = input.to_lowercase();
    WORD_RE
        .find_iter(&lowered)
        .enumerate()
        .map(|(i, m)| Token {
            word: m.as_str().to_string(),
            index: i,
            negated: false,
            intensified: false,
            intensity_factor: None,
        })
        .collect()
}

/// Single pass over the sequence setting both context flags per token.
///
/// Negation window is exactly the two preceding tokens (bounded scan, not
/// cumulative); the intensifier window is exactly the one preceding token.
/// The two checks are independent and may both apply to the same token.
pub fn annotate_context(tokens: &mut [Token]) {
    for i in 0..tokens.len() {
        let from = i.saturating_sub(2);
        if tokens[from..i].iter().any(|t| lexicon::is_negation(&t.word)) {
            tokens[i].negated = true;
        }

        if i > 0 {
            if let Some(f) = lexicon::intensity_factor(&tokens[i - 1].word) {
                tokens[i].intensified = true;
                tokens[i].intensity_factor = Some(f);
            }
        }
    }
}
