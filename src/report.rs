//! Human-readable rendering of analysis results and batch statistics.
//! Consumes the immutable result records; all formatting lives here so the
//! scoring pipeline never touches output concerns.

use std::fmt::Write as _;

use crate::classify::Sentiment;
use crate::result::{AnalysisResult, WordMatch};
use crate::stats::SummaryStats;

const RULE: &str = "============================================================";

fn emoji(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "😊",
        Sentiment::Negative => "😠",
        Sentiment::Neutral => "😐",
    }
}

/// Render one result as a framed block; `verbose` adds the matched-word
/// detail lists.
pub fn render_result(result: &AnalysisResult, verbose: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:^60}", "SENTIMENT ANALYSIS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Text: \"{}\"", result.text);
    let _ = writeln!(
        out,
        "Sentiment: {} {}",
        emoji(result.sentiment),
        result.sentiment.as_str().to_uppercase()
    );
    let _ = writeln!(out, "Confidence: {}%", result.confidence);
    let _ = writeln!(out, "Positive score: {}", result.positive_score);
    let _ = writeln!(out, "Negative score: {}", result.negative_score);
    let _ = writeln!(out, "Total score: {}", result.total_score);

    if verbose {
        render_matches(&mut out, "Positive words detected:", &result.positive_matches);
        render_matches(&mut out, "Negative words detected:", &result.negative_matches);
    }

    let _ = writeln!(out, "{RULE}");
    out
}

fn render_matches(out: &mut String, heading: &str, matches: &[WordMatch]) {
    if matches.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{heading}");
    for m in matches {
        let negated = if m.negated { "(negated) " } else { "" };
        let intensified = match m.intensity_factor {
            Some(f) if m.intensified => format!("(intensified x{f}) "),
            _ => String::new(),
        };
        let _ = writeln!(out, "  - {negated}{intensified}{}: {}", m.word, m.weight);
    }
}

/// Render batch statistics; empty batches produce no output.
pub fn render_stats(stats: &SummaryStats) -> String {
    if stats.total == 0 {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:^60}", "BATCH STATISTICS");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "Lines analyzed: {}", stats.total);
    let _ = writeln!(
        out,
        "Positive: {} ({:.1}%)",
        stats.positive,
        stats.share(stats.positive)
    );
    let _ = writeln!(
        out,
        "Negative: {} ({:.1}%)",
        stats.negative,
        stats.share(stats.negative)
    );
    let _ = writeln!(
        out,
        "Neutral: {} ({:.1}%)",
        stats.neutral,
        stats.share(stats.neutral)
    );
    let _ = writeln!(out, "Mean confidence: {:.1}%", stats.mean_confidence);
    let _ = writeln!(out, "{RULE}");
    out
}
