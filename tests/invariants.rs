// tests/invariants.rs
//
// Randomized checks of the scoring invariants over generated word soups:
// score accounting, non-negativity, and the confidence formula.

use rand::prelude::*;

use novatech_sentiment::SentimentAnalyzer;

// Mix of lexicon words, context words and noise so generated lines exercise
// every path of the pipeline.
const VOCAB: &[&str] = &[
    "excellent", "rapide", "bon", "merci", "recommande", "qualité",
    "mauvais", "lent", "cher", "horrible", "déçu", "problème",
    "pas", "ne", "jamais", "sans", "très", "vraiment", "extrêmement",
    "le", "la", "produit", "service", "chat", "dort", "et", "mais",
];

fn random_line(rng: &mut impl Rng) -> String {
    let len = rng.random_range(0..12);
    (0..len)
        .map(|_| VOCAB[rng.random_range(0..VOCAB.len())])
        .collect::<Vec<_>>()
        .join(" ")
}

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-4
}

#[test]
fn totals_add_up_and_scores_stay_non_negative() {
    let analyzer = SentimentAnalyzer::new();
    let mut rng = rand::rng();

    for _ in 0..500 {
        let line = random_line(&mut rng);
        let r = analyzer.analyze(&line);

        assert!(r.positive_score >= 0.0, "line: {line:?}");
        assert!(r.negative_score >= 0.0, "line: {line:?}");
        // Scores are rounded at the same boundary, so the identity holds up
        // to rounding of the two-decimal representation.
        assert!(
            approx(r.total_score, r.positive_score + r.negative_score)
                || (r.total_score - (r.positive_score + r.negative_score)).abs() <= 0.01,
            "total {} vs {} + {} (line: {line:?})",
            r.total_score,
            r.positive_score,
            r.negative_score
        );
    }
}

#[test]
fn confidence_matches_imbalance_formula() {
    let analyzer = SentimentAnalyzer::new();
    let mut rng = rand::rng();

    for _ in 0..500 {
        let line = random_line(&mut rng);
        let r = analyzer.analyze(&line);

        if r.total_score == 0.0 {
            assert!(approx(r.confidence, 0.0), "line: {line:?}");
        } else {
            let expected =
                (((r.positive_score - r.negative_score).abs() * 10.0).min(100.0) * 10.0).round()
                    / 10.0;
            // Compare against the rounded scores; both sides carry at most
            // one decimal of slack from the boundary rounding.
            assert!(
                (r.confidence - expected).abs() <= 0.2,
                "confidence {} vs {} (line: {line:?})",
                r.confidence,
                expected
            );
        }
    }
}

#[test]
fn detail_lists_account_for_every_point() {
    let analyzer = SentimentAnalyzer::new();
    let mut rng = rand::rng();

    for _ in 0..200 {
        let line = random_line(&mut rng);
        let r = analyzer.analyze(&line);

        let pos_sum: f32 = r.positive_matches.iter().map(|m| m.weight).sum();
        let neg_sum: f32 = r.negative_matches.iter().map(|m| m.weight).sum();

        assert!(
            (pos_sum - r.positive_score).abs() <= 0.01,
            "positive details {} vs score {} (line: {line:?})",
            pos_sum,
            r.positive_score
        );
        assert!(
            (neg_sum - r.negative_score).abs() <= 0.01,
            "negative details {} vs score {} (line: {line:?})",
            neg_sum,
            r.negative_score
        );
    }
}

#[test]
fn analyzer_is_deterministic() {
    let analyzer = SentimentAnalyzer::new();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let line = random_line(&mut rng);
        assert_eq!(analyzer.analyze(&line), analyzer.analyze(&line));
    }
}
