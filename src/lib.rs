// src/lib.rs
// Public library surface for integration tests (and the CLI binary).

pub mod analyzer;
pub mod classify;
pub mod lexicon;
pub mod reader;
pub mod report;
pub mod result;
pub mod stats;
pub mod tokenize;

// ---- Re-exports for stable public API ----
pub use crate::analyzer::SentimentAnalyzer;
pub use crate::classify::Sentiment;
pub use crate::result::{AnalysisResult, WordMatch};
pub use crate::stats::SummaryStats;
