//! CLI entrypoint: wires the line source, the analyzer, the renderer and the
//! batch statistics together. The scoring core itself does no I/O.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use novatech_sentiment::{reader, report, AnalysisResult, SentimentAnalyzer, SummaryStats};

#[derive(Debug, Parser)]
#[command(
    name = "novatech-sentiment",
    version,
    about = "Lexicon-based sentiment analysis for customer testimonials"
)]
struct Cli {
    /// Text to analyze; reads lines from stdin when neither TEXT nor --file
    /// is given.
    text: Option<String>,

    /// Analyze each non-blank line of this file.
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Show matched-word details.
    #[arg(short, long)]
    verbose: bool,

    /// Print roll-up statistics after the batch.
    #[arg(short, long)]
    stats: bool,

    /// Emit results (and statistics) as JSON lines.
    #[arg(long)]
    json: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("novatech_sentiment=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let analyzer = SentimentAnalyzer::new();

    let lines: Vec<String> = if let Some(text) = cli.text {
        if text.trim().is_empty() {
            Vec::new()
        } else {
            vec![text]
        }
    } else if let Some(path) = &cli.file {
        // A failed read is reported and we continue with an empty batch.
        match reader::read_lines(path) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(error = %e, "file read failed");
                eprintln!("Error: {e:#}");
                Vec::new()
            }
        }
    } else {
        reader::read_stdin_lines()?
    };

    if lines.is_empty() {
        eprintln!("Nothing to analyze.");
        return Ok(());
    }

    let results: Vec<AnalysisResult> = lines.iter().map(|l| analyzer.analyze(l)).collect();

    for (i, result) in results.iter().enumerate() {
        if cli.json {
            println!("{}", serde_json::to_string(result)?);
        } else {
            if results.len() > 1 {
                println!("\n--- Analysis {} ---", i + 1);
            }
            print!("{}", report::render_result(result, cli.verbose));
        }
    }

    if cli.stats {
        let stats = SummaryStats::from_results(&results);
        if cli.json {
            println!("{}", serde_json::to_string(&stats)?);
        } else {
            print!("{}", report::render_stats(&stats));
        }
    }

    Ok(())
}
