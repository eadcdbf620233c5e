//! Line source: feeds non-empty text lines to the analyzer.
//! Blank lines are dropped here so the core never sees them; I/O failures
//! surface as errors for the caller to report, never a panic.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, BufRead};
use std::path::Path;

/// Read the non-blank lines of a UTF-8 text file, trimmed, in order.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read '{}'", path.display()))?;
    Ok(non_blank(raw.lines().map(str::to_string)))
}

/// Read non-blank lines from stdin until EOF.
pub fn read_stdin_lines() -> Result<Vec<String>> {
    let stdin = io::stdin();
    let lines: Vec<String> = stdin
        .lock()
        .lines()
        .collect::<io::Result<_>>()
        .context("failed to read from stdin")?;
    Ok(non_blank(lines.into_iter()))
}

fn non_blank(lines: impl Iterator<Item = String>) -> Vec<String> {
    lines
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
