//! Human-readable console output for an analyzed transcript.
//!
//! All writers take a `Write` sink so the exact text can be checked in tests;
//! the CLI passes a locked stdout.

use std::io::{self, Write};

use super::classifier::LogAnalysis;
use super::log_loader::Transcript;
use super::types::Category;

pub const BANNER_WIDTH: usize = 60;
pub const TITLE: &str = "UVM Verification Platform - Log Analysis Report";

/// Banner, file path, line and category counts, then the verdict.
pub fn write_summary<W: Write>(out: &mut W, transcript: &Transcript, analysis: &LogAnalysis) -> io::Result<()> {
    let banner = "=".repeat(BANNER_WIDTH);
    writeln!(out, "\n{}", banner)?;
    writeln!(out, "{}", TITLE)?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "\nLog file: {}", transcript.path().display())?;
    writeln!(out, "Total lines: {}", transcript.line_count())?;
    for category in Category::ALL {
        writeln!(out, "{}: {}", category.heading(), analysis.entries(category).len())?;
    }

    let verdict = transcript.verdict();
    writeln!(out, "\n{} Test result: {}", verdict.glyph(), verdict)?;
    writeln!(out, "\n{}", banner)?;
    Ok(())
}

/// List up to `limit` entries of one category, 1-indexed.
///
/// An empty category prints an explicit confirmation instead of an empty list.
pub fn write_entries<W: Write>(out: &mut W, category: Category, entries: &[String], limit: usize) -> io::Result<()> {
    let noun = category.heading().to_lowercase();
    if entries.is_empty() {
        writeln!(out, "\n✅ No {}", noun)?;
        return Ok(());
    }

    writeln!(out, "\n{} (first {}):", category.heading(), limit)?;
    writeln!(out, "{}", "-".repeat(BANNER_WIDTH))?;
    for (i, entry) in entries.iter().take(limit).enumerate() {
        writeln!(out, "{}. {}", i + 1, entry)?;
    }

    if entries.len() > limit {
        writeln!(out, "\n... {} more {}", entries.len() - limit, noun)?;
    }
    Ok(())
}

pub fn write_errors<W: Write>(out: &mut W, analysis: &LogAnalysis, limit: usize) -> io::Result<()> {
    write_entries(out, Category::Error, analysis.entries(Category::Error), limit)
}

pub fn write_warnings<W: Write>(out: &mut W, analysis: &LogAnalysis, limit: usize) -> io::Result<()> {
    write_entries(out, Category::Warning, analysis.entries(Category::Warning), limit)
}
