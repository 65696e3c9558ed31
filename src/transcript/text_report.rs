//! Flat text report written next to the console summary.

use chrono::{DateTime, Local};
use std::fs;
use std::path::Path;

use super::classifier::LogAnalysis;
use super::console::{BANNER_WIDTH, TITLE};
use super::log_loader::Transcript;
use super::types::Category;

/// Compose the report text.
///
/// At most `error_limit` error lines are included. Lines are joined with
/// `\n`, with no trailing newline.
pub fn render_text_report(
    transcript: &Transcript,
    analysis: &LogAnalysis,
    generated_at: &DateTime<Local>,
    error_limit: usize,
) -> String {
    let mut report = vec![
        TITLE.to_string(),
        "=".repeat(BANNER_WIDTH),
        format!("\nGenerated: {}", generated_at.format("%Y-%m-%d %H:%M:%S")),
        format!("Log file: {}", transcript.path().display()),
        format!("Total lines: {}", transcript.line_count()),
    ];
    report.extend(
        Category::ALL
            .iter()
            .map(|&category| format!("{}: {}", category.heading(), analysis.entries(category).len())),
    );

    if !analysis.errors.is_empty() {
        report.push("\nErrors:".to_string());
        report.extend(analysis.errors.iter().take(error_limit).map(|e| format!("  - {}", e)));
    }

    report.join("\n")
}

/// Render the report with the current time and write it to `output`.
pub fn write_text_report(
    output: &Path,
    transcript: &Transcript,
    analysis: &LogAnalysis,
    error_limit: usize,
) -> std::io::Result<()> {
    let report = render_text_report(transcript, analysis, &Local::now(), error_limit);
    fs::write(output, report)?;
    log::info!("Wrote text report for {} to {}", transcript.path().display(), output.display());
    Ok(())
}
