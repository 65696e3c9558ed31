//! Parse the regression `summary.log` into `TestRecord`s.
//!
//! Line format:
//!
//! ```text
//! name:result[:duration]
//! ```
//!
//! Lines without a `:` are skipped. Segments after the third are dropped, so a
//! duration containing `:` is truncated at its first colon.

use anyhow::Context;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use super::types::{DURATION_DEFAULT, RESULT_UNKNOWN, TestRecord};
use crate::text::split_lines;

/// File name of the summary inside the results directory.
pub const SUMMARY_FILE_NAME: &str = "summary.log";

/// Parse the full text of a summary file.
pub fn parse_summary(text: &str) -> Vec<TestRecord> {
    split_lines(text).into_iter().filter_map(parse_summary_line).collect()
}

/// Parse a single summary line, `None` if it carries no `:` separator.
fn parse_summary_line(line: &str) -> Option<TestRecord> {
    let line = line.trim();
    if !line.contains(':') {
        return None;
    }

    let mut parts = line.split(':');
    let name = parts.next().unwrap_or_default();
    let result = parts.next().unwrap_or(RESULT_UNKNOWN);
    let duration = parts.next().unwrap_or(DURATION_DEFAULT);

    Some(TestRecord {
        name: name.to_string(),
        result: result.to_string(),
        duration: duration.to_string(),
    })
}

/// Load `summary.log` from `results_dir`.
///
/// A missing summary is an empty regression, not an error.
pub fn load_summary(results_dir: &Path) -> anyhow::Result<Vec<TestRecord>> {
    let summary_path = results_dir.join(SUMMARY_FILE_NAME);

    let text = match fs::read_to_string(&summary_path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("No summary found at {}, rendering an empty report", summary_path.display());
            return Ok(Vec::new());
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", summary_path.display())),
    };

    let records = parse_summary(&text);
    log::info!("Loaded {} test records from {}", records.len(), summary_path.display());
    Ok(records)
}
