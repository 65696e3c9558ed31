//! Subcommand handlers.
//!
//! Each handler merges command-line arguments over the loaded config and runs
//! one tool to completion.

use anyhow::Context;
use std::io::{self, Write};

use crate::cli::{HtmlReportArgs, ParseLogArgs};
use crate::config::{LogConfig, ReportConfig};
use crate::regress::generate_html_report;
use crate::transcript::text_report::write_text_report;
use crate::transcript::{ComponentTally, LogAnalysis, Transcript, console};

/// Render the regression HTML report.
///
/// A missing summary renders an empty report; an unwritable output fails the
/// command.
pub fn run_html_report(args: &HtmlReportArgs, config: &ReportConfig) -> anyhow::Result<()> {
    let results_dir = args.results_dir.as_deref().unwrap_or(config.results_dir.as_path());
    let output = args.output.as_deref().unwrap_or(config.output.as_path());

    log::info!("Generating HTML report from {} into {}", results_dir.display(), output.display());
    generate_html_report(results_dir, output, &config.title)?;
    Ok(())
}

/// Analyze a transcript and print the requested sections.
///
/// Only a transcript that cannot be loaded fails the command. A text report
/// that cannot be written is reported on stdout and the command still
/// succeeds.
pub fn run_parse_log(args: &ParseLogArgs, config: &LogConfig) -> anyhow::Result<()> {
    let log_file = args.log_file.as_deref().unwrap_or(config.log_file.as_path());
    let limit = args.limit.unwrap_or(config.detail_limit);

    let transcript = Transcript::load(log_file)?;
    let analysis = LogAnalysis::classify(transcript.lines());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    console::write_summary(&mut out, &transcript, &analysis).context("Failed to write summary")?;

    if !args.quiet {
        if !args.warnings {
            console::write_errors(&mut out, &analysis, limit)?;
        }
        if !args.errors {
            console::write_warnings(&mut out, &analysis, limit)?;
        }
        ComponentTally::from_lines(&analysis.info).write_to(&mut out, config.component_limit)?;
    }

    if let Some(output) = &args.output {
        match write_text_report(output, &transcript, &analysis, config.report_error_limit) {
            Ok(()) => writeln!(out, "\nReport generated: {}", output.display())?,
            Err(e) => {
                log::warn!("Text report {} not written: {}", output.display(), e);
                writeln!(out, "Error: failed to write report - {}", e)?;
            }
        }
    }

    out.flush()?;
    Ok(())
}
