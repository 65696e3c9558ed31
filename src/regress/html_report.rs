//! Render the regression summary as a self-contained HTML page.

use anyhow::Context;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use super::summary_parser::load_summary;
use super::types::{RegressionStats, TestRecord};

const STYLE: &str = r#"        body {
            font-family: 'Segoe UI', Arial, sans-serif;
            margin: 0;
            padding: 20px;
            background: #f5f5f5;
        }
        .container {
            max-width: 1200px;
            margin: 0 auto;
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        h1 {
            color: #333;
            border-bottom: 3px solid #4CAF50;
            padding-bottom: 10px;
        }
        .summary {
            display: flex;
            gap: 20px;
            margin: 20px 0;
            padding: 20px;
            background: #f9f9f9;
            border-radius: 8px;
        }
        .stat {
            text-align: center;
            padding: 15px 25px;
            border-radius: 8px;
        }
        .stat.passed { background: #dff0d8; }
        .stat.failed { background: #f2dede; }
        .stat.total { background: #d9edf7; }
        .stat .number { font-size: 36px; font-weight: bold; }
        .stat .label { color: #666; margin-top: 5px; }
        table { width: 100%; border-collapse: collapse; margin: 20px 0; }
        th, td { padding: 12px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background: #4CAF50; color: white; }
        tr:hover { background: #f5f5f5; }
        .pass { color: #3c763d; }
        .fail { color: #a94442; }
        .footer {
            margin-top: 30px;
            padding-top: 20px;
            border-top: 1px solid #ddd;
            color: #666;
            text-align: center;
        }
        .progress-bar {
            width: 100%;
            height: 20px;
            background: #ddd;
            border-radius: 10px;
            overflow: hidden;
            margin: 10px 0;
        }
        .progress { height: 100%; background: #4CAF50; }
"#;

/// Escape text for use inside HTML element content and attribute values.
fn html_escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn status_class(record: &TestRecord) -> &'static str {
    if record.is_pass() { "pass" } else { "fail" }
}

/// Render the full report page.
///
/// Output is deterministic for a given `generated_at`.
pub fn render_html(records: &[TestRecord], title: &str, generated_at: &DateTime<Local>) -> String {
    let stats = RegressionStats::from_records(records);
    let pass_rate = format!("{:.1}", stats.pass_rate());
    let title = html_escape(title);

    let mut html = String::with_capacity(4096 + records.len() * 160);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str("    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str(&format!("    <title>{}</title>\n", title));
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n    <div class=\"container\">\n");
    html.push_str(&format!("        <h1>{}</h1>\n", title));

    html.push_str("        <div class=\"summary\">\n");
    for (class, number, label) in [
        ("total", stats.total, "Total"),
        ("passed", stats.passed, "Passed"),
        ("failed", stats.failed, "Failed"),
    ] {
        html.push_str(&format!("            <div class=\"stat {}\">\n", class));
        html.push_str(&format!("                <div class=\"number\">{}</div>\n", number));
        html.push_str(&format!("                <div class=\"label\">{}</div>\n", label));
        html.push_str("            </div>\n");
    }
    html.push_str("        </div>\n");

    html.push_str("        <h2>Test Details</h2>\n        <table>\n");
    html.push_str("            <tr>\n                <th>Test</th>\n                <th>Result</th>\n                <th>Duration (s)</th>\n            </tr>\n");
    for record in records {
        html.push_str("            <tr>\n");
        html.push_str(&format!("                <td>{}</td>\n", html_escape(&record.name)));
        html.push_str(&format!(
            "                <td class=\"{}\">{}</td>\n",
            status_class(record),
            html_escape(&record.result)
        ));
        html.push_str(&format!("                <td>{}</td>\n", html_escape(&record.duration)));
        html.push_str("            </tr>\n");
    }
    html.push_str("        </table>\n");

    html.push_str("        <div class=\"progress-bar\">\n");
    html.push_str(&format!("            <div class=\"progress\" style=\"width: {}%\"></div>\n", pass_rate));
    html.push_str("        </div>\n");
    html.push_str(&format!("        <p style=\"text-align: center;\">Pass rate: {}%</p>\n", pass_rate));

    html.push_str("        <div class=\"footer\">\n");
    html.push_str(&format!("            <p>Generated: {}</p>\n", generated_at.format("%Y-%m-%d %H:%M:%S")));
    html.push_str(&format!("            <p>{} v{}</p>\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")));
    html.push_str("        </div>\n    </div>\n</body>\n</html>\n");

    html
}

/// Load `summary.log` from `results_dir`, render it and write the page to `output`.
///
/// # Returns
///
/// The output path on success. A missing summary yields an empty report; an
/// unwritable `output` is an error.
pub fn generate_html_report(results_dir: &Path, output: &Path, title: &str) -> anyhow::Result<PathBuf> {
    let records = load_summary(results_dir)?;
    let html = render_html(&records, title, &Local::now());

    fs::write(output, html).with_context(|| format!("Failed to write report to {}", output.display()))?;

    let stats = RegressionStats::from_records(&records);
    log::info!(
        "Rendered {} tests ({} passed, {} failed) to {}",
        stats.total,
        stats.passed,
        stats.failed,
        output.display()
    );
    println!("✅ Report generated: {}", output.display());

    Ok(output.to_path_buf())
}
