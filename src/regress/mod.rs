//! Regression report module.
//!
//! Turns the flat `summary.log` written by the regression scripts into a
//! static HTML page:
//! - `summary_parser`: reading and parsing `name:result:duration` records
//! - `html_report`: aggregate counts and page rendering

pub mod html_report;
pub mod summary_parser;
pub mod types;

pub use html_report::{generate_html_report, render_html};
pub use summary_parser::{load_summary, parse_summary};
pub use types::{RegressionStats, TestRecord};
