//! Command-line interface definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "verif-tools",
    version,
    about = "Regression report and simulation log analysis for the UVM verification flow"
)]
pub struct Cli {
    /// TOML file with default paths and limits
    #[arg(long, global = true, env = "VERIF_TOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase diagnostic logging on stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render results/summary.log as an HTML regression report
    HtmlReport(HtmlReportArgs),
    /// Classify a simulation transcript and summarize errors, warnings and info
    ParseLog(ParseLogArgs),
}

#[derive(Args, Debug)]
pub struct HtmlReportArgs {
    /// Directory containing summary.log [default: results]
    pub results_dir: Option<PathBuf>,

    /// HTML file to write [default: report.html]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ParseLogArgs {
    /// Transcript to analyze [default: sim/vcs/simv.log]
    pub log_file: Option<PathBuf>,

    /// Only list errors
    #[arg(short, long, conflicts_with = "warnings")]
    pub errors: bool,

    /// Only list warnings
    #[arg(short, long)]
    pub warnings: bool,

    /// Write a text report to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the summary only
    #[arg(short, long)]
    pub quiet: bool,

    /// Maximum errors/warnings listed [default: 10]
    #[arg(long)]
    pub limit: Option<usize>,
}
