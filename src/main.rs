use clap::Parser;
use env_logger::Builder;
use log::{LevelFilter, debug};

use verif_tools::cli::{Cli, Command};
use verif_tools::commands;
use verif_tools::config::ToolsConfig;

fn crate_log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = ToolsConfig::load_or_default(cli.config.as_deref())?;

    match cli.cmd {
        Command::HtmlReport(args) => commands::run_html_report(&args, &config.report),
        Command::ParseLog(args) => commands::run_parse_log(&args, &config.log),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logging setup; RUST_LOG overrides the defaults below
    Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter(Some("verif_tools"), crate_log_level(cli.verbose))
        .parse_default_env()
        .init();

    debug!("Starting up with {:?}", cli);

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
