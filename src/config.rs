//! Configuration loading for both tools.
//!
//! Every field has a default, so a missing config file and an empty one behave
//! the same. Command-line arguments override whatever is loaded here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Error type for config loading failures.
#[derive(Debug)]
pub enum ConfigError {
    ReadError(String),
    ParseError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(msg) => write!(f, "Failed to read config file: {}", msg),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config file: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Settings for the regression HTML report.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ReportConfig {
    /// Directory holding `summary.log`.
    pub results_dir: PathBuf,
    /// Destination of the rendered HTML page.
    pub output: PathBuf,
    /// Page title and main heading.
    pub title: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            results_dir: PathBuf::from("results"),
            output: PathBuf::from("report.html"),
            title: "UVM Verification Platform - Regression Report".to_string(),
        }
    }
}

/// Settings for the transcript analyzer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct LogConfig {
    /// Transcript analyzed when no path is given on the command line.
    pub log_file: PathBuf,
    /// Maximum errors/warnings listed on the console.
    pub detail_limit: usize,
    /// Maximum component tags listed on the console.
    pub component_limit: usize,
    /// Maximum errors copied into the text report.
    pub report_error_limit: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("sim/vcs/simv.log"),
            detail_limit: 10,
            component_limit: 10,
            report_error_limit: 20,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ToolsConfig {
    pub report: ReportConfig,
    pub log: LogConfig,
}

impl ToolsConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `config_path` - Path to the TOML file
    ///
    /// # Returns
    /// * `Ok(ToolsConfig)` if the file was read and parsed
    /// * `Err(ConfigError)` describing which step failed otherwise
    pub fn load(config_path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(config_path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", config_path.display(), e)))?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load from `path` when given, otherwise fall back to the built-in defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                let config = Self::load(path)?;
                log::debug!("Loaded config from {}", path.display());
                Ok(config)
            }
            None => Ok(Self::default()),
        }
    }
}
