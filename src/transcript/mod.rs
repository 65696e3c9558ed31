//! Transcript analyzer module for simulator logs.
//!
//! Provides functionality for:
//! - Loading a transcript with permissive UTF-8 decoding
//! - Priority-ordered line classification (error > warning > info)
//! - Verdict detection and component tag statistics
//! - Console output and a flat text report

pub mod classifier;
pub mod components;
pub mod console;
pub mod log_loader;
pub mod text_report;
pub mod types;

pub use classifier::{LogAnalysis, classify_line};
pub use components::ComponentTally;
pub use log_loader::{LoadError, Transcript};
pub use types::{Category, Verdict};
