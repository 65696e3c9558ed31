//! Auxiliary tools for the UVM verification flow.
//!
//! - `regress`: renders the regression `summary.log` as an HTML page
//! - `transcript`: classifies simulator transcripts and reports on them

pub mod cli;
pub mod commands;
pub mod config;
pub mod regress;
pub mod text;
pub mod transcript;
