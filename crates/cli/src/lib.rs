//! LLM Significance CLI Library
//!
//! This library provides the core functionality for the `llm-significance`
//! command-line interface: loading score tables, running the analysis engine
//! locally, preference management and output formatting.

pub mod commands;
pub mod config;
pub mod output;

pub use config::Config;
pub use output::{Formattable, JsonFormatter, OutputFormat, TableFormatter};

/// Re-export common types
pub use anyhow::{Context, Result};
