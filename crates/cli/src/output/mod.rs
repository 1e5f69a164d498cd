//! Output formatting for CLI

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

mod report;
mod table;

pub use table::TableFormatter;

/// Output format enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table output (default)
    #[default]
    Table,
    /// Plain text output
    Plain,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            "plain" => Ok(Self::Plain),
            other => anyhow::bail!("Invalid output format: {}. Use json, table, or plain", other),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
            Self::Plain => write!(f, "plain"),
        }
    }
}

/// JSON formatter
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format a value as pretty JSON
    pub fn format<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Types that can be printed in every output format
pub trait Formattable {
    /// Format as JSON
    fn format_json(&self) -> Result<String>;

    /// Format as table
    fn format_table(&self) -> Result<String>;

    /// Format as plain text
    fn format_plain(&self) -> Result<String>;

    /// Format using the specified format
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Json => self.format_json(),
            OutputFormat::Table => self.format_table(),
            OutputFormat::Plain => self.format_plain(),
        }
    }
}

/// Color helpers
pub mod colors {
    use colored::*;

    pub fn success(s: &str) -> ColoredString {
        s.green()
    }

    pub fn error(s: &str) -> ColoredString {
        s.red()
    }

    pub fn warning(s: &str) -> ColoredString {
        s.yellow()
    }

    pub fn dim(s: &str) -> ColoredString {
        s.dimmed()
    }

    pub fn bold(s: &str) -> ColoredString {
        s.bold()
    }
}
