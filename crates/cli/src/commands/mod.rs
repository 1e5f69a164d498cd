//! CLI commands

pub mod analyze;
pub mod config;

use crate::config::Config;
use crate::output::{Formattable, OutputFormat};
use anyhow::Result;
use llm_significance_application::SignificanceAnalyzer;

/// Context passed to all commands
pub struct CommandContext {
    pub config: Config,
    pub analyzer: SignificanceAnalyzer,
}

impl CommandContext {
    /// Create a new command context, seeding the engine from the preferences
    pub fn new(config: Config) -> Self {
        let analyzer = SignificanceAnalyzer::new(config.analysis.clone());
        Self { config, analyzer }
    }

    /// Output format selected for this invocation
    pub fn output_format(&self) -> OutputFormat {
        self.config.output_format
    }

    /// Render a value in the selected output format
    pub fn render<T: Formattable>(&self, value: &T) -> Result<String> {
        value.format(self.output_format())
    }
}
