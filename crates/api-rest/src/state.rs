//! Application state shared by all route handlers.

use chrono::{DateTime, Utc};
use llm_significance_application::SignificanceAnalyzer;
use llm_significance_common::AppConfig;
use std::sync::Arc;

/// Application state shared across all requests
///
/// The analyzer carries no per-run state, so a single instance serves every
/// request concurrently.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<AppConfig>,

    /// Analysis engine configured from the `analysis` section
    pub analyzer: Arc<SignificanceAnalyzer>,

    /// Process start time, reported as uptime by `/health`
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state with an analyzer built from the configuration
    pub fn new(config: AppConfig) -> Self {
        let analyzer = SignificanceAnalyzer::new(config.analysis.clone());
        Self::with_analyzer(config, analyzer)
    }

    /// Create state around a pre-built analyzer
    pub fn with_analyzer(config: AppConfig, analyzer: SignificanceAnalyzer) -> Self {
        Self {
            config: Arc::new(config),
            analyzer: Arc::new(analyzer),
            started_at: Utc::now(),
        }
    }

    /// Whole seconds since the state was created
    pub fn uptime_seconds(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
