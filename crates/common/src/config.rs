//! Configuration management for the service.
//!
//! Settings are loaded from configuration files and environment variables.
//!
//! ## Example Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! request_timeout_seconds = 30
//!
//! [telemetry]
//! json_logging = true
//! log_level = "info"
//!
//! [analysis]
//! test_type = "wilcoxon"
//! alpha = 0.05
//! correction = "none"
//! include_baseline_in_ranking = true
//! ```

use anyhow::{Context, Result};
use llm_significance_application::AnalysisSettings;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// Engine defaults applied when a request leaves a parameter unset
    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,

    /// Maximum request body size in bytes
    #[serde(default = "default_max_body_size")]
    pub max_body_size: usize,

    /// CORS allowed origins; `*` allows any
    #[serde(default = "default_cors_origins")]
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
            max_body_size: default_max_body_size(),
            cors_allowed_origins: default_cors_origins(),
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Service name attached to log output
    #[serde(default = "default_service_name")]
    pub service_name: String,

    /// Enable JSON logging format
    #[serde(default = "default_json_logging")]
    pub json_logging: bool,

    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            json_logging: default_json_logging(),
            log_level: default_log_level(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    30
}

fn default_max_body_size() -> usize {
    10 * 1024 * 1024 // 10 MB
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_service_name() -> String {
    "llm-significance".to_string()
}

fn default_json_logging() -> bool {
    false
}

fn default_log_level() -> String {
    "info".to_string()
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

impl AppConfig {
    /// Load configuration from environment variables and configuration files.
    ///
    /// The configuration is loaded in the following order (later sources override earlier ones):
    /// 1. Default values
    /// 2. config/default.toml (if exists)
    /// 3. config/{environment}.toml (if exists, where environment is from APP_ENV)
    /// 4. Environment variables (prefixed with APP_)
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use llm_significance_common::config::AppConfig;
    ///
    /// let config = AppConfig::load().expect("Failed to load configuration");
    /// println!("Server will run on {}", config.server_address());
    /// ```
    pub fn load() -> Result<Self> {
        let env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", env)).required(false))
            // Example: APP_SERVER__PORT=3000, APP_ANALYSIS__ALPHA=0.01
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to build configuration")?;

        let app_config: AppConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Server port must be greater than 0");
        }

        if self.server.request_timeout_seconds == 0 {
            anyhow::bail!("Request timeout must be greater than 0");
        }

        if self.server.max_body_size == 0 {
            anyhow::bail!("Maximum body size must be greater than 0");
        }

        if !VALID_LOG_LEVELS.contains(&self.telemetry.log_level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.telemetry.log_level,
                VALID_LOG_LEVELS.join(", ")
            );
        }

        let alpha = self.analysis.alpha;
        if !(alpha > 0.0 && alpha < 1.0) {
            anyhow::bail!("Analysis alpha must lie strictly between 0 and 1, got {}", alpha);
        }

        Ok(())
    }

    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.server.request_timeout_seconds)
    }

    /// Get the `host:port` bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Create a development configuration with sensible defaults
    pub fn development() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                ..ServerConfig::default()
            },
            telemetry: TelemetryConfig {
                service_name: "llm-significance-dev".to_string(),
                json_logging: false,
                log_level: "debug".to_string(),
            },
            analysis: AnalysisSettings::default(),
        }
    }

    /// Create a production configuration
    pub fn production() -> Self {
        Self {
            server: ServerConfig {
                cors_allowed_origins: Vec::new(), // Must be provided
                request_timeout_seconds: 15,
                max_body_size: 2 * 1024 * 1024,
                ..ServerConfig::default()
            },
            telemetry: TelemetryConfig {
                json_logging: true,
                ..TelemetryConfig::default()
            },
            analysis: AnalysisSettings::default(),
        }
    }
}
