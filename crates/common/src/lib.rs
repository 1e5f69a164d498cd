//! Common utilities shared by the LLM Significance binaries.
//!
//! This crate provides:
//! - Layered configuration loading (files plus `APP_` environment variables)
//! - Tracing subscriber setup and structured logging macros

pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, ServerConfig, TelemetryConfig};
pub use telemetry::{init_from_config, init_tracing};

/// Common error type used throughout the crate
pub type Result<T> = std::result::Result<T, anyhow::Error>;
