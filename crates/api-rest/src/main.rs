//! LLM Significance API server
//!
//! Loads configuration, initialises tracing and serves the REST API until
//! Ctrl-C.

use anyhow::{Context, Result};
use llm_significance_api_rest::create_app;
use llm_significance_common::{log_info, log_warn, telemetry, AppConfig};
use tokio::signal;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;
    telemetry::init_from_config(&config.telemetry)?;

    let address = config.server_address();
    log_info!(
        "Starting LLM Significance API",
        address = address,
        test_type = config.analysis.test_type,
        alpha = config.analysis.alpha,
    );

    let app = create_app(config);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log_info!("Server shut down gracefully", address = address);
    Ok(())
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        log_warn!("Failed to listen for shutdown signal", error = e);
    }
}
