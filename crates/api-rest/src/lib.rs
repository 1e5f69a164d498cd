//! LLM Significance REST API
//!
//! This crate exposes the significance-analysis engine over HTTP with Axum.
//!
//! ## Architecture
//!
//! The API is organized into the following modules:
//!
//! - **app**: Router assembly and middleware stack
//! - **routes**: HTTP route handlers (analysis, health, service descriptor)
//! - **middleware**: Request ID and request logging
//! - **extractors**: Validated JSON payloads
//! - **error**: HTTP error handling and the `{ error }` body
//! - **state**: Shared state handed to every handler
//!
//! ## Usage
//!
//! ```rust,no_run
//! use llm_significance_api_rest::app::create_app;
//! use llm_significance_common::AppConfig;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = AppConfig::load().expect("Failed to load config");
//!     let listener = tokio::net::TcpListener::bind(config.server_address())
//!         .await
//!         .expect("Failed to bind");
//!
//!     axum::serve(listener, create_app(config))
//!         .await
//!         .expect("Server error");
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod app;
pub mod error;
pub mod extractors;
pub mod middleware;
pub mod routes;
pub mod state;

// Re-export commonly used types
pub use app::create_app;
pub use error::{ApiError, ApiResult};
pub use state::AppState;
