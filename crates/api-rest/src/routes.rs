//! HTTP route handlers.

pub mod analysis;
pub mod health;

// Re-export for convenience
pub use analysis::routes as analysis_routes;
pub use health::routes as health_routes;
