//! Application builder.
//!
//! Assembles all routes, middleware, and state into an Axum router.

use crate::{
    error::handle_middleware_error,
    middleware::{logging_middleware, request_id_middleware},
    routes,
    state::AppState,
};
use axum::{
    error_handling::HandleErrorLayer, extract::DefaultBodyLimit, http::HeaderValue, middleware,
    Router,
};
use llm_significance_common::{config::ServerConfig, AppConfig};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

/// Create the main application router
pub fn create_app(config: AppConfig) -> Router {
    create_app_with_state(AppState::new(config))
}

/// Create the router around an existing state
pub fn create_app_with_state(state: AppState) -> Router {
    let config = state.config.clone();
    let cors = build_cors_layer(&config.server);

    Router::new()
        .merge(routes::health_routes())
        .merge(routes::analysis_routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                // Tracing
                .layer(TraceLayer::new_for_http())
                // Compression
                .layer(CompressionLayer::new())
                // CORS
                .layer(cors)
                // Timeout, rendered as a JSON error body
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .timeout(config.request_timeout())
                // Body size
                .layer(DefaultBodyLimit::max(config.server.max_body_size))
                // Custom middleware
                .layer(middleware::from_fn(request_id_middleware))
                .layer(middleware::from_fn(logging_middleware)),
        )
}

/// Build CORS layer from configuration
fn build_cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if config.cors_allowed_origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    cors.allow_origin(AllowOrigin::list(origins))
}
