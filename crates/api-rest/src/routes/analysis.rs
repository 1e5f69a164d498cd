//! Significance analysis endpoint.

use crate::{
    error::{ApiError, ApiResult},
    extractors::ValidatedJson,
    state::AppState,
};
use axum::{extract::State, routing::post, Json, Router};
use llm_significance_domain::{AnalysisReport, AnalysisRequest};
use std::sync::Arc;
use tracing::{info, instrument};

/// Analysis routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/analyze", post(analyze))
}

/// Run a full analysis over the uploaded table.
///
/// The computation is CPU-bound and runs on the blocking pool; the request
/// body is moved into the task, so the run sees an immutable snapshot.
#[instrument(skip(state, request), fields(baseline = %request.baseline))]
async fn analyze(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AnalysisRequest>,
) -> ApiResult<Json<AnalysisReport>> {
    let analyzer = Arc::clone(&state.analyzer);

    let report = tokio::task::spawn_blocking(move || analyzer.analyze(&request))
        .await
        .map_err(|e| ApiError::Internal(format!("analysis task failed: {}", e)))??;

    info!(
        models = report.data_overview.model_count,
        significant_pairs = report.significant_pairs_count,
        "Analysis served"
    );

    Ok(Json(report))
}
