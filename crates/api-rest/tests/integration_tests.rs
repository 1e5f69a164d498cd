//! Integration tests for REST API
//!
//! Drives the router in-process and checks status codes, the report body and
//! the `{ error }` contract.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use llm_significance_api_rest::create_app;
use llm_significance_common::AppConfig;
use llm_significance_testing::{builders::*, fixtures::*};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    create_app(AppConfig::default())
}

async fn send(request: Request<Body>) -> (StatusCode, Value, axum::http::HeaderMap) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body, headers)
}

fn post_analyze(body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();

    let (status, body, _) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
    assert!(body["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn test_service_descriptor() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();

    let (status, body, _) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    let endpoints = body["endpoints"].as_array().unwrap();
    assert!(endpoints.contains(&json!("POST /api/analyze")));
    assert_eq!(body["test_types"], json!(["wilcoxon", "ttest", "mannwhitney"]));
}

#[tokio::test]
async fn test_analyze_returns_report() {
    let body = AnalysisRequestBuilder::new().build_json();

    let (status, report, _) = send(post_analyze(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["dataOverview"]["sampleCount"], 5);
    assert_eq!(report["dataOverview"]["modelCount"], 3);
    assert_eq!(report["dataOverview"]["testType"], "wilcoxon");
    assert_eq!(report["basicStats"].as_array().unwrap().len(), 3);
    assert_eq!(report["pairwiseComparison"].as_array().unwrap().len(), 1);
    assert_eq!(report["baselineComparison"][0]["model"], MODEL_A);
    assert_eq!(report["baselineComparison"][0]["better_than_baseline"], true);
    assert_eq!(report["bestModel"]["name"], MODEL_B);
    assert_eq!(report["significantPairsCount"], 0);
    assert!(report.get("error").is_none());
}

#[tokio::test]
async fn test_analyze_accepts_raw_json_body() {
    let body = json!({
        "data": reference_table_json(),
        "baseline": BASELINE,
        "dataColumns": [MODEL_A],
        "testType": "TTest",
        "alpha": 0.01
    });

    let (status, report, _) = send(post_analyze(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["dataOverview"]["testType"], "ttest");
    assert_eq!(report["dataOverview"]["alpha"], 0.01);
}

#[tokio::test]
async fn test_unsupported_test_type() {
    let body = AnalysisRequestBuilder::new().with_test_type("anova").build_json();

    let (status, body, _) = send(post_analyze(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Unsupported test type: anova" }));
}

#[tokio::test]
async fn test_missing_baseline() {
    let body = AnalysisRequestBuilder::new().with_baseline("ghost").build_json();

    let (status, body, _) = send(post_analyze(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid baseline: column 'ghost' not found");
}

#[tokio::test]
async fn test_undefined_test_is_unprocessable() {
    let body = AnalysisRequestBuilder::new()
        .with_data(create_identical_table())
        .with_columns(&["copy"])
        .build_json();

    let (status, body, _) = send(post_analyze(body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["error"].as_str().unwrap().starts_with("Test undefined"));
    assert!(body.get("dataOverview").is_none());
}

#[tokio::test]
async fn test_malformed_json() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/analyze")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let (status, body, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Bad request"));
}

#[tokio::test]
async fn test_alpha_out_of_range_fails_validation() {
    let body = AnalysisRequestBuilder::new().with_alpha(1.5).build_json();

    let (status, body, _) = send(post_analyze(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Validation error"));
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();

    let (_, _, headers) = send(request).await;
    assert_eq!(headers["x-request-id"], "req-123");

    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let (_, _, headers) = send(request).await;
    assert!(!headers["x-request-id"].is_empty());
}
