//! Integration tests for the weighting HTTP endpoints.
//!
//! These tests drive the full router (middleware included) with in-memory
//! requests and verify:
//! 1. Response shapes and the frozen JSON key names
//! 2. Golden weight and consistency values after wire rounding
//! 3. Error mapping for invalid derivation modes
//! 4. CORS and request-id middleware behavior

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use ahp_engine::adapters::http::{router, WeightsAppState};
use ahp_engine::config::{Datasets, ServerConfig};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn test_app() -> Router {
    let datasets = Arc::new(Datasets::standard().expect("standard datasets are valid"));
    router(WeightsAppState::new(datasets), &ServerConfig::default())
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is JSON")
}

fn post_calculate(body: Option<&str>) -> Request<Body> {
    let builder = Request::builder().method(Method::POST).uri("/calculate-ahp/");
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_owned()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn assert_f64_array(value: &Value, expected: &[f64]) {
    let array = value.as_array().expect("expected a JSON array");
    assert_eq!(array.len(), expected.len());
    for (actual, expected) in array.iter().zip(expected) {
        let actual = actual.as_f64().expect("expected a number");
        assert!(
            (actual - expected).abs() < 1e-9,
            "got {actual}, expected {expected}"
        );
    }
}

// =============================================================================
// Classical AHP
// =============================================================================

#[tokio::test]
async fn test_calculate_ahp_defaults_to_geometric_mode() {
    let response = test_app()
        .oneshot(post_calculate(Some("{}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_f64_array(
        &body["weights"],
        &[0.066, 0.153, 0.386, 0.075, 0.199, 0.059, 0.062],
    );
    assert!((body["consistency_ratio"].as_f64().unwrap() - 0.11).abs() < 1e-9);
    assert_eq!(
        body["consistency_message"],
        "The solution is inconsistent, the pairwise comparisons must be reviewed"
    );

    let dataset = body["dataset"].as_array().unwrap();
    assert_eq!(dataset.len(), 7);
    assert_eq!(dataset[2].as_array().unwrap().len(), 7);
    // The dataset is echoed unrounded.
    let entry = dataset[0][1].as_f64().unwrap();
    assert!((entry - 1.0 / 3.0).abs() < 1e-12);
}

#[tokio::test]
async fn test_calculate_ahp_mean_mode() {
    let response = test_app()
        .oneshot(post_calculate(Some(r#"{"weight_derivation": "mean"}"#)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_f64_array(
        &body["weights"],
        &[0.072, 0.152, 0.367, 0.073, 0.206, 0.061, 0.068],
    );
    assert!((body["consistency_ratio"].as_f64().unwrap() - 0.11).abs() < 1e-9);
}

#[tokio::test]
async fn test_calculate_ahp_max_eigen_mode() {
    let response = test_app()
        .oneshot(post_calculate(Some(r#"{"weight_derivation": "max_eigen"}"#)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_f64_array(
        &body["weights"],
        &[0.07, 0.145, 0.384, 0.071, 0.203, 0.06, 0.068],
    );
    assert!((body["consistency_ratio"].as_f64().unwrap() - 0.11).abs() < 1e-9);
}

#[tokio::test]
async fn test_calculate_ahp_accepts_missing_body() {
    let response = test_app().oneshot(post_calculate(None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    // No body behaves like the default geometric mode.
    assert_f64_array(
        &body["weights"],
        &[0.066, 0.153, 0.386, 0.075, 0.199, 0.059, 0.062],
    );
}

#[tokio::test]
async fn test_calculate_ahp_rejects_unknown_mode() {
    let response = test_app()
        .oneshot(post_calculate(Some(
            r#"{"weight_derivation": "eigenvalue"}"#,
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("'eigenvalue'"));
    assert!(message.contains("max_eigen"));
}

#[tokio::test]
async fn test_calculate_ahp_rejects_malformed_json() {
    let response = test_app()
        .oneshot(post_calculate(Some(r#"{"weight_derivation""#)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Fuzzy AHP
// =============================================================================

#[tokio::test]
async fn test_fuzzy_ahp_returns_buckley_weights() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/fuzzy-ahp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_f64_array(&body["crisp_weigths"], &[0.632, 0.145, 0.207, 0.068]);
    assert_f64_array(&body["normalized_weights"], &[0.601, 0.138, 0.197, 0.065]);
    assert!((body["consistency_ratio"].as_f64().unwrap() - 0.03).abs() < 1e-9);
    assert_eq!(body["consistency_message"], "The solution is consistent");

    // The legacy key spelling is part of the wire contract.
    assert!(body.get("crisp_weights").is_none());

    let fuzzy_weights = body["fuzzy_weights"].as_array().unwrap();
    assert_eq!(fuzzy_weights.len(), 4);
    assert_f64_array(&fuzzy_weights[0], &[2.913, 3.44, 3.936]);
    assert_f64_array(&fuzzy_weights[3], &[0.297, 0.355, 0.452]);

    let dataset = body["dataset"].as_array().unwrap();
    assert_eq!(dataset.len(), 4);
    assert_f64_array(&dataset[0][1], &[4.0, 5.0, 6.0]);
}

// =============================================================================
// PPF-AHP
// =============================================================================

#[tokio::test]
async fn test_ppf_ahp_returns_score_function_weights() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/ppf-ahp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_f64_array(&body["weights"], &[0.423, 0.185, 0.093, 0.266, 0.033]);
    assert!((body["consistency_ratio"].as_f64().unwrap() - 0.01).abs() < 1e-9);
    assert_eq!(body["is_consistent"], true);
    assert_eq!(body["consistency_message"], "The solution is consistent");

    // The pair matrix is exposed under its legacy name.
    assert!(body.get("dataset").is_none());
    let dataset = body["dataset3"].as_array().unwrap();
    assert_eq!(dataset.len(), 5);
    assert_f64_array(&dataset[0][0], &[0.0, 0.0]);
    assert_f64_array(&dataset[0][4], &[0.85, 0.15]);
    assert_f64_array(&dataset[4][0], &[0.15, 0.85]);
}

// =============================================================================
// Middleware
// =============================================================================

#[tokio::test]
async fn test_responses_carry_request_id() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/ppf-ahp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header present");
    assert!(!request_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_cors_preflight_is_open_by_default() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/calculate-ahp/")
                .header("origin", "http://anywhere.example")
                .header("access-control-request-method", "POST")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "*"
    );
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let response = test_app()
        .oneshot(
            Request::builder()
                .uri("/calculate-ahp")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
