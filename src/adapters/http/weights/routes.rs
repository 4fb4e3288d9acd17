//! Route configuration for the weighting endpoints.
//!
//! Configures the Axum router with the AHP calculation routes.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{calculate_ahp, fuzzy_ahp, ppf_ahp, WeightsAppState};

/// Creates the weights router with all endpoints.
///
/// Routes:
/// - `POST /calculate-ahp/` - Classical AHP weights and consistency ratio
/// - `GET /fuzzy-ahp` - Fuzzy AHP over triangular fuzzy numbers
/// - `GET /ppf-ahp` - PPF-AHP over Pythagorean preference pairs
pub fn weights_router() -> Router<WeightsAppState> {
    Router::new()
        .route("/calculate-ahp/", post(calculate_ahp))
        .route("/fuzzy-ahp", get(fuzzy_ahp))
        .route("/ppf-ahp", get(ppf_ahp))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Datasets;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_app() -> Router {
        let state = WeightsAppState::new(Arc::new(Datasets::standard().unwrap()));
        weights_router().with_state(state)
    }

    #[tokio::test]
    async fn weights_router_mounts_classical_endpoint() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .method(Method::POST)
                    .uri("/calculate-ahp/")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"weight_derivation": "geometric"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn weights_router_mounts_fuzzy_endpoint() {
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
    }

    #[tokio::test]
    async fn weights_router_mounts_ppf_endpoint() {
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
    }

    #[tokio::test]
    async fn classical_endpoint_requires_post() {
        let response = test_app()
            .oneshot(
                Request::builder()
                    .uri("/calculate-ahp/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn unknown_route_returns_not_found() {
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
}
