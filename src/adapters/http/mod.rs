//! HTTP adapters - REST API implementation.
//!
//! Assembles the weighting routes and the shared middleware stack:
//! request-id generation and propagation, tracing, CORS and a request
//! timeout.

pub mod middleware;
pub mod weights;

// Re-export key types for convenience
pub use weights::weights_router;
pub use weights::WeightsAppState;

use std::time::Duration;

use axum::Router;
use http::header::HeaderName;
use http::HeaderValue;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use middleware::MakeRequestUuid;

/// Header carrying the per-request identifier.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Assembles the application router with its middleware stack.
///
/// Layer order (outermost first): set request id, trace, CORS, timeout,
/// propagate request id, routes. The id is generated before the trace
/// span opens and copied onto the response on the way out.
pub fn router(state: WeightsAppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static(REQUEST_ID_HEADER);

    weights_router()
        .with_state(state)
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.request_timeout_secs,
        )))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
}

/// Builds the CORS layer from configuration.
///
/// With no configured origins the API is fully open: any origin, any
/// method, any header, no credentials. Configured origins narrow the
/// allow list; methods and headers stay open.
fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origins = config.cors_origins_list();
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}
