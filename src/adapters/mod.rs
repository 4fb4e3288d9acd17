//! Adapters - infrastructure at the edges of the application.
//!
//! - `http` - Axum REST API and middleware stack

pub mod http;
