//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `request_id` - UUID v4 request-id generation

pub mod request_id;

pub use request_id::MakeRequestUuid;
