//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error loading configuration from environment
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    /// Validation error
    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Invalid port number
    #[error("Invalid port number")]
    InvalidPort,

    /// Invalid request timeout
    #[error("Invalid request timeout (must be 1-300 seconds)")]
    InvalidTimeout,

    /// CORS origin is not a valid header value
    #[error("Invalid CORS origin: '{0}'")]
    InvalidCorsOrigin(String),
}
