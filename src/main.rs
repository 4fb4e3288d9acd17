//! Service entry point: configuration, tracing, datasets, router, server.

use std::process::ExitCode;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ahp_engine::adapters::http::{self, WeightsAppState};
use ahp_engine::config::{AppConfig, Datasets};

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Failed to load configuration: {err}");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = config.validate() {
        eprintln!("Invalid configuration: {err}");
        return ExitCode::FAILURE;
    }

    init_tracing(&config);

    let datasets = match Datasets::standard() {
        Ok(datasets) => Arc::new(datasets),
        Err(err) => {
            error!(%err, "Failed to build comparison datasets");
            return ExitCode::FAILURE;
        }
    };

    let app = http::router(WeightsAppState::new(datasets), &config.server);
    let addr = config.server.socket_addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%err, %addr, "Failed to bind server address");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, environment = ?config.server.environment, "AHP engine listening");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!(%err, "Server error");
        return ExitCode::FAILURE;
    }

    info!("Shutdown complete");
    ExitCode::SUCCESS
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins when set; the configured log level is the fallback.
/// Production gets JSON logs, development human-readable ones.
fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "Failed to install shutdown signal handler");
    }
}
