//! # lightsd — lights daemon
//!
//! Composition root that wires the adapters together and starts the server.
//!
//! ## Responsibilities
//! - Parse configuration (TOML file, env var overrides)
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct the repository implementation (adapter)
//! - Construct the application service, injecting the repository via its port trait
//! - Build the axum router, injecting the service and presenter
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use axum::ServiceExt;
use axum::extract::Request;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;
use tracing_subscriber::EnvFilter;

use lights_adapter_http_axum::state::AppState;
use lights_adapter_storage_sqlite_sqlx::{Config as StorageConfig, SqliteLightRepository};
use lights_app::presenter::LightPresenter;
use lights_app::services::light_service::LightService;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    // Database
    let db = StorageConfig {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await?;

    // Repository and service
    let repo = SqliteLightRepository::new(db.pool().clone());
    let service = LightService::new(repo);
    let presenter = LightPresenter::new(config.api_base_url());

    // HTTP
    let state = AppState::new(service, presenter);
    let app = lights_adapter_http_axum::router::build(state);
    // The canonical collection URL carries a trailing slash; trim it before
    // routing so both spellings resolve to the same handler.
    let app = NormalizePathLayer::trim_trailing_slash().layer(app);

    let bind_addr = config.bind_addr();
    tracing::info!(%bind_addr, "lightsd listening");

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }

    tracing::info!("shutdown signal received");
}
