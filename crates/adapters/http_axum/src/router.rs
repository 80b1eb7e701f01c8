//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use lights_app::ports::LightRepository;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/api` and includes a [`TraceLayer`] that
/// logs each HTTP request/response at the `DEBUG` level using the
/// `tracing` ecosystem.
pub fn build<R>(state: AppState<R>) -> Router
where
    R: LightRepository + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
