//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod lights;

use axum::Router;
use axum::routing::get;

use lights_app::ports::LightRepository;

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: LightRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/lights",
            get(lights::list::<R>)
                .post(lights::create::<R>)
                .delete(lights::delete_all::<R>),
        )
        .route(
            "/lights/{id}",
            get(lights::get::<R>)
                .put(lights::replace::<R>)
                .delete(lights::delete::<R>),
        )
}
