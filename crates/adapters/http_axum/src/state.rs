//! Shared application state for axum handlers.

use std::sync::Arc;

use lights_app::ports::LightRepository;
use lights_app::presenter::LightPresenter;
use lights_app::services::light_service::LightService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository type to avoid dynamic dispatch. `Clone` is
/// implemented manually so the repository itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<R> {
    /// Light CRUD service.
    pub light_service: Arc<LightService<R>>,
    /// Envelope builder for API responses.
    pub presenter: LightPresenter,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            light_service: Arc::clone(&self.light_service),
            presenter: self.presenter.clone(),
        }
    }
}

impl<R> AppState<R>
where
    R: LightRepository + Send + Sync + 'static,
{
    /// Create a new application state from the service and presenter.
    pub fn new(light_service: LightService<R>, presenter: LightPresenter) -> Self {
        Self {
            light_service: Arc::new(light_service),
            presenter,
        }
    }
}
