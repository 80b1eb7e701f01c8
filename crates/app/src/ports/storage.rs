//! Storage port — the repository trait for persistence.

use std::future::Future;

use lights_domain::error::LightsError;
use lights_domain::id::LightId;
use lights_domain::light::{Light, NewLight};

/// Persistence operations required by
/// [`LightService`](crate::services::light_service::LightService).
///
/// Implementations own row-level consistency; callers assume nothing beyond
/// per-call transactional isolation. Expected absence is signalled through
/// `Option`/`bool` results rather than errors — classifying absence as
/// [`LightsError::NotFound`] is the service's job.
pub trait LightRepository {
    /// Insert a new light and return the stored row with its assigned id.
    fn insert(&self, light: NewLight) -> impl Future<Output = Result<Light, LightsError>> + Send;

    /// Fetch a single light, `None` when no row matches `id`.
    fn get_by_id(
        &self,
        id: LightId,
    ) -> impl Future<Output = Result<Option<Light>, LightsError>> + Send;

    /// Fetch every light in persistence order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Light>, LightsError>> + Send;

    /// Overwrite `name` and `is_powered_on` of an existing row, leaving
    /// `id` and `created_at` untouched. Resolves to `false` when no row
    /// matches `id`.
    fn replace_by_id(
        &self,
        id: LightId,
        name: String,
        is_powered_on: bool,
    ) -> impl Future<Output = Result<bool, LightsError>> + Send;

    /// Delete a single row. Resolves to `false` when no row matches `id`.
    fn delete_by_id(&self, id: LightId) -> impl Future<Output = Result<bool, LightsError>> + Send;

    /// Delete every row, resolving to the number of rows removed.
    fn delete_all(&self) -> impl Future<Output = Result<u64, LightsError>> + Send;
}
