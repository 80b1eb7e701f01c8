//! Light service — use-cases for managing lights.

use lights_domain::error::{LightsError, NotFoundError};
use lights_domain::id::LightId;
use lights_domain::light::{self, Light, NewLight};
use lights_domain::time::now;

use crate::ports::LightRepository;

/// Application service for light CRUD operations.
///
/// Holds no state across calls; every operation is a single logical unit
/// of work against the repository. Safe to share behind an `Arc` across
/// request handlers. Ordering of concurrent replaces on the same id is
/// whatever the repository's isolation yields (last write wins).
pub struct LightService<R> {
    repo: R,
}

impl<R: LightRepository> LightService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Create a new light and return the stored row with its assigned id
    /// and creation timestamp.
    ///
    /// # Errors
    ///
    /// Returns [`LightsError::InvalidInput`] when `name` fails validation —
    /// in that case the repository is never called — or a storage error
    /// propagated from the repository.
    pub async fn create(&self, name: String, is_powered_on: bool) -> Result<Light, LightsError> {
        let draft = NewLight {
            name,
            is_powered_on,
            created_at: now(),
        };
        draft.validate()?;
        let stored = self.repo.insert(draft).await?;
        tracing::debug!(id = %stored.id, "light created");
        Ok(stored)
    }

    /// Look up a light by id.
    ///
    /// # Errors
    ///
    /// Returns [`LightsError::NotFound`] when no light with `id` exists,
    /// or a storage error from the repository.
    pub async fn get(&self, id: LightId) -> Result<Light, LightsError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all lights in persistence order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self) -> Result<Vec<Light>, LightsError> {
        self.repo.get_all().await
    }

    /// Replace `name` and `is_powered_on` of an existing light, leaving
    /// `id` and `created_at` untouched.
    ///
    /// Returns nothing on success: replacement is idempotent and the
    /// caller already holds the data it sent.
    ///
    /// # Errors
    ///
    /// Returns [`LightsError::InvalidInput`] when `name` fails validation,
    /// [`LightsError::NotFound`] when no light with `id` exists, or a
    /// storage error from the repository.
    pub async fn replace(
        &self,
        id: LightId,
        name: String,
        is_powered_on: bool,
    ) -> Result<(), LightsError> {
        light::validate_name(&name)?;
        if self.repo.replace_by_id(id, name, is_powered_on).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Delete a single light.
    ///
    /// # Errors
    ///
    /// Returns [`LightsError::NotFound`] when no light with `id` exists,
    /// or a storage error from the repository.
    pub async fn delete_one(&self, id: LightId) -> Result<(), LightsError> {
        if self.repo.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    /// Delete every light unconditionally, returning the number removed.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_all(&self) -> Result<u64, LightsError> {
        let removed = self.repo.delete_all().await?;
        tracing::info!(removed, "deleted all lights");
        Ok(removed)
    }
}

fn not_found(id: LightId) -> LightsError {
    NotFoundError {
        entity: "Light",
        id: id.to_string(),
    }
    .into()
}
