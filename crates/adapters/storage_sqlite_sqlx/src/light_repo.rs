//! `SQLite` implementation of [`LightRepository`].

use std::future::Future;

use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use lights_app::ports::LightRepository;
use lights_domain::error::LightsError;
use lights_domain::id::LightId;
use lights_domain::light::{Light, NewLight};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Light`].
struct Wrapper(Light);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Light> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let is_powered_on: bool = row.try_get("is_powered_on")?;
        let created_at: DateTime<Utc> = row.try_get("created_at")?;

        Ok(Self(Light {
            id: LightId::from_i64(id),
            name,
            is_powered_on,
            created_at,
        }))
    }
}

const INSERT: &str = "INSERT INTO lights (name, is_powered_on, created_at) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM lights WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM lights";
const UPDATE: &str = "UPDATE lights SET name = ?, is_powered_on = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM lights WHERE id = ?";
const DELETE_ALL: &str = "DELETE FROM lights";

/// `SQLite`-backed light repository.
pub struct SqliteLightRepository {
    pool: SqlitePool,
}

impl SqliteLightRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LightRepository for SqliteLightRepository {
    fn insert(&self, light: NewLight) -> impl Future<Output = Result<Light, LightsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&light.name)
                .bind(light.is_powered_on)
                .bind(light.created_at)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Light {
                id: LightId::from_i64(result.last_insert_rowid()),
                name: light.name,
                is_powered_on: light.is_powered_on,
                created_at: light.created_at,
            })
        }
    }

    fn get_by_id(
        &self,
        id: LightId,
    ) -> impl Future<Output = Result<Option<Light>, LightsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Light>, LightsError>> + Send {
        let pool = self.pool.clone();
        async move {
            // No ORDER BY: rowid order is the insertion order for this table.
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn replace_by_id(
        &self,
        id: LightId,
        name: String,
        is_powered_on: bool,
    ) -> impl Future<Output = Result<bool, LightsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&name)
                .bind(is_powered_on)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete_by_id(&self, id: LightId) -> impl Future<Output = Result<bool, LightsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete_all(&self) -> impl Future<Output = Result<u64, LightsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_ALL)
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use lights_domain::time;

    async fn setup() -> SqliteLightRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteLightRepository::new(db.pool().clone())
    }

    fn draft(name: &str) -> NewLight {
        NewLight {
            name: name.to_string(),
            is_powered_on: false,
            created_at: time::now(),
        }
    }

    #[tokio::test]
    async fn should_assign_sequential_ids_on_insert() {
        let repo = setup().await;

        let first = repo.insert(draft("Living Room")).await.unwrap();
        let second = repo.insert(draft("Kitchen")).await.unwrap();

        assert_eq!(first.id, LightId::from_i64(1));
        assert_eq!(second.id, LightId::from_i64(2));
    }

    #[tokio::test]
    async fn should_insert_and_retrieve_light() {
        let repo = setup().await;
        let stored = repo.insert(draft("Living Room")).await.unwrap();

        let fetched = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(fetched.id, stored.id);
        assert_eq!(fetched.name, "Living Room");
        assert!(!fetched.is_powered_on);
        assert_eq!(
            fetched.created_at.timestamp(),
            stored.created_at.timestamp()
        );
    }

    #[tokio::test]
    async fn should_return_none_when_light_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(LightId::from_i64(999)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_list_all_lights_in_insertion_order() {
        let repo = setup().await;
        repo.insert(draft("Living Room")).await.unwrap();
        repo.insert(draft("Kitchen")).await.unwrap();

        let all = repo.get_all().await.unwrap();
        let names: Vec<&str> = all.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Living Room", "Kitchen"]);
    }

    #[tokio::test]
    async fn should_replace_fields_and_keep_created_at() {
        let repo = setup().await;
        let stored = repo.insert(draft("Living Room")).await.unwrap();
        let before = repo.get_by_id(stored.id).await.unwrap().unwrap();

        let matched = repo
            .replace_by_id(stored.id, "Basement".to_string(), true)
            .await
            .unwrap();
        assert!(matched);

        let after = repo.get_by_id(stored.id).await.unwrap().unwrap();
        assert_eq!(after.name, "Basement");
        assert!(after.is_powered_on);
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn should_signal_missing_row_on_replace() {
        let repo = setup().await;
        let matched = repo
            .replace_by_id(LightId::from_i64(999), "Basement".to_string(), false)
            .await
            .unwrap();
        assert!(!matched);
    }

    #[tokio::test]
    async fn should_delete_light_and_signal_missing_on_second_attempt() {
        let repo = setup().await;
        let stored = repo.insert(draft("Living Room")).await.unwrap();

        assert!(repo.delete_by_id(stored.id).await.unwrap());
        assert!(!repo.delete_by_id(stored.id).await.unwrap());
        assert!(repo.get_by_id(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_delete_all_rows_and_report_count() {
        let repo = setup().await;
        repo.insert(draft("Living Room")).await.unwrap();
        repo.insert(draft("Kitchen")).await.unwrap();

        let removed = repo.delete_all().await.unwrap();
        assert_eq!(removed, 2);
        assert!(repo.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_fail_with_storage_error_on_duplicate_name() {
        let repo = setup().await;
        repo.insert(draft("Living Room")).await.unwrap();

        let result = repo.insert(draft("Living Room")).await;
        assert!(matches!(result, Err(LightsError::Storage(_))));
    }

    #[tokio::test]
    async fn should_enforce_name_length_check_at_the_database() {
        // The CHECK constraint backs up the domain validator; the service
        // never sends such a row, so hitting it is a storage failure.
        let repo = setup().await;
        let result = repo.insert(draft("ab")).await;
        assert!(matches!(result, Err(LightsError::Storage(_))));
    }
}
