//! # lights-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `lights-app::ports::storage`
//! - Manage the `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `lights-app` (for the port trait) and `lights-domain` (for
//! domain types). The `app` and `domain` crates must never reference this
//! adapter.

pub mod error;
pub mod light_repo;
pub mod pool;

pub use error::StorageError;
pub use light_repo::SqliteLightRepository;
pub use pool::{Config, Database};
