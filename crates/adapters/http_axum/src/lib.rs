//! # lights-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON REST API (`/api/lights`, `/api/lights/{id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map domain results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `lights-app` (for the port trait, service, and presenter)
//! and `lights-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
