//! # lights-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that the storage adapter must implement:
//!   - [`LightRepository`](ports::LightRepository) — CRUD for lights
//! - Provide the **use-case service**:
//!   - [`LightService`](services::light_service::LightService) — create,
//!     get, list, replace, delete one, delete all
//! - Build the **hypermedia envelopes** the transport layer serializes
//!   ([`presenter`])
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `lights-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod presenter;
pub mod services;
