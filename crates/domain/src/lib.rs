//! # lights-domain
//!
//! Pure domain model for the lights service.
//!
//! ## Responsibilities
//! - Foundational types: the typed identifier, error conventions, timestamps
//! - Define the **Light** entity (a named on/off device) and its invariants
//! - Field validators applied before anything reaches storage
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod light;
pub mod time;
pub mod validate;
