//! Shared type definitions for the hopglaze catalog service.
//!
//! This crate is the single source of truth for the entity types used across
//! the workspace: the data layer maps rows into them and the HTTP layer
//! serializes them out.
//!
//! # Modules
//!
//! - [`ids`] — Type-safe integer wrappers for entity identifiers
//! - [`entities`] — The two catalog entities, [`Beer`] and [`Donut`]

pub mod entities;
pub mod ids;

// Re-export all public types at crate root for convenience.
pub use entities::{Beer, Donut};
pub use ids::{BeerId, DonutId};
