//! Core entity structs for the catalog.
//!
//! Both entity types have the same shape: an integer identifier assigned by
//! the store and a name that is unique within the table. No relationship
//! between the two is materialized anywhere — pairing, when it exists, will
//! be computed, not stored.

use serde::{Deserialize, Serialize};

use crate::ids::{BeerId, DonutId};

/// A beer in the catalog.
///
/// Serializes to `{"id": int, "name": string}`, which is exactly the shape
/// the HTTP layer returns for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Beer {
    /// Store-assigned identifier, immutable once created.
    pub id: BeerId,
    /// Display name, unique among beers.
    pub name: String,
}

/// A donut in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Donut {
    /// Store-assigned identifier, immutable once created.
    pub id: DonutId,
    /// Display name, unique among donuts.
    pub name: String,
}
