//! Type-safe identifier wrappers around SQLite row IDs.
//!
//! Beer and donut identifiers are both integers assigned by the store
//! (`INTEGER PRIMARY KEY AUTOINCREMENT`), so a strongly-typed wrapper is the
//! only thing preventing one from being used where the other was meant.
//! IDs are never generated app-side; they always come back from an insert.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `i64` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Return the inner `i64` value.
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a beer in the catalog.
    BeerId
}

define_id! {
    /// Unique identifier for a donut in the catalog.
    DonutId
}
