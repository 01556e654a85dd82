//! Type-safe identifier wrappers.
//!
//! Entity identifiers are roster positions: the coordinator assigns them in
//! construction order and never reuses them, so a `u32` index is enough to
//! keep the simulation deterministic across runs.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a `u32` roster index with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create an identifier from a raw index.
            pub const fn new(index: u32) -> Self {
                Self(index)
            }

            /// Return the index as a `usize`, for slice lookups.
            pub fn index(self) -> usize {
                usize::try_from(self.0).unwrap_or(usize::MAX)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "#{}", self.0)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for an entity: its position in the coordinator's roster.
    EntityId
}
