//! Shared type definitions for the Parley simulation.
//!
//! This crate is the single source of truth for the data that flows between
//! entities: identifiers, allegiances, component kinds, and messages.
//!
//! # Modules
//!
//! - [`ids`] -- Roster-index identifier wrappers
//! - [`enums`] -- Allegiance, component kinds, and message kinds
//! - [`message`] -- Immutable messages and their payloads

pub mod enums;
pub mod ids;
pub mod message;

// Re-export all public types at crate root for convenience.
pub use enums::{Allegiance, ComponentKind, MessageKind};
pub use ids::EntityId;
pub use message::{Actor, Message, Payload};
