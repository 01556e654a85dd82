//! Error types for the `parley-core` crate.
//!
//! The simulation itself has no recoverable failure sources. Every variant
//! here describes construction-time misuse that is reported before (or
//! instead of) silently misrouting messages at run time.

use parley_types::{ComponentKind, EntityId};

/// Errors raised while assembling or driving a roster.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    /// A component that already belongs to an entity was attached again.
    #[error("{kind} component already belongs to entity {owner}")]
    ComponentAlreadyAttached {
        /// The kind of the offending component.
        kind: ComponentKind,
        /// The entity that already owns it.
        owner: EntityId,
    },

    /// A message names a recipient that is not in the roster.
    #[error("message recipient {0} is not in the roster")]
    UnknownRecipient(EntityId),

    /// A message names an originator that is not the roster entity with
    /// that identifier.
    #[error("message originator {0} does not match the roster")]
    UnknownActor(EntityId),

    /// An entity's identifier does not match its position in the roster.
    #[error("entity {id} sits at roster position {position}")]
    RosterMismatch {
        /// Position of the entity in the roster.
        position: usize,
        /// The identifier the entity was built with.
        id: EntityId,
    },

    /// The roster holds more entities than identifiers can address.
    #[error("roster of {0} entities exceeds the identifier range")]
    RosterTooLarge(usize),
}
