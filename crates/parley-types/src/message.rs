//! Messages exchanged between entities through the coordinator.
//!
//! A [`Message`] is immutable once built: its recipient and payload are
//! fixed by the constructor and only ever read during delivery. A message
//! without a recipient is a broadcast and reaches every entity in the roster.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::enums::{Allegiance, MessageKind};
use crate::ids::EntityId;

/// Snapshot of an entity's identity, carried by messages that name an
/// originator.
///
/// Names and allegiances never change after an entity is created, so the
/// snapshot always agrees with the live entity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Actor {
    /// Roster identifier.
    pub id: EntityId,
    /// Display name (not necessarily unique).
    pub name: Arc<str>,
    /// The side the entity fights for.
    pub allegiance: Allegiance,
}

impl Actor {
    /// Create an actor snapshot.
    pub fn new(id: EntityId, name: impl Into<Arc<str>>, allegiance: Allegiance) -> Self {
        Self {
            id,
            name: name.into(),
            allegiance,
        }
    }
}

/// Kind-specific message contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Payload {
    /// "I exist" announcement.
    Presence {
        /// The announcing entity.
        who: Actor,
    },
    /// A hostile strike.
    Attack {
        /// The attacking entity.
        who: Actor,
    },
    /// A restorative action.
    Heal {
        /// The healing entity.
        who: Actor,
    },
    /// Induce sleep in the recipient.
    Sleep,
    /// End sleep in the recipient.
    WakeUp,
    /// Movement notice.
    Move,
    /// Contact notice.
    Collision,
}

impl Payload {
    /// The fieldless kind of this payload.
    pub const fn kind(&self) -> MessageKind {
        match self {
            Self::Presence { .. } => MessageKind::Presence,
            Self::Attack { .. } => MessageKind::Attack,
            Self::Heal { .. } => MessageKind::Heal,
            Self::Sleep => MessageKind::Sleep,
            Self::WakeUp => MessageKind::WakeUp,
            Self::Move => MessageKind::Move,
            Self::Collision => MessageKind::Collision,
        }
    }

    /// The entity this payload names as its originator, if any.
    pub const fn originator(&self) -> Option<&Actor> {
        match self {
            Self::Presence { who } | Self::Attack { who } | Self::Heal { who } => Some(who),
            Self::Sleep | Self::WakeUp | Self::Move | Self::Collision => None,
        }
    }
}

/// An event addressed to one entity, or broadcast to all of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    recipient: Option<EntityId>,
    payload: Payload,
}

impl Message {
    /// Build a message from its parts.
    pub const fn new(recipient: Option<EntityId>, payload: Payload) -> Self {
        Self { recipient, payload }
    }

    /// A presence announcement from `who`.
    pub const fn presence(who: Actor, recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::Presence { who })
    }

    /// An attack by `who`.
    pub const fn attack(who: Actor, recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::Attack { who })
    }

    /// A heal from `who`.
    pub const fn heal(who: Actor, recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::Heal { who })
    }

    /// A sleep command.
    pub const fn sleep(recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::Sleep)
    }

    /// A wake-up command.
    pub const fn wake_up(recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::WakeUp)
    }

    /// A movement notice.
    pub const fn movement(recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::Move)
    }

    /// A collision notice.
    pub const fn collision(recipient: Option<EntityId>) -> Self {
        Self::new(recipient, Payload::Collision)
    }

    /// The designated recipient, or `None` for a broadcast.
    pub const fn recipient(&self) -> Option<EntityId> {
        self.recipient
    }

    /// The message contents.
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// The message kind.
    pub const fn kind(&self) -> MessageKind {
        self.payload.kind()
    }

    /// Whether this message goes to every entity.
    pub const fn is_broadcast(&self) -> bool {
        self.recipient.is_none()
    }

    /// Whether an entity with identifier `id` should receive this message.
    pub fn is_for(&self, id: EntityId) -> bool {
        self.recipient.is_none_or(|recipient| recipient == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link() -> Actor {
        Actor::new(EntityId::new(0), "link", Allegiance::Good)
    }

    #[test]
    fn broadcast_reaches_everyone() {
        let msg = Message::presence(link(), None);
        assert!(msg.is_broadcast());
        assert!(msg.is_for(EntityId::new(0)));
        assert!(msg.is_for(EntityId::new(41)));
    }

    #[test]
    fn targeted_reaches_only_recipient() {
        let msg = Message::attack(link(), Some(EntityId::new(1)));
        assert!(!msg.is_broadcast());
        assert!(msg.is_for(EntityId::new(1)));
        assert!(!msg.is_for(EntityId::new(0)));
        assert!(!msg.is_for(EntityId::new(2)));
    }

    #[test]
    fn kind_follows_payload() {
        assert_eq!(Message::heal(link(), None).kind(), MessageKind::Heal);
        assert_eq!(Message::sleep(None).kind(), MessageKind::Sleep);
        assert_eq!(Message::wake_up(None).kind(), MessageKind::WakeUp);
        assert_eq!(Message::movement(None).kind(), MessageKind::Move);
        assert_eq!(Message::collision(None).kind(), MessageKind::Collision);
    }

    #[test]
    fn originator_is_named_only_by_actor_payloads() {
        assert_eq!(Message::presence(link(), None).payload().originator(), Some(&link()));
        assert_eq!(Message::heal(link(), None).payload().originator(), Some(&link()));
        assert_eq!(Message::sleep(None).payload().originator(), None);
        assert_eq!(Message::collision(None).payload().originator(), None);
    }

    #[test]
    fn payload_serializes_with_kind_tag() {
        let msg = Message::attack(link(), Some(EntityId::new(1)));
        let value = serde_json::to_value(&msg).ok();
        let kind = value
            .as_ref()
            .and_then(|v| v.get("payload"))
            .and_then(|p| p.get("kind"))
            .and_then(serde_json::Value::as_str);
        assert_eq!(kind, Some("Attack"));
    }
}
