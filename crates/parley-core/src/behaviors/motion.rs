//! Movable and Physical: observers of movement and contact notices.
//!
//! Neither produces messages. They exist so entities can be composed with
//! them and so movement and collision notices have somewhere to land.

use parley_types::{ComponentKind, Message, Payload};
use tracing::info;

use super::owner_name;
use crate::component::{Component, Outbox, Reaction};

/// Logs every movement notice it receives.
#[derive(Debug, Clone, Default)]
pub struct Movable {
    outbox: Outbox,
}

impl Movable {
    /// Create an unattached movable component.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
        }
    }
}

impl Component for Movable {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Movable
    }

    fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn receive(&mut self, message: &Message) -> Reaction {
        match message.payload() {
            Payload::Move => info!(entity = owner_name(self), "Entity is moving all the way"),
            Payload::Presence { .. }
            | Payload::Attack { .. }
            | Payload::Heal { .. }
            | Payload::Sleep
            | Payload::WakeUp
            | Payload::Collision => {}
        }
        Reaction::None
    }
}

/// Logs every collision notice it receives.
#[derive(Debug, Clone, Default)]
pub struct Physical {
    outbox: Outbox,
}

impl Physical {
    /// Create an unattached physical component.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
        }
    }
}

impl Component for Physical {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Physical
    }

    fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn receive(&mut self, message: &Message) -> Reaction {
        match message.payload() {
            Payload::Collision => {
                info!(entity = owner_name(self), "Entity was bumped into, be careful");
            }
            Payload::Presence { .. }
            | Payload::Attack { .. }
            | Payload::Heal { .. }
            | Payload::Sleep
            | Payload::WakeUp
            | Payload::Move => {}
        }
        Reaction::None
    }
}
