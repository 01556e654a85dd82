//! Healer and Able.

use parley_types::{ComponentKind, Message, Payload};
use tracing::debug;

use crate::component::{Component, Outbox, Reaction};

/// Life restored per delivered heal.
pub const HEAL_AMOUNT: i64 = 5;

/// Heals every entity of the same allegiance that announces itself,
/// its own entity included.
#[derive(Debug, Clone, Default)]
pub struct Healer {
    outbox: Outbox,
}

impl Healer {
    /// Create an unattached healer.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
        }
    }
}

impl Component for Healer {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Healer
    }

    fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn receive(&mut self, message: &Message) -> Reaction {
        match message.payload() {
            Payload::Presence { who } => {
                let Some(owner) = self.outbox.owner().cloned() else {
                    return Reaction::None;
                };
                if !owner.allegiance.is_hostile_to(who.allegiance) {
                    debug!(healer = %owner.name, target = %who.name, "Heal queued");
                    self.outbox.push(Message::heal(owner, Some(who.id)));
                }
            }
            Payload::Attack { .. }
            | Payload::Heal { .. }
            | Payload::Sleep
            | Payload::WakeUp
            | Payload::Move
            | Payload::Collision => {}
        }
        Reaction::None
    }
}

/// Answers every announcement with a presence of its own, addressed back to
/// the announcer.
///
/// This is what keeps entities aware of each other after the coordinator's
/// one-time seeding step.
#[derive(Debug, Clone, Default)]
pub struct Able {
    outbox: Outbox,
}

impl Able {
    /// Create an unattached able component.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
        }
    }
}

impl Component for Able {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Able
    }

    fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn receive(&mut self, message: &Message) -> Reaction {
        match message.payload() {
            Payload::Presence { who } => {
                if let Some(owner) = self.outbox.owner().cloned() {
                    self.outbox.push(Message::presence(owner, Some(who.id)));
                }
            }
            Payload::Attack { .. }
            | Payload::Heal { .. }
            | Payload::Sleep
            | Payload::WakeUp
            | Payload::Move
            | Payload::Collision => {}
        }
        Reaction::None
    }
}
