//! Attacker and Defender.
//!
//! An Attacker answers every hostile presence announcement with a targeted
//! attack. A Defender keeps a life total that attacks lower and heals raise.
//! Life is not clamped: repeated attacks drive it below zero and that is a
//! valid simulation state, not an error.

use parley_types::{ComponentKind, Message, Payload};
use tracing::{debug, info};

use super::owner_name;
use crate::component::{Component, ComponentStatus, Outbox, Reaction};

/// Life every Defender starts with.
pub const STARTING_LIFE: i64 = 100;

/// Life lost per delivered attack.
pub const ATTACK_DAMAGE: i64 = 5;

/// Strikes every entity of a different allegiance that announces itself.
#[derive(Debug, Clone, Default)]
pub struct Attacker {
    outbox: Outbox,
}

impl Attacker {
    /// Create an unattached attacker.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
        }
    }
}

impl Component for Attacker {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Attacker
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
                if owner.allegiance.is_hostile_to(who.allegiance) {
                    debug!(attacker = %owner.name, target = %who.name, "Attack queued");
                    self.outbox.push(Message::attack(owner, Some(who.id)));
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

/// Tracks life, losing [`ATTACK_DAMAGE`] per attack and regaining
/// [`HEAL_AMOUNT`](super::HEAL_AMOUNT) per heal.
#[derive(Debug, Clone)]
pub struct Defender {
    outbox: Outbox,
    life: i64,
    alive: bool,
}

impl Default for Defender {
    fn default() -> Self {
        Self::new()
    }
}

impl Defender {
    /// Create an unattached defender at full life.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
            life: STARTING_LIFE,
            alive: true,
        }
    }

    /// Current life total.
    pub const fn life(&self) -> i64 {
        self.life
    }

    /// Whether the defender has not yet taken a hit.
    pub const fn is_alive(&self) -> bool {
        self.alive
    }
}

impl Component for Defender {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Defender
    }

    fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn receive(&mut self, message: &Message) -> Reaction {
        match message.payload() {
            Payload::Attack { who } => {
                self.alive = false;
                self.life = self.life.saturating_sub(ATTACK_DAMAGE);
                info!(
                    entity = owner_name(self),
                    attacker = %who.name,
                    life = self.life,
                    "Entity was attacked"
                );
            }
            Payload::Heal { who } => {
                self.life = self.life.saturating_add(super::HEAL_AMOUNT);
                info!(
                    entity = owner_name(self),
                    healer = %who.name,
                    life = self.life,
                    "Entity was healed"
                );
            }
            Payload::Presence { .. }
            | Payload::Sleep
            | Payload::WakeUp
            | Payload::Move
            | Payload::Collision => {}
        }
        Reaction::None
    }

    fn status(&self) -> ComponentStatus {
        ComponentStatus::Vitals {
            life: self.life,
            alive: self.alive,
        }
    }
}
