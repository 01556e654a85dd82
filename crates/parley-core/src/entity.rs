//! Entities: named, allegiance-tagged owners of an ordered component list.
//!
//! An entity aggregates its components' outgoing messages during collection
//! and fans delivered messages out to them in attachment order. Its
//! composition is fixed after setup.
//!
//! The entity's only mutable state of its own is its [`Wakefulness`], which
//! components change by returning a [`Reaction`] from `receive`. While
//! asleep, [`Entity::tick`] still drains every component but forwards
//! wake-ups only.

use std::sync::Arc;

use parley_types::{Actor, Allegiance, ComponentKind, EntityId, Message, MessageKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::component::{Component, ComponentStatus, Reaction};
use crate::error::CoreError;

/// Whether an entity currently forwards all of its outgoing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Wakefulness {
    /// Every drained message is forwarded.
    #[default]
    Awake,
    /// Only wake-up messages are forwarded; everything else is dropped.
    Asleep,
}

/// A simulation actor built from components.
#[derive(Debug)]
pub struct Entity {
    actor: Actor,
    components: Vec<Box<dyn Component>>,
    wakefulness: Wakefulness,
}

impl Entity {
    /// Create an entity with no components.
    pub fn new(id: EntityId, name: impl Into<Arc<str>>, allegiance: Allegiance) -> Self {
        Self {
            actor: Actor::new(id, name, allegiance),
            components: Vec::new(),
            wakefulness: Wakefulness::Awake,
        }
    }

    /// Create an entity and attach the given components in order.
    pub fn with_components(
        id: EntityId,
        name: impl Into<Arc<str>>,
        allegiance: Allegiance,
        components: Vec<Box<dyn Component>>,
    ) -> Result<Self, CoreError> {
        let mut entity = Self::new(id, name, allegiance);
        for component in components {
            entity.add_component(component)?;
        }
        Ok(entity)
    }

    /// Attach a component, binding it to this entity.
    ///
    /// Fails if the component already belongs to an entity.
    pub fn add_component(&mut self, mut component: Box<dyn Component>) -> Result<(), CoreError> {
        component.attach(self.actor.clone())?;
        self.components.push(component);
        Ok(())
    }

    /// Roster identifier.
    pub const fn id(&self) -> EntityId {
        self.actor.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.actor.name
    }

    /// The side this entity fights for.
    pub const fn allegiance(&self) -> Allegiance {
        self.actor.allegiance
    }

    /// Identity snapshot used as the originator of outgoing messages.
    pub const fn actor(&self) -> &Actor {
        &self.actor
    }

    /// Current sleep state.
    pub const fn wakefulness(&self) -> Wakefulness {
        self.wakefulness
    }

    /// Whether the entity is asleep.
    pub const fn is_asleep(&self) -> bool {
        matches!(self.wakefulness, Wakefulness::Asleep)
    }

    /// The attached components, in attachment order.
    pub fn components(&self) -> &[Box<dyn Component>] {
        &self.components
    }

    /// Kinds of the attached components, in attachment order.
    pub fn component_kinds(&self) -> Vec<ComponentKind> {
        self.components.iter().map(|c| c.kind()).collect()
    }

    /// Life total of the first attached Defender, if there is one.
    pub fn life(&self) -> Option<i64> {
        self.components.iter().find_map(|c| match c.status() {
            ComponentStatus::Vitals { life, .. } => Some(life),
            ComponentStatus::Stateless | ComponentStatus::Drowsy { .. } => None,
        })
    }

    /// Drain every component and return their messages in attachment order.
    ///
    /// While asleep, everything but wake-ups is dropped.
    pub fn tick(&mut self) -> Vec<Message> {
        let asleep = self.is_asleep();
        if asleep {
            info!(entity = %self.actor.name, "Entity is sleeping");
        }

        let mut outgoing = Vec::new();
        for component in &mut self.components {
            let drained = component.tick();
            if asleep {
                outgoing.extend(
                    drained
                        .into_iter()
                        .filter(|m| m.kind() == MessageKind::WakeUp),
                );
            } else {
                outgoing.extend(drained);
            }
        }
        outgoing
    }

    /// Forward a delivered message to every component, if it is addressed
    /// to this entity or broadcast.
    pub fn receive(&mut self, message: &Message) {
        if !message.is_for(self.actor.id) {
            return;
        }

        for component in &mut self.components {
            match component.receive(message) {
                Reaction::None => {}
                Reaction::FallAsleep => self.wakefulness = Wakefulness::Asleep,
                Reaction::WakeUp => self.wakefulness = Wakefulness::Awake,
            }
        }
        debug!(
            entity = %self.actor.name,
            kind = ?message.kind(),
            wakefulness = ?self.wakefulness,
            "Message delivered"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::{self, Attacker, Defender, Sleepy};

    fn link() -> Entity {
        let mut entity = Entity::new(EntityId::new(0), "link", Allegiance::Good);
        assert!(entity.add_component(Box::new(Attacker::new())).is_ok());
        assert!(entity.add_component(Box::new(Defender::new())).is_ok());
        entity
    }

    fn ganon_actor() -> Actor {
        Actor::new(EntityId::new(1), "ganon", Allegiance::Evil)
    }

    #[test]
    fn add_component_sets_owner() {
        let entity = link();
        for component in entity.components() {
            assert_eq!(component.owner().map(|o| o.id), Some(EntityId::new(0)));
        }
        assert_eq!(
            entity.component_kinds(),
            vec![ComponentKind::Attacker, ComponentKind::Defender]
        );
    }

    #[test]
    fn reattaching_component_fails() {
        let mut first = Attacker::new();
        assert!(first.attach(ganon_actor()).is_ok());

        let mut entity = link();
        let result = entity.add_component(Box::new(first));
        assert_eq!(
            result,
            Err(CoreError::ComponentAlreadyAttached {
                kind: ComponentKind::Attacker,
                owner: EntityId::new(1),
            })
        );
        assert_eq!(entity.components().len(), 2);
    }

    #[test]
    fn targeted_message_for_other_entity_is_ignored() {
        let mut entity = link();
        entity.receive(&Message::attack(ganon_actor(), Some(EntityId::new(3))));
        assert_eq!(entity.life(), Some(100));
    }

    #[test]
    fn broadcast_and_targeted_messages_are_forwarded() {
        let mut entity = link();
        entity.receive(&Message::attack(ganon_actor(), None));
        entity.receive(&Message::attack(ganon_actor(), Some(EntityId::new(0))));
        assert_eq!(entity.life(), Some(90));
    }

    #[test]
    fn tick_preserves_attachment_order() {
        let mut entity = Entity::new(EntityId::new(0), "link", Allegiance::Good);
        for kind in [ComponentKind::Healer, ComponentKind::Attacker, ComponentKind::Able] {
            assert!(entity.add_component(behaviors::instantiate(kind)).is_ok());
        }
        let ganon = ganon_actor();
        let friend = Actor::new(EntityId::new(2), "cloud", Allegiance::Good);
        entity.receive(&Message::presence(ganon, None));
        entity.receive(&Message::presence(friend, None));

        let kinds: Vec<MessageKind> = entity.tick().iter().map(Message::kind).collect();
        assert_eq!(
            kinds,
            vec![
                MessageKind::Heal,
                MessageKind::Attack,
                MessageKind::Presence,
                MessageKind::Presence,
            ]
        );
    }

    #[test]
    fn entity_without_components_is_inert() {
        let mut entity = Entity::new(EntityId::new(0), "ghost", Allegiance::Evil);
        entity.receive(&Message::presence(ganon_actor(), None));
        assert!(entity.tick().is_empty());
        assert_eq!(entity.life(), None);
    }

    #[test]
    fn sleeping_entity_forwards_only_wake_ups() {
        let mut ganon = Entity::new(EntityId::new(1), "ganon", Allegiance::Evil);
        assert!(ganon.add_component(Box::new(Attacker::new())).is_ok());
        assert!(ganon.add_component(Box::new(Sleepy::new())).is_ok());

        ganon.receive(&Message::sleep(Some(EntityId::new(1))));
        assert!(ganon.is_asleep());

        let hero = Actor::new(EntityId::new(0), "link", Allegiance::Good);
        for _ in 0..3 {
            ganon.receive(&Message::presence(hero.clone(), None));
        }

        let out = ganon.tick();
        assert_eq!(out, vec![Message::wake_up(Some(EntityId::new(1)))]);
    }

    #[test]
    fn wake_up_restores_normal_output() {
        let mut ganon = Entity::new(EntityId::new(1), "ganon", Allegiance::Evil);
        assert!(ganon.add_component(Box::new(Attacker::new())).is_ok());
        assert!(ganon.add_component(Box::new(Sleepy::new())).is_ok());
        ganon.receive(&Message::sleep(Some(EntityId::new(1))));

        ganon.receive(&Message::wake_up(Some(EntityId::new(1))));
        assert_eq!(ganon.wakefulness(), Wakefulness::Awake);

        let hero = Actor::new(EntityId::new(0), "link", Allegiance::Good);
        ganon.receive(&Message::presence(hero, None));
        let kinds: Vec<MessageKind> = ganon.tick().iter().map(Message::kind).collect();
        assert_eq!(kinds, vec![MessageKind::Attack]);
    }
}
