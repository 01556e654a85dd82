//! The component contract shared by every behavior.
//!
//! A component is attached to exactly one entity and talks to the rest of
//! the simulation only through its [`Outbox`]: reactions enqueue messages,
//! and the coordinator drains them at the start of the next step. A
//! component never calls into another component directly.
//!
//! Components cannot rewrite their entity's behavior. The one component that
//! changes how its entity ticks (Sleepy) does so by returning a [`Reaction`]
//! that the entity applies to its own wakefulness flag.

use core::fmt;

use parley_types::{Actor, ComponentKind, Message};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Base state every component carries: its owner and its pending messages.
#[derive(Debug, Clone, Default)]
pub struct Outbox {
    owner: Option<Actor>,
    queue: Vec<Message>,
}

impl Outbox {
    /// Create an unattached, empty outbox.
    pub const fn new() -> Self {
        Self {
            owner: None,
            queue: Vec::new(),
        }
    }

    /// The owning entity, once attached.
    pub const fn owner(&self) -> Option<&Actor> {
        self.owner.as_ref()
    }

    /// Record the owning entity. Fails if an owner is already set.
    pub fn attach(&mut self, kind: ComponentKind, owner: Actor) -> Result<(), CoreError> {
        if let Some(existing) = &self.owner {
            return Err(CoreError::ComponentAlreadyAttached {
                kind,
                owner: existing.id,
            });
        }
        self.owner = Some(owner);
        Ok(())
    }

    /// Queue a message for the next collection phase.
    pub fn push(&mut self, message: Message) {
        self.queue.push(message);
    }

    /// Whether nothing is waiting to be drained.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Take every queued message, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.queue)
    }
}

/// What a component asks its entity to do after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reaction {
    /// Nothing beyond what was queued.
    #[default]
    None,
    /// Put the entity to sleep.
    FallAsleep,
    /// Wake the entity up.
    WakeUp,
}

/// Inspectable per-component state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComponentStatus {
    /// The component keeps no state beyond its outbox.
    Stateless,
    /// Life tracking of a Defender.
    Vitals {
        /// Current life total. Unbounded in both directions.
        life: i64,
        /// Whether the defender still counts as alive.
        alive: bool,
    },
    /// Sleep tracking of a Sleepy component.
    Drowsy {
        /// Whether the component last put its entity to sleep.
        asleep: bool,
        /// Presence messages seen while asleep in the current batch.
        presence_seen: u32,
    },
}

/// A behavioral unit attached to one entity.
///
/// Implementors provide [`kind`](Component::kind), access to their
/// [`Outbox`], and a [`receive`](Component::receive) rule. Draining and
/// attachment come for free.
pub trait Component: fmt::Debug + Send {
    /// The behavior variant this component implements.
    fn kind(&self) -> ComponentKind;

    /// Shared base state.
    fn outbox(&self) -> &Outbox;

    /// Mutable shared base state.
    fn outbox_mut(&mut self) -> &mut Outbox;

    /// React to a delivered message by queueing zero or more messages.
    ///
    /// Effects reach other entities only through the next step's
    /// collection and delivery.
    fn receive(&mut self, message: &Message) -> Reaction;

    /// Snapshot of component-specific state.
    fn status(&self) -> ComponentStatus {
        ComponentStatus::Stateless
    }

    /// The entity this component belongs to, once attached.
    fn owner(&self) -> Option<&Actor> {
        self.outbox().owner()
    }

    /// Bind this component to its entity. Called once, during setup.
    fn attach(&mut self, owner: Actor) -> Result<(), CoreError> {
        let kind = self.kind();
        self.outbox_mut().attach(kind, owner)
    }

    /// Drain every message queued since the last call.
    fn tick(&mut self) -> Vec<Message> {
        self.outbox_mut().drain()
    }
}
