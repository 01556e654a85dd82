//! The coordinator: owns the roster and drives the step cycle.
//!
//! Each step runs these phases, strictly in order:
//!
//! 1. **Seed** -- on the very first step only, queue one broadcast presence
//!    per entity so everyone learns who else exists.
//!
//! 2. **Collect** -- tick every entity in roster order and append its
//!    messages to the queue.
//!
//! 3. **Deliver** -- hand each queued message, in collection order, to its
//!    recipient, or to every entity in roster order if it is a broadcast.
//!
//! 4. **Clear** -- the queue is empty again at the step boundary.
//!
//! Messages queued by components during delivery are only seen in the next
//! step's collection. The cycle is deterministic for a given roster.

use std::collections::BTreeMap;

use parley_types::{EntityId, Message, MessageKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::entity::Entity;
use crate::error::CoreError;

const SEPARATOR: &str = "-----------------------------------------";

/// How many steps [`Game::run`] should execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepLimit {
    /// Run exactly this many steps.
    Bounded(u64),
    /// Run until the caller stops driving the loop.
    Unbounded,
}

impl StepLimit {
    /// Interpret a raw step count: zero or negative means run forever.
    pub fn from_count(count: i64) -> Self {
        u64::try_from(count)
            .ok()
            .filter(|&n| n > 0)
            .map_or(Self::Unbounded, Self::Bounded)
    }

    /// Whether `completed` steps exhaust this limit.
    pub const fn is_reached(self, completed: u64) -> bool {
        match self {
            Self::Bounded(max) => completed >= max,
            Self::Unbounded => false,
        }
    }
}

/// Summary of a single step's execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSummary {
    /// Zero-based index of the step that ran.
    pub step: u64,
    /// Messages in the queue after collection (seeded ones included).
    pub collected: usize,
    /// Entity-level deliveries performed (a broadcast counts once per entity).
    pub deliveries: usize,
    /// Collected messages grouped by kind.
    pub by_kind: BTreeMap<MessageKind, usize>,
    /// Entities asleep at the end of the step.
    pub asleep: Vec<EntityId>,
}

/// Owns the roster and the step-scoped message queue.
#[derive(Debug)]
pub struct Game {
    entities: Vec<Entity>,
    queue: Vec<Message>,
    first_step: bool,
    steps_run: u64,
}

impl Game {
    /// Create a coordinator over a fixed roster.
    ///
    /// Every entity's identifier must equal its position in `entities`.
    pub fn new(entities: Vec<Entity>) -> Result<Self, CoreError> {
        if u32::try_from(entities.len()).is_err() {
            return Err(CoreError::RosterTooLarge(entities.len()));
        }
        for (position, entity) in entities.iter().enumerate() {
            if entity.id().index() != position {
                return Err(CoreError::RosterMismatch {
                    position,
                    id: entity.id(),
                });
            }
        }
        Ok(Self {
            entities,
            queue: Vec::new(),
            first_step: true,
            steps_run: 0,
        })
    }

    /// The roster, in order.
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Look up an entity by identifier.
    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(id.index())
    }

    /// Number of steps completed so far.
    pub const fn steps_run(&self) -> u64 {
        self.steps_run
    }

    /// Messages waiting for the next step's delivery phase.
    pub fn pending(&self) -> &[Message] {
        &self.queue
    }

    /// Queue a message authored outside the roster (a movement notice, for
    /// instance). It is delivered during the next step, ahead of anything
    /// collected from entities.
    ///
    /// Both the recipient and any originator the payload names must be
    /// roster entities; components address their replies to originators.
    pub fn inject(&mut self, message: Message) -> Result<(), CoreError> {
        self.check_routing(&message)?;
        if let Some(who) = message.payload().originator() {
            if self.entity(who.id).map(Entity::actor) != Some(who) {
                return Err(CoreError::UnknownActor(who.id));
            }
        }
        self.queue.push(message);
        Ok(())
    }

    /// Execute one complete step.
    pub fn step(&mut self) -> Result<StepSummary, CoreError> {
        let step = self.steps_run;
        info!("{SEPARATOR}");
        info!(step, "Step {step}");
        info!("{SEPARATOR}");

        // --- Phase 1: Seed ---
        if self.first_step {
            for entity in &self.entities {
                self.queue.push(Message::presence(entity.actor().clone(), None));
            }
            self.first_step = false;
            debug!(step, seeded = self.entities.len(), "Presence seeded");
        }

        // --- Phase 2: Collect ---
        for entity in &mut self.entities {
            let outgoing = entity.tick();
            self.queue.extend(outgoing);
        }

        let collected = self.queue.len();
        let mut by_kind: BTreeMap<MessageKind, usize> = BTreeMap::new();
        for message in &self.queue {
            let count = by_kind.entry(message.kind()).or_insert(0);
            *count = count.saturating_add(1);
        }

        // --- Phase 3: Deliver ---
        // Nothing is delivered unless every message can be.
        for message in &self.queue {
            self.check_routing(message)?;
        }
        let queue = std::mem::take(&mut self.queue);
        let deliveries = self.deliver(&queue)?;

        // --- Phase 4: Clear ---
        // The queue was taken for delivery and is already empty.
        self.steps_run = self.steps_run.saturating_add(1);

        let asleep = self
            .entities
            .iter()
            .filter(|e| e.is_asleep())
            .map(Entity::id)
            .collect();

        debug!(step, collected, deliveries, "Step complete");

        Ok(StepSummary {
            step,
            collected,
            deliveries,
            by_kind,
            asleep,
        })
    }

    /// Run steps until `limit` is reached.
    ///
    /// With [`StepLimit::Unbounded`] this only returns on error.
    pub fn run(&mut self, limit: StepLimit) -> Result<Option<StepSummary>, CoreError> {
        let mut completed: u64 = 0;
        let mut last = None;
        while !limit.is_reached(completed) {
            last = Some(self.step()?);
            completed = completed.saturating_add(1);
        }
        Ok(last)
    }

    fn check_routing(&self, message: &Message) -> Result<(), CoreError> {
        match message.recipient() {
            Some(recipient) if self.entity(recipient).is_none() => {
                Err(CoreError::UnknownRecipient(recipient))
            }
            Some(_) | None => Ok(()),
        }
    }

    fn deliver(&mut self, queue: &[Message]) -> Result<usize, CoreError> {
        let mut deliveries: usize = 0;
        for message in queue {
            match message.recipient() {
                None => {
                    for entity in &mut self.entities {
                        entity.receive(message);
                    }
                    deliveries = deliveries.saturating_add(self.entities.len());
                }
                Some(recipient) => {
                    let entity = self
                        .entities
                        .get_mut(recipient.index())
                        .ok_or(CoreError::UnknownRecipient(recipient))?;
                    entity.receive(message);
                    deliveries = deliveries.saturating_add(1);
                }
            }
        }
        Ok(deliveries)
    }
}
