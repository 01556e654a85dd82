//! Sleeper and Sleepy.
//!
//! A Sleeper sends every hostile announcer to sleep. A Sleepy component lets
//! its own entity be put to sleep and woken again:
//!
//! ```text
//!            Sleep
//!   Awake ----------> Asleep
//!     ^                 |
//!     |     WakeUp      |
//!     +-----------------+
//! ```
//!
//! While asleep, the component counts presence announcements in each
//! delivery batch. Once more than [`WAKE_THRESHOLD`] have been seen, it
//! queues a wake-up addressed to its own entity. The entity forwards only
//! wake-ups while asleep, so that message is what ends the nap.

use parley_types::{ComponentKind, Message, Payload};
use tracing::{debug, info};

use super::owner_name;
use crate::component::{Component, ComponentStatus, Outbox, Reaction};

/// Presence announcements tolerated per batch before a sleeper wakes.
pub const WAKE_THRESHOLD: u32 = 2;

/// Sends every entity of a different allegiance that announces itself
/// to sleep.
#[derive(Debug, Clone, Default)]
pub struct Sleeper {
    outbox: Outbox,
}

impl Sleeper {
    /// Create an unattached sleeper.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
        }
    }
}

impl Component for Sleeper {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Sleeper
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
                let hostile = self
                    .outbox
                    .owner()
                    .is_some_and(|owner| owner.allegiance.is_hostile_to(who.allegiance));
                if hostile {
                    debug!(sleeper = owner_name(self), target = %who.name, "Sleep queued");
                    self.outbox.push(Message::sleep(Some(who.id)));
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

/// Lets its entity fall asleep on a sleep command and wake up once enough
/// presence announcements have gone by.
#[derive(Debug, Clone, Default)]
pub struct Sleepy {
    outbox: Outbox,
    asleep: bool,
    presence_seen: u32,
    wake_requested: bool,
}

impl Sleepy {
    /// Create an unattached, awake sleepy component.
    pub const fn new() -> Self {
        Self {
            outbox: Outbox::new(),
            asleep: false,
            presence_seen: 0,
            wake_requested: false,
        }
    }

    /// Whether this component last put its entity to sleep.
    pub const fn is_asleep(&self) -> bool {
        self.asleep
    }

    fn note_presence(&mut self) {
        if !self.asleep {
            return;
        }
        self.presence_seen = self.presence_seen.saturating_add(1);
        if self.presence_seen > WAKE_THRESHOLD && !self.wake_requested {
            if let Some(owner) = self.outbox.owner() {
                let id = owner.id;
                debug!(entity = %owner.name, seen = self.presence_seen, "Wake-up queued");
                self.outbox.push(Message::wake_up(Some(id)));
                self.wake_requested = true;
            }
        }
    }
}

impl Component for Sleepy {
    fn kind(&self) -> ComponentKind {
        ComponentKind::Sleepy
    }

    fn outbox(&self) -> &Outbox {
        &self.outbox
    }

    fn outbox_mut(&mut self) -> &mut Outbox {
        &mut self.outbox
    }

    fn receive(&mut self, message: &Message) -> Reaction {
        match message.payload() {
            Payload::Sleep => {
                if !self.asleep {
                    self.asleep = true;
                    self.presence_seen = 0;
                    info!(entity = owner_name(self), "Entity fell asleep");
                }
                Reaction::FallAsleep
            }
            Payload::WakeUp => {
                if self.asleep {
                    self.asleep = false;
                    info!(entity = owner_name(self), "Entity woke up");
                }
                self.wake_requested = false;
                self.presence_seen = 0;
                Reaction::WakeUp
            }
            Payload::Presence { .. } => {
                self.note_presence();
                Reaction::None
            }
            Payload::Attack { .. } | Payload::Heal { .. } | Payload::Move | Payload::Collision => {
                Reaction::None
            }
        }
    }

    fn status(&self) -> ComponentStatus {
        ComponentStatus::Drowsy {
            asleep: self.asleep,
            presence_seen: self.presence_seen,
        }
    }

    /// Drain queued messages and start a fresh presence count for the
    /// batch about to be delivered.
    fn tick(&mut self) -> Vec<Message> {
        self.presence_seen = 0;
        self.outbox.drain()
    }
}

#[cfg(test)]
mod tests {
    use parley_types::{Allegiance, EntityId, MessageKind};

    use super::*;
    use crate::behaviors::testing::{actor, attached, captured_logs, count_lines};

    #[test]
    fn sleeper_targets_hostile_announcer() {
        let link = actor(0, "link", Allegiance::Good);
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let mut sleeper = attached(Sleeper::new(), link);

        let _ = sleeper.receive(&Message::presence(ganon, None));
        assert_eq!(sleeper.tick(), vec![Message::sleep(Some(EntityId::new(1)))]);
    }

    #[test]
    fn sleeper_spares_friends() {
        let link = actor(0, "link", Allegiance::Good);
        let ball = actor(6, "ball", Allegiance::Good);
        let mut sleeper = attached(Sleeper::new(), link);

        let _ = sleeper.receive(&Message::presence(ball, None));
        assert!(sleeper.tick().is_empty());
    }

    #[test]
    fn sleep_message_requests_sleep() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let mut sleepy = attached(Sleepy::new(), ganon.clone());

        let reaction = sleepy.receive(&Message::sleep(Some(ganon.id)));
        assert_eq!(reaction, Reaction::FallAsleep);
        assert!(sleepy.is_asleep());
    }

    #[test]
    fn third_presence_while_asleep_queues_one_wake_up() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let link = actor(0, "link", Allegiance::Good);
        let mut sleepy = attached(Sleepy::new(), ganon.clone());
        let _ = sleepy.receive(&Message::sleep(Some(ganon.id)));

        let _ = sleepy.receive(&Message::presence(link.clone(), None));
        let _ = sleepy.receive(&Message::presence(link.clone(), None));
        assert!(sleepy.outbox().is_empty());

        let _ = sleepy.receive(&Message::presence(link.clone(), None));
        let _ = sleepy.receive(&Message::presence(link, None));
        assert_eq!(sleepy.tick(), vec![Message::wake_up(Some(ganon.id))]);
    }

    #[test]
    fn presence_count_resets_each_batch() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let link = actor(0, "link", Allegiance::Good);
        let mut sleepy = attached(Sleepy::new(), ganon.clone());
        let _ = sleepy.receive(&Message::sleep(Some(ganon.id)));

        let _ = sleepy.receive(&Message::presence(link.clone(), None));
        let _ = sleepy.receive(&Message::presence(link.clone(), None));
        assert!(sleepy.tick().is_empty());

        let _ = sleepy.receive(&Message::presence(link.clone(), None));
        let _ = sleepy.receive(&Message::presence(link, None));
        assert!(sleepy.tick().is_empty());
        assert_eq!(
            sleepy.status(),
            ComponentStatus::Drowsy {
                asleep: true,
                presence_seen: 0
            }
        );
    }

    #[test]
    fn presence_while_awake_is_not_counted() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let link = actor(0, "link", Allegiance::Good);
        let mut sleepy = attached(Sleepy::new(), ganon);

        for _ in 0..5 {
            let _ = sleepy.receive(&Message::presence(link.clone(), None));
        }
        assert!(sleepy.tick().is_empty());
    }

    #[test]
    fn wake_up_message_requests_wake() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let mut sleepy = attached(Sleepy::new(), ganon.clone());
        let _ = sleepy.receive(&Message::sleep(Some(ganon.id)));

        let reaction = sleepy.receive(&Message::wake_up(Some(ganon.id)));
        assert_eq!(reaction, Reaction::WakeUp);
        assert!(!sleepy.is_asleep());
    }

    #[test]
    fn only_real_transitions_are_logged() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let mut sleepy = attached(Sleepy::new(), ganon.clone());

        let lines = captured_logs(|| {
            let _ = sleepy.receive(&Message::sleep(Some(ganon.id)));
            let _ = sleepy.receive(&Message::sleep(Some(ganon.id)));
            let _ = sleepy.receive(&Message::wake_up(Some(ganon.id)));
            let _ = sleepy.receive(&Message::wake_up(Some(ganon.id)));
        });

        assert_eq!(count_lines(&lines, "Entity fell asleep"), 1);
        assert_eq!(count_lines(&lines, "Entity woke up"), 1);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn sleepy_ignores_combat() {
        let ganon = actor(1, "ganon", Allegiance::Evil);
        let link = actor(0, "link", Allegiance::Good);
        let mut sleepy = attached(Sleepy::new(), ganon);
        assert_eq!(
            sleepy.receive(&Message::attack(link.clone(), None)),
            Reaction::None
        );
        assert_eq!(sleepy.receive(&Message::heal(link, None)), Reaction::None);
        let kinds: Vec<MessageKind> = sleepy.tick().iter().map(Message::kind).collect();
        assert!(kinds.is_empty());
    }
}
