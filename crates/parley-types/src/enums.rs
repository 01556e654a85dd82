//! Enumeration types for the Parley simulation.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Allegiance
// ---------------------------------------------------------------------------

/// The side an entity fights for.
///
/// Fixed when the entity is created. Behaviors compare the allegiance of an
/// announcer with their owner's to decide between friend and foe reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Allegiance {
    /// The heroes.
    Good,
    /// The villains.
    Evil,
}

impl Allegiance {
    /// Whether an entity of allegiance `other` is an enemy of this side.
    pub fn is_hostile_to(self, other: Self) -> bool {
        self != other
    }
}

// ---------------------------------------------------------------------------
// Component Kinds
// ---------------------------------------------------------------------------

/// The behavior variant of a component.
///
/// Used to declare an entity's composition and to inspect it at runtime
/// without relying on concrete component types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// Strikes every hostile entity that announces itself.
    Attacker,
    /// Tracks life, losing it to attacks and regaining it from heals.
    Defender,
    /// Puts the owning entity to sleep on command and wakes it later.
    Sleepy,
    /// Sends every hostile announcer to sleep.
    Sleeper,
    /// Heals every friendly announcer, including its own entity.
    Healer,
    /// Answers every announcement with one of its own.
    Able,
    /// Reacts to movement notices.
    Movable,
    /// Reacts to collision notices.
    Physical,
}

impl ComponentKind {
    /// All component kinds, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Attacker,
        Self::Defender,
        Self::Sleepy,
        Self::Sleeper,
        Self::Healer,
        Self::Able,
        Self::Movable,
        Self::Physical,
    ];
}

impl core::fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Self::Attacker => "attacker",
            Self::Defender => "defender",
            Self::Sleepy => "sleepy",
            Self::Sleeper => "sleeper",
            Self::Healer => "healer",
            Self::Able => "able",
            Self::Movable => "movable",
            Self::Physical => "physical",
        };
        f.write_str(name)
    }
}

// ---------------------------------------------------------------------------
// Message Kinds
// ---------------------------------------------------------------------------

/// The event kind carried by a message, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MessageKind {
    /// "I exist" announcement.
    Presence,
    /// A hostile strike.
    Attack,
    /// A restorative action.
    Heal,
    /// Induce sleep in the recipient.
    Sleep,
    /// End sleep in the recipient.
    WakeUp,
    /// Movement notice.
    Move,
    /// Contact notice.
    Collision,
}
