//! The eight behavior variants layered on [`Component`].
//!
//! Every behavior derives its effects purely from received messages. Each
//! `receive` matches the [`Payload`](parley_types::Payload) exhaustively, so
//! a new message kind fails to compile until every behavior decides what to
//! do with it.
//!
//! # Submodules
//!
//! - [`combat`] -- Attacker and Defender.
//! - [`support`] -- Healer and Able.
//! - [`sleep`] -- Sleeper and Sleepy.
//! - [`motion`] -- Movable and Physical.

pub mod combat;
pub mod motion;
pub mod sleep;
pub mod support;

use parley_types::ComponentKind;

pub use combat::{ATTACK_DAMAGE, Attacker, Defender, STARTING_LIFE};
pub use motion::{Movable, Physical};
pub use sleep::{Sleeper, Sleepy, WAKE_THRESHOLD};
pub use support::{Able, HEAL_AMOUNT, Healer};

use crate::component::Component;

/// Build a fresh, unattached component of the given kind.
pub fn instantiate(kind: ComponentKind) -> Box<dyn Component> {
    match kind {
        ComponentKind::Attacker => Box::new(Attacker::new()),
        ComponentKind::Defender => Box::new(Defender::new()),
        ComponentKind::Sleepy => Box::new(Sleepy::new()),
        ComponentKind::Sleeper => Box::new(Sleeper::new()),
        ComponentKind::Healer => Box::new(Healer::new()),
        ComponentKind::Able => Box::new(Able::new()),
        ComponentKind::Movable => Box::new(Movable::new()),
        ComponentKind::Physical => Box::new(Physical::new()),
    }
}

/// Display name of a component's owner, for log lines.
fn owner_name(component: &dyn Component) -> &str {
    component.owner().map_or("<unattached>", |owner| &*owner.name)
}
