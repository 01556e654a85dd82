//! Roster construction: turning declarative blueprints into a ready [`Game`].
//!
//! Entities receive identifiers in blueprint order, and each listed
//! component kind is instantiated fresh and attached in order.

use std::sync::Arc;

use parley_types::{Allegiance, ComponentKind, EntityId};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::behaviors;
use crate::entity::Entity;
use crate::error::CoreError;
use crate::game::Game;

/// Declarative description of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityBlueprint {
    /// Display name (not necessarily unique).
    pub name: Arc<str>,
    /// The side the entity fights for.
    pub allegiance: Allegiance,
    /// Components to attach, in order.
    pub components: Vec<ComponentKind>,
}

impl EntityBlueprint {
    /// Describe an entity.
    pub fn new(
        name: impl Into<Arc<str>>,
        allegiance: Allegiance,
        components: impl Into<Vec<ComponentKind>>,
    ) -> Self {
        Self {
            name: name.into(),
            allegiance,
            components: components.into(),
        }
    }
}

/// Build a coordinator from an ordered list of blueprints.
pub fn build_game(blueprints: &[EntityBlueprint]) -> Result<Game, CoreError> {
    let mut entities = Vec::with_capacity(blueprints.len());
    for (position, blueprint) in blueprints.iter().enumerate() {
        let Ok(index) = u32::try_from(position) else {
            return Err(CoreError::RosterTooLarge(blueprints.len()));
        };
        let components = blueprint
            .components
            .iter()
            .copied()
            .map(behaviors::instantiate)
            .collect();
        let entity = Entity::with_components(
            EntityId::new(index),
            Arc::clone(&blueprint.name),
            blueprint.allegiance,
            components,
        )?;
        entities.push(entity);
    }

    info!(entities = entities.len(), "Roster assembled");
    Game::new(entities)
}

/// The seven-entity demo roster: a hero with a full kit, a sleepy villain,
/// two minions, and three inert props.
pub fn demo_roster() -> Vec<EntityBlueprint> {
    use Allegiance::{Evil, Good};
    use ComponentKind::{Able, Attacker, Defender, Healer, Movable, Physical, Sleeper, Sleepy};

    vec![
        EntityBlueprint::new("link", Good, [Attacker, Defender, Sleeper, Healer, Able]),
        EntityBlueprint::new("ganon", Evil, [Attacker, Defender, Sleepy, Able]),
        EntityBlueprint::new("armos", Evil, [Attacker, Able]),
        EntityBlueprint::new("octorok", Evil, [Defender, Able]),
        EntityBlueprint::new("cloud", Good, [Movable, Able]),
        EntityBlueprint::new("rock", Good, [Physical, Able]),
        EntityBlueprint::new("ball", Good, [Physical, Movable, Able]),
    ]
}
