//! Entities, components, and the step cycle for the Parley simulation.
//!
//! This crate owns the four-phase step cycle that drives the simulation:
//! Seed, Collect, Deliver, and Clear.
//!
//! # Modules
//!
//! - [`behaviors`] -- The eight concrete component behaviors and
//!   [`behaviors::instantiate`].
//! - [`component`] -- The [`Component`] contract and its [`Outbox`] base state.
//! - [`config`] -- Run bounds and pacing loaded from environment variables.
//! - [`entity`] -- [`Entity`]: an ordered list of components plus sleep state.
//! - [`error`] -- [`CoreError`], shared by every fallible core operation.
//! - [`game`] -- [`Game`], the coordinator that owns the roster and queue.
//! - [`operator`] -- Run bounds and the stop switch for the run loop.
//! - [`roster`] -- Blueprints, [`roster::build_game`], and the demo roster.
//! - [`runner`] -- The async run loop with operator controls.
//!
//! [`Component`]: component::Component
//! [`Outbox`]: component::Outbox
//! [`Entity`]: entity::Entity
//! [`CoreError`]: error::CoreError
//! [`Game`]: game::Game

pub mod behaviors;
pub mod component;
pub mod config;
pub mod entity;
pub mod error;
pub mod game;
pub mod operator;
pub mod roster;
pub mod runner;
