//! Simulation loop runner with operator controls.
//!
//! This module provides [`run_simulation`], the top-level async function
//! that drives [`Game::step`] with support for:
//!
//! - **Bounded simulation**: stop after the configured step count or
//!   wall-clock limit
//! - **Unbounded simulation**: run until the operator stops it
//! - **Pacing**: a fixed pause after each step
//! - **Operator stop**: clean stop before the next step begins
//!
//! Control is only ever exercised between steps; a step, once started,
//! always completes.

use std::sync::Arc;

use tracing::{info, warn};

use crate::error::CoreError;
use crate::game::{Game, StepSummary};
use crate::operator::{OperatorState, SimulationEndReason};

/// Errors that can occur during the simulation run.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// A step failed.
    #[error("step error: {source}")]
    Step {
        /// The underlying engine error.
        #[from]
        source: CoreError,
    },
}

/// Result of the simulation run.
#[derive(Debug)]
pub struct SimulationResult {
    /// The reason the simulation ended.
    pub end_reason: SimulationEndReason,
    /// The last step summary, if any step completed.
    pub final_summary: Option<StepSummary>,
    /// Total number of steps executed.
    pub total_steps: u64,
}

/// Callback invoked after each step completes.
pub trait StepCallback: Send {
    /// Called after a step completes successfully.
    fn on_step(&mut self, summary: &StepSummary, game: &Game);
}

/// A no-op step callback.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpCallback;

impl StepCallback for NoOpCallback {
    fn on_step(&mut self, _summary: &StepSummary, _game: &Game) {}
}

/// Run the simulation loop until a termination condition is met.
///
/// # Errors
///
/// Returns [`RunnerError`] if a step fails.
pub async fn run_simulation(
    game: &mut Game,
    operator: &Arc<OperatorState>,
    callback: &mut dyn StepCallback,
) -> Result<SimulationResult, RunnerError> {
    let mut last_summary: Option<StepSummary> = None;
    let mut total_steps: u64 = 0;

    info!(
        entities = game.entities().len(),
        step_limit = ?operator.step_limit(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        step_interval_ms = operator.step_interval_ms(),
        "Simulation starting"
    );

    loop {
        // --- Check step limit ---
        if operator.step_limit_reached(total_steps) {
            info!(total_steps, "Step limit reached");
            return Ok(finish(SimulationEndReason::MaxStepsReached, last_summary, total_steps));
        }

        // --- Check stop request ---
        if operator.is_stop_requested() {
            info!("Operator stop requested");
            return Ok(finish(SimulationEndReason::OperatorStop, last_summary, total_steps));
        }

        // --- Check time limit ---
        if operator.time_limit_reached() {
            info!(
                max_seconds = operator.max_real_time_seconds(),
                elapsed = operator.elapsed_seconds(),
                "Real-time limit reached"
            );
            return Ok(finish(
                SimulationEndReason::MaxRealTimeReached,
                last_summary,
                total_steps,
            ));
        }

        // --- Execute step ---
        let summary = game.step()?;
        total_steps = total_steps.saturating_add(1);
        callback.on_step(&summary, game);
        last_summary = Some(summary);

        // --- Pace ---
        let interval_ms = operator.step_interval_ms();
        if interval_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(interval_ms)).await;
        } else {
            tokio::task::yield_now().await;
        }
    }
}

const fn finish(
    end_reason: SimulationEndReason,
    final_summary: Option<StepSummary>,
    total_steps: u64,
) -> SimulationResult {
    SimulationResult {
        end_reason,
        final_summary,
        total_steps,
    }
}

/// Log the simulation end sequence.
pub fn log_simulation_end(result: &SimulationResult, game: &Game) {
    info!(
        reason = ?result.end_reason,
        total_steps = result.total_steps,
        final_step = result.final_summary.as_ref().map(|s| s.step),
        "Simulation ended"
    );

    if result.final_summary.is_none() {
        warn!("Simulation ended with no steps executed");
    }

    for entity in game.entities() {
        info!(
            entity = entity.name(),
            life = entity.life(),
            asleep = entity.is_asleep(),
            "Final entity state"
        );
    }
}
