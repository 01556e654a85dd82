//! Demo binary for the Parley simulation.
//!
//! This is the main entry point that wires together the demo roster, the
//! step coordinator, and operator controls. It loads configuration from the
//! environment, builds the roster, and runs the step loop until a
//! termination condition is met.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load configuration from `PARLEY_*` variables and the first argument
//! 3. Build the demo roster (7 entities)
//! 4. Create operator state from the run bounds
//! 5. Install the Ctrl-C stop handler
//! 6. Run the simulation loop
//! 7. Log the result
//!
//! # Usage
//!
//! ```text
//! parley-engine [STEPS]
//! ```
//!
//! `STEPS` overrides `PARLEY_MAX_STEPS`; zero or a negative count runs until
//! interrupted.

mod error;
mod log_callback;

use std::sync::Arc;

use parley_core::config::SimulationConfig;
use parley_core::operator::OperatorState;
use parley_core::roster::{build_game, demo_roster};
use parley_core::runner;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::log_callback::LogCallback;

/// Application entry point for the demo.
///
/// # Errors
///
/// Returns an error if any initialization step or the simulation itself fails.
#[tokio::main]
async fn main() -> Result<(), EngineError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("parley-engine starting");

    // 2. Load configuration.
    let config = load_config(std::env::args().nth(1))?;
    info!(
        max_steps = config.max_steps,
        step_interval_ms = config.step_interval_ms,
        max_real_time_seconds = config.max_real_time_seconds,
        "Configuration loaded"
    );

    // 3. Build the demo roster.
    let blueprints = demo_roster();
    let mut game = build_game(&blueprints)?;
    for entity in game.entities() {
        info!(
            id = %entity.id(),
            entity = entity.name(),
            allegiance = ?entity.allegiance(),
            components = ?entity.component_kinds(),
            "Entity ready"
        );
    }

    // 4. Create operator state.
    let operator = Arc::new(OperatorState::new(&config));
    info!(
        step_limit = ?operator.step_limit(),
        max_real_time_seconds = operator.max_real_time_seconds(),
        step_interval_ms = operator.step_interval_ms(),
        "Operator state initialized"
    );

    // 5. Stop cleanly between steps on Ctrl-C.
    {
        let operator = Arc::clone(&operator);
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Interrupt received, stopping after the current step");
                    operator.request_stop();
                }
                Err(e) => {
                    warn!(error = %e, "failed to listen for Ctrl-C, interrupt disabled");
                }
            }
        });
    }

    // 6. Run the simulation.
    let mut callback = LogCallback::new();
    let result = runner::run_simulation(&mut game, &operator, &mut callback).await?;

    // 7. Log results.
    runner::log_simulation_end(&result, &game);

    info!(
        end_reason = ?result.end_reason,
        total_steps = result.total_steps,
        steps_logged = callback.steps_logged(),
        "parley-engine shutdown complete"
    );

    Ok(())
}

/// Load run configuration from the environment, letting an optional
/// step-count argument override `PARLEY_MAX_STEPS`.
fn load_config(steps_arg: Option<String>) -> Result<SimulationConfig, EngineError> {
    let config = SimulationConfig::from_env()?;
    match steps_arg {
        None => Ok(config),
        Some(raw) => {
            let Ok(steps) = raw.trim().parse::<i64>() else {
                return Err(EngineError::StepArgument { raw });
            };
            Ok(config.with_max_steps(steps))
        }
    }
}
