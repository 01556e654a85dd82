//! Run bounds and the stop switch shared between the run loop and whoever
//! drives it.
//!
//! The loop consults this state between steps, never during one. The only
//! runtime control is [`OperatorState::request_stop`]; everything else is
//! fixed from [`SimulationConfig`] when the state is created.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;
use crate::game::StepLimit;

/// Reason why the simulation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimulationEndReason {
    /// Ran the configured number of steps.
    MaxStepsReached,
    /// Reached the configured wall-clock limit.
    MaxRealTimeReached,
    /// An operator asked the loop to stop.
    OperatorStop,
}

/// Shared run bounds plus a stop flag.
#[derive(Debug)]
pub struct OperatorState {
    stop_requested: AtomicBool,
    started_at: DateTime<Utc>,
    step_limit: StepLimit,
    step_interval_ms: u64,
    /// 0 = unlimited.
    max_real_time_seconds: u64,
}

impl OperatorState {
    /// Create operator state from configuration, starting the wall clock.
    pub fn new(config: &SimulationConfig) -> Self {
        Self {
            stop_requested: AtomicBool::new(false),
            started_at: Utc::now(),
            step_limit: config.step_limit(),
            step_interval_ms: config.step_interval_ms,
            max_real_time_seconds: config.max_real_time_seconds,
        }
    }

    /// Ask the loop to stop before its next step.
    pub fn request_stop(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested.
    pub fn is_stop_requested(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    /// Whether `completed` steps exhaust the step limit.
    pub const fn step_limit_reached(&self, completed: u64) -> bool {
        self.step_limit.is_reached(completed)
    }

    /// Whether the wall-clock limit has been reached.
    pub fn time_limit_reached(&self) -> bool {
        self.max_real_time_seconds != 0 && self.elapsed_seconds() >= self.max_real_time_seconds
    }

    /// Whole seconds since the state was created.
    pub fn elapsed_seconds(&self) -> u64 {
        let elapsed = Utc::now()
            .signed_duration_since(self.started_at)
            .num_seconds();
        // Clock adjustments can make this negative.
        u64::try_from(elapsed.max(0)).unwrap_or(u64::MAX)
    }

    /// The configured step limit.
    pub const fn step_limit(&self) -> StepLimit {
        self.step_limit
    }

    /// Milliseconds the loop waits after each step.
    pub const fn step_interval_ms(&self) -> u64 {
        self.step_interval_ms
    }

    /// The configured wall-clock limit in seconds.
    pub const fn max_real_time_seconds(&self) -> u64 {
        self.max_real_time_seconds
    }
}
