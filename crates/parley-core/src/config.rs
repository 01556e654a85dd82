//! Run configuration loaded from environment variables.
//!
//! There are no configuration files. The roster is fixed by the caller; the
//! environment only decides how long and how fast the loop runs:
//!
//! - `PARLEY_MAX_STEPS` -- steps to run (default 10; zero or negative runs forever)
//! - `PARLEY_STEP_INTERVAL_MS` -- pause between steps (default 0)
//! - `PARLEY_MAX_REAL_TIME_SECONDS` -- wall-clock limit (default 0 = unlimited)

use serde::{Deserialize, Serialize};

use crate::game::StepLimit;

/// Steps run when nothing else is configured.
pub const DEFAULT_MAX_STEPS: i64 = 10;

/// Errors that can occur when loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {message}")]
    Invalid {
        /// The offending variable.
        var: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Bounds and pacing for a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Raw step count; zero or negative means unbounded.
    pub max_steps: i64,
    /// Milliseconds to wait between steps.
    pub step_interval_ms: u64,
    /// Wall-clock limit in seconds (0 = unlimited).
    pub max_real_time_seconds: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            step_interval_ms: 0,
            max_real_time_seconds: 0,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to their defaults; set but malformed ones
    /// are rejected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            max_steps: parse_var(&lookup, "PARLEY_MAX_STEPS", defaults.max_steps)?,
            step_interval_ms: parse_var(
                &lookup,
                "PARLEY_STEP_INTERVAL_MS",
                defaults.step_interval_ms,
            )?,
            max_real_time_seconds: parse_var(
                &lookup,
                "PARLEY_MAX_REAL_TIME_SECONDS",
                defaults.max_real_time_seconds,
            )?,
        })
    }

    /// Replace the step count, e.g. from a command-line argument.
    #[must_use]
    pub const fn with_max_steps(mut self, max_steps: i64) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// The step bound this configuration describes.
    pub fn step_limit(&self) -> StepLimit {
        StepLimit::from_count(self.max_steps)
    }
}

/// Parse one variable, falling back to `default` when unset.
fn parse_var<F, T>(lookup: &F, var: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            var,
            message: format!("{e} (got {raw:?})"),
        }),
    }
}
