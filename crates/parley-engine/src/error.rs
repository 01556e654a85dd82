//! Error types for the engine binary.
//!
//! [`EngineError`] is the top-level error type that wraps all possible
//! failure modes during engine startup and simulation execution.

/// Top-level error for the engine binary.
///
/// Each variant wraps a specific subsystem error, providing a single
/// error type that `main` can propagate with `?`.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: parley_core::config::ConfigError,
    },

    /// Roster assembly failed.
    #[error("roster error: {source}")]
    Roster {
        /// The underlying core error.
        #[from]
        source: parley_core::error::CoreError,
    },

    /// Simulation runner failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: parley_core::runner::RunnerError,
    },

    /// The step-count argument could not be parsed.
    #[error("invalid step count {raw:?}: expected an integer")]
    StepArgument {
        /// The argument as given.
        raw: String,
    },
}
