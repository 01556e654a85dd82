//! Step callback that reports progress through tracing.
//!
//! After each step, this callback logs the step totals at `info` and every
//! entity's vitals at `debug`.

use parley_core::game::{Game, StepSummary};
use parley_core::runner::StepCallback;
use tracing::{debug, info};

/// Callback that logs a line per step and a line per entity.
#[derive(Debug, Default)]
pub struct LogCallback {
    steps_logged: u64,
}

impl LogCallback {
    /// Create a new logging callback.
    pub const fn new() -> Self {
        Self { steps_logged: 0 }
    }

    /// Number of steps this callback has observed.
    pub const fn steps_logged(&self) -> u64 {
        self.steps_logged
    }
}

impl StepCallback for LogCallback {
    fn on_step(&mut self, summary: &StepSummary, game: &Game) {
        self.steps_logged = self.steps_logged.saturating_add(1);

        info!(
            step = summary.step,
            collected = summary.collected,
            deliveries = summary.deliveries,
            asleep = summary.asleep.len(),
            "Step finished"
        );

        for (kind, count) in &summary.by_kind {
            debug!(step = summary.step, kind = ?kind, count, "Messages by kind");
        }

        for entity in game.entities() {
            debug!(
                step = summary.step,
                entity = entity.name(),
                allegiance = ?entity.allegiance(),
                life = entity.life(),
                wakefulness = ?entity.wakefulness(),
                "Entity state"
            );
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use parley_core::roster::{build_game, demo_roster};

    use super::*;

    #[test]
    fn counts_observed_steps() {
        let mut game = build_game(&demo_roster()).unwrap();
        let mut callback = LogCallback::new();

        for _ in 0..3 {
            let summary = game.step().unwrap();
            callback.on_step(&summary, &game);
        }

        assert_eq!(callback.steps_logged(), 3);
    }
}
