use std::time::{Duration, Instant};

/// Counts down a fixed budget from the start of a level.
#[derive(Clone, Copy, Debug)]
pub struct LevelTimer {
    budget: Duration,
    started_at: Instant,
}

impl LevelTimer {
    pub fn new(budget: Duration, now: Instant) -> LevelTimer {
        LevelTimer {
            budget,
            started_at: now,
        }
    }

    pub fn restart(&mut self, now: Instant) {
        self.started_at = now;
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn remaining(&self, now: Instant) -> Duration {
        self.budget
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    /// Whole seconds left, rounded up so the readout only shows 0 once time is up.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let remaining = self.remaining(now);
        remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
    }
}
