//! Rates derived from cumulative counters.

use std::time::{Duration, Instant};

/// Per-second rate of a cumulative counter between two samples.
///
/// A counter that went backwards (interface reset, wraparound) yields 0 for
/// that interval, as does a zero-length interval.
pub fn compute(current: u64, previous: u64, elapsed: Duration) -> f64 {
    if current < previous || elapsed.is_zero() {
        return 0.0;
    }
    (current - previous) as f64 / elapsed.as_secs_f64()
}

/// Previous sample of one cumulative counter, owned by the probe that reads it.
#[derive(Debug, Clone, Default)]
pub struct CounterState {
    previous: u64,
    previous_at: Option<Instant>,
}

impl CounterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `current` taken at `now` and return the rate since the last call.
    ///
    /// The first call only primes the state and returns 0, so the counter's
    /// since-boot total never shows up as a one-tick spike.
    pub fn advance(&mut self, current: u64, now: Instant) -> f64 {
        let rate = match self.previous_at {
            Some(at) => compute(current, self.previous, now.saturating_duration_since(at)),
            None => 0.0,
        };

        self.previous = current;
        self.previous_at = Some(now);

        rate
    }

    pub fn previous(&self) -> u64 {
        self.previous
    }

    pub fn is_primed(&self) -> bool {
        self.previous_at.is_some()
    }
}
