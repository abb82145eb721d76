//! Start/stop stopwatch.

use std::time::Instant;

use crate::clock::{signed_secs, Clock, SystemClock};

/// Stopwatch measuring the span between [`start`](Timer::start) and
/// [`stop`](Timer::stop).
///
/// [`time_passed`](Timer::time_passed) only reports a meaningful value once
/// `stop` has been called after the most recent `start`. Otherwise it returns
/// whatever the stale end timestamp yields, which may be negative.
#[derive(Debug, Clone)]
pub struct Timer<C = SystemClock> {
    clock: C,
    start: Instant,
    end: Instant,
}

impl Timer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Timer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Timer<C> {
    /// Creates a timer with both timestamps set to the current time.
    pub fn with_clock(clock: C) -> Self {
        let now = clock.now();
        Self {
            clock,
            start: now,
            end: now,
        }
    }

    pub fn start(&mut self) {
        self.start = self.clock.now();
    }

    pub fn stop(&mut self) {
        self.end = self.clock.now();
    }

    /// Seconds between the recorded start and end.
    pub fn time_passed(&self) -> f64 {
        signed_secs(self.start, self.end)
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    pub fn stopped_at(&self) -> Instant {
        self.end
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }
}
