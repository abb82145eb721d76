//! Timed events and the polling interface.
//!
//! A [`TimedEvent`] becomes due `wait_time` after it was started. It never
//! fires on its own: an external driver polls it with
//! [`should_handle`](Schedulable::should_handle) and then calls
//! [`handle`](Schedulable::handle).
//!
//! One-shot events move `pending -> due -> handled` and stay handled.
//! Repeating events are never marked handled; each successful `handle`
//! restarts the wait from the moment of handling, so any lateness
//! accumulated before the poll is dropped rather than carried into the next
//! cycle. Polling less often than `wait_time` therefore yields fewer firings
//! than the nominal rate.

use std::fmt;
use std::time::Duration;

use log::{debug, trace};

use crate::clock::{signed_secs, Clock, SystemClock};
use crate::config::{ConfigError, EventConfig};
use crate::timer::Timer;

/// Polling interface shared by every event level.
///
/// Usage from a driver loop:
///
/// ```
/// use std::time::Duration;
/// use tevt::{Schedulable, TimedEvent};
///
/// let mut event = TimedEvent::new(false, Duration::ZERO);
/// if event.handle() {
///     // act on the event
/// }
/// assert!(event.is_handled());
/// ```
pub trait Schedulable {
    /// Signed seconds past the due date. Negative while pending.
    fn lateness(&self) -> f64;

    fn is_handled(&self) -> bool;

    /// Handles the event if it should be handled.
    ///
    /// Returns `false` without side effects when the event is not due or was
    /// already handled.
    fn handle(&mut self) -> bool;

    fn is_due(&self) -> bool {
        self.lateness() >= 0.0
    }

    fn should_handle(&self) -> bool {
        !self.is_handled() && self.is_due()
    }
}

/// Event that becomes due after a fixed wait and optionally repeats.
#[derive(Clone)]
pub struct TimedEvent<C = SystemClock> {
    timer: Timer<C>,
    handled: bool,
    repeated: bool,
    wait_time: Duration,
}

impl TimedEvent<SystemClock> {
    pub fn new(repeated: bool, wait_time: Duration) -> Self {
        Self::with_clock(SystemClock, repeated, wait_time)
    }

    pub fn from_config(config: &EventConfig) -> Result<Self, ConfigError> {
        Self::from_config_with_clock(SystemClock, config)
    }
}

impl<C: Clock> TimedEvent<C> {
    /// Creates an event whose wait starts now.
    pub fn with_clock(clock: C, repeated: bool, wait_time: Duration) -> Self {
        Self {
            timer: Timer::with_clock(clock),
            handled: false,
            repeated,
            wait_time,
        }
    }

    pub fn from_config_with_clock(clock: C, config: &EventConfig) -> Result<Self, ConfigError> {
        let wait_time = config.wait_time()?;
        Ok(Self::with_clock(clock, config.repeated, wait_time))
    }

    pub fn wait_time(&self) -> Duration {
        self.wait_time
    }

    pub fn is_repeated(&self) -> bool {
        self.repeated
    }

    pub fn clock(&self) -> &C {
        self.timer.clock()
    }
}

impl<C: Clock> Schedulable for TimedEvent<C> {
    fn lateness(&self) -> f64 {
        let now = self.timer.clock().now();
        signed_secs(self.timer.started_at(), now) - self.wait_time.as_secs_f64()
    }

    fn is_handled(&self) -> bool {
        self.handled
    }

    fn handle(&mut self) -> bool {
        if self.handled {
            return false;
        }
        let lateness = self.lateness();
        if lateness < 0.0 {
            return false;
        }

        trace!("timed event due, lateness {lateness:.6}s");
        if self.repeated {
            self.timer.start();
            debug!("rearmed repeating event for {:?}", self.wait_time);
        } else {
            self.handled = true;
            debug!("one-shot event handled");
        }
        true
    }
}

impl<C> fmt::Debug for TimedEvent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimedEvent")
            .field("handled", &self.handled)
            .field("repeated", &self.repeated)
            .field("wait_time", &self.wait_time)
            .finish_non_exhaustive()
    }
}
