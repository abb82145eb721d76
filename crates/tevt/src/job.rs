//! Timed events that run a callback when handled.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, EventConfig};
use crate::event::{Schedulable, TimedEvent};

/// Callback run by a [`JobEvent`].
pub type Job = Arc<dyn Fn() + Send + Sync>;

/// [`TimedEvent`] that invokes a [`Job`] each time it is handled.
///
/// The job runs synchronously inside [`handle`](Schedulable::handle), after
/// the timing state has been updated. A panicking job unwinds straight out of
/// `handle`; the event is left rearmed (or latched) as if the job had
/// succeeded.
#[derive(Clone)]
pub struct JobEvent<C = SystemClock> {
    event: TimedEvent<C>,
    job: Job,
}

impl JobEvent<SystemClock> {
    pub fn new<F>(job: F, repeated: bool, wait_time: Duration) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_clock(SystemClock, job, repeated, wait_time)
    }

    pub fn from_config<F>(job: F, config: &EventConfig) -> Result<Self, ConfigError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::from_config_with_clock(SystemClock, job, config)
    }
}

impl<C: Clock> JobEvent<C> {
    pub fn with_clock<F>(clock: C, job: F, repeated: bool, wait_time: Duration) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            event: TimedEvent::with_clock(clock, repeated, wait_time),
            job: Arc::new(job),
        }
    }

    pub fn from_config_with_clock<F>(
        clock: C,
        job: F,
        config: &EventConfig,
    ) -> Result<Self, ConfigError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Ok(Self {
            event: TimedEvent::from_config_with_clock(clock, config)?,
            job: Arc::new(job),
        })
    }

    /// Returns a handle to the current job.
    pub fn job(&self) -> Job {
        Arc::clone(&self.job)
    }

    /// Replaces the job. Takes effect on the next successful handle.
    pub fn set_job(&mut self, job: Job) {
        self.job = job;
    }

    pub fn timed(&self) -> &TimedEvent<C> {
        &self.event
    }
}

impl<C: Clock> Schedulable for JobEvent<C> {
    fn lateness(&self) -> f64 {
        self.event.lateness()
    }

    fn is_handled(&self) -> bool {
        self.event.is_handled()
    }

    fn handle(&mut self) -> bool {
        if !self.event.handle() {
            return false;
        }
        (self.job)();
        true
    }
}

impl<C> fmt::Debug for JobEvent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobEvent")
            .field("event", &self.event)
            .finish_non_exhaustive()
    }
}
