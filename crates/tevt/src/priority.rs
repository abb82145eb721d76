//! Job events carrying a priority.
//!
//! Priority answers "which event should be preferred when both are ready",
//! never "which one is more overdue". It is independent of due-ness and
//! lateness: a pending high-priority event still compares greater than a
//! due low-priority one. Drivers that mix timing and priority build their
//! own key, for example due events first with priority as secondary key.
//!
//! Equal priorities compare [`Ordering::Equal`] and neither event has
//! priority over the other. No tie-break is defined here; a collection that
//! needs a deterministic order among equals (for example FIFO) has to supply
//! it.

use std::cmp::Ordering;
use std::fmt;
use std::time::Duration;

use crate::clock::{Clock, SystemClock};
use crate::config::{ConfigError, EventConfig};
use crate::event::{Schedulable, TimedEvent};
use crate::job::{Job, JobEvent};

/// [`JobEvent`] with an integer priority.
///
/// The comparison operators look at the priority only, so `a > b` is
/// [`a.has_priority(&b)`](PriorityEvent::has_priority) and `a == b` means
/// "same priority", not "same event". This lets the event sit directly in a
/// max-heap such as [`std::collections::BinaryHeap`].
#[derive(Clone)]
pub struct PriorityEvent<C = SystemClock> {
    event: JobEvent<C>,
    priority: i32,
}

impl PriorityEvent<SystemClock> {
    pub fn new<F>(job: F, priority: i32, repeated: bool, wait_time: Duration) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::with_clock(SystemClock, job, priority, repeated, wait_time)
    }

    /// Builds an event from `config`, including its priority.
    pub fn from_config<F>(job: F, config: &EventConfig) -> Result<Self, ConfigError>
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self::from_config_with_clock(SystemClock, job, config)
    }
}

impl<C: Clock> PriorityEvent<C> {
    pub fn with_clock<F>(
        clock: C,
        job: F,
        priority: i32,
        repeated: bool,
        wait_time: Duration,
    ) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            event: JobEvent::with_clock(clock, job, repeated, wait_time),
            priority,
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
            event: JobEvent::from_config_with_clock(clock, job, config)?,
            priority: config.priority,
        })
    }

    pub fn job(&self) -> Job {
        self.event.job()
    }

    pub fn set_job(&mut self, job: Job) {
        self.event.set_job(job);
    }

    pub fn timed(&self) -> &TimedEvent<C> {
        self.event.timed()
    }
}

impl<C> PriorityEvent<C> {
    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Returns `true` if this event's priority is strictly greater.
    pub fn has_priority(&self, other: &Self) -> bool {
        self.priority > other.priority
    }
}

impl<C: Clock> Schedulable for PriorityEvent<C> {
    fn lateness(&self) -> f64 {
        self.event.lateness()
    }

    fn is_handled(&self) -> bool {
        self.event.is_handled()
    }

    fn handle(&mut self) -> bool {
        self.event.handle()
    }
}

impl<C> PartialEq for PriorityEvent<C> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority
    }
}

impl<C> Eq for PriorityEvent<C> {}

impl<C> PartialOrd for PriorityEvent<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C> Ord for PriorityEvent<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority)
    }
}

impl<C> fmt::Debug for PriorityEvent<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityEvent")
            .field("priority", &self.priority)
            .field("event", &self.event)
            .finish()
    }
}
