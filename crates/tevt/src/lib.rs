//! # tevt
//!
//! Polled timed events for application-level schedulers.
//!
//! The crate supplies the event state machine only. Whatever owns the events
//! (a run loop, a heap ordered by priority, a test) decides how often to poll
//! them; punctuality is bounded below by the configured wait and above only
//! by that polling rate.
//!
//! ## Module Overview
//! - [`clock`]    – Monotonic time sources, including a manual test clock.
//! - [`timer`]    – Start/stop stopwatch.
//! - [`event`]    – [`TimedEvent`] and the [`Schedulable`] polling trait.
//! - [`job`]      – [`JobEvent`], a timed event that runs a callback.
//! - [`priority`] – [`PriorityEvent`], a job event ordered by priority.
//! - [`config`]   – [`EventConfig`] and its builder.
//!
//! Nothing in the crate locks. Events are driven through `&mut self`, and
//! jobs run on the polling thread.

pub mod clock;
pub mod config;
pub mod event;
pub mod job;
pub mod priority;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{ConfigError, EventConfig, EventConfigBuilder};
pub use event::{Schedulable, TimedEvent};
pub use job::{Job, JobEvent};
pub use priority::PriorityEvent;
pub use timer::Timer;

#[cfg(test)]
mod tests;
