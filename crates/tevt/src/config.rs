//! Event configuration.
//!
//! [`EventConfig`] is a plain value describing an event before it is built.
//! Wait times are carried as seconds so the value maps directly onto
//! human-edited settings; [`EventConfig::wait_time`] converts and checks
//! them.

use std::time::Duration;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while turning an [`EventConfig`] into an event.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("wait time must not be negative: {0}s")]
    NegativeWait(f64),
    #[error("wait time must be finite: {0}s")]
    NonFiniteWait(f64),
    #[error("wait time out of range: {0}s")]
    WaitOutOfRange(f64),
}

/// Settings shared by every event level.
///
/// `priority` is only read by
/// [`PriorityEvent::from_config`](crate::PriorityEvent::from_config).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventConfig {
    pub wait_secs: f64,
    pub repeated: bool,
    pub priority: i32,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            wait_secs: 0.0,
            repeated: false,
            priority: 0,
        }
    }
}

impl EventConfig {
    /// Creates a new configuration builder.
    pub fn builder() -> EventConfigBuilder {
        EventConfigBuilder::default()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.wait_time().map(|_| ())
    }

    /// Converts `wait_secs` into a [`Duration`].
    pub fn wait_time(&self) -> Result<Duration, ConfigError> {
        let secs = self.wait_secs;
        if !secs.is_finite() {
            return Err(ConfigError::NonFiniteWait(secs));
        }
        if secs < 0.0 {
            return Err(ConfigError::NegativeWait(secs));
        }
        Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::WaitOutOfRange(secs))
    }
}

/// Builder for [`EventConfig`].
#[derive(Debug, Clone, Default)]
pub struct EventConfigBuilder {
    config: EventConfig,
}

impl EventConfigBuilder {
    /// Sets the wait time in seconds.
    pub fn wait_secs(mut self, secs: f64) -> Self {
        self.config.wait_secs = secs;
        self
    }

    pub fn wait_time(mut self, wait: Duration) -> Self {
        self.config.wait_secs = wait.as_secs_f64();
        self
    }

    /// Makes the event rearm itself every time it is handled.
    pub fn repeated(mut self, repeated: bool) -> Self {
        self.config.repeated = repeated;
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.config.priority = priority;
        self
    }

    pub fn build(self) -> EventConfig {
        self.config
    }
}
