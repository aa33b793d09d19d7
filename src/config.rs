// Copyright (c) 2025 - Cowboy AI, Inc.
//! Runtime configuration for publishers, subscriptions and verification

use std::time::Duration;

use crate::errors::{ReactiveError, ReactiveResult};

/// Environment variable for the subscription channel capacity
pub const ENV_CHANNEL_CAPACITY: &str = "REACTIVE_CHANNEL_CAPACITY";

/// Environment variable for the step verifier deadline, in milliseconds
pub const ENV_VERIFY_TIMEOUT_MS: &str = "REACTIVE_VERIFY_TIMEOUT_MS";

/// Environment variable for the per-element delay used by the demo, in milliseconds
pub const ENV_ELEMENT_DELAY_MS: &str = "REACTIVE_ELEMENT_DELAY_MS";

/// Configuration for subscriptions and verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactiveConfig {
    /// Capacity of the bounded channel between producer and consumer tasks
    pub channel_capacity: usize,
    /// Deadline applied by the step verifier
    pub verify_timeout: Duration,
    /// Fixed delay applied before each element in delayed sequences
    pub element_delay: Duration,
}

impl Default for ReactiveConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 256,
            verify_timeout: Duration::from_secs(10),
            element_delay: Duration::from_secs(1),
        }
    }
}

impl ReactiveConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to [`ReactiveConfig::default`]. Values that
    /// are set but cannot be parsed are reported as configuration errors.
    pub fn from_env() -> ReactiveResult<Self> {
        let defaults = Self::default();

        let channel_capacity = read_var(ENV_CHANNEL_CAPACITY)?
            .map(to_capacity)
            .transpose()?
            .unwrap_or(defaults.channel_capacity);

        let verify_timeout = read_var(ENV_VERIFY_TIMEOUT_MS)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.verify_timeout);

        let element_delay = read_var(ENV_ELEMENT_DELAY_MS)?
            .map(Duration::from_millis)
            .unwrap_or(defaults.element_delay);

        let config = Self {
            channel_capacity,
            verify_timeout,
            element_delay,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration invariants
    pub fn validate(&self) -> ReactiveResult<()> {
        if self.channel_capacity == 0 {
            return Err(ReactiveError::Configuration(
                "channel capacity must be greater than zero".to_string(),
            ));
        }

        if self.verify_timeout.is_zero() {
            return Err(ReactiveError::Configuration(
                "verify timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Set the channel capacity
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity;
        self
    }

    /// Set the per-element delay
    pub fn with_element_delay(mut self, delay: Duration) -> Self {
        self.element_delay = delay;
        self
    }
}

fn read_var(name: &str) -> ReactiveResult<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| ReactiveError::Configuration(format!("{name}={raw:?}: {e}"))),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(ReactiveError::Configuration(format!("{name}: {e}"))),
    }
}

fn to_capacity(raw: u64) -> ReactiveResult<usize> {
    usize::try_from(raw)
        .map_err(|e| ReactiveError::Configuration(format!("{ENV_CHANNEL_CAPACITY}={raw}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ReactiveConfig::default();
        assert_eq!(config.channel_capacity, 256);
        assert_eq!(config.element_delay, Duration::from_secs(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let config = ReactiveConfig::default().with_channel_capacity(0);
        assert!(matches!(
            config.validate(),
            Err(ReactiveError::Configuration(_))
        ));
    }

    #[test]
    fn test_zero_verify_timeout_rejected() {
        let config = ReactiveConfig {
            verify_timeout: Duration::ZERO,
            ..ReactiveConfig::default()
        };
        assert!(config.validate().is_err());
    }

    // Single test touches the process environment so parallel tests don't race on it.
    #[test]
    fn test_from_env() {
        std::env::set_var(ENV_CHANNEL_CAPACITY, "8");
        std::env::set_var(ENV_ELEMENT_DELAY_MS, "250");
        std::env::remove_var(ENV_VERIFY_TIMEOUT_MS);

        let config = ReactiveConfig::from_env().unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.element_delay, Duration::from_millis(250));
        assert_eq!(config.verify_timeout, Duration::from_secs(10));

        std::env::set_var(ENV_CHANNEL_CAPACITY, "lots");
        assert!(matches!(
            ReactiveConfig::from_env(),
            Err(ReactiveError::Configuration(_))
        ));

        std::env::set_var(ENV_CHANNEL_CAPACITY, "0");
        assert!(ReactiveConfig::from_env().is_err());

        std::env::remove_var(ENV_CHANNEL_CAPACITY);
        std::env::remove_var(ENV_ELEMENT_DELAY_MS);
    }

    #[test]
    fn test_capacity_conversion() {
        assert_eq!(to_capacity(8).unwrap(), 8);
        assert_eq!(to_capacity(u64::from(u32::MAX)).unwrap(), u32::MAX as usize);

        let oversized = u128::from(u64::MAX) > usize::MAX as u128;
        assert_eq!(to_capacity(u64::MAX).is_err(), oversized);
        if let Err(err) = to_capacity(u64::MAX) {
            assert!(matches!(err, ReactiveError::Configuration(_)));
        }
    }

    #[test]
    fn test_builder_setters() {
        let config = ReactiveConfig::default()
            .with_channel_capacity(4)
            .with_element_delay(Duration::from_millis(50));

        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.element_delay, Duration::from_millis(50));
    }
}
