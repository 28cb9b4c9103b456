//! Feed configuration.

use crate::error::FeedError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How a sensor tick chooses the trend indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendPolicy {
    /// Resample uniformly, ignoring the value delta.
    #[default]
    Random,
    /// Derive from the sign of the delta; deltas inside the dead-band read as stable.
    FollowDelta,
}

/// Cadence and amplitude of the simulated ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    /// Sensor tick interval (T1).
    pub sensor_interval_ms: u64,
    /// Price tick interval (T2).
    pub price_interval_ms: u64,
    /// Featured-market rotation interval (T3).
    pub rotation_interval_ms: u64,
    /// Sensor perturbation amplitude: `value += uniform(-1, 1) * sensor_step`.
    pub sensor_step: f64,
    /// Price perturbation amplitude: `price += uniform(-0.5, 0.5) * price_step`.
    pub price_step: f64,
    /// Recent values retained per sensor.
    pub history_capacity: usize,
    pub trend_policy: TrendPolicy,
    /// Dead-band for `TrendPolicy::FollowDelta`.
    pub trend_deadband: f64,
    /// Fixed RNG seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            sensor_interval_ms: 5_000,
            price_interval_ms: 8_000,
            rotation_interval_ms: 4_000,
            sensor_step: 1.0,
            price_step: 10.0,
            history_capacity: 32,
            trend_policy: TrendPolicy::Random,
            trend_deadband: 0.1,
            seed: None,
        }
    }
}

impl FeedConfig {
    pub fn validate(&self) -> Result<(), FeedError> {
        for (name, ms) in [
            ("sensor_interval_ms", self.sensor_interval_ms),
            ("price_interval_ms", self.price_interval_ms),
            ("rotation_interval_ms", self.rotation_interval_ms),
        ] {
            if ms == 0 {
                return Err(FeedError::ZeroInterval { name });
            }
        }
        for (name, value) in [
            ("sensor_step", self.sensor_step),
            ("price_step", self.price_step),
            ("trend_deadband", self.trend_deadband),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FeedError::InvalidStep { name, value });
            }
        }
        Ok(())
    }

    pub fn sensor_interval(&self) -> Duration {
        Duration::from_millis(self.sensor_interval_ms)
    }

    pub fn price_interval(&self) -> Duration {
        Duration::from_millis(self.price_interval_ms)
    }

    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    /// Per-task seed; tasks get distinct streams from one configured seed.
    pub(crate) fn task_seed(&self, offset: u64) -> Option<u64> {
        self.seed.map(|s| s.wrapping_add(offset))
    }
}
