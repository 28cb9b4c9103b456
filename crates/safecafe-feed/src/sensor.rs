//! Sensor tick: random-walk perturbation of every reading.

use crate::config::{FeedConfig, TrendPolicy};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use safecafe_models::{SensorReading, Trend};

/// Produces the next generation of sensor readings.
#[derive(Debug, Clone)]
pub struct SensorTicker {
    rng: StdRng,
    step: f64,
    policy: TrendPolicy,
    deadband: f64,
}

impl SensorTicker {
    pub fn new(step: f64, policy: TrendPolicy, deadband: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            step,
            policy,
            deadband,
        }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(
            config.sensor_step,
            config.trend_policy,
            config.trend_deadband,
            config.task_seed(0),
        )
    }

    /// Perturb every reading by `uniform(-1, 1) * step` and pick a new trend.
    ///
    /// Values are not clamped. A perturbation that would leave a non-finite
    /// value keeps the previous value instead.
    pub fn tick(&mut self, readings: &[SensorReading]) -> Vec<SensorReading> {
        readings
            .iter()
            .map(|reading| {
                let delta = self.rng.gen_range(-1.0..=1.0) * self.step;
                let candidate = reading.value + delta;
                let value = if candidate.is_finite() {
                    candidate
                } else {
                    reading.value
                };
                let trend = self.next_trend(value - reading.value);
                SensorReading {
                    value,
                    trend,
                    ..reading.clone()
                }
            })
            .collect()
    }

    fn next_trend(&mut self, delta: f64) -> Trend {
        match self.policy {
            TrendPolicy::Random => Trend::ALL[self.rng.gen_range(0..Trend::ALL.len())],
            TrendPolicy::FollowDelta => {
                if delta > self.deadband {
                    Trend::Up
                } else if delta < -self.deadband {
                    Trend::Down
                } else {
                    Trend::Stable
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safecafe_models::seed;

    #[test]
    fn test_values_stay_finite_over_many_ticks() {
        let mut ticker = SensorTicker::new(1.0, TrendPolicy::Random, 0.1, Some(42));
        let mut readings = seed::sensors();
        for _ in 0..10_000 {
            readings = ticker.tick(&readings);
            assert!(readings.iter().all(|r| r.value.is_finite()));
        }
    }

    #[test]
    fn test_perturbation_is_bounded_by_step() {
        let mut ticker = SensorTicker::new(1.0, TrendPolicy::Random, 0.1, Some(1));
        let before = seed::sensors();
        for _ in 0..500 {
            let after = ticker.tick(&before);
            for (b, a) in before.iter().zip(&after) {
                assert!((a.value - b.value).abs() <= 1.0 + 1e-12);
            }
        }
    }

    #[test]
    fn test_identity_and_status_preserved() {
        let mut ticker = SensorTicker::new(1.0, TrendPolicy::Random, 0.1, Some(3));
        let before = seed::sensors();
        let after = ticker.tick(&before);
        assert_eq!(before.len(), after.len());
        for (b, a) in before.iter().zip(&after) {
            assert_eq!(b.id, a.id);
            assert_eq!(b.unit, a.unit);
            assert_eq!(b.status, a.status);
        }
    }

    #[test]
    fn test_huge_value_does_not_overflow_to_infinity() {
        let mut ticker = SensorTicker::new(f64::MAX, TrendPolicy::Random, 0.1, Some(9));
        let mut readings = seed::sensors();
        readings[0].value = f64::MAX;
        for _ in 0..200 {
            readings = ticker.tick(&readings);
            assert!(readings.iter().all(|r| r.value.is_finite()));
        }
    }

    #[test]
    fn test_follow_delta_trend_matches_sign() {
        let mut ticker = SensorTicker::new(5.0, TrendPolicy::FollowDelta, 0.5, Some(11));
        let before = seed::sensors();
        for _ in 0..200 {
            let after = ticker.tick(&before);
            for (b, a) in before.iter().zip(&after) {
                let delta = a.value - b.value;
                let expected = if delta > 0.5 {
                    Trend::Up
                } else if delta < -0.5 {
                    Trend::Down
                } else {
                    Trend::Stable
                };
                assert_eq!(a.trend, expected);
            }
        }
    }

    #[test]
    fn test_random_policy_reaches_every_trend() {
        let mut ticker = SensorTicker::new(1.0, TrendPolicy::Random, 0.1, Some(5));
        let mut seen = std::collections::HashSet::new();
        let readings = seed::sensors();
        for _ in 0..100 {
            for r in ticker.tick(&readings) {
                seen.insert(r.trend);
            }
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_same_seed_same_walk() {
        let mut a = SensorTicker::new(1.0, TrendPolicy::Random, 0.1, Some(77));
        let mut b = SensorTicker::new(1.0, TrendPolicy::Random, 0.1, Some(77));
        let readings = seed::sensors();
        assert_eq!(a.tick(&readings), b.tick(&readings));
    }
}
