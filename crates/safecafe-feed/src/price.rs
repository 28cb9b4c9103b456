//! Price tick: floor-clamped random walk of every coffee quote.

use crate::config::FeedConfig;
use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use safecafe_models::MarketPrice;

#[derive(Debug, Clone)]
pub struct PriceTicker {
    rng: StdRng,
    step: f64,
}

impl PriceTicker {
    pub fn new(step: f64, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng, step }
    }

    pub fn from_config(config: &FeedConfig) -> Self {
        Self::new(config.price_step, config.task_seed(1))
    }

    /// Move every price by `uniform(-0.5, 0.5) * step`, floored at zero.
    ///
    /// `change` and `change_pct` describe the delta actually applied, so a
    /// clamped move reports the clamped amount. A quote already at zero
    /// reports a 0% change. A move that would leave a non-finite price or
    /// percentage keeps the previous price.
    pub fn tick(&mut self, prices: &[MarketPrice], now: DateTime<Utc>) -> Vec<MarketPrice> {
        prices
            .iter()
            .map(|quote| {
                let raw = self.rng.gen_range(-0.5..0.5) * self.step;
                let (price, change, change_pct) = apply_move(quote.price, raw)
                    .unwrap_or((quote.price, 0.0, 0.0));
                MarketPrice {
                    price,
                    change,
                    change_pct,
                    last_update: now,
                    ..quote.clone()
                }
            })
            .collect()
    }
}

/// New price, change and percent change, or `None` if any is non-finite.
fn apply_move(old: f64, raw: f64) -> Option<(f64, f64, f64)> {
    let price = (old + raw).max(0.0);
    let change = price - old;
    let change_pct = if old > 0.0 { change / old * 100.0 } else { 0.0 };
    [price, change, change_pct]
        .iter()
        .all(|v| v.is_finite())
        .then_some((price, change, change_pct))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use safecafe_models::seed;

    #[test]
    fn test_price_never_negative() {
        let now = Utc::now();
        let mut ticker = PriceTicker::new(10.0, Some(42));
        let mut prices = seed::markets(now);
        // Start one quote close to the floor so clamping is exercised.
        prices[0].price = 1.0;
        for _ in 0..5_000 {
            prices = ticker.tick(&prices, now);
            assert!(prices.iter().all(|p| p.price >= 0.0));
        }
    }

    #[test]
    fn test_change_pct_matches_delta() {
        let now = Utc::now();
        let mut ticker = PriceTicker::new(10.0, Some(7));
        let mut prices = seed::markets(now);
        for _ in 0..1_000 {
            let next = ticker.tick(&prices, now);
            for (old, new) in prices.iter().zip(&next) {
                assert!((new.change - (new.price - old.price)).abs() < 1e-9);
                if old.price > 0.0 {
                    let expected = (new.price - old.price) / old.price * 100.0;
                    assert!((new.change_pct - expected).abs() < 1e-9);
                }
            }
            prices = next;
        }
    }

    #[test]
    fn test_zero_price_reports_zero_pct() {
        let now = Utc::now();
        let mut ticker = PriceTicker::new(10.0, Some(3));
        let mut prices = seed::markets(now);
        prices[1].price = 0.0;
        let next = ticker.tick(&prices, now);
        assert_eq!(next[1].change_pct, 0.0);
        assert!(next[1].change_pct.is_finite());
    }

    #[test]
    fn test_timestamp_stamped() {
        let then = Utc::now() - Duration::hours(1);
        let now = Utc::now();
        let mut ticker = PriceTicker::new(10.0, Some(1));
        let next = ticker.tick(&seed::markets(then), now);
        assert!(next.iter().all(|p| p.last_update == now));
    }

    #[test]
    fn test_huge_step_keeps_prices_finite() {
        let now = Utc::now();
        let mut ticker = PriceTicker::new(f64::MAX, Some(1));
        let mut prices = seed::markets(now);
        for _ in 0..200 {
            let next = ticker.tick(&prices, now);
            for (old, new) in prices.iter().zip(&next) {
                assert!(new.price.is_finite() && new.price >= 0.0);
                assert!(new.change.is_finite());
                assert!(new.change_pct.is_finite());
                if old.price > 0.0 {
                    let expected = (new.price - old.price) / old.price * 100.0;
                    assert!((new.change_pct - expected).abs() <= 1e-9 * expected.abs().max(1.0));
                }
            }
            prices = next;
        }
    }

    #[test]
    fn test_overflowing_move_keeps_previous_price() {
        assert_eq!(apply_move(f64::MAX, f64::MAX), None);
        assert_eq!(apply_move(1e-300, 1e10), None);
        assert_eq!(apply_move(10.0, -20.0), Some((0.0, -10.0, -100.0)));
    }

    #[test]
    fn test_move_bounded_by_half_step() {
        let now = Utc::now();
        let mut ticker = PriceTicker::new(10.0, Some(19));
        let prices = seed::markets(now);
        for _ in 0..500 {
            for (old, new) in prices.iter().zip(ticker.tick(&prices, now)) {
                assert!((new.price - old.price).abs() <= 5.0);
            }
        }
    }
}
