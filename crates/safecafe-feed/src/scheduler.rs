//! TelemetryFeed - scheduled tick tasks for one dashboard instance
//!
//! Spawns three independent tokio tasks:
//! - sensor tick every T1, publishing `SensorFrame`
//! - price tick every T2, publishing `PriceFrame`
//! - rotation tick every T3, publishing the featured market index
//!
//! ## Ownership
//! Each task owns its data outright and is the only writer of its `watch`
//! channel. Readers only ever see whole frames.
//!
//! ## Cancellation
//! The feed is tied to the lifetime of its owner. `stop()` (or dropping the
//! feed) clears the running flag and aborts every task.
//!
//! ## Timing
//! Like a browser interval, the first firing happens one full period after
//! start. Missed ticks are skipped rather than replayed in a burst.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use safecafe_models::{seed, MarketPrice, MarketSummary, SensorReading};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::config::{FeedConfig, TrendPolicy};
use crate::error::FeedError;
use crate::price::PriceTicker;
use crate::rotation::Rotation;
use crate::sensor::SensorTicker;
use crate::snapshot::{PriceFrame, SensorFrame, TelemetrySnapshot};

/// Read side of a running feed. Cheap to clone.
#[derive(Debug, Clone)]
pub struct FeedReceivers {
    pub sensors: watch::Receiver<SensorFrame>,
    pub prices: watch::Receiver<PriceFrame>,
    pub featured: watch::Receiver<Option<usize>>,
}

impl FeedReceivers {
    /// Assemble a snapshot from the latest frame of every channel.
    pub fn snapshot(&self) -> TelemetrySnapshot {
        let (sensors, sensor_ticks) = {
            let frame = self.sensors.borrow();
            (frame.readings.clone(), frame.tick)
        };
        let (prices, price_ticks) = {
            let frame = self.prices.borrow();
            (frame.prices.clone(), frame.tick)
        };
        let featured = *self.featured.borrow();
        TelemetrySnapshot {
            taken_at: Utc::now(),
            summary: MarketSummary::from_prices(&prices),
            sensors,
            prices,
            featured,
            sensor_ticks,
            price_ticks,
        }
    }
}

/// Running simulated feed.
pub struct TelemetryFeed {
    receivers: FeedReceivers,
    running: Arc<AtomicBool>,
    tasks: Vec<JoinHandle<()>>,
}

impl TelemetryFeed {
    /// Start a feed over the built-in seed data.
    pub fn start(config: &FeedConfig) -> Result<Self, FeedError> {
        Self::start_with(config, seed::sensors(), seed::markets(Utc::now()))
    }

    /// Start a feed over caller-supplied initial readings and quotes.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start_with(
        config: &FeedConfig,
        sensors: Vec<SensorReading>,
        markets: Vec<MarketPrice>,
    ) -> Result<Self, FeedError> {
        config.validate()?;
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(FeedError::NoRuntime);
        }

        if config.trend_policy == TrendPolicy::Random {
            warn!(
                "[FEED] trend_policy=random: sensor trend is resampled independently of the value change"
            );
        }

        let rotation = Rotation::new(markets.len());

        let (sensor_tx, sensor_rx) =
            watch::channel(SensorFrame::seeded(sensors, config.history_capacity));
        let (price_tx, price_rx) = watch::channel(PriceFrame {
            prices: markets,
            tick: 0,
        });
        let (featured_tx, featured_rx) = watch::channel(rotation.current());

        let running = Arc::new(AtomicBool::new(true));

        let tasks = vec![
            spawn_sensor_task(
                SensorTicker::from_config(config),
                config.sensor_interval(),
                sensor_tx,
                running.clone(),
            ),
            spawn_price_task(
                PriceTicker::from_config(config),
                config.price_interval(),
                price_tx,
                running.clone(),
            ),
            spawn_rotation_task(
                rotation,
                config.rotation_interval(),
                featured_tx,
                running.clone(),
            ),
        ];

        info!(
            sensor_ms = config.sensor_interval_ms,
            price_ms = config.price_interval_ms,
            rotation_ms = config.rotation_interval_ms,
            "[FEED] Telemetry feed started"
        );

        Ok(Self {
            receivers: FeedReceivers {
                sensors: sensor_rx,
                prices: price_rx,
                featured: featured_rx,
            },
            running,
            tasks,
        })
    }

    pub fn subscribe(&self) -> FeedReceivers {
        self.receivers.clone()
    }

    pub fn snapshot(&self) -> TelemetrySnapshot {
        self.receivers.snapshot()
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Cancel every tick task. Idempotent.
    pub fn stop(&mut self) {
        if self.running.swap(false, Ordering::SeqCst) {
            info!("[FEED] Stopping telemetry feed");
        }
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for TelemetryFeed {
    fn drop(&mut self) {
        self.stop();
    }
}

fn ticker(period: Duration) -> tokio::time::Interval {
    let mut iv = interval(period);
    iv.set_missed_tick_behavior(MissedTickBehavior::Skip);
    iv
}

fn spawn_sensor_task(
    mut ticker_state: SensorTicker,
    period: Duration,
    tx: watch::Sender<SensorFrame>,
    running: Arc<AtomicBool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut iv = ticker(period);
        // First tick of a tokio interval completes immediately.
        iv.tick().await;

        let mut frame = tx.borrow().clone();
        while running.load(Ordering::SeqCst) {
            iv.tick().await;
            let next = ticker_state.tick(&frame.readings);
            frame.advance(next);
            if tx.send(frame.clone()).is_err() {
                debug!("[FEED] Sensor receivers gone");
                break;
            }
        }
        debug!("[FEED] Sensor task exiting");
    })
}

fn spawn_price_task(
    mut ticker_state: PriceTicker,
    period: Duration,
    tx: watch::Sender<PriceFrame>,
    running: Arc<AtomicBool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut iv = ticker(period);
        iv.tick().await;

        let mut frame = tx.borrow().clone();
        while running.load(Ordering::SeqCst) {
            iv.tick().await;
            frame.prices = ticker_state.tick(&frame.prices, Utc::now());
            frame.tick += 1;
            if tx.send(frame.clone()).is_err() {
                debug!("[FEED] Price receivers gone");
                break;
            }
        }
        debug!("[FEED] Price task exiting");
    })
}

fn spawn_rotation_task(
    mut rotation: Rotation,
    period: Duration,
    tx: watch::Sender<Option<usize>>,
    running: Arc<AtomicBool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        if rotation.is_empty() {
            debug!("[FEED] No markets to rotate");
            return;
        }
        let mut iv = ticker(period);
        iv.tick().await;

        while running.load(Ordering::SeqCst) {
            iv.tick().await;
            if tx.send(rotation.advance()).is_err() {
                debug!("[FEED] Rotation receivers gone");
                break;
            }
        }
        debug!("[FEED] Rotation task exiting");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_outside_runtime_fails() {
        let result = TelemetryFeed::start(&FeedConfig::default());
        assert!(matches!(result, Err(FeedError::NoRuntime)));
    }

    #[tokio::test]
    async fn test_invalid_config_rejected_before_spawn() {
        let config = FeedConfig {
            sensor_interval_ms: 0,
            ..Default::default()
        };
        assert!(matches!(
            TelemetryFeed::start(&config),
            Err(FeedError::ZeroInterval { .. })
        ));
    }

    #[tokio::test]
    async fn test_initial_snapshot_is_seed() {
        let feed = TelemetryFeed::start(&FeedConfig::default()).unwrap();
        let snap = feed.snapshot();
        assert_eq!(snap.sensors, seed::sensors());
        assert_eq!(snap.prices.len(), 3);
        assert_eq!(snap.featured, Some(0));
        assert_eq!(snap.sensor_ticks, 0);
        assert_eq!(snap.price_ticks, 0);
    }

    #[tokio::test]
    async fn test_stop_is_idempotent() {
        let mut feed = TelemetryFeed::start(&FeedConfig::default()).unwrap();
        assert!(feed.is_running());
        feed.stop();
        feed.stop();
        assert!(!feed.is_running());
    }
}
