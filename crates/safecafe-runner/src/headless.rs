//! Headless mode: stream feed snapshots as JSON lines.

use std::io::Write;

use anyhow::Context;
use safecafe_feed::{TelemetryFeed, TelemetrySnapshot};
use serde::Serialize;
use tracing::info;

use crate::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TickKind {
    SensorTick,
    PriceTick,
}

/// One output line.
#[derive(Debug, Serialize)]
pub struct HeadlessRecord<'a> {
    pub event: TickKind,
    #[serde(flatten)]
    pub snapshot: &'a TelemetrySnapshot,
}

/// Run the feed until `price_ticks` price ticks have been written or Ctrl+C.
pub async fn run_headless<W: Write>(
    config: &AppConfig,
    price_ticks: u64,
    out: &mut W,
) -> anyhow::Result<()> {
    let feed = TelemetryFeed::start(&config.feed).context("starting telemetry feed")?;
    let receivers = feed.subscribe();
    let mut sensors = receivers.sensors.clone();
    let mut prices = receivers.prices.clone();

    let mut written_prices = 0u64;
    while written_prices < price_ticks {
        let event = tokio::select! {
            changed = sensors.changed() => {
                changed.context("sensor feed closed")?;
                TickKind::SensorTick
            }
            changed = prices.changed() => {
                changed.context("price feed closed")?;
                written_prices += 1;
                TickKind::PriceTick
            }
            _ = tokio::signal::ctrl_c() => {
                info!("[HEADLESS] Received SIGINT, stopping");
                break;
            }
        };

        let snapshot = receivers.snapshot();
        let line = serde_json::to_string(&HeadlessRecord {
            event,
            snapshot: &snapshot,
        })?;
        writeln!(out, "{}", line)?;
        out.flush()?;
    }

    info!(price_ticks = written_prices, "[HEADLESS] Finished");
    Ok(())
}
