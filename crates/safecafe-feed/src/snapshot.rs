//! Frames published by the feed tasks and the combined view snapshot.

use chrono::{DateTime, Utc};
use safecafe_models::{MarketPrice, MarketSummary, ReadingHistory, SensorReading};
use serde::Serialize;

/// Output of one sensor tick. `history[i]` belongs to `readings[i]`.
#[derive(Debug, Clone, Default)]
pub struct SensorFrame {
    pub readings: Vec<SensorReading>,
    pub history: Vec<ReadingHistory>,
    pub tick: u64,
}

impl SensorFrame {
    pub fn seeded(readings: Vec<SensorReading>, history_capacity: usize) -> Self {
        let history = readings
            .iter()
            .map(|r| {
                let mut h = ReadingHistory::new(history_capacity);
                h.push(r.value);
                h
            })
            .collect();
        Self {
            readings,
            history,
            tick: 0,
        }
    }

    /// Replace the readings wholesale and extend each history.
    pub fn advance(&mut self, readings: Vec<SensorReading>) {
        for (h, r) in self.history.iter_mut().zip(&readings) {
            h.push(r.value);
        }
        self.readings = readings;
        self.tick += 1;
    }
}

/// Output of one price tick.
#[derive(Debug, Clone, Default)]
pub struct PriceFrame {
    pub prices: Vec<MarketPrice>,
    pub tick: u64,
}

/// Everything a view needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct TelemetrySnapshot {
    pub taken_at: DateTime<Utc>,
    pub sensors: Vec<SensorReading>,
    pub prices: Vec<MarketPrice>,
    pub featured: Option<usize>,
    pub summary: MarketSummary,
    pub sensor_ticks: u64,
    pub price_ticks: u64,
}

impl TelemetrySnapshot {
    pub fn featured_price(&self) -> Option<&MarketPrice> {
        self.featured.and_then(|i| self.prices.get(i))
    }
}
