//! Coffee market prices for the ticker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Quoted price on one coffee market.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketPrice {
    /// Market name, e.g. `ICE Arabica`.
    pub market: String,
    pub price: f64,
    /// Absolute change applied by the last tick.
    pub change: f64,
    /// Change relative to the previous price, in percent.
    pub change_pct: f64,
    /// ISO currency code (`USD`, `BRL`).
    pub currency: String,
    /// Quote unit (`¢/lb`, `R$/sc`, `$/ton`).
    pub unit: String,
    pub last_update: DateTime<Utc>,
}

impl MarketPrice {
    pub fn direction(&self) -> PriceDirection {
        PriceDirection::from_change(self.change)
    }

    /// Price with the currency prefix used for BRL quotes.
    pub fn formatted_price(&self) -> String {
        if self.currency == "BRL" {
            format!("R$ {:.2}", self.price)
        } else {
            format!("{:.2}", self.price)
        }
    }

    /// Signed change with percentage, e.g. `+2.35 (1.41%)`.
    pub fn formatted_change(&self) -> String {
        let sign = if self.change > 0.0 { "+" } else { "" };
        format!("{}{:.2} ({:.2}%)", sign, self.change, self.change_pct)
    }
}

/// Sign of the last price change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    Up,
    Down,
    Flat,
}

impl PriceDirection {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            PriceDirection::Up
        } else if change < 0.0 {
            PriceDirection::Down
        } else {
            PriceDirection::Flat
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            PriceDirection::Up => "▲",
            PriceDirection::Down => "▼",
            PriceDirection::Flat => "■",
        }
    }
}

/// Counts of markets by direction of their last change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MarketSummary {
    pub up: usize,
    pub down: usize,
    pub flat: usize,
}

impl MarketSummary {
    pub fn from_prices(prices: &[MarketPrice]) -> Self {
        prices
            .iter()
            .fold(MarketSummary::default(), |mut acc, p| {
                match p.direction() {
                    PriceDirection::Up => acc.up += 1,
                    PriceDirection::Down => acc.down += 1,
                    PriceDirection::Flat => acc.flat += 1,
                }
                acc
            })
    }
}
