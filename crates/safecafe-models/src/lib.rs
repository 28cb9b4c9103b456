//! # SafeCafé Models
//!
//! Canonical data types shared by the feed engine and the terminal views.
//!
//! ## Contents
//! - Sensor readings and per-sensor history
//! - Coffee market prices and market summary
//! - Farm alerts
//! - Mock predictive-analysis records
//! - Chart series for the 24h sensor charts
//! - Seed data and relative-time formatting

pub mod alert;
pub mod analysis;
pub mod chart;
pub mod market;
pub mod seed;
pub mod sensor;
pub mod status;
pub mod timefmt;

pub use alert::Alert;
pub use analysis::{AnalysisKind, AnalysisResult, AnalysisStats, AnalysisStatus, PLACEHOLDER_IMAGE};
pub use chart::{ChartKind, ChartPoint, ChartSeries};
pub use market::{MarketPrice, MarketSummary, PriceDirection};
pub use sensor::{ReadingHistory, SensorReading};
pub use status::{AlertSeverity, SensorStatus, Trend};
pub use timefmt::{format_age, format_age_in};
