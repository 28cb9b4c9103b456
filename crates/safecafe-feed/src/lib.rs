//! # SafeCafé Feed
//!
//! Simulated telemetry for the farm dashboard.
//!
//! ## Architecture
//! - Pure tickers (`SensorTicker`, `PriceTicker`) turn one collection into the next
//! - `Rotation` walks the market list to pick the featured quote
//! - `TelemetryFeed` schedules the three ticks as independent tokio tasks, each
//!   the single writer of its own `watch` channel
//! - `AlertBook` and `Session` hold the two pieces of user-driven state
//!
//! Nothing here performs I/O. Every tick is infallible; only configuration
//! validation, alert lookup and login can return errors.

pub mod alerts;
pub mod chart;
pub mod config;
pub mod error;
pub mod price;
pub mod rotation;
pub mod scheduler;
pub mod sensor;
pub mod session;
pub mod snapshot;

pub use alerts::{AlertBook, ResolveOutcome};
pub use chart::{daily_charts, generate_series};
pub use config::{FeedConfig, TrendPolicy};
pub use error::{AlertError, AuthError, FeedError};
pub use price::PriceTicker;
pub use rotation::Rotation;
pub use scheduler::{FeedReceivers, TelemetryFeed};
pub use sensor::SensorTicker;
pub use session::Session;
pub use snapshot::{PriceFrame, SensorFrame, TelemetrySnapshot};
