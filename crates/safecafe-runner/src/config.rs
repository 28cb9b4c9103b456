//! # Configuration Loading
//!
//! Optional TOML file; every section falls back to its defaults.
//!
//! ```toml
//! [feed]
//! sensor_interval_ms = 5000
//! trend_policy = "follow_delta"
//!
//! [ui]
//! tick_rate_ms = 250
//!
//! [logging]
//! dir = "logs"
//! ```

use safecafe_feed::{FeedConfig, FeedError};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid feed configuration: {0}")]
    Feed(#[from] FeedError),

    #[error("Invalid ui configuration: {0}")]
    Ui(String),
}

/// Root configuration schema.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub feed: FeedConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Input poll / redraw period.
    pub tick_rate_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl UiConfig {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

/// Log file placement.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub dir: PathBuf,
    pub file_prefix: String,
    /// Default file filter when RUST_LOG is unset.
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("logs"),
            file_prefix: "safecafe.log".to_string(),
            default_filter: "safecafe=info,warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a file path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.feed.validate()?;
        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::Ui("tick_rate_ms must be greater than zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safecafe_feed::TrendPolicy;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::parse("").unwrap();
        assert_eq!(config.feed, FeedConfig::default());
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.logging.dir, PathBuf::from("logs"));
    }

    #[test]
    fn test_partial_feed_section() {
        let config = AppConfig::parse(
            r#"
            [feed]
            sensor_interval_ms = 1000
            trend_policy = "follow_delta"
            seed = 9
            "#,
        )
        .unwrap();
        assert_eq!(config.feed.sensor_interval_ms, 1000);
        assert_eq!(config.feed.price_interval_ms, 8000);
        assert_eq!(config.feed.trend_policy, TrendPolicy::FollowDelta);
        assert_eq!(config.feed.seed, Some(9));
    }

    #[test]
    fn test_invalid_feed_rejected() {
        let err = AppConfig::parse("[feed]\nprice_interval_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Feed(FeedError::ZeroInterval { .. })));
    }

    #[test]
    fn test_zero_tick_rate_rejected() {
        let err = AppConfig::parse("[ui]\ntick_rate_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Ui(_)));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            AppConfig::parse("[feed\n"),
            Err(ConfigError::Parse(_))
        ));
    }
}
