//! Loading configuration from disk.

use std::io::Write;
use std::path::Path;

use safecafe_feed::TrendPolicy;
use safecafe_runner::{AppConfig, ConfigError};

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[feed]
sensor_interval_ms = 2000
trend_policy = "follow_delta"

[ui]
tick_rate_ms = 100

[logging]
dir = "/tmp/safecafe-logs"
"#
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.feed.sensor_interval_ms, 2000);
    assert_eq!(config.feed.trend_policy, TrendPolicy::FollowDelta);
    assert_eq!(config.ui.tick_rate_ms, 100);
    assert_eq!(config.logging.file_prefix, "safecafe.log");
}

#[test]
fn test_missing_file_is_io_error() {
    let err = AppConfig::load(Path::new("/nonexistent/safecafe.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/safecafe.toml"));
}

#[test]
fn test_shipped_config_parses() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../configs/safecafe.toml");
    let config = AppConfig::load(&path).unwrap();
    assert_eq!(config.feed.sensor_interval_ms, 5000);
}
