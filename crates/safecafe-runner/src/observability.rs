//! # Observability
//!
//! Structured logging for the runner.
//!
//! ## Logging Architecture
//! - **file**: INFO for safecafe crates, WARN for deps, daily rotation, non-blocking
//! - **console**: WARN only on stderr (stdout carries headless output), disabled while the TUI owns the terminal
//! - **RUST_LOG**: honored for the file layer only

use std::fs;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::config::LoggingConfig;

/// Guards that must be held for the lifetime of the process.
/// Dropping this will cause buffered logs to be lost.
pub struct TracingGuards {
    _file_guard: WorkerGuard,
}

/// Initializes tracing with a rotated file layer and an optional bounded console layer.
pub fn init_tracing(
    service_name: &str,
    logging: &LoggingConfig,
    console: bool,
) -> anyhow::Result<TracingGuards> {
    // Best effort: a missing directory surfaces as write errors inside the appender.
    let _ = fs::create_dir_all(&logging.dir);

    let file_appender = tracing_appender::rolling::daily(&logging.dir, &logging.file_prefix);
    let (file_writer, file_guard) = tracing_appender::non_blocking(file_appender);

    let file_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.default_filter));

    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(true)
        .with_filter(file_filter);

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .compact()
            .with_filter(EnvFilter::new("warn"))
    });

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .context("tracing subscriber already installed")?;

    tracing::info!(
        "Observability initialized for service: {} (file={}/{})",
        service_name,
        logging.dir.display(),
        logging.file_prefix
    );

    Ok(TracingGuards {
        _file_guard: file_guard,
    })
}
