//! # SafeCafé Runner
//!
//! Entry point plumbing for the `safecafe` binary.
//!
//! ## Commands
//! - `dashboard` - interactive terminal dashboard (login, sensors, prices, analysis, alerts)
//! - `headless` - print feed snapshots as JSON lines, no terminal UI
//!
//! ## Contents
//! - CLI definition and dispatch
//! - Configuration file loading
//! - Observability (tracing) initialization
//! - Runtime creation
//! - Terminal UI

pub mod config;
pub mod headless;
pub mod observability;
pub mod tui;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;

pub use config::{AppConfig, ConfigError, LoggingConfig, UiConfig};

const SERVICE_NAME: &str = "safecafe";

#[derive(Parser, Debug)]
#[command(name = "safecafe")]
#[command(about = "SafeCafé - simulated coffee farm telemetry dashboard")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file (defaults apply when omitted)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive terminal dashboard
    Dashboard {
        /// Skip the login screen and sign in with this identifier
        #[arg(long)]
        user: Option<String>,
    },

    /// Print one JSON snapshot per sensor/price tick to stdout
    Headless {
        /// Exit after this many price ticks
        #[arg(long, default_value_t = 3)]
        ticks: u64,
    },
}

/// Create the shared tokio runtime
pub fn create_runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to create runtime: {}", e))
}

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let rt = create_runtime()?;
    rt.block_on(async_main(cli))
}

async fn async_main(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Dashboard { user } => {
            // The TUI owns stdout; logs go to file only.
            let _guards = observability::init_tracing(SERVICE_NAME, &config.logging, false)?;
            info!("[RUNNER] Starting dashboard");
            tui::run_dashboard(&config, user.as_deref()).await
        }
        Commands::Headless { ticks } => {
            let _guards = observability::init_tracing(SERVICE_NAME, &config.logging, true)?;
            tui::print_headless_banner(SERVICE_NAME, ticks);
            let mut stdout = std::io::stdout();
            headless::run_headless(&config, ticks, &mut stdout).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_dashboard_with_user() {
        let cli = Cli::try_parse_from(["safecafe", "dashboard", "--user", "ana@farm"]).unwrap();
        match cli.command {
            Commands::Dashboard { user } => assert_eq!(user.as_deref(), Some("ana@farm")),
            other => panic!("unexpected command: {:?}", other),
        }
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_headless_default_ticks_and_global_config() {
        let cli = Cli::try_parse_from(["safecafe", "headless", "--config", "cfg.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        match cli.command {
            Commands::Headless { ticks } => assert_eq!(ticks, 3),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["safecafe"]).is_err());
    }
}
