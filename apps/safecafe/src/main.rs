//! SafeCafé - coffee farm telemetry dashboard
//!
//! Usage:
//!   safecafe dashboard [--config configs/safecafe.toml] [--user ana@farm.br]
//!   safecafe headless [--ticks 3]

fn main() -> anyhow::Result<()> {
    safecafe_runner::run()
}
