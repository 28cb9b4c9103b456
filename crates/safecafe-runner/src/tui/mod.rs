//! # Terminal UI
//!
//! Keyboard-driven dashboard built on ratatui + crossterm.
//! Views render from feed snapshots; they never write to the feed.

pub mod alerts;
pub mod analysis;
pub mod app;
pub mod dashboard;
pub mod login;
pub mod style;

use std::io::{self, stdout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing::{info, warn};

use crate::config::AppConfig;
pub use app::{App, Notice, Tab};

// =============================================================================
// RAII TERMINAL GUARD (restores the terminal on error or panic)
// =============================================================================

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the interactive dashboard until the user quits.
pub async fn run_dashboard(config: &AppConfig, user: Option<&str>) -> Result<()> {
    let mut app = App::new(config.feed.clone());
    if let Some(identifier) = user {
        if let Err(e) = app.login(identifier) {
            warn!(error = %e, "[TUI] --user rejected, showing login screen");
        }
    }

    let _guard = TerminalGuard::enter()?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout())).context("creating terminal")?;
    let tick_rate = config.ui.tick_rate();

    loop {
        terminal.draw(|frame| app.render(frame))?;

        // event::poll blocks the worker thread; feed tasks run on the others.
        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if app.should_quit() {
            break;
        }
        tokio::task::yield_now().await;
    }

    info!("[TUI] Dashboard closed");
    Ok(())
}

/// Banner for headless mode. Goes to stderr; stdout carries the JSON lines.
pub fn print_headless_banner(service_name: &str, ticks: u64) {
    eprintln!("═══════════════════════════════════════════════════════════════");
    eprintln!("        {} - Headless Mode", service_name);
    eprintln!("═══════════════════════════════════════════════════════════════");
    eprintln!("[HEADLESS] Stopping after {} price ticks", ticks);
    eprintln!("[HEADLESS] Press Ctrl+C to stop early");
    eprintln!("═══════════════════════════════════════════════════════════════");
}

/// Rectangle of `percent_x` width and `height` rows centred in `area`.
pub(crate) fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let width = area.width.saturating_mul(percent_x.min(100)) / 100;
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(50, 10, area);
        assert_eq!(r, Rect::new(25, 15, 50, 10));

        let tiny = Rect::new(2, 2, 10, 4);
        let r = centered_rect(60, 11, tiny);
        assert_eq!(r.height, 4);
        assert!(r.x >= tiny.x && r.right() <= tiny.right());
    }
}
