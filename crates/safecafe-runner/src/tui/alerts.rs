//! Alerts tab: active alerts with a selection cursor, resolved history below.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState},
};
use safecafe_feed::{AlertBook, AlertError, ResolveOutcome};
use safecafe_models::{format_age, seed, Alert};

use super::style;

pub struct AlertsView {
    book: AlertBook,
    cursor: usize,
}

impl AlertsView {
    pub fn new() -> Self {
        Self::with_book(AlertBook::new(seed::alerts(Utc::now())))
    }

    pub fn with_book(book: AlertBook) -> Self {
        Self { book, cursor: 0 }
    }

    pub fn book(&self) -> &AlertBook {
        &self.book
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn selected_id(&self) -> Option<String> {
        self.book.active().nth(self.cursor).map(|a| a.id.clone())
    }

    pub fn on_key(&mut self, key: KeyEvent) -> Result<Option<ResolveOutcome>, AlertError> {
        let active = self.book.active_count();
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < active {
                    self.cursor += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char('r') => {
                let Some(id) = self.selected_id() else {
                    return Ok(None);
                };
                let outcome = self.book.resolve(&id)?;
                // The resolved alert leaves the active list; keep the cursor in range.
                let remaining = self.book.active_count();
                if self.cursor >= remaining {
                    self.cursor = remaining.saturating_sub(1);
                }
                return Ok(Some(outcome));
            }
            _ => {}
        }
        Ok(None)
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let active: Vec<&Alert> = self.book.active().collect();
        let resolved: Vec<&Alert> = self.book.resolved().collect();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);

        let active_items: Vec<ListItem> = active.iter().map(|a| alert_item(a)).collect();
        let active_list = List::new(active_items)
            .block(
                Block::default()
                    .title(format!(
                        "Active Alerts ({}) - j/k move, r resolve",
                        active.len()
                    ))
                    .borders(Borders::ALL),
            )
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");
        let mut state = ListState::default();
        if !active.is_empty() {
            state.select(Some(self.cursor.min(active.len() - 1)));
        }
        frame.render_stateful_widget(active_list, chunks[0], &mut state);

        let resolved_items: Vec<ListItem> = resolved.iter().map(|a| alert_item(a)).collect();
        let resolved_list = List::new(resolved_items).block(
            Block::default()
                .title(format!("Resolved ({})", resolved.len()))
                .borders(Borders::ALL),
        );
        frame.render_widget(resolved_list, chunks[1]);
    }
}

impl Default for AlertsView {
    fn default() -> Self {
        Self::new()
    }
}

fn alert_item(alert: &Alert) -> ListItem<'static> {
    let color = style::alert_color(alert.severity, alert.resolved);
    let icon = style::alert_icon(alert.severity, alert.resolved);
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                format!("{} {}", icon, alert.title),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  [{}]", alert.severity), Style::default().fg(color)),
            Span::styled(
                format!("  {}", format_age(alert.created_at, Utc::now())),
                style::dim(),
            ),
        ]),
        Line::from(format!("  {}", alert.description)),
    ])
}
