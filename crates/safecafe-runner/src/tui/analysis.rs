//! Predictive analysis tab: static leaf and fruit results.

use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use safecafe_models::{format_age, seed, AnalysisKind, AnalysisResult, AnalysisStats};

use super::app::Notice;
use super::style;

pub struct AnalysisView {
    results: Vec<AnalysisResult>,
    stats: AnalysisStats,
}

impl AnalysisView {
    pub fn new() -> Self {
        Self {
            results: seed::analysis_results(Utc::now()),
            stats: seed::analysis_stats(),
        }
    }

    pub fn results(&self, kind: AnalysisKind) -> impl Iterator<Item = &AnalysisResult> {
        self.results.iter().filter(move |r| r.kind == kind)
    }

    /// `n` requests a new capture, which the farm camera link does not support yet.
    pub fn on_key(&mut self, key: KeyEvent) -> Option<Notice> {
        match key.code {
            KeyCode::Char('n') => Some(Notice::new(
                "New analysis",
                "Image capture is not implemented yet. Results shown are sample data.",
            )),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Min(8)])
            .split(area);

        render_stats_panel(frame, chunks[0], &self.stats);

        let lists = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[1]);
        render_results_panel(frame, lists[0], "Leaf Analysis", self.results(AnalysisKind::Leaf));
        render_results_panel(frame, lists[1], "Fruit Analysis", self.results(AnalysisKind::Fruit));
    }
}

impl Default for AnalysisView {
    fn default() -> Self {
        Self::new()
    }
}

fn render_stats_panel(frame: &mut Frame, area: Rect, stats: &AnalysisStats) {
    let text = vec![
        Line::from(vec![
            Span::raw("Analyses: "),
            Span::styled(stats.total_analyses.to_string(), style::title()),
            Span::raw("   Avg confidence: "),
            Span::styled(
                format!("{:.1}%", stats.average_confidence),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw("   Quality: "),
            Span::styled(stats.quality_grade.clone(), Style::default().fg(style::BRAND)),
        ]),
        Line::from(vec![
            Span::raw("Leaves: "),
            Span::styled(
                format!("{} healthy", stats.healthy_leaves),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} diseased", stats.diseased_leaves),
                Style::default().fg(Color::Red),
            ),
            Span::raw("   Fruit: "),
            Span::styled(
                format!("{} ready", stats.ready_fruits),
                Style::default().fg(Color::Green),
            ),
            Span::raw(" / "),
            Span::styled(
                format!("{} not ready", stats.not_ready_fruits),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(Span::styled("Press n to request a new capture", style::dim())),
    ];

    let panel = Paragraph::new(text)
        .block(Block::default().title("Predictive Analysis").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_results_panel<'a>(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    results: impl Iterator<Item = &'a AnalysisResult>,
) {
    let now = Utc::now();
    let items: Vec<ListItem> = results
        .map(|r| {
            let color = style::analysis_color(r.status);
            let mut lines = vec![
                Line::from(vec![
                    Span::styled(
                        format!("{} {}", style::analysis_icon(r.kind, r.status), r.status.headline()),
                        Style::default().fg(color).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  {:.1}%", r.confidence)),
                    Span::styled(format!("  {}", format_age(r.captured_at, now)), style::dim()),
                ]),
                Line::from(Span::raw(r.details.clone())),
            ];
            if let Some(note) = &r.variety_note {
                lines.push(Line::from(Span::styled(
                    note.clone(),
                    Style::default().fg(style::BRAND),
                )));
            }
            for rec in &r.recommendations {
                lines.push(Line::from(format!("  • {}", rec)));
            }
            lines.push(Line::from(Span::styled(
                format!("  img: {}", r.image_or_placeholder()),
                style::dim(),
            )));
            lines.push(Line::from(""));
            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(Block::default().title(title.to_string()).borders(Borders::ALL));
    frame.render_widget(list, area);
}
