//! Status → colour lookups shared by every view.

use ratatui::style::{Color, Modifier, Style};
use safecafe_models::{AlertSeverity, AnalysisKind, AnalysisStatus, PriceDirection, SensorStatus, Trend};

pub const BRAND: Color = Color::Rgb(111, 78, 55);
pub const ACCENT: Color = Color::Green;

pub fn sensor_status_color(status: SensorStatus) -> Color {
    match status {
        SensorStatus::Normal => Color::Green,
        SensorStatus::Warning => Color::Yellow,
        SensorStatus::Alert => Color::Red,
    }
}

pub fn trend_color(trend: Trend) -> Color {
    match trend {
        Trend::Up => Color::Green,
        Trend::Down => Color::Red,
        Trend::Stable => Color::Gray,
    }
}

pub fn price_color(direction: PriceDirection) -> Color {
    match direction {
        PriceDirection::Up => Color::Green,
        PriceDirection::Down => Color::Red,
        PriceDirection::Flat => Color::Gray,
    }
}

/// Resolved alerts render green regardless of severity.
pub fn alert_color(severity: AlertSeverity, resolved: bool) -> Color {
    if resolved {
        return Color::Green;
    }
    match severity {
        AlertSeverity::Alert => Color::Red,
        AlertSeverity::Warning => Color::Yellow,
        AlertSeverity::Info => Color::Blue,
    }
}

pub fn alert_icon(severity: AlertSeverity, resolved: bool) -> &'static str {
    if resolved {
        return "✔";
    }
    match severity {
        AlertSeverity::Alert => "✖",
        AlertSeverity::Warning => "⚠",
        AlertSeverity::Info => "ℹ",
    }
}

pub fn analysis_color(status: AnalysisStatus) -> Color {
    if status.is_favourable() {
        Color::Green
    } else {
        Color::Red
    }
}

pub fn analysis_icon(kind: AnalysisKind, status: AnalysisStatus) -> &'static str {
    match (kind, status.is_favourable()) {
        (AnalysisKind::Leaf, true) => "🍃",
        (AnalysisKind::Leaf, false) => "⚠",
        (AnalysisKind::Fruit, true) => "🍒",
        (AnalysisKind::Fruit, false) => "◔",
    }
}

pub fn title() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

pub fn dim() -> Style {
    Style::default().fg(Color::DarkGray)
}
