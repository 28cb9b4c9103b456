//! Dashboard tab: greeting, market ticker, sensor cards and the 24h chart.
//!
//! The view owns its `TelemetryFeed`. Dropping the view (switching tabs,
//! logging out) drops the feed, which cancels every tick task.

use chrono::Local;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, Paragraph, Sparkline},
};
use safecafe_feed::{daily_charts, FeedConfig, FeedError, FeedReceivers, TelemetryFeed};
use safecafe_models::{ChartKind, ChartSeries, MarketPrice, MarketSummary, ReadingHistory, SensorReading};

use super::style;

const STATION_COLORS: [Color; 3] = [Color::LightBlue, Color::LightMagenta, Color::LightYellow];

pub struct DashboardView {
    feed: TelemetryFeed,
    receivers: FeedReceivers,
    temperature: ChartSeries,
    humidity: ChartSeries,
    chart_kind: ChartKind,
    greeting: String,
}

impl DashboardView {
    pub fn new(config: &FeedConfig, greeting: &str) -> Result<Self, FeedError> {
        let feed = TelemetryFeed::start(config)?;
        let receivers = feed.subscribe();
        let (temperature, humidity) = daily_charts(config);
        Ok(Self {
            feed,
            receivers,
            temperature,
            humidity,
            chart_kind: ChartKind::Temperature,
            greeting: greeting.to_string(),
        })
    }

    pub fn chart_kind(&self) -> ChartKind {
        self.chart_kind
    }

    pub fn feed_running(&self) -> bool {
        self.feed.is_running()
    }

    pub fn receivers(&self) -> FeedReceivers {
        self.receivers.clone()
    }

    /// Returns true when the key was consumed.
    pub fn on_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('c') => {
                self.chart_kind = self.chart_kind.toggle();
                true
            }
            _ => false,
        }
    }

    fn active_series(&self) -> &ChartSeries {
        match self.chart_kind {
            ChartKind::Temperature => &self.temperature,
            ChartKind::Humidity => &self.humidity,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let snapshot = self.receivers.snapshot();
        let history = self.receivers.sensors.borrow().history.clone();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Greeting
                Constraint::Length(7), // Market ticker
                Constraint::Length(6), // Sensor cards
                Constraint::Min(10),   // Chart
            ])
            .split(area);

        let greeting = Paragraph::new(Line::from(vec![
            Span::raw("Hello, "),
            Span::styled(
                self.greeting.clone(),
                Style::default().fg(style::ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::raw("! Here is your farm today."),
        ]))
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(greeting, chunks[0]);

        let market_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[1]);
        render_featured_panel(
            frame,
            market_chunks[0],
            snapshot.featured_price(),
            &snapshot.summary,
        );
        render_markets_panel(frame, market_chunks[1], &snapshot.prices, snapshot.featured);

        render_sensor_cards(frame, chunks[2], &snapshot.sensors, &history);
        render_chart_panel(frame, chunks[3], self.active_series());
    }
}

fn render_featured_panel(
    frame: &mut Frame,
    area: Rect,
    featured: Option<&MarketPrice>,
    summary: &MarketSummary,
) {
    let mut lines = match featured {
        Some(price) => {
            let color = style::price_color(price.direction());
            vec![
                Line::from(Span::styled(price.market.clone(), style::title())),
                Line::from(vec![
                    Span::styled(
                        price.formatted_price(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" /{}", price.unit), style::dim()),
                ]),
                Line::from(Span::styled(
                    format!("{} {}", price.direction().glyph(), price.formatted_change()),
                    Style::default().fg(color),
                )),
                Line::from(Span::styled(
                    format!(
                        "{} · updated {}",
                        price.currency,
                        price.last_update.with_timezone(&Local).format("%H:%M:%S")
                    ),
                    style::dim(),
                )),
            ]
        }
        None => vec![Line::from(Span::styled("No market data", style::dim()))],
    };
    lines.push(Line::from(vec![
        Span::styled(format!("▲ {}", summary.up), Style::default().fg(Color::Green)),
        Span::raw("  "),
        Span::styled(format!("▼ {}", summary.down), Style::default().fg(Color::Red)),
        Span::raw("  "),
        Span::styled(format!("■ {}", summary.flat), Style::default().fg(Color::Gray)),
    ]));

    let panel = Paragraph::new(lines)
        .block(Block::default().title("Coffee Market").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_markets_panel(
    frame: &mut Frame,
    area: Rect,
    prices: &[MarketPrice],
    featured: Option<usize>,
) {
    let items: Vec<ListItem> = prices
        .iter()
        .enumerate()
        .map(|(i, price)| {
            let marker = if featured == Some(i) { "▶ " } else { "  " };
            let color = style::price_color(price.direction());
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(format!("{:<14}", price.market), Style::default().fg(Color::White)),
                Span::raw(format!("{:>14} ", price.formatted_price())),
                Span::styled(
                    format!("{} {}", price.direction().glyph(), price.formatted_change()),
                    Style::default().fg(color),
                ),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().title("All Markets").borders(Borders::ALL));
    frame.render_widget(list, area);
}

fn render_sensor_cards(
    frame: &mut Frame,
    area: Rect,
    readings: &[SensorReading],
    history: &[ReadingHistory],
) {
    if readings.is_empty() {
        return;
    }
    let constraints = vec![Constraint::Ratio(1, readings.len() as u32); readings.len()];
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, reading) in readings.iter().enumerate() {
        let color = style::sensor_status_color(reading.status);
        let block = Block::default()
            .title(reading.display_name.clone())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        let inner = block.inner(cards[i]);
        frame.render_widget(block, cards[i]);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(inner);

        let headline = Paragraph::new(vec![
            Line::from(vec![
                Span::styled(
                    reading.formatted_value(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    reading.trend.arrow(),
                    Style::default().fg(style::trend_color(reading.trend)),
                ),
            ]),
            Line::from(Span::styled(reading.status.label(), Style::default().fg(color))),
        ]);
        frame.render_widget(headline, rows[0]);

        if let Some(h) = history.get(i) {
            let data = sparkline_data(h);
            let spark = Sparkline::default()
                .data(&data)
                .style(Style::default().fg(color));
            frame.render_widget(spark, rows[1]);
        }
    }
}

/// Scale a history window onto 0..=100 for the sparkline widget.
fn sparkline_data(history: &ReadingHistory) -> Vec<u64> {
    let Some((lo, hi)) = history.bounds() else {
        return Vec::new();
    };
    let span = hi - lo;
    history
        .iter()
        .map(|v| {
            if span > 0.0 {
                (((v - lo) / span) * 100.0).round() as u64
            } else {
                50
            }
        })
        .collect()
}

fn render_chart_panel(frame: &mut Frame, area: Rect, series: &ChartSeries) {
    let average: Vec<(f64, f64)> = series
        .points
        .iter()
        .map(|p| (f64::from(p.hour), p.value))
        .collect();
    let stations: Vec<Vec<(f64, f64)>> = (0..3)
        .map(|s| {
            series
                .points
                .iter()
                .map(|p| (f64::from(p.hour), p.stations[s]))
                .collect()
        })
        .collect();

    let mut datasets = vec![Dataset::default()
        .name("Average")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .data(&average)];
    for (i, points) in stations.iter().enumerate() {
        datasets.push(
            Dataset::default()
                .name(format!("Station {}", i + 1))
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(STATION_COLORS[i]))
                .data(points),
        );
    }

    let (lo, hi) = series.bounds().unwrap_or((0.0, 1.0));
    let pad = ((hi - lo) * 0.1).max(0.5);
    let (y_min, y_max) = (lo - pad, hi + pad);
    let x_max = series.points.len().saturating_sub(1).max(1) as f64;

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!("{} - press c to switch", series.kind.title()))
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("hour")
                .style(style::dim())
                .bounds([0.0, x_max])
                .labels(vec![
                    Span::raw("00h"),
                    Span::raw("12h"),
                    Span::raw(format!("{:02}h", x_max as u32)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(series.kind.unit())
                .style(style::dim())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{:.0}", y_min)),
                    Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{:.0}", y_max)),
                ]),
        );
    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sparkline_scales_to_percent() {
        let mut h = ReadingHistory::new(4);
        for v in [10.0, 15.0, 20.0] {
            h.push(v);
        }
        assert_eq!(sparkline_data(&h), vec![0, 50, 100]);
    }

    #[test]
    fn test_sparkline_flat_history() {
        let mut h = ReadingHistory::new(4);
        h.push(3.0);
        h.push(3.0);
        assert_eq!(sparkline_data(&h), vec![50, 50]);
        assert!(sparkline_data(&ReadingHistory::new(4)).is_empty());
    }

    #[test]
    fn test_featured_panel_shows_currency_and_update_time() {
        use chrono::{TimeZone, Utc};
        use ratatui::backend::TestBackend;
        use safecafe_models::seed;

        let stamp = Utc.with_ymd_and_hms(2026, 3, 14, 9, 5, 7).unwrap();
        let prices = seed::markets(stamp);
        let summary = MarketSummary::from_prices(&prices);
        let mut terminal = Terminal::new(TestBackend::new(60, 8)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_featured_panel(frame, area, prices.get(1), &summary)
            })
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        let expected_time = stamp.with_timezone(&Local).format("%H:%M:%S").to_string();
        assert!(screen.contains("BMF Santos"));
        assert!(screen.contains(&format!("BRL · updated {}", expected_time)));
    }

    #[tokio::test]
    async fn test_chart_toggle_and_drop_stops_feed() {
        let mut view = DashboardView::new(&FeedConfig::default(), "ana").unwrap();
        assert!(view.feed_running());
        assert_eq!(view.chart_kind(), ChartKind::Temperature);
        assert!(view.on_key(KeyEvent::from(KeyCode::Char('c'))));
        assert_eq!(view.chart_kind(), ChartKind::Humidity);
        assert!(!view.on_key(KeyEvent::from(KeyCode::Char('x'))));

        let mut prices = view.receivers().prices;
        drop(view);
        assert!(prices.changed().await.is_err());
    }
}
