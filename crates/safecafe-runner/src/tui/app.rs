//! Top-level application state: login screen, tabbed views, modal notice.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
};
use safecafe_feed::{AuthError, FeedConfig, FeedError, Session};
use thiserror::Error;
use tracing::{info, warn};

use super::alerts::AlertsView;
use super::analysis::AnalysisView;
use super::dashboard::DashboardView;
use super::login::{LoginEvent, LoginView};
use super::style;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("login failed: {0}")]
    Auth(#[from] AuthError),

    #[error("dashboard feed failed to start: {0}")]
    Feed(#[from] FeedError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Dashboard,
    Analysis,
    Alerts,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Dashboard, Tab::Analysis, Tab::Alerts];

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Dashboard => "Dashboard",
            Tab::Analysis => "Analysis",
            Tab::Alerts => "Alerts",
        }
    }

    fn index(&self) -> usize {
        match self {
            Tab::Dashboard => 0,
            Tab::Analysis => 1,
            Tab::Alerts => 2,
        }
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Blocking message; any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// The mounted view. Each variant owns its state; switching tabs drops it.
pub enum ActiveView {
    Dashboard(DashboardView),
    Analysis(AnalysisView),
    Alerts(AlertsView),
}

pub enum Screen {
    Login(LoginView),
    Main { tab: Tab, view: ActiveView },
}

pub struct App {
    feed_config: FeedConfig,
    session: Session,
    screen: Screen,
    notice: Option<Notice>,
    should_quit: bool,
}

impl App {
    pub fn new(feed_config: FeedConfig) -> Self {
        Self {
            feed_config,
            session: Session::default(),
            screen: Screen::Login(LoginView::new()),
            notice: None,
            should_quit: false,
        }
    }

    /// Sign in and mount the dashboard. Requires a tokio runtime.
    ///
    /// If the dashboard cannot be mounted the session is rolled back, so an
    /// error always leaves the app signed out on the login screen.
    pub fn login(&mut self, identifier: &str) -> Result<(), AppError> {
        self.session.login(identifier)?;
        if let Err(e) = self.mount(Tab::Dashboard) {
            self.session.logout();
            self.screen = Screen::Login(LoginView::new());
            return Err(e);
        }
        info!(user = identifier.trim(), "[APP] Signed in");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.screen = Screen::Login(LoginView::new());
        info!("[APP] Signed out");
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current_tab(&self) -> Option<Tab> {
        match &self.screen {
            Screen::Login(_) => None,
            Screen::Main { tab, .. } => Some(*tab),
        }
    }

    pub fn active_view(&self) -> Option<&ActiveView> {
        match &self.screen {
            Screen::Login(_) => None,
            Screen::Main { view, .. } => Some(view),
        }
    }

    fn mount(&mut self, tab: Tab) -> Result<(), AppError> {
        // Drop the old view first so its feed stops before a new one starts.
        self.screen = Screen::Login(LoginView::new());
        let view = match tab {
            Tab::Dashboard => {
                let name = self.session.greeting_name().unwrap_or("farmer");
                ActiveView::Dashboard(DashboardView::new(&self.feed_config, name)?)
            }
            Tab::Analysis => ActiveView::Analysis(AnalysisView::new()),
            Tab::Alerts => ActiveView::Alerts(AlertsView::new()),
        };
        self.screen = Screen::Main { tab, view };
        Ok(())
    }

    fn switch_to(&mut self, tab: Tab) {
        if self.current_tab() == Some(tab) {
            return;
        }
        if let Err(e) = self.mount(tab) {
            warn!(error = %e, "[APP] Failed to open tab");
            self.notice = Some(Notice::new("Error", e.to_string()));
        }
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }
        if self.notice.take().is_some() {
            return;
        }

        let tab = match &mut self.screen {
            Screen::Login(login) => {
                let event = login.on_key(key);
                self.on_login_event(event);
                return;
            }
            Screen::Main { tab, .. } => *tab,
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('l') => {
                self.logout();
                return;
            }
            KeyCode::Char('1') => return self.switch_to(Tab::Dashboard),
            KeyCode::Char('2') => return self.switch_to(Tab::Analysis),
            KeyCode::Char('3') => return self.switch_to(Tab::Alerts),
            KeyCode::Tab => return self.switch_to(tab.next()),
            KeyCode::BackTab => return self.switch_to(tab.prev()),
            _ => {}
        }

        if let Screen::Main { view, .. } = &mut self.screen {
            match view {
                ActiveView::Dashboard(dashboard) => {
                    dashboard.on_key(key);
                }
                ActiveView::Analysis(analysis) => {
                    if let Some(notice) = analysis.on_key(key) {
                        self.notice = Some(notice);
                    }
                }
                ActiveView::Alerts(alerts) => {
                    if let Err(e) = alerts.on_key(key) {
                        warn!(error = %e, "[APP] Resolve failed");
                        self.notice = Some(Notice::new("Error", e.to_string()));
                    }
                }
            }
        }
    }

    fn on_login_event(&mut self, event: LoginEvent) {
        match event {
            LoginEvent::None => {}
            LoginEvent::Quit => self.should_quit = true,
            LoginEvent::Submit(identifier) => match self.login(&identifier) {
                Ok(()) => {}
                Err(AppError::Auth(_)) => {
                    if let Screen::Login(login) = &mut self.screen {
                        login.set_error("Please enter your e-mail");
                    }
                }
                Err(e) => {
                    warn!(error = %e, "[APP] Login failed");
                    self.notice = Some(Notice::new("Error", e.to_string()));
                }
            },
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        match &self.screen {
            Screen::Login(login) => login.render(frame, area),
            Screen::Main { tab, view } => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(3), // Tabs
                        Constraint::Min(10),   // View
                        Constraint::Length(3), // Footer
                    ])
                    .split(area);

                render_tabs(frame, chunks[0], *tab);
                match view {
                    ActiveView::Dashboard(v) => v.render(frame, chunks[1]),
                    ActiveView::Analysis(v) => v.render(frame, chunks[1]),
                    ActiveView::Alerts(v) => v.render(frame, chunks[1]),
                }
                render_footer(frame, chunks[2], self.session.identifier().unwrap_or("-"));
            }
        }

        if let Some(notice) = &self.notice {
            render_notice(frame, area, notice);
        }
    }
}

fn render_tabs(frame: &mut Frame, area: Rect, active: Tab) {
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(active.index())
        .block(
            Block::default()
                .title(Span::styled(
                    " SafeCafé ",
                    Style::default().fg(style::BRAND).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_footer(frame: &mut Frame, area: Rect, user: &str) {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));
    let footer = Paragraph::new(Line::from(vec![
        Span::raw("User: "),
        Span::styled(user.to_string(), Style::default().fg(style::ACCENT)),
        Span::raw("  |  "),
        key("1-3/Tab"),
        Span::raw(" switch  "),
        key("l"),
        Span::raw(" logout  "),
        key("q"),
        Span::raw(" quit"),
    ]))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

fn render_notice(frame: &mut Frame, area: Rect, notice: &Notice) {
    let popup = super::centered_rect(50, 7, area);
    let text = vec![
        Line::from(notice.body.clone()),
        Line::from(""),
        Line::from(Span::styled("Press any key to close", style::dim())),
    ];
    let dialog = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(notice.title.clone())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(dialog, popup);
}
