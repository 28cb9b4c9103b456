//! Login screen. Any non-empty identifier is accepted.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::style;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginMode {
    #[default]
    SignIn,
    SignUp,
}

impl LoginMode {
    pub fn toggle(self) -> Self {
        match self {
            LoginMode::SignIn => LoginMode::SignUp,
            LoginMode::SignUp => LoginMode::SignIn,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            LoginMode::SignIn => "Sign in",
            LoginMode::SignUp => "Create account",
        }
    }
}

/// What the login screen asks of the app after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginEvent {
    None,
    Submit(String),
    Quit,
}

#[derive(Debug, Default)]
pub struct LoginView {
    input: String,
    mode: LoginMode,
    error: Option<String>,
}

impl LoginView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn mode(&self) -> LoginMode {
        self.mode
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn on_key(&mut self, key: KeyEvent) -> LoginEvent {
        match key.code {
            KeyCode::Esc => LoginEvent::Quit,
            KeyCode::Enter => LoginEvent::Submit(self.input.clone()),
            KeyCode::Tab => {
                self.mode = self.mode.toggle();
                LoginEvent::None
            }
            KeyCode::Backspace => {
                self.input.pop();
                LoginEvent::None
            }
            KeyCode::Char(c) => {
                self.input.push(c);
                self.error = None;
                LoginEvent::None
            }
            _ => LoginEvent::None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let popup = super::centered_rect(60, 11, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "SafeCafé",
                Style::default().fg(style::BRAND).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled("Coffee farm monitoring", style::dim())),
            Line::from(""),
            Line::from(vec![
                Span::raw("E-mail: "),
                Span::styled(
                    format!("{}_", self.input),
                    Style::default().fg(Color::Yellow),
                ),
            ]),
            Line::from(""),
        ];
        if let Some(err) = &self.error {
            lines.push(Line::from(Span::styled(
                err.clone(),
                Style::default().fg(Color::Red),
            )));
        }
        lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}  ", self.mode.title().to_lowercase())),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(format!(" {}  ", self.mode.toggle().title().to_lowercase())),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(" quit"),
        ]));

        let block = Block::default()
            .title(self.mode.title())
            .borders(Borders::ALL)
            .border_style(Style::default().fg(style::BRAND));
        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, popup);
    }
}
