//! Drives the terminal app through key presses and renders it into a test backend.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{backend::TestBackend, Terminal};
use safecafe_feed::FeedConfig;
use safecafe_runner::tui::app::ActiveView;
use safecafe_runner::tui::{App, Tab};

fn press(app: &mut App, code: KeyCode) {
    app.on_key(KeyEvent::from(code));
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn render_to_string(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(140, 60)).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    buffer.content().iter().map(|cell| cell.symbol()).collect()
}

fn signed_in_app() -> App {
    let mut app = App::new(FeedConfig {
        seed: Some(11),
        ..Default::default()
    });
    type_text(&mut app, "ana@farm.br");
    press(&mut app, KeyCode::Enter);
    app
}

#[tokio::test]
async fn test_login_shows_greeting_on_dashboard() {
    let app = signed_in_app();
    assert!(app.session().is_authenticated());
    assert_eq!(app.current_tab(), Some(Tab::Dashboard));

    let screen = render_to_string(&app);
    assert!(screen.contains("Hello, ana!"));
    assert!(screen.contains("Coffee Market"));
    assert!(screen.contains("Temperature (24h)"));
}

#[tokio::test]
async fn test_chart_toggle_renders_humidity() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('c'));
    assert!(render_to_string(&app).contains("Humidity (24h)"));
}

#[tokio::test]
async fn test_leaving_dashboard_stops_feed() {
    let mut app = signed_in_app();
    let mut prices = match app.active_view() {
        Some(ActiveView::Dashboard(view)) => view.receivers().prices,
        _ => panic!("dashboard not mounted"),
    };

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.current_tab(), Some(Tab::Alerts));
    assert!(prices.changed().await.is_err());
}

#[tokio::test]
async fn test_resolve_alert_by_keys() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('r'));

    match app.active_view() {
        Some(ActiveView::Alerts(view)) => {
            assert_eq!(view.book().active_count(), 2);
            assert!(view.book().get("1").unwrap().resolved);
        }
        _ => panic!("alerts not mounted"),
    }
    let screen = render_to_string(&app);
    assert!(screen.contains("Active Alerts (2)"));
    assert!(screen.contains("Resolved (2)"));
}

#[tokio::test]
async fn test_alerts_reset_on_remount() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('3'));
    press(&mut app, KeyCode::Char('r'));
    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('3'));

    match app.active_view() {
        Some(ActiveView::Alerts(view)) => assert_eq!(view.book().active_count(), 3),
        _ => panic!("alerts not mounted"),
    }
}

#[tokio::test]
async fn test_capture_request_shows_notice() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Tab);
    assert_eq!(app.current_tab(), Some(Tab::Analysis));
    press(&mut app, KeyCode::Char('n'));

    let screen = render_to_string(&app);
    assert!(screen.contains("not implemented"));
    assert!(screen.contains("/placeholder.svg"));

    press(&mut app, KeyCode::Char('x'));
    assert!(app.notice().is_none());
}

#[tokio::test]
async fn test_logout_returns_to_login() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('l'));
    assert!(!app.session().is_authenticated());
    assert_eq!(app.current_tab(), None);
    assert!(render_to_string(&app).contains("Sign in"));
}

#[tokio::test]
async fn test_quit_from_main_screen() {
    let mut app = signed_in_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit());
}
