//! Full-frame rendering against ratatui's test backend.

use std::time::{Duration, Instant};

use opsboard::app::App;
use opsboard::config::Config;
use opsboard::nav::Route;
use opsboard::ui;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn render(app: &App, now: Instant, width: u16, height: u16) -> String {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app, now)).unwrap();
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer.get(x, y).symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn login_screen_masks_password() {
    let mut app = App::new(&Config::default(), false);
    app.session.form.username = "maria".to_string();
    app.session.form.password = "secret".to_string();
    let screen = render(&app, Instant::now(), 100, 30);
    assert!(screen.contains("OPSBOARD"));
    assert!(screen.contains("maria"));
    assert!(screen.contains("••••••"));
    assert!(!screen.contains("secret"));
}

#[test]
fn authenticating_shows_spinner_text() {
    let mut app = App::new(&Config::default(), false);
    let now = Instant::now();
    app.submit_login(now);
    let screen = render(&app, now + Duration::from_millis(300), 100, 30);
    assert!(screen.contains("Signing in..."));
}

#[test]
fn dashboard_shows_cards_and_sidebar() {
    let app = App::new(&Config::default(), true);
    let screen = render(&app, Instant::now(), 140, 40);
    assert!(screen.contains("Total Expenses"));
    assert!(screen.contains("₱3,014.30"));
    assert!(screen.contains("Equipment Inventory"));
    assert!(screen.contains("System Online"));
    assert!(screen.contains("Quick Actions"));
}

#[test]
fn collapsed_sidebar_drops_long_labels() {
    let config = Config {
        sidebar_collapsed: true,
        ..Config::default()
    };
    let app = App::new(&config, true);
    let screen = render(&app, Instant::now(), 140, 40);
    assert!(!screen.contains("Employee Management"));
    assert!(!screen.contains("System Online"));
}

#[test]
fn expenses_page_lists_records() {
    let mut app = App::new(&Config::default(), true);
    let now = Instant::now();
    app.navigate(Route::Expenses, now);
    let screen = render(&app, now + Duration::from_secs(1), 200, 40);
    assert!(screen.contains("RCP-001"));
    assert!(screen.contains("Approved"));
    assert!(screen.contains("Details"));
}

#[test]
fn tiny_terminal_does_not_panic() {
    let mut app = App::new(&Config::default(), true);
    let now = Instant::now();
    for route in Route::ALL {
        app.navigate(route, now);
        render(&app, now, 20, 8);
    }
    app.help_open = true;
    render(&app, now, 20, 8);
}
