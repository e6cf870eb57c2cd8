//! End-to-end flows through `App` and the key handler, with injected time.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use opsboard::app::{App, Focus, InputMode};
use opsboard::config::Config;
use opsboard::core::{Module, NotifyLevel};
use opsboard::input::handle_key;
use opsboard::nav::{Route, Sidebar};
use opsboard::session::SessionState;
use rstest::rstest;

fn press(app: &mut App, code: KeyCode, now: Instant) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE), now);
}

fn type_text(app: &mut App, text: &str, now: Instant) {
    for ch in text.chars() {
        press(app, KeyCode::Char(ch), now);
    }
}

fn run_command(app: &mut App, command: &str, now: Instant) {
    press(app, KeyCode::Char(':'), now);
    type_text(app, command, now);
    press(app, KeyCode::Enter, now);
}

fn signed_in() -> App {
    App::new(&Config::default(), true)
}

#[test]
fn login_completes_after_delay() {
    let config = Config {
        login_delay_ms: 1500,
        ..Config::default()
    };
    let mut app = App::new(&config, false);
    let start = Instant::now();

    type_text(&mut app, "maria", start);
    press(&mut app, KeyCode::Enter, start);
    assert!(app.session.is_authenticating());

    // Keys are ignored while the delay runs.
    type_text(&mut app, "zz", start);
    assert_eq!(app.session.form.username, "maria");

    app.on_tick(start + Duration::from_millis(1499));
    assert!(app.session.is_authenticating());

    app.on_tick(start + Duration::from_millis(1500));
    assert_eq!(app.session.state(), SessionState::LoggedIn);
    assert_eq!(app.session.user(), Some("maria"));
    assert_eq!(app.route(), Route::Dashboard);
    assert_eq!(app.status_text(), Some(("Welcome, maria", NotifyLevel::Info)));
}

#[test]
fn empty_credentials_are_accepted() {
    let mut app = App::new(&Config::default(), false);
    let start = Instant::now();
    press(&mut app, KeyCode::Enter, start);
    app.on_tick(start + Duration::from_secs(2));
    assert!(app.session.is_logged_in());
    assert_eq!(app.session.user(), Some("Admin"));
}

#[rstest]
#[case("expenses", Route::Expenses)]
#[case("inv", Route::Inventory)]
#[case("go /tasks", Route::Tasks)]
#[case("payroll", Route::Payroll)]
#[case("emp", Route::Employees)]
#[case("home", Route::Dashboard)]
fn commands_navigate(#[case] command: &str, #[case] route: Route) {
    let mut app = signed_in();
    let now = Instant::now();
    run_command(&mut app, "tasks", now);
    run_command(&mut app, command, now);
    assert_eq!(app.route(), route);
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn sidebar_keyboard_navigation() {
    let mut app = signed_in();
    let now = Instant::now();
    press(&mut app, KeyCode::Esc, now);
    assert_eq!(app.focus, Focus::Sidebar);
    press(&mut app, KeyCode::Char('j'), now);
    press(&mut app, KeyCode::Char('j'), now);
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.route(), Route::Inventory);
    assert_eq!(app.focus, Focus::Page);
}

#[test]
fn live_search_filters_and_escape_restores() {
    let mut app = signed_in();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('4'), now);
    assert_eq!(app.route(), Route::Tasks);

    press(&mut app, KeyCode::Char('/'), now);
    assert_eq!(app.input_mode, InputMode::Search);
    type_text(&mut app, "drill", now);
    assert_eq!(app.tasks.visible().len(), 1);

    press(&mut app, KeyCode::Esc, now);
    assert_eq!(app.input_mode, InputMode::Normal);
    assert_eq!(app.tasks.visible().len(), 6);

    press(&mut app, KeyCode::Char('/'), now);
    type_text(&mut app, "site", now);
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.tasks.visible().len(), 1);
    assert_eq!(app.active_module().query(), Some("site"));
}

#[test]
fn filter_command_reports_bad_values() {
    let mut app = signed_in();
    let now = Instant::now();
    run_command(&mut app, "expenses", now);
    run_command(&mut app, "filter status:approved", now);
    assert_eq!(app.expenses.visible().len(), 4);

    run_command(&mut app, "filter status:lost", now);
    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, NotifyLevel::Error);
    assert!(text.contains("lost"));
    assert_eq!(app.expenses.visible().len(), 4);
}

#[test]
fn open_unknown_record_sets_error() {
    let mut app = signed_in();
    let now = Instant::now();
    run_command(&mut app, "inventory", now);
    run_command(&mut app, "open EQ999", now);
    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, NotifyLevel::Error);
    assert_eq!(text, "equipment EQ999 not found");

    run_command(&mut app, "open eq005", now);
    assert_eq!(app.inventory.selected().map(|e| e.id.as_str()), Some("EQ005"));
}

#[test]
fn logout_resets_everything() {
    let mut app = signed_in();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('b'), now);
    assert_eq!(app.sidebar, Sidebar::Collapsed);
    run_command(&mut app, "payroll", now);
    run_command(&mut app, "filter status:paid", now);
    assert_eq!(app.payroll.visible().len(), 3);

    run_command(&mut app, "logout", now);
    assert_eq!(app.session.state(), SessionState::LoggedOut);
    assert_eq!(app.sidebar, Sidebar::Expanded);
    assert_eq!(app.route(), Route::Dashboard);
    assert_eq!(app.payroll.visible().len(), 6);
}

#[test]
fn sidebar_toggle_by_key_and_command() {
    let mut app = signed_in();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('b'), now);
    assert!(app.sidebar.is_collapsed());
    run_command(&mut app, "sidebar", now);
    assert!(!app.sidebar.is_collapsed());
}

#[test]
fn collapsed_config_starts_collapsed() {
    let config = Config {
        sidebar_collapsed: true,
        ..Config::default()
    };
    let app = App::new(&config, true);
    assert_eq!(app.sidebar.width(), Sidebar::COLLAPSED_WIDTH);
}

#[test]
fn dashboard_quick_action_navigates_with_note() {
    let mut app = signed_in();
    let now = Instant::now();
    press(&mut app, KeyCode::Tab, now);
    press(&mut app, KeyCode::Tab, now);
    press(&mut app, KeyCode::Enter, now);
    assert_eq!(app.route(), Route::Expenses);
    let (text, _) = app.status_text().unwrap();
    assert!(text.starts_with("Add Expense"));
}

#[test]
fn route_change_slides_in() {
    let mut app = signed_in();
    let now = Instant::now();
    press(&mut app, KeyCode::Char('2'), now);
    assert!(app.transition_offset(now) > 0);
    app.on_tick(now + Duration::from_millis(150));
    assert!(app.transition_offset(now + Duration::from_millis(150)) > 0);
    app.on_tick(now + Duration::from_millis(300));
    assert_eq!(app.transition_offset(now + Duration::from_millis(300)), 0);
}

#[test]
fn export_writes_visible_records() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config {
        export_dir: Some(dir.path().to_path_buf()),
        ..Config::default()
    };
    let mut app = App::new(&config, true);
    let now = Instant::now();
    run_command(&mut app, "employees", now);
    run_command(&mut app, "filter status:under_probation", now);
    run_command(&mut app, "export json", now);

    let (text, level) = app.status_text().unwrap();
    assert_eq!(level, NotifyLevel::Info, "{text}");
    let files: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
    assert_eq!(files.len(), 1);
    let path = files[0].as_ref().unwrap().path();
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(json.as_array().map(Vec::len), Some(2));
}

#[test]
fn quit_key() {
    let mut app = signed_in();
    press(&mut app, KeyCode::Char('q'), Instant::now());
    assert!(app.should_quit);
}
