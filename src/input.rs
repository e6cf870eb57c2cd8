//! Keyboard and mouse handling.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, Focus, InputMode};
use crate::nav::Route;
use crate::ui;

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind == KeyEventKind::Release {
        return;
    }
    if !app.session.is_logged_in() {
        handle_login_key(app, key, now);
        return;
    }
    if app.help_open {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }
    match app.input_mode {
        InputMode::Command => handle_command_mode(app, key, now),
        InputMode::Search => handle_search_mode(app, key, now),
        InputMode::Normal => handle_normal_mode(app, key, now),
    }
}

fn handle_login_key(app: &mut App, key: KeyEvent, now: Instant) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.should_quit = true,
        KeyCode::Esc => app.should_quit = true,
        // Input is frozen while the delay runs.
        _ if app.session.is_authenticating() => {}
        KeyCode::Char('r') if ctrl => {
            let form = &mut app.session.form;
            form.reveal_password = !form.reveal_password;
        }
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.session.form.toggle_focus()
        }
        KeyCode::Enter => app.submit_login(now),
        KeyCode::Backspace => {
            app.session.form.focused_mut().pop();
        }
        KeyCode::Char(c) if !ctrl => app.session.form.focused_mut().push(c),
        _ => {}
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent, now: Instant) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('c') {
            app.should_quit = true;
        }
        return;
    }
    match key.code {
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        KeyCode::Char('?') => {
            app.help_open = true;
            return;
        }
        KeyCode::Char(':') => {
            app.enter_command();
            return;
        }
        KeyCode::Char('b') => {
            app.toggle_sidebar();
            return;
        }
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            if let Some(route) = Route::from_index(index) {
                app.navigate(route, now);
                app.focus = Focus::Page;
            }
            return;
        }
        _ => {}
    }

    if app.focus == Focus::Sidebar {
        match key.code {
            KeyCode::Tab | KeyCode::Esc => app.toggle_focus(),
            KeyCode::Down | KeyCode::Char('j') => app.move_sidebar_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => app.move_sidebar_cursor(false),
            KeyCode::Enter | KeyCode::Char('l') => {
                if let Some(route) = Route::from_index(app.sidebar_cursor) {
                    app.navigate(route, now);
                }
                app.focus = Focus::Page;
            }
            _ => {}
        }
        return;
    }

    // The dashboard uses Tab for its own panels.
    if key.code == KeyCode::Esc || (key.code == KeyCode::Tab && app.route() != Route::Dashboard) {
        app.toggle_focus();
        return;
    }
    app.dispatch_key(key, now);
}

fn handle_command_mode(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(now),
        KeyCode::Backspace => {
            if app.command.input.pop().is_none() {
                app.exit_command();
            }
        }
        KeyCode::Up => {
            if let Some(last) = app.command.last.clone() {
                app.command.input = last;
            }
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.exit_command()
        }
        KeyCode::Char(c) => app.command.input.push(c),
        _ => {}
    }
}

fn handle_search_mode(app: &mut App, key: KeyEvent, now: Instant) {
    match key.code {
        KeyCode::Esc => app.cancel_search(now),
        KeyCode::Enter => app.accept_search(),
        KeyCode::Backspace => {
            app.command.input.pop();
            app.update_search(now);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.cancel_search(now)
        }
        KeyCode::Char(c) => {
            app.command.input.push(c);
            app.update_search(now);
        }
        _ => {}
    }
}

/// `size` is the full terminal area the last frame was drawn in.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect, now: Instant) {
    if !app.session.is_logged_in() || app.help_open || app.input_mode != InputMode::Normal {
        return;
    }
    let areas = ui::layout::areas(size, app.sidebar.width());
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if rect_contains(areas.sidebar_nav, col, row) {
                let inner = rect_inner(areas.sidebar_nav);
                if !rect_contains(inner, col, row) {
                    return;
                }
                let idx = (row - inner.y) as usize;
                if let Some(route) = Route::from_index(idx) {
                    app.navigate(route, now);
                    app.focus = Focus::Page;
                }
            } else if rect_contains(areas.sidebar_footer, col, row) {
                app.toggle_sidebar();
            } else if rect_contains(areas.body, col, row) {
                app.focus = Focus::Page;
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
            let down = mouse.kind == MouseEventKind::ScrollDown;
            if rect_contains(areas.sidebar, col, row) {
                app.focus = Focus::Sidebar;
                app.move_sidebar_cursor(down);
            } else if rect_contains(areas.body, col, row) {
                let code = if down { KeyCode::Down } else { KeyCode::Up };
                app.dispatch_key(KeyEvent::new(code, KeyModifiers::NONE), now);
            }
        }
        _ => {}
    }
}

pub(crate) fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub(crate) fn rect_inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

/// Which part of the screen takes keys, for the status line.
pub fn describe_focus(app: &App) -> &'static str {
    match (app.focus, app.input_mode) {
        (_, InputMode::Command) => "command",
        (_, InputMode::Search) => "search",
        (Focus::Sidebar, _) => "sidebar",
        (Focus::Page, _) => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_rect_helpers() {
        let rect = Rect::new(2, 3, 10, 4);
        assert!(rect_contains(rect, 2, 3));
        assert!(!rect_contains(rect, 12, 3));
        assert_eq!(rect_inner(rect), Rect::new(3, 4, 8, 2));
    }

    #[test]
    fn test_number_keys_navigate() {
        let mut app = App::new(&Config::default(), true);
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('5')), now);
        assert_eq!(app.route(), Route::Payroll);
        handle_key(&mut app, key(KeyCode::Char('9')), now);
        assert_eq!(app.route(), Route::Payroll);
    }

    #[test]
    fn test_click_sidebar_item() {
        let mut app = App::new(&Config::default(), true);
        let size = Rect::new(0, 0, 120, 40);
        let areas = ui::layout::areas(size, app.sidebar.width());
        let inner = rect_inner(areas.sidebar_nav);
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: inner.x + 1,
            row: inner.y + 2,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, click, size, Instant::now());
        assert_eq!(app.route(), Route::Inventory);
    }

    #[test]
    fn test_login_typing_and_reveal() {
        let mut app = App::new(&Config::default(), false);
        let now = Instant::now();
        handle_key(&mut app, key(KeyCode::Char('a')), now);
        handle_key(&mut app, key(KeyCode::Tab), now);
        handle_key(&mut app, key(KeyCode::Char('x')), now);
        handle_key(&mut app, key(KeyCode::Char('y')), now);
        assert_eq!(app.session.form.username, "a");
        assert_eq!(app.session.form.password_display(), "••");
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL),
            now,
        );
        assert_eq!(app.session.form.password_display(), "xy");
        // `q` is text on the login form.
        handle_key(&mut app, key(KeyCode::Char('q')), now);
        assert!(!app.should_quit);
    }
}
