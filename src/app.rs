use std::time::{Duration, Instant};

use crate::config::Config;
use crate::core::{parse_command, Action, Command, Context, Module, NotifyLevel};
use crate::domain::employee::Employee;
use crate::domain::equipment::EquipmentItem;
use crate::domain::expense::Expense;
use crate::domain::payroll::PayrollRecord;
use crate::domain::seed;
use crate::domain::task::Task;
use crate::modules::dashboard::{Dashboard, Overview};
use crate::modules::pages::Page;
use crate::nav::{Route, Sidebar, Transition};
use crate::session::Session;

const STATUS_TTL: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Sidebar,
    Page,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Command,
    /// Live search: every keystroke updates the page query.
    Search,
}

#[derive(Debug, Clone, Default)]
pub struct CommandBar {
    pub input: String,
    pub last: Option<String>,
}

#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: NotifyLevel,
    pub since: Instant,
}

pub struct App {
    pub ctx: Context,
    pub session: Session,
    pub sidebar: Sidebar,
    route: Route,
    transition: Option<Transition>,
    pub focus: Focus,
    pub sidebar_cursor: usize,
    pub input_mode: InputMode,
    pub command: CommandBar,
    /// Query to restore when a live search is cancelled.
    search_backup: Option<String>,
    pub dashboard: Dashboard,
    pub expenses: Page<Expense>,
    pub inventory: Page<EquipmentItem>,
    pub tasks: Page<Task>,
    pub payroll: Page<PayrollRecord>,
    pub employees: Page<Employee>,
    status: Option<StatusMessage>,
    pub help_open: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &Config, skip_login: bool) -> Self {
        let delay = Duration::from_millis(config.login_delay_ms);
        let session = if skip_login {
            Session::signed_in(delay, "Admin")
        } else {
            Session::new(delay)
        };
        let sidebar = if config.sidebar_collapsed {
            Sidebar::Collapsed
        } else {
            Sidebar::Expanded
        };

        let expenses = seed::expenses();
        let equipment = seed::equipment();
        let tasks = seed::tasks();
        let payroll = seed::payroll();
        let dashboard = Dashboard::new(Overview::build(&expenses, &equipment, &tasks, &payroll));

        Self {
            ctx: Context::from_config(config),
            session,
            sidebar,
            route: Route::default(),
            transition: None,
            focus: Focus::Page,
            sidebar_cursor: 0,
            input_mode: InputMode::Normal,
            command: CommandBar::default(),
            search_backup: None,
            dashboard,
            expenses: Page::new(expenses),
            inventory: Page::new(equipment),
            tasks: Page::new(tasks),
            payroll: Page::new(payroll),
            employees: Page::new(seed::employees()),
            status: None,
            help_open: false,
            should_quit: false,
        }
    }

    pub fn route(&self) -> Route {
        self.route
    }

    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Horizontal offset of the page body while a transition runs.
    pub fn transition_offset(&self, now: Instant) -> u16 {
        self.transition.map_or(0, |t| t.offset(now))
    }

    pub fn navigate(&mut self, route: Route, now: Instant) {
        self.sidebar_cursor = route.index();
        if route == self.route {
            return;
        }
        tracing::debug!(from = self.route.path(), to = route.path(), "navigate");
        self.route = route;
        self.transition = Some(Transition::start(now));
    }

    pub fn active_module(&self) -> &dyn Module {
        match self.route {
            Route::Dashboard => &self.dashboard,
            Route::Expenses => &self.expenses,
            Route::Inventory => &self.inventory,
            Route::Tasks => &self.tasks,
            Route::Payroll => &self.payroll,
            Route::Employees => &self.employees,
        }
    }

    pub fn active_module_mut(&mut self) -> &mut dyn Module {
        match self.route {
            Route::Dashboard => &mut self.dashboard,
            Route::Expenses => &mut self.expenses,
            Route::Inventory => &mut self.inventory,
            Route::Tasks => &mut self.tasks,
            Route::Payroll => &mut self.payroll,
            Route::Employees => &mut self.employees,
        }
    }

    fn module_mut(&mut self, route: Route) -> &mut dyn Module {
        match route {
            Route::Dashboard => &mut self.dashboard,
            Route::Expenses => &mut self.expenses,
            Route::Inventory => &mut self.inventory,
            Route::Tasks => &mut self.tasks,
            Route::Payroll => &mut self.payroll,
            Route::Employees => &mut self.employees,
        }
    }

    pub fn set_status(&mut self, text: impl Into<String>, level: NotifyLevel) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level,
            since: Instant::now(),
        });
    }

    pub fn status_text(&self) -> Option<(&str, NotifyLevel)> {
        self.status
            .as_ref()
            .map(|status| (status.text.as_str(), status.level))
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.session.tick(now) {
            self.route = Route::Dashboard;
            self.sidebar_cursor = 0;
            self.transition = Some(Transition::start(now));
            let user = self.session.user().unwrap_or_default().to_string();
            self.set_status(format!("Welcome, {user}"), NotifyLevel::Info);
        }
        if self.transition.is_some_and(|t| t.is_done(now)) {
            self.transition = None;
        }
        if let Some(status) = self.status.as_ref() {
            if now.saturating_duration_since(status.since) > STATUS_TTL {
                self.status = None;
            }
        }
    }

    pub fn submit_login(&mut self, now: Instant) {
        self.session.submit(now);
    }

    /// Sign out and put every page back to its initial state.
    pub fn logout(&mut self) {
        self.session.logout();
        self.sidebar = Sidebar::Expanded;
        self.route = Route::Dashboard;
        self.transition = None;
        self.focus = Focus::Page;
        self.sidebar_cursor = 0;
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
        self.search_backup = None;
        self.help_open = false;
        for route in Route::ALL {
            self.module_mut(route).reset();
        }
        self.set_status("Signed out", NotifyLevel::Info);
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar.toggle();
        tracing::debug!(collapsed = self.sidebar.is_collapsed(), "sidebar toggled");
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Page,
            Focus::Page => {
                self.sidebar_cursor = self.route.index();
                Focus::Sidebar
            }
        };
    }

    pub fn move_sidebar_cursor(&mut self, down: bool) {
        if down {
            if self.sidebar_cursor + 1 < Route::ALL.len() {
                self.sidebar_cursor += 1;
            }
        } else {
            self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
        }
    }

    pub fn enter_command(&mut self) {
        self.input_mode = InputMode::Command;
        self.command.input.clear();
    }

    pub fn exit_command(&mut self) {
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn apply_command(&mut self, now: Instant) {
        let input = self.command.input.trim().to_string();
        if input.is_empty() {
            self.exit_command();
            return;
        }
        let cmd = parse_command(&input);
        self.command.last = Some(input);
        self.exit_command();
        let action = self.execute_command(&cmd, now);
        self.apply_action(action, now);
    }

    /// Run a `:` command. Navigation and session commands are handled here,
    /// everything else goes to the current page.
    pub fn execute_command(&mut self, cmd: &Command, now: Instant) -> Action {
        match cmd {
            Command::Go(route) => {
                self.navigate(*route, now);
                Action::None
            }
            Command::Sidebar => {
                self.toggle_sidebar();
                Action::None
            }
            Command::Logout => {
                self.logout();
                Action::None
            }
            Command::Help => {
                self.help_open = true;
                Action::None
            }
            Command::Quit => Action::Quit,
            Command::Unknown(input) => Action::error(format!("Unknown command: {input}")),
            _ => {
                let mut ctx = self.ctx.clone();
                let action = self.active_module_mut().handle_command(cmd, &mut ctx);
                self.ctx = ctx;
                action
            }
        }
    }

    pub fn begin_search(&mut self) {
        if self.active_module().query().is_none() {
            self.set_status("Nothing to search on this page", NotifyLevel::Warn);
            return;
        }
        let current = self.active_module().query().unwrap_or_default().to_string();
        self.search_backup = Some(current.clone());
        self.command.input = current;
        self.input_mode = InputMode::Search;
    }

    /// Push the search buffer to the page.
    pub fn update_search(&mut self, now: Instant) {
        let cmd = Command::Search(self.command.input.clone());
        let action = self.execute_command(&cmd, now);
        self.apply_action(action, now);
    }

    pub fn accept_search(&mut self) {
        self.search_backup = None;
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    pub fn cancel_search(&mut self, now: Instant) {
        if let Some(previous) = self.search_backup.take() {
            self.command.input = previous;
            self.update_search(now);
        }
        self.input_mode = InputMode::Normal;
        self.command.input.clear();
    }

    /// Deliver a key to the current page.
    pub fn dispatch_key(&mut self, key: crossterm::event::KeyEvent, now: Instant) {
        let mut ctx = self.ctx.clone();
        let action = self.active_module_mut().handle_key(key, &mut ctx);
        self.ctx = ctx;
        self.apply_action(action, now);
    }

    pub fn apply_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::None => {}
            Action::Navigate { route, note } => {
                self.navigate(route, now);
                self.focus = Focus::Page;
                if let Some(note) = note {
                    self.set_status(note, NotifyLevel::Info);
                }
            }
            Action::OpenRecord { route, id } => {
                self.navigate(route, now);
                self.focus = Focus::Page;
                let action = self.execute_command(&Command::Open(id), now);
                self.apply_action(action, now);
            }
            Action::Copy(text) => self.copy_to_clipboard(text),
            Action::Notify(text, level) => self.set_status(text, level),
            Action::BeginSearch => self.begin_search(),
            Action::Quit => self.should_quit = true,
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        use arboard::Clipboard;

        self.ctx.set_clipboard(text.clone());
        match Clipboard::new() {
            Ok(mut clipboard) => {
                if clipboard.set_text(text.as_str()).is_ok() {
                    self.set_status(format!("Copied: {text}"), NotifyLevel::Info);
                } else {
                    self.set_status("Failed to copy to clipboard", NotifyLevel::Error);
                }
            }
            Err(err) => {
                tracing::debug!(%err, "clipboard unavailable");
                self.set_status("Clipboard not available", NotifyLevel::Error);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(&Config::default(), true)
    }

    #[test]
    fn test_navigate_starts_transition() {
        let mut app = app();
        let now = Instant::now();
        app.navigate(Route::Tasks, now);
        assert_eq!(app.route(), Route::Tasks);
        assert!(app.transition().is_some());
        assert_eq!(app.transition_offset(now), Transition::OFFSET);

        app.on_tick(now + Transition::DURATION);
        assert!(app.transition().is_none());
        assert_eq!(app.transition_offset(now + Transition::DURATION), 0);
    }

    #[test]
    fn test_same_route_does_not_animate() {
        let mut app = app();
        app.navigate(Route::Dashboard, Instant::now());
        assert!(app.transition().is_none());
    }

    #[test]
    fn test_unknown_command_sets_error() {
        let mut app = app();
        let now = Instant::now();
        app.enter_command();
        app.command.input = "frobnicate".to_string();
        app.apply_command(now);
        assert_eq!(
            app.status_text(),
            Some(("Unknown command: frobnicate", NotifyLevel::Error))
        );
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.command.last.as_deref(), Some("frobnicate"));
    }

    #[test]
    fn test_status_expires() {
        let mut app = app();
        app.set_status("hello", NotifyLevel::Info);
        let now = Instant::now();
        app.on_tick(now);
        assert!(app.status_text().is_some());
        app.on_tick(now + Duration::from_secs(4));
        assert!(app.status_text().is_none());
    }

    #[test]
    fn test_cancel_search_restores_query() {
        let mut app = app();
        let now = Instant::now();
        app.navigate(Route::Expenses, now);
        app.expenses.set_query("tools");
        app.begin_search();
        assert_eq!(app.input_mode, InputMode::Search);
        app.command.input = "cement".to_string();
        app.update_search(now);
        assert_eq!(app.expenses.visible().len(), 1);
        app.cancel_search(now);
        assert_eq!(app.active_module().query(), Some("tools"));
    }

    #[test]
    fn test_dashboard_has_no_search() {
        let mut app = app();
        app.begin_search();
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(app.status_text().is_some());
    }

    #[test]
    fn test_open_record_action_selects_on_target_page() {
        let mut app = app();
        let now = Instant::now();
        app.apply_action(
            Action::OpenRecord {
                route: Route::Inventory,
                id: "eq007".to_string(),
            },
            now,
        );
        assert_eq!(app.route(), Route::Inventory);
        assert_eq!(app.inventory.selected().map(|e| e.id.as_str()), Some("EQ007"));
    }

    #[test]
    fn test_copy_keeps_text_in_context() {
        let mut app = app();
        app.apply_action(Action::Copy("EQ001".to_string()), Instant::now());
        assert_eq!(app.ctx.get_clipboard(), Some("EQ001"));
        assert!(app.status_text().is_some());
    }
}
