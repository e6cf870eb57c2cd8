//! Dashboard module - overview built from the other pages' records

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use rust_decimal::Decimal;

use crate::core::{Action, Command, Context, Module, NotifyLevel};
use crate::domain::equipment::EquipmentItem;
use crate::domain::expense::Expense;
use crate::domain::money::format_money;
use crate::domain::payroll::{PayrollRecord, PayrollStatus};
use crate::domain::task::{Task, TaskStatus};
use crate::domain::{Record, StatCard};
use crate::nav::Route;
use crate::ui;

const NO_CREATE_NOTE: &str = "Record creation is not available in this build";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashboardPanel {
    #[default]
    Activity,
    Alerts,
    QuickActions,
}

impl DashboardPanel {
    const ALL: [DashboardPanel; 3] = [
        DashboardPanel::Activity,
        DashboardPanel::Alerts,
        DashboardPanel::QuickActions,
    ];

    fn index(self) -> usize {
        match self {
            DashboardPanel::Activity => 0,
            DashboardPanel::Alerts => 1,
            DashboardPanel::QuickActions => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityItem {
    pub route: Route,
    pub record_id: String,
    pub date: NaiveDate,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub level: NotifyLevel,
    pub route: Route,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuickAction {
    pub label: &'static str,
    pub route: Route,
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        label: "Add Expense",
        route: Route::Expenses,
    },
    QuickAction {
        label: "Add Equipment",
        route: Route::Inventory,
    },
    QuickAction {
        label: "Create Task",
        route: Route::Tasks,
    },
    QuickAction {
        label: "Process Payroll",
        route: Route::Payroll,
    },
];

/// Figures shown on the dashboard. Always computed over the full record sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overview {
    pub total_expenses: Decimal,
    pub equipment_units: u32,
    pub active_tasks: usize,
    pub monthly_payroll: Decimal,
    pub activity: Vec<ActivityItem>,
    pub alerts: Vec<Alert>,
}

impl Overview {
    pub fn build(
        expenses: &[Expense],
        equipment: &[EquipmentItem],
        tasks: &[Task],
        payroll: &[PayrollRecord],
    ) -> Self {
        let mut activity = Vec::new();

        if let Some(expense) = expenses
            .iter()
            .max_by_key(|e| (e.date, std::cmp::Reverse(e.id)))
        {
            activity.push(ActivityItem {
                route: Route::Expenses,
                record_id: expense.record_id(),
                date: expense.date,
                text: format!("Expense filed: {}", expense.description),
            });
        }

        for item in equipment {
            if let (Some(who), Some(since)) = (&item.borrowed_by, item.borrow_date) {
                activity.push(ActivityItem {
                    route: Route::Inventory,
                    record_id: item.record_id(),
                    date: since,
                    text: format!("{} borrowed by {}", item.name, who),
                });
            }
        }

        if let Some(task) = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .max_by_key(|t| (t.date, t.end_time))
        {
            activity.push(ActivityItem {
                route: Route::Tasks,
                record_id: task.record_id(),
                date: task.date,
                text: format!("Task completed: {}", task.name),
            });
        }

        let last_paid = payroll
            .iter()
            .filter(|p| p.status == PayrollStatus::Paid)
            .map(|p| p.payment_date)
            .max();
        if let Some(paid_on) = last_paid {
            let batch: Vec<&PayrollRecord> = payroll
                .iter()
                .filter(|p| p.status == PayrollStatus::Paid && p.payment_date == paid_on)
                .collect();
            if let Some(first) = batch.first() {
                activity.push(ActivityItem {
                    route: Route::Payroll,
                    record_id: first.record_id(),
                    date: paid_on,
                    text: format!("Payroll paid to {} employees", batch.len()),
                });
            }
        }

        // Newest first; ties keep insertion order.
        activity.sort_by(|a, b| b.date.cmp(&a.date));

        let mut alerts = Vec::new();
        let overdue = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Overdue)
            .count();
        if overdue > 0 {
            alerts.push(Alert {
                level: NotifyLevel::Error,
                route: Route::Tasks,
                text: format!("{overdue} overdue task(s)"),
            });
        }
        let borrowed: u32 = equipment.iter().map(|e| e.borrowed_quantity).sum();
        if borrowed > 0 {
            alerts.push(Alert {
                level: NotifyLevel::Info,
                route: Route::Inventory,
                text: format!("{borrowed} tool(s) currently borrowed"),
            });
        }
        for item in equipment.iter().filter(|e| !e.quantities_consistent()) {
            alerts.push(Alert {
                level: NotifyLevel::Warn,
                route: Route::Inventory,
                text: format!("{} ({}) quantities do not add up", item.name, item.id),
            });
        }
        let outstanding = payroll
            .iter()
            .filter(|p| p.status.is_outstanding())
            .count();
        if outstanding > 0 {
            alerts.push(Alert {
                level: NotifyLevel::Warn,
                route: Route::Payroll,
                text: format!("{outstanding} payroll record(s) pending or on hold"),
            });
        }

        Self {
            total_expenses: expenses.iter().map(|e| e.amount).sum(),
            equipment_units: equipment.iter().map(|e| e.total_quantity).sum(),
            active_tasks: tasks
                .iter()
                .filter(|t| t.status != TaskStatus::Completed)
                .count(),
            monthly_payroll: payroll.iter().map(|p| p.gross_pay).sum(),
            activity,
            alerts,
        }
    }

    pub fn cards(&self, currency: &str) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Expenses", format_money(self.total_expenses, currency)),
            StatCard::new("Equipment Items", self.equipment_units.to_string()),
            StatCard::new("Active Tasks", self.active_tasks.to_string()),
            StatCard::new("Monthly Payroll", format_money(self.monthly_payroll, currency)),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Dashboard {
    overview: Overview,
    active_panel: DashboardPanel,
    /// Cursor per panel, indexed by `DashboardPanel::index`.
    cursors: [usize; 3],
}

impl Dashboard {
    pub fn new(overview: Overview) -> Self {
        Self {
            overview,
            active_panel: DashboardPanel::default(),
            cursors: [0; 3],
        }
    }

    pub fn overview(&self) -> &Overview {
        &self.overview
    }

    pub fn active_panel(&self) -> DashboardPanel {
        self.active_panel
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.active_panel.index()]
    }

    pub fn next_panel(&mut self) {
        let idx = (self.active_panel.index() + 1) % DashboardPanel::ALL.len();
        self.active_panel = DashboardPanel::ALL[idx];
    }

    pub fn prev_panel(&mut self) {
        let len = DashboardPanel::ALL.len();
        let idx = (self.active_panel.index() + len - 1) % len;
        self.active_panel = DashboardPanel::ALL[idx];
    }

    fn panel_len(&self, panel: DashboardPanel) -> usize {
        match panel {
            DashboardPanel::Activity => self.overview.activity.len(),
            DashboardPanel::Alerts => self.overview.alerts.len(),
            DashboardPanel::QuickActions => QUICK_ACTIONS.len(),
        }
    }

    pub fn move_cursor(&mut self, down: bool) {
        let len = self.panel_len(self.active_panel);
        let cursor = &mut self.cursors[self.active_panel.index()];
        if down {
            if *cursor + 1 < len {
                *cursor += 1;
            }
        } else {
            *cursor = cursor.saturating_sub(1);
        }
    }

    /// What Enter does on the focused panel.
    pub fn activate(&self) -> Action {
        let cursor = self.cursor();
        match self.active_panel {
            DashboardPanel::Activity => match self.overview.activity.get(cursor) {
                Some(item) => Action::OpenRecord {
                    route: item.route,
                    id: item.record_id.clone(),
                },
                None => Action::None,
            },
            DashboardPanel::Alerts => match self.overview.alerts.get(cursor) {
                Some(alert) => Action::Navigate {
                    route: alert.route,
                    note: None,
                },
                None => Action::None,
            },
            DashboardPanel::QuickActions => match QUICK_ACTIONS.get(cursor) {
                Some(quick) => Action::Navigate {
                    route: quick.route,
                    note: Some(format!("{}: {NO_CREATE_NOTE}", quick.label)),
                },
                None => Action::None,
            },
        }
    }
}

impl Module for Dashboard {
    fn id(&self) -> &'static str {
        "dashboard"
    }

    fn handle_key(&mut self, key: KeyEvent, _ctx: &mut Context) -> Action {
        match key.code {
            KeyCode::Tab => self.next_panel(),
            KeyCode::BackTab => self.prev_panel(),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(true),
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(false),
            KeyCode::Enter => return self.activate(),
            _ => {}
        }
        Action::None
    }

    fn handle_command(&mut self, cmd: &Command, _ctx: &mut Context) -> Action {
        match cmd {
            Command::Search(_) | Command::Filter(_) | Command::Open(_) | Command::Export(_) => {
                Action::warn("The dashboard has no records of its own")
            }
            _ => Action::None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &Context) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Min(4),
            ])
            .split(area);

        ui::draw_stat_cards(frame, chunks[0], &self.overview.cards(&ctx.currency));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                "Tab switch panel  j/k move  Enter open",
                Style::default().fg(Color::DarkGray),
            ))),
            chunks[1],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(4), Constraint::Length(6)])
            .split(columns[1]);

        self.render_activity_panel(frame, columns[0]);
        self.render_alerts_panel(frame, right[0]);
        self.render_quick_actions(frame, right[1]);
    }

    fn reset(&mut self) {
        self.active_panel = DashboardPanel::default();
        self.cursors = [0; 3];
    }
}

impl Dashboard {
    fn render_list(
        &self,
        frame: &mut Frame,
        area: Rect,
        panel: DashboardPanel,
        title: &str,
        items: Vec<ListItem<'static>>,
    ) {
        let is_active = self.active_panel == panel;
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(self.cursors[panel.index()]));
        }
        let highlight = if is_active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items)
            .block(ui::panel(title, is_active))
            .highlight_style(highlight);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_activity_panel(&self, frame: &mut Frame, area: Rect) {
        let items = self
            .overview
            .activity
            .iter()
            .map(|item| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        item.date.format("%b %d  ").to_string(),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::raw(item.text.clone()),
                ]))
            })
            .collect();
        self.render_list(frame, area, DashboardPanel::Activity, " Recent Activity ", items);
    }

    fn render_alerts_panel(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem<'static>> = if self.overview.alerts.is_empty() {
            vec![ListItem::new("All clear")]
        } else {
            self.overview
                .alerts
                .iter()
                .map(|alert| {
                    let color = match alert.level {
                        NotifyLevel::Info => Color::LightBlue,
                        NotifyLevel::Warn => Color::LightYellow,
                        NotifyLevel::Error => Color::LightRed,
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled("● ", Style::default().fg(color)),
                        Span::raw(alert.text.clone()),
                    ]))
                })
                .collect()
        };
        self.render_list(frame, area, DashboardPanel::Alerts, " Alerts ", items);
    }

    fn render_quick_actions(&self, frame: &mut Frame, area: Rect) {
        let items = QUICK_ACTIONS
            .iter()
            .map(|quick| ListItem::new(format!("+ {}", quick.label)))
            .collect();
        self.render_list(frame, area, DashboardPanel::QuickActions, " Quick Actions ", items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;
    use rust_decimal_macros::dec;

    fn dashboard() -> Dashboard {
        Dashboard::new(Overview::build(
            &seed::expenses(),
            &seed::equipment(),
            &seed::tasks(),
            &seed::payroll(),
        ))
    }

    #[test]
    fn test_overview_figures() {
        let overview = dashboard().overview;
        assert_eq!(overview.total_expenses, dec!(3014.30));
        assert_eq!(overview.equipment_units, 67);
        assert_eq!(overview.active_tasks, 5);
        assert_eq!(overview.monthly_payroll, dec!(14864.00));
    }

    #[test]
    fn test_cards_use_currency() {
        let cards = dashboard().overview.cards("₱");
        assert_eq!(cards[0].label, "Total Expenses");
        assert_eq!(cards[0].value, "₱3,014.30");
        assert_eq!(cards[3].value, "₱14,864.00");
    }

    #[test]
    fn test_activity_entries() {
        let overview = dashboard().overview;
        let texts: Vec<&str> = overview.activity.iter().map(|a| a.text.as_str()).collect();
        assert!(texts.contains(&"Task completed: Inventory Count"));
        assert!(texts.contains(&"Payroll paid to 3 employees"));
        assert_eq!(
            overview
                .activity
                .iter()
                .filter(|a| a.route == Route::Inventory)
                .count(),
            4
        );
        // Newest first.
        assert!(overview
            .activity
            .windows(2)
            .all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn test_alerts() {
        let overview = dashboard().overview;
        let texts: Vec<&str> = overview.alerts.iter().map(|a| a.text.as_str()).collect();
        assert!(texts.contains(&"1 overdue task(s)"));
        assert!(texts.contains(&"5 tool(s) currently borrowed"));
        assert!(texts.contains(&"2 payroll record(s) pending or on hold"));
        assert!(texts.iter().any(|t| t.contains("EQ005")));
    }

    #[test]
    fn test_empty_overview_has_no_alerts() {
        let overview = Overview::build(&[], &[], &[], &[]);
        assert_eq!(overview.total_expenses, Decimal::ZERO);
        assert!(overview.activity.is_empty());
        assert!(overview.alerts.is_empty());
    }

    #[test]
    fn test_quick_action_navigates_with_note() {
        let mut dash = dashboard();
        dash.next_panel();
        dash.next_panel();
        assert_eq!(dash.active_panel(), DashboardPanel::QuickActions);
        dash.move_cursor(true);
        match dash.activate() {
            Action::Navigate { route, note } => {
                assert_eq!(route, Route::Inventory);
                assert!(note.unwrap().starts_with("Add Equipment"));
            }
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn test_activity_opens_record() {
        let dash = dashboard();
        assert!(matches!(dash.activate(), Action::OpenRecord { .. }));
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut dash = dashboard();
        dash.prev_panel();
        assert_eq!(dash.active_panel(), DashboardPanel::QuickActions);
        for _ in 0..10 {
            dash.move_cursor(true);
        }
        assert_eq!(dash.cursor(), QUICK_ACTIONS.len() - 1);
        dash.move_cursor(false);
        assert_eq!(dash.cursor(), QUICK_ACTIONS.len() - 2);
    }
}
