use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Cell;

use super::{field, heading, PageRecord};
use crate::core::Context;
use crate::domain::money::format_hours;
use crate::domain::task::{Priority, Task, TaskFilter, TaskStatus, TaskSummary};
use crate::nav::Route;
use crate::ui::widgets::progress_text;

fn status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Completed => Color::LightGreen,
        TaskStatus::InProgress => Color::LightBlue,
        TaskStatus::Scheduled => Color::LightMagenta,
        TaskStatus::Pending => Color::LightYellow,
        TaskStatus::Overdue => Color::LightRed,
    }
}

fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Gray,
        Priority::Medium => Color::LightYellow,
        Priority::High => Color::LightRed,
        Priority::Critical => Color::Red,
    }
}

impl PageRecord for Task {
    type Filter = TaskFilter;
    type Summary = TaskSummary;

    const ROUTE: Route = Route::Tasks;

    fn columns() -> &'static [(&'static str, Constraint)] {
        &[
            ("Task", Constraint::Min(18)),
            ("Date", Constraint::Length(10)),
            ("Time", Constraint::Length(13)),
            ("Status", Constraint::Length(11)),
            ("Priority", Constraint::Length(8)),
            ("Progress", Constraint::Length(15)),
        ]
    }

    fn cells(&self, _ctx: &Context) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.name.clone()),
            Cell::from(self.date.format("%Y-%m-%d").to_string()),
            Cell::from(self.time_range()),
            Cell::from(self.status.title()).style(Style::default().fg(status_color(self.status))),
            Cell::from(self.priority.title())
                .style(Style::default().fg(priority_color(self.priority))),
            Cell::from(format!("{} {:>3}%", progress_text(self.progress, 10), self.progress)),
        ]
    }

    fn detail(&self, _ctx: &Context) -> Vec<Line<'static>> {
        let mut lines = vec![
            heading(&self.name),
            Line::from(self.description.clone()),
            Line::from(""),
            field("Task", format!("#{}", self.id)),
            field("Date", self.date.format("%B %-d, %Y").to_string()),
            field("Time", self.time_range()),
            field("Location", self.location.clone()),
            field("Category", self.category.clone()),
            field("Status", self.status.title()),
            field("Priority", self.priority.title()),
            field(
                "Progress",
                format!("{} {}%", progress_text(self.progress, 12), self.progress),
            ),
            field(
                "Hours",
                format!(
                    "{} of {} estimated",
                    format_hours(self.actual_hours),
                    format_hours(self.estimated_hours)
                ),
            ),
            Line::from(""),
            field("Assigned", ""),
        ];
        lines.extend(
            self.assigned_members
                .iter()
                .map(|member| Line::from(format!("  • {member}"))),
        );
        lines
    }
}
