use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Cell;

use super::{field, heading, PageRecord};
use crate::core::Context;
use crate::domain::expense::{Expense, ExpenseFilter, ExpenseStatus, ExpenseSummary};
use crate::domain::money::format_money;
use crate::nav::Route;

fn status_color(status: ExpenseStatus) -> Color {
    match status {
        ExpenseStatus::Approved => Color::LightGreen,
        ExpenseStatus::Pending => Color::LightYellow,
        ExpenseStatus::Rejected => Color::LightRed,
    }
}

impl PageRecord for Expense {
    type Filter = ExpenseFilter;
    type Summary = ExpenseSummary;

    const ROUTE: Route = Route::Expenses;

    fn columns() -> &'static [(&'static str, Constraint)] {
        &[
            ("Receipt", Constraint::Length(8)),
            ("Description", Constraint::Min(20)),
            ("Amount", Constraint::Length(12)),
            ("Date", Constraint::Length(10)),
            ("Category", Constraint::Length(15)),
            ("Status", Constraint::Length(9)),
        ]
    }

    fn cells(&self, ctx: &Context) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.receipt_number.clone()),
            Cell::from(self.description.clone()),
            Cell::from(format_money(self.amount, &ctx.currency)),
            Cell::from(self.date.format("%Y-%m-%d").to_string()),
            Cell::from(self.category.clone()),
            Cell::from(self.status.title()).style(Style::default().fg(status_color(self.status))),
        ]
    }

    fn detail(&self, ctx: &Context) -> Vec<Line<'static>> {
        vec![
            heading(&self.description),
            Line::from(""),
            field("Expense", format!("#{}", self.id)),
            field("Amount", format_money(self.amount, &ctx.currency)),
            field("Date", self.date.format("%B %-d, %Y").to_string()),
            field("Category", self.category.clone()),
            field("Vendor", self.vendor.clone()),
            field("Receipt", self.receipt_number.clone()),
            field("Status", self.status.title()),
        ]
    }
}
