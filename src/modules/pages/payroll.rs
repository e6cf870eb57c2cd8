use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Cell;

use super::{field, heading, PageRecord};
use crate::core::Context;
use crate::domain::money::{format_hours, format_money};
use crate::domain::payroll::{PayrollFilter, PayrollRecord, PayrollStatus, PayrollSummary};
use crate::nav::Route;

fn status_color(status: PayrollStatus) -> Color {
    match status {
        PayrollStatus::Paid => Color::LightGreen,
        PayrollStatus::Processing => Color::LightBlue,
        PayrollStatus::Pending => Color::LightYellow,
        PayrollStatus::OnHold => Color::LightRed,
    }
}

impl PageRecord for PayrollRecord {
    type Filter = PayrollFilter;
    type Summary = PayrollSummary;

    const ROUTE: Route = Route::Payroll;

    fn columns() -> &'static [(&'static str, Constraint)] {
        &[
            ("Employee", Constraint::Min(14)),
            ("Department", Constraint::Length(14)),
            ("Hours", Constraint::Length(8)),
            ("Gross", Constraint::Length(11)),
            ("Net", Constraint::Length(11)),
            ("Status", Constraint::Length(10)),
        ]
    }

    fn cells(&self, ctx: &Context) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.name.clone()),
            Cell::from(self.department.clone()),
            Cell::from(format_hours(self.total_hours())),
            Cell::from(format_money(self.gross_pay, &ctx.currency)),
            Cell::from(format_money(self.net_pay, &ctx.currency)),
            Cell::from(self.status.title()).style(Style::default().fg(status_color(self.status))),
        ]
    }

    fn detail(&self, ctx: &Context) -> Vec<Line<'static>> {
        let money = |amount| format_money(amount, &ctx.currency);
        vec![
            heading(&self.name),
            Line::from(format!("{} · {}", self.position, self.department)),
            Line::from(""),
            field("Employee ID", self.employee_id.clone()),
            field("Pay period", self.pay_period.to_string()),
            field("Paid on", self.payment_date.to_string()),
            field("Method", self.payment_method.title()),
            field("Status", self.status.title()),
            Line::from(""),
            heading("Earnings"),
            field(
                "Regular",
                format!(
                    "{} × {} = {}",
                    format_hours(self.hours_worked),
                    money(self.hourly_rate),
                    money(self.regular_pay())
                ),
            ),
            field(
                "Overtime",
                format!(
                    "{} × {} = {}",
                    format_hours(self.overtime_hours),
                    money(self.overtime_rate),
                    money(self.overtime_pay())
                ),
            ),
            field("Gross", money(self.gross_pay)),
            Line::from(""),
            heading("Deductions"),
            field("Tax", money(self.deductions.tax)),
            field("Insurance", money(self.deductions.insurance)),
            field("Retirement", money(self.deductions.retirement)),
            field("Total", money(self.deductions.total())),
            Line::from(""),
            field("Net pay", money(self.net_pay)),
        ]
    }
}
