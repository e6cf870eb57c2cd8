use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::Cell;

use super::{field, heading, PageRecord};
use crate::core::Context;
use crate::domain::employee::{Employee, EmployeeFilter, EmployeeSummary, EmploymentStatus};
use crate::nav::Route;

impl PageRecord for Employee {
    type Filter = EmployeeFilter;
    type Summary = EmployeeSummary;

    const ROUTE: Route = Route::Employees;

    fn columns() -> &'static [(&'static str, Constraint)] {
        &[
            ("ID", Constraint::Length(6)),
            ("Name", Constraint::Min(14)),
            ("Position", Constraint::Length(24)),
            ("Department", Constraint::Length(14)),
            ("Status", Constraint::Length(15)),
        ]
    }

    fn cells(&self, _ctx: &Context) -> Vec<Cell<'static>> {
        let color = match self.status {
            EmploymentStatus::Regular => Color::LightGreen,
            EmploymentStatus::UnderProbation => Color::LightYellow,
        };
        vec![
            Cell::from(self.id.clone()),
            Cell::from(self.name.clone()),
            Cell::from(self.position.clone()),
            Cell::from(self.department.clone()),
            Cell::from(self.status.title()).style(Style::default().fg(color)),
        ]
    }

    fn detail(&self, _ctx: &Context) -> Vec<Line<'static>> {
        vec![
            heading(&self.name),
            Line::from(""),
            field("ID", self.id.clone()),
            field("Age", self.age.to_string()),
            field("Phone", self.phone.clone()),
            field("Address", self.address.clone()),
            field("Position", self.position.clone()),
            field("Department", self.department.clone()),
            field("Started", self.year_started.to_string()),
            field("Status", self.status.title()),
        ]
    }
}
