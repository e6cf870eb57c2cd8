use ratatui::layout::Constraint;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Cell;

use super::{field, heading, PageRecord};
use crate::core::Context;
use crate::domain::equipment::{Condition, EquipmentFilter, EquipmentItem, EquipmentStatus, EquipmentSummary};
use crate::nav::Route;
use crate::ui::widgets::{percent_of, progress_text};

fn status_color(status: EquipmentStatus) -> Color {
    match status {
        EquipmentStatus::Available => Color::LightGreen,
        EquipmentStatus::Borrowed => Color::LightYellow,
        EquipmentStatus::Maintenance => Color::LightRed,
    }
}

fn condition_color(condition: Condition) -> Color {
    match condition {
        Condition::Excellent => Color::LightGreen,
        Condition::Good => Color::LightBlue,
        Condition::Fair => Color::LightYellow,
        Condition::Poor => Color::LightRed,
    }
}

fn stock(item: &EquipmentItem) -> String {
    format!("{}/{}", item.available_quantity, item.total_quantity)
}

impl PageRecord for EquipmentItem {
    type Filter = EquipmentFilter;
    type Summary = EquipmentSummary;

    const ROUTE: Route = Route::Inventory;
    const CARDS: bool = true;

    fn columns() -> &'static [(&'static str, Constraint)] {
        &[
            ("ID", Constraint::Length(5)),
            ("Name", Constraint::Min(16)),
            ("Category", Constraint::Length(11)),
            ("Avail", Constraint::Length(6)),
            ("Out", Constraint::Length(3)),
            ("Status", Constraint::Length(11)),
            ("Condition", Constraint::Length(9)),
        ]
    }

    fn cells(&self, _ctx: &Context) -> Vec<Cell<'static>> {
        vec![
            Cell::from(self.id.clone()),
            Cell::from(self.name.clone()),
            Cell::from(self.category.clone()),
            Cell::from(stock(self)),
            Cell::from(self.borrowed_quantity.to_string()),
            Cell::from(self.status.title()).style(Style::default().fg(status_color(self.status))),
            Cell::from(self.condition.title())
                .style(Style::default().fg(condition_color(self.condition))),
        ]
    }

    fn detail(&self, _ctx: &Context) -> Vec<Line<'static>> {
        let mut lines = vec![
            heading(&self.name),
            Line::from(""),
            field("ID", self.id.clone()),
            field("Category", self.category.clone()),
            field("Make/Type", self.make_type.clone()),
            field("Capacity", self.capacity.clone()),
            field("Location", self.location.clone()),
            field("Status", self.status.title()),
            field("Condition", self.condition.title()),
            Line::from(""),
            field("Total", self.total_quantity.to_string()),
            field("Available", self.available_quantity.to_string()),
            field("Borrowed", self.borrowed_quantity.to_string()),
            field(
                "Stock",
                progress_text(percent_of(self.available_quantity, self.total_quantity), 12),
            ),
        ];
        if !self.quantities_consistent() {
            lines.push(Line::from(Span::styled(
                format!(
                    "! counts do not add up: {} available + {} borrowed of {}",
                    self.available_quantity, self.borrowed_quantity, self.total_quantity
                ),
                Style::default().fg(Color::LightRed),
            )));
        }
        if let Some(who) = &self.borrowed_by {
            lines.push(Line::from(""));
            lines.push(field("Borrowed by", who.clone()));
            if let Some(date) = self.borrow_date {
                lines.push(field("Since", date.to_string()));
            }
            if let Some(date) = self.expected_return {
                lines.push(field("Due back", date.to_string()));
            }
        }
        lines
    }

    fn flagged(&self) -> bool {
        !self.quantities_consistent()
    }

    fn card(&self, _ctx: &Context) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                self.name.clone(),
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                self.make_type.clone(),
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(self.location.clone()),
            Line::from(vec![
                Span::raw(format!("{} ", stock(self))),
                Span::styled(
                    progress_text(percent_of(self.available_quantity, self.total_quantity), 8),
                    Style::default().fg(Color::Cyan),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    self.status.title(),
                    Style::default().fg(status_color(self.status)),
                ),
                Span::raw(" · "),
                Span::styled(
                    self.condition.title(),
                    Style::default().fg(condition_color(self.condition)),
                ),
            ]),
        ]
    }
}
