//! Page header statistics.

use super::employee::{Employee, EmployeeSummary};
use super::equipment::{EquipmentItem, EquipmentSummary};
use super::expense::{Expense, ExpenseSummary};
use super::money::{format_hours, format_money};
use super::payroll::{PayrollRecord, PayrollSummary};
use super::task::{Task, TaskSummary};

/// One labelled figure in a page header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: String,
}

impl StatCard {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Aggregate figures for a record type.
pub trait Summarize<R>: Sized {
    fn summarize(records: &[&R]) -> Self;

    fn cards(&self, currency: &str) -> Vec<StatCard>;
}

impl Summarize<Expense> for ExpenseSummary {
    fn summarize(records: &[&Expense]) -> Self {
        Self::from_records(records.iter().copied())
    }

    fn cards(&self, currency: &str) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Expenses", format_money(self.total, currency)),
            StatCard::new("Approved", format_money(self.approved, currency)),
            StatCard::new("Pending", format_money(self.pending, currency)),
            StatCard::new("Records", self.count.to_string()),
        ]
    }
}

impl Summarize<EquipmentItem> for EquipmentSummary {
    fn summarize(records: &[&EquipmentItem]) -> Self {
        Self::from_records(records.iter().copied())
    }

    fn cards(&self, _currency: &str) -> Vec<StatCard> {
        let mut cards = vec![
            StatCard::new("Total Items", self.total_quantity.to_string()),
            StatCard::new("Available", self.available_quantity.to_string()),
            StatCard::new("Borrowed", self.borrowed_quantity.to_string()),
            StatCard::new("Excellent", self.excellent_quantity.to_string()),
            StatCard::new("Good", self.good_quantity.to_string()),
        ];
        if self.inconsistent_items > 0 {
            cards.push(StatCard::new(
                "Count Mismatch",
                self.inconsistent_items.to_string(),
            ));
        }
        cards
    }
}

impl Summarize<Task> for TaskSummary {
    fn summarize(records: &[&Task]) -> Self {
        Self::from_records(records.iter().copied())
    }

    fn cards(&self, _currency: &str) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Tasks", self.total.to_string()),
            StatCard::new("Completed", self.completed.to_string()),
            StatCard::new("In Progress", self.in_progress.to_string()),
            StatCard::new("Overdue", self.overdue.to_string()),
            StatCard::new("Avg Progress", format!("{}%", self.mean_progress)),
        ]
    }
}

impl Summarize<PayrollRecord> for PayrollSummary {
    fn summarize(records: &[&PayrollRecord]) -> Self {
        Self::from_records(records.iter().copied())
    }

    fn cards(&self, currency: &str) -> Vec<StatCard> {
        vec![
            StatCard::new("Gross Pay", format_money(self.gross, currency)),
            StatCard::new("Net Pay", format_money(self.net, currency)),
            StatCard::new("Deductions", format_money(self.deductions, currency)),
            StatCard::new("Total Hours", format_hours(self.hours)),
        ]
    }
}

impl Summarize<Employee> for EmployeeSummary {
    fn summarize(records: &[&Employee]) -> Self {
        Self::from_records(records.iter().copied())
    }

    fn cards(&self, _currency: &str) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Employees", self.total.to_string()),
            StatCard::new("Regular", self.regular.to_string()),
            StatCard::new("Under Probation", self.probation.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::seed;

    #[test]
    fn test_empty_sets_are_zero() {
        let cards = ExpenseSummary::summarize(&[]).cards("₱");
        assert_eq!(cards[0], StatCard::new("Total Expenses", "₱0.00"));
        assert_eq!(cards[3].value, "0");

        let cards = PayrollSummary::summarize(&[]).cards("$");
        assert_eq!(cards[3].value, "0h");

        let tasks = TaskSummary::summarize(&[]);
        assert_eq!(tasks.mean_progress, 0);
    }

    #[test]
    fn test_expense_cards_over_seed() {
        let expenses = seed::expenses();
        let refs: Vec<&Expense> = expenses.iter().collect();
        let cards = ExpenseSummary::summarize(&refs).cards("₱");
        assert_eq!(cards[0].value, "₱3,014.30");
        assert_eq!(cards[1].value, "₱1,318.50");
        assert_eq!(cards[2].value, "₱1,250.00");
    }

    #[test]
    fn test_mismatch_card_only_when_present() {
        let items = seed::equipment();
        let all: Vec<&EquipmentItem> = items.iter().collect();
        let cards = EquipmentSummary::summarize(&all).cards("");
        assert_eq!(cards.last().map(|c| c.label), Some("Count Mismatch"));

        let consistent: Vec<&EquipmentItem> =
            items.iter().filter(|i| i.quantities_consistent()).collect();
        let cards = EquipmentSummary::summarize(&consistent).cards("");
        assert_eq!(cards.len(), 5);
    }
}
