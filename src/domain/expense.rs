use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::FilterError;
use super::filter::{self, query_matches, RecordFilter, Selector};
use super::Record;

pub const EXPENSE_CATEGORIES: [&str; 6] = [
    "Office Supplies",
    "Construction",
    "Safety",
    "Tools",
    "Vehicle",
    "Electrical",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExpenseStatus {
    Approved,
    Pending,
    Rejected,
}

impl ExpenseStatus {
    pub const ALL: [ExpenseStatus; 3] = [
        ExpenseStatus::Approved,
        ExpenseStatus::Pending,
        ExpenseStatus::Rejected,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            ExpenseStatus::Approved => "Approved",
            ExpenseStatus::Pending => "Pending",
            ExpenseStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Expense {
    pub id: u32,
    pub description: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub category: String,
    pub vendor: String,
    pub receipt_number: String,
    pub status: ExpenseStatus,
}

impl Record for Expense {
    const KIND: &'static str = "expense";

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "id",
            "description",
            "amount",
            "date",
            "category",
            "vendor",
            "receipt_number",
            "status",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.description.clone(),
            self.amount.to_string(),
            self.date.to_string(),
            self.category.clone(),
            self.vendor.clone(),
            self.receipt_number.clone(),
            self.status.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub query: String,
    pub category: Selector<String>,
    pub status: Selector<ExpenseStatus>,
}

#[derive(Debug, Clone)]
pub struct ExpenseOptions {
    pub categories: Vec<String>,
}

impl RecordFilter<Expense> for ExpenseFilter {
    type Options = ExpenseOptions;

    const SLOTS: &'static [&'static str] = &["category", "status"];

    fn options(_records: &[Expense]) -> ExpenseOptions {
        ExpenseOptions {
            categories: EXPENSE_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn matches(&self, expense: &Expense) -> bool {
        query_matches(
            &self.query,
            [
                expense.description.as_str(),
                expense.vendor.as_str(),
                expense.receipt_number.as_str(),
            ],
        ) && self.category.admits(&expense.category)
            && self.status.admits(&expense.status)
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    fn slot_label(&self, slot: usize) -> String {
        match slot {
            0 => self.category.label(),
            _ => self.status.label(),
        }
    }

    fn cycle_slot(&mut self, slot: usize, forward: bool, options: &ExpenseOptions) {
        match slot {
            0 => filter::cycle(&mut self.category, &options.categories, forward),
            _ => filter::cycle(&mut self.status, &ExpenseStatus::ALL, forward),
        }
    }

    fn set_slot(
        &mut self,
        key: &str,
        value: &str,
        options: &ExpenseOptions,
    ) -> Result<(), FilterError> {
        if filter::slot_key_matches(key, &["category", "cat"]) {
            self.category = filter::resolve("category", value, &options.categories)?;
        } else if filter::slot_key_matches(key, &["status"]) {
            self.status = filter::resolve("status", value, &ExpenseStatus::ALL)?;
        } else {
            return Err(FilterError::UnknownKey {
                key: key.to_string(),
                expected: Self::SLOTS.join(", "),
            });
        }
        Ok(())
    }
}

/// Header figures for the expenses page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Decimal,
    pub approved: Decimal,
    pub pending: Decimal,
}

impl ExpenseSummary {
    pub fn from_records<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> Self {
        expenses
            .into_iter()
            .fold(Self::default(), |mut summary, expense| {
                summary.count += 1;
                summary.total += expense.amount;
                match expense.status {
                    ExpenseStatus::Approved => summary.approved += expense.amount,
                    ExpenseStatus::Pending => summary.pending += expense.amount,
                    ExpenseStatus::Rejected => {}
                }
                summary
            })
    }
}
