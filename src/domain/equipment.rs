use std::fmt;

use chrono::NaiveDate;
use serde::Serialize;

use super::error::FilterError;
use super::filter::{self, query_matches, RecordFilter, Selector};
use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EquipmentStatus {
    Available,
    Borrowed,
    Maintenance,
}

impl EquipmentStatus {
    pub const ALL: [EquipmentStatus; 3] = [
        EquipmentStatus::Available,
        EquipmentStatus::Borrowed,
        EquipmentStatus::Maintenance,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            EquipmentStatus::Available => "Available",
            EquipmentStatus::Borrowed => "Borrowed",
            EquipmentStatus::Maintenance => "Maintenance",
        }
    }
}

impl fmt::Display for EquipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Condition {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 4] = [
        Condition::Excellent,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Condition::Excellent => "Excellent",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EquipmentItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub make_type: String,
    pub capacity: String,
    pub location: String,
    pub total_quantity: u32,
    pub available_quantity: u32,
    pub borrowed_quantity: u32,
    pub status: EquipmentStatus,
    pub condition: Condition,
    pub borrowed_by: Option<String>,
    pub borrow_date: Option<NaiveDate>,
    pub expected_return: Option<NaiveDate>,
}

impl EquipmentItem {
    /// Quantities are seed literals and are never reconciled; this only
    /// reports whether they happen to add up.
    pub fn quantities_consistent(&self) -> bool {
        self.available_quantity + self.borrowed_quantity == self.total_quantity
    }
}

impl Record for EquipmentItem {
    const KIND: &'static str = "equipment";

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "category",
            "make_type",
            "capacity",
            "location",
            "total_quantity",
            "available_quantity",
            "borrowed_quantity",
            "status",
            "condition",
            "borrowed_by",
            "borrow_date",
            "expected_return",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.category.clone(),
            self.make_type.clone(),
            self.capacity.clone(),
            self.location.clone(),
            self.total_quantity.to_string(),
            self.available_quantity.to_string(),
            self.borrowed_quantity.to_string(),
            self.status.to_string(),
            self.condition.to_string(),
            self.borrowed_by.clone().unwrap_or_default(),
            self.borrow_date.map(|d| d.to_string()).unwrap_or_default(),
            self.expected_return.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct EquipmentFilter {
    pub query: String,
    pub category: Selector<String>,
    pub status: Selector<EquipmentStatus>,
    pub condition: Selector<Condition>,
}

#[derive(Debug, Clone)]
pub struct EquipmentOptions {
    pub categories: Vec<String>,
}

impl RecordFilter<EquipmentItem> for EquipmentFilter {
    type Options = EquipmentOptions;

    const SLOTS: &'static [&'static str] = &["category", "status", "condition"];

    fn options(records: &[EquipmentItem]) -> EquipmentOptions {
        EquipmentOptions {
            categories: filter::distinct(records.iter().map(|item| item.category.as_str())),
        }
    }

    fn matches(&self, item: &EquipmentItem) -> bool {
        query_matches(
            &self.query,
            [
                item.name.as_str(),
                item.make_type.as_str(),
                item.location.as_str(),
                item.id.as_str(),
            ],
        ) && self.category.admits(&item.category)
            && self.status.admits(&item.status)
            && self.condition.admits(&item.condition)
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
            1 => self.status.label(),
            _ => self.condition.label(),
        }
    }

    fn cycle_slot(&mut self, slot: usize, forward: bool, options: &EquipmentOptions) {
        match slot {
            0 => filter::cycle(&mut self.category, &options.categories, forward),
            1 => filter::cycle(&mut self.status, &EquipmentStatus::ALL, forward),
            _ => filter::cycle(&mut self.condition, &Condition::ALL, forward),
        }
    }

    fn set_slot(
        &mut self,
        key: &str,
        value: &str,
        options: &EquipmentOptions,
    ) -> Result<(), FilterError> {
        if filter::slot_key_matches(key, &["category", "cat"]) {
            self.category = filter::resolve("category", value, &options.categories)?;
        } else if filter::slot_key_matches(key, &["status"]) {
            self.status = filter::resolve("status", value, &EquipmentStatus::ALL)?;
        } else if filter::slot_key_matches(key, &["condition", "cond"]) {
            self.condition = filter::resolve("condition", value, &Condition::ALL)?;
        } else {
            return Err(FilterError::UnknownKey {
                key: key.to_string(),
                expected: Self::SLOTS.join(", "),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EquipmentSummary {
    pub items: usize,
    pub total_quantity: u32,
    pub available_quantity: u32,
    pub borrowed_quantity: u32,
    pub excellent_quantity: u32,
    pub good_quantity: u32,
    pub inconsistent_items: usize,
}

impl EquipmentSummary {
    pub fn from_records<'a>(items: impl IntoIterator<Item = &'a EquipmentItem>) -> Self {
        let mut summary = Self::default();
        for item in items {
            summary.items += 1;
            summary.total_quantity += item.total_quantity;
            summary.available_quantity += item.available_quantity;
            summary.borrowed_quantity += item.borrowed_quantity;
            match item.condition {
                Condition::Excellent => summary.excellent_quantity += item.total_quantity,
                Condition::Good => summary.good_quantity += item.total_quantity,
                Condition::Fair | Condition::Poor => {}
            }
            if !item.quantities_consistent() {
                summary.inconsistent_items += 1;
            }
        }
        summary
    }
}
