use std::fmt;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::FilterError;
use super::filter::{self, query_matches, RecordFilter, Selector};
use super::Record;

pub const TASK_CATEGORIES: [&str; 5] = [
    "Maintenance",
    "Training",
    "Inventory",
    "Inspection",
    "Repair",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaskStatus {
    Pending,
    InProgress,
    Scheduled,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 5] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Scheduled,
        TaskStatus::Completed,
        TaskStatus::Overdue,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Scheduled => "Scheduled",
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Low,
        Priority::Medium,
        Priority::High,
        Priority::Critical,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub description: String,
    pub assigned_members: Vec<String>,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: String,
    pub status: TaskStatus,
    pub priority: Priority,
    /// Percent complete, 0..=100.
    pub progress: u8,
    pub category: String,
    pub estimated_hours: Decimal,
    pub actual_hours: Decimal,
}

impl Task {
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.format("%H:%M"),
            self.end_time.format("%H:%M")
        )
    }
}

impl Record for Task {
    const KIND: &'static str = "task";

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "description",
            "assigned_members",
            "date",
            "start_time",
            "end_time",
            "location",
            "status",
            "priority",
            "progress",
            "category",
            "estimated_hours",
            "actual_hours",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.description.clone(),
            self.assigned_members.join("; "),
            self.date.to_string(),
            self.start_time.format("%H:%M").to_string(),
            self.end_time.format("%H:%M").to_string(),
            self.location.clone(),
            self.status.to_string(),
            self.priority.to_string(),
            self.progress.to_string(),
            self.category.clone(),
            self.estimated_hours.to_string(),
            self.actual_hours.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub query: String,
    pub status: Selector<TaskStatus>,
    pub priority: Selector<Priority>,
    pub category: Selector<String>,
}

#[derive(Debug, Clone)]
pub struct TaskOptions {
    pub categories: Vec<String>,
}

impl RecordFilter<Task> for TaskFilter {
    type Options = TaskOptions;

    const SLOTS: &'static [&'static str] = &["status", "priority", "category"];

    fn options(_records: &[Task]) -> TaskOptions {
        TaskOptions {
            categories: TASK_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }

    fn matches(&self, task: &Task) -> bool {
        let fields = [task.name.as_str(), task.description.as_str(), task.location.as_str()]
            .into_iter()
            .chain(task.assigned_members.iter().map(String::as_str));
        query_matches(&self.query, fields)
            && self.status.admits(&task.status)
            && self.priority.admits(&task.priority)
            && self.category.admits(&task.category)
    }

    fn query(&self) -> &str {
        &self.query
    }

    fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    fn slot_label(&self, slot: usize) -> String {
        match slot {
            0 => self.status.label(),
            1 => self.priority.label(),
            _ => self.category.label(),
        }
    }

    fn cycle_slot(&mut self, slot: usize, forward: bool, options: &TaskOptions) {
        match slot {
            0 => filter::cycle(&mut self.status, &TaskStatus::ALL, forward),
            1 => filter::cycle(&mut self.priority, &Priority::ALL, forward),
            _ => filter::cycle(&mut self.category, &options.categories, forward),
        }
    }

    fn set_slot(&mut self, key: &str, value: &str, options: &TaskOptions) -> Result<(), FilterError> {
        if filter::slot_key_matches(key, &["status"]) {
            self.status = filter::resolve("status", value, &TaskStatus::ALL)?;
        } else if filter::slot_key_matches(key, &["priority", "prio"]) {
            self.priority = filter::resolve("priority", value, &Priority::ALL)?;
        } else if filter::slot_key_matches(key, &["category", "cat"]) {
            self.category = filter::resolve("category", value, &options.categories)?;
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
pub struct TaskSummary {
    pub total: usize,
    pub completed: usize,
    pub in_progress: usize,
    pub overdue: usize,
    /// Mean progress in percent, rounded down. Zero for an empty set.
    pub mean_progress: u8,
}

impl TaskSummary {
    pub fn from_records<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut summary = Self::default();
        let mut progress_sum: u32 = 0;
        for task in tasks {
            summary.total += 1;
            progress_sum += u32::from(task.progress);
            match task.status {
                TaskStatus::Completed => summary.completed += 1,
                TaskStatus::InProgress => summary.in_progress += 1,
                TaskStatus::Overdue => summary.overdue += 1,
                TaskStatus::Pending | TaskStatus::Scheduled => {}
            }
        }
        if summary.total > 0 {
            summary.mean_progress = (progress_sum / summary.total as u32) as u8;
        }
        summary
    }

    /// Tasks that are not yet completed.
    pub fn active(&self) -> usize {
        self.total - self.completed
    }
}
