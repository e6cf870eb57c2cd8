use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use super::error::FilterError;
use super::filter::{self, query_matches, RecordFilter, Selector};
use super::Record;

pub const DEPARTMENTS: [&str; 6] = [
    "Construction",
    "Management",
    "Operations",
    "Safety",
    "Maintenance",
    "Administration",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PaymentMethod {
    DirectDeposit,
    Check,
    Cash,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [
        PaymentMethod::DirectDeposit,
        PaymentMethod::Check,
        PaymentMethod::Cash,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PaymentMethod::DirectDeposit => "Direct Deposit",
            PaymentMethod::Check => "Check",
            PaymentMethod::Cash => "Cash",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PayrollStatus {
    Paid,
    Processing,
    Pending,
    OnHold,
}

impl PayrollStatus {
    pub const ALL: [PayrollStatus; 4] = [
        PayrollStatus::Paid,
        PayrollStatus::Processing,
        PayrollStatus::Pending,
        PayrollStatus::OnHold,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            PayrollStatus::Paid => "Paid",
            PayrollStatus::Processing => "Processing",
            PayrollStatus::Pending => "Pending",
            PayrollStatus::OnHold => "On Hold",
        }
    }

    /// Needs someone's attention before it can be paid out.
    pub fn is_outstanding(&self) -> bool {
        matches!(self, PayrollStatus::Pending | PayrollStatus::OnHold)
    }
}

impl fmt::Display for PayrollStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PayPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl fmt::Display for PayPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Deductions {
    pub tax: Decimal,
    pub insurance: Decimal,
    pub retirement: Decimal,
}

impl Deductions {
    pub fn total(&self) -> Decimal {
        self.tax + self.insurance + self.retirement
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PayrollRecord {
    pub id: u32,
    pub employee_id: String,
    pub name: String,
    pub position: String,
    pub department: String,
    pub pay_period: PayPeriod,
    pub hours_worked: Decimal,
    pub overtime_hours: Decimal,
    pub hourly_rate: Decimal,
    pub overtime_rate: Decimal,
    /// Stored as given; not recomputed from hours and rates.
    pub gross_pay: Decimal,
    pub deductions: Deductions,
    pub net_pay: Decimal,
    pub payment_date: NaiveDate,
    pub payment_method: PaymentMethod,
    pub status: PayrollStatus,
}

impl PayrollRecord {
    pub fn regular_pay(&self) -> Decimal {
        self.hours_worked * self.hourly_rate
    }

    pub fn overtime_pay(&self) -> Decimal {
        self.overtime_hours * self.overtime_rate
    }

    pub fn total_hours(&self) -> Decimal {
        self.hours_worked + self.overtime_hours
    }
}

impl Record for PayrollRecord {
    const KIND: &'static str = "payroll record";

    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "id",
            "employee_id",
            "name",
            "position",
            "department",
            "period_start",
            "period_end",
            "hours_worked",
            "overtime_hours",
            "hourly_rate",
            "overtime_rate",
            "gross_pay",
            "tax",
            "insurance",
            "retirement",
            "net_pay",
            "payment_date",
            "payment_method",
            "status",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.employee_id.clone(),
            self.name.clone(),
            self.position.clone(),
            self.department.clone(),
            self.pay_period.start.to_string(),
            self.pay_period.end.to_string(),
            self.hours_worked.to_string(),
            self.overtime_hours.to_string(),
            self.hourly_rate.to_string(),
            self.overtime_rate.to_string(),
            self.gross_pay.to_string(),
            self.deductions.tax.to_string(),
            self.deductions.insurance.to_string(),
            self.deductions.retirement.to_string(),
            self.net_pay.to_string(),
            self.payment_date.to_string(),
            self.payment_method.to_string(),
            self.status.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayrollFilter {
    pub query: String,
    pub status: Selector<PayrollStatus>,
    pub department: Selector<String>,
    pub payment_method: Selector<PaymentMethod>,
}

#[derive(Debug, Clone)]
pub struct PayrollOptions {
    pub departments: Vec<String>,
}

impl RecordFilter<PayrollRecord> for PayrollFilter {
    type Options = PayrollOptions;

    const SLOTS: &'static [&'static str] = &["status", "department", "method"];

    fn options(_records: &[PayrollRecord]) -> PayrollOptions {
        PayrollOptions {
            departments: DEPARTMENTS.iter().map(|d| d.to_string()).collect(),
        }
    }

    fn matches(&self, record: &PayrollRecord) -> bool {
        query_matches(
            &self.query,
            [
                record.name.as_str(),
                record.employee_id.as_str(),
                record.position.as_str(),
                record.department.as_str(),
            ],
        ) && self.status.admits(&record.status)
            && self.department.admits(&record.department)
            && self.payment_method.admits(&record.payment_method)
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
            1 => self.department.label(),
            _ => self.payment_method.label(),
        }
    }

    fn cycle_slot(&mut self, slot: usize, forward: bool, options: &PayrollOptions) {
        match slot {
            0 => filter::cycle(&mut self.status, &PayrollStatus::ALL, forward),
            1 => filter::cycle(&mut self.department, &options.departments, forward),
            _ => filter::cycle(&mut self.payment_method, &PaymentMethod::ALL, forward),
        }
    }

    fn set_slot(
        &mut self,
        key: &str,
        value: &str,
        options: &PayrollOptions,
    ) -> Result<(), FilterError> {
        if filter::slot_key_matches(key, &["status"]) {
            self.status = filter::resolve("status", value, &PayrollStatus::ALL)?;
        } else if filter::slot_key_matches(key, &["department", "dept"]) {
            self.department = filter::resolve("department", value, &options.departments)?;
        } else if filter::slot_key_matches(key, &["method", "payment_method", "payment"]) {
            self.payment_method = filter::resolve("method", value, &PaymentMethod::ALL)?;
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
pub struct PayrollSummary {
    pub records: usize,
    pub gross: Decimal,
    pub net: Decimal,
    pub deductions: Decimal,
    pub hours: Decimal,
}

impl PayrollSummary {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a PayrollRecord>) -> Self {
        records
            .into_iter()
            .fold(Self::default(), |mut summary, record| {
                summary.records += 1;
                summary.gross += record.gross_pay;
                summary.net += record.net_pay;
                summary.deductions += record.deductions.total();
                summary.hours += record.total_hours();
                summary
            })
    }
}
