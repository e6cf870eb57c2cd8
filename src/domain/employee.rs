use std::fmt;

use serde::Serialize;

use super::error::FilterError;
use super::filter::{self, query_matches, RecordFilter, Selector};
use super::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentStatus {
    Regular,
    UnderProbation,
}

impl EmploymentStatus {
    pub const ALL: [EmploymentStatus; 2] =
        [EmploymentStatus::Regular, EmploymentStatus::UnderProbation];

    pub fn title(&self) -> &'static str {
        match self {
            EmploymentStatus::Regular => "Regular",
            EmploymentStatus::UnderProbation => "Under Probation",
        }
    }
}

impl fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub phone: String,
    pub address: String,
    pub position: String,
    pub department: String,
    pub year_started: u16,
    pub status: EmploymentStatus,
}

impl Record for Employee {
    const KIND: &'static str = "employee";

    fn record_id(&self) -> String {
        self.id.clone()
    }

    fn csv_header() -> &'static [&'static str] {
        &[
            "id",
            "name",
            "age",
            "phone",
            "address",
            "position",
            "department",
            "year_started",
            "status",
        ]
    }

    fn csv_row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.age.to_string(),
            self.phone.clone(),
            self.address.clone(),
            self.position.clone(),
            self.department.clone(),
            self.year_started.to_string(),
            self.status.to_string(),
        ]
    }
}

#[derive(Debug, Clone, Default)]
pub struct EmployeeFilter {
    pub query: String,
    pub status: Selector<EmploymentStatus>,
    pub position: Selector<String>,
    pub department: Selector<String>,
}

/// Position and department choices, taken from the records themselves.
#[derive(Debug, Clone)]
pub struct EmployeeOptions {
    pub positions: Vec<String>,
    pub departments: Vec<String>,
}

impl RecordFilter<Employee> for EmployeeFilter {
    type Options = EmployeeOptions;

    const SLOTS: &'static [&'static str] = &["status", "position", "department"];

    fn options(records: &[Employee]) -> EmployeeOptions {
        EmployeeOptions {
            positions: filter::distinct(records.iter().map(|e| e.position.as_str())),
            departments: filter::distinct(records.iter().map(|e| e.department.as_str())),
        }
    }

    fn matches(&self, employee: &Employee) -> bool {
        query_matches(
            &self.query,
            [
                employee.name.as_str(),
                employee.position.as_str(),
                employee.department.as_str(),
                employee.id.as_str(),
            ],
        ) && self.status.admits(&employee.status)
            && self.position.admits(&employee.position)
            && self.department.admits(&employee.department)
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
            1 => self.position.label(),
            _ => self.department.label(),
        }
    }

    fn cycle_slot(&mut self, slot: usize, forward: bool, options: &EmployeeOptions) {
        match slot {
            0 => filter::cycle(&mut self.status, &EmploymentStatus::ALL, forward),
            1 => filter::cycle(&mut self.position, &options.positions, forward),
            _ => filter::cycle(&mut self.department, &options.departments, forward),
        }
    }

    fn set_slot(
        &mut self,
        key: &str,
        value: &str,
        options: &EmployeeOptions,
    ) -> Result<(), FilterError> {
        if filter::slot_key_matches(key, &["status"]) {
            self.status = filter::resolve("status", value, &EmploymentStatus::ALL)?;
        } else if filter::slot_key_matches(key, &["position", "pos"]) {
            self.position = filter::resolve("position", value, &options.positions)?;
        } else if filter::slot_key_matches(key, &["department", "dept"]) {
            self.department = filter::resolve("department", value, &options.departments)?;
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
pub struct EmployeeSummary {
    pub total: usize,
    pub regular: usize,
    pub probation: usize,
}

impl EmployeeSummary {
    pub fn from_records<'a>(employees: impl IntoIterator<Item = &'a Employee>) -> Self {
        employees
            .into_iter()
            .fold(Self::default(), |mut summary, employee| {
                summary.total += 1;
                match employee.status {
                    EmploymentStatus::Regular => summary.regular += 1,
                    EmploymentStatus::UnderProbation => summary.probation += 1,
                }
                summary
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::filter::apply;
    use crate::domain::seed;

    #[test]
    fn test_options_follow_seed_order() {
        let employees = seed::employees();
        let options = EmployeeFilter::options(&employees);
        assert_eq!(options.positions.len(), 8);
        assert_eq!(options.positions[0], "Construction Worker");
        assert_eq!(
            options.departments,
            vec![
                "Construction",
                "Management",
                "Operations",
                "Safety",
                "Maintenance",
                "Administration",
                "Engineering",
            ]
        );
    }

    #[test]
    fn test_department_and_status_conjunction() {
        let employees = seed::employees();
        let filter = EmployeeFilter {
            department: Selector::Only("Management".to_string()),
            status: Selector::Only(EmploymentStatus::Regular),
            ..Default::default()
        };
        let names: Vec<&str> = apply(&filter, &employees)
            .iter()
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(names, vec!["Jane Smith", "Emily Davis"]);
    }

    #[test]
    fn test_summary() {
        let employees = seed::employees();
        let summary = EmployeeSummary::from_records(&employees);
        assert_eq!(
            summary,
            EmployeeSummary {
                total: 8,
                regular: 6,
                probation: 2
            }
        );
    }

    #[test]
    fn test_search_by_id() {
        let employees = seed::employees();
        let filter = EmployeeFilter {
            query: "emp005".to_string(),
            ..Default::default()
        };
        let visible = apply(&filter, &employees);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "David Brown");
    }
}
