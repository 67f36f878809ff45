//! Search and select-filter matching for the employee list.
//!
//! # Invariants
//! - Search, status and department criteria are combined with AND.
//! - Search is a case-insensitive substring match over first name, last
//!   name, email and position (any of them).
//! - An empty search term matches every record.

use crate::model::employee::{Department, Employee, EmployeeStatus, ParseEnumError};
use serde::Serialize;
use std::str::FromStr;

/// Sentinel value accepted by both select filters.
pub const FILTER_ALL: &str = "all";

/// Status select filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(EmployeeStatus),
}

impl StatusFilter {
    fn matches(self, status: EmployeeStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == status,
        }
    }

    /// Select-option value for this filter.
    pub fn value(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(status) => status.label(),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Department select filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum DepartmentFilter {
    #[default]
    All,
    Only(Department),
}

impl DepartmentFilter {
    fn matches(self, department: Department) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == department,
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::All => FILTER_ALL,
            Self::Only(department) => department.label(),
        }
    }
}

impl FromStr for DepartmentFilter {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.trim().eq_ignore_ascii_case(FILTER_ALL) {
            return Ok(Self::All);
        }
        value.parse().map(Self::Only)
    }
}

/// Live list-view filter state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmployeeFilter {
    pub search: String,
    pub status: StatusFilter,
    pub department: DepartmentFilter,
}

impl EmployeeFilter {
    pub fn new(
        search: impl Into<String>,
        status: StatusFilter,
        department: DepartmentFilter,
    ) -> Self {
        Self {
            search: search.into(),
            status,
            department,
        }
    }

    /// Returns whether any criterion narrows the list.
    pub fn is_active(&self) -> bool {
        !self.search.is_empty()
            || self.status != StatusFilter::All
            || self.department != DepartmentFilter::All
    }

    /// Returns whether `employee` satisfies every criterion.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.matches_with_needle(employee, &self.search.to_lowercase())
    }

    fn matches_with_needle(&self, employee: &Employee, needle: &str) -> bool {
        self.status.matches(employee.status)
            && self.department.matches(employee.department)
            && matches_search(employee, needle)
    }
}

/// Returns the records matching `filter`, in collection order.
pub fn filter_employees<'a>(
    employees: &'a [Employee],
    filter: &EmployeeFilter,
) -> Vec<&'a Employee> {
    let needle = filter.search.to_lowercase();
    employees
        .iter()
        .filter(|employee| filter.matches_with_needle(employee, &needle))
        .collect()
}

/// Departments present in the collection, in order of first occurrence.
pub fn distinct_departments(employees: &[Employee]) -> Vec<Department> {
    let mut departments = Vec::new();
    for employee in employees {
        if !departments.contains(&employee.department) {
            departments.push(employee.department);
        }
    }
    departments
}

fn matches_search(employee: &Employee, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        employee.first_name.as_str(),
        employee.last_name.as_str(),
        employee.email.as_str(),
        employee.position.as_str(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::{DepartmentFilter, StatusFilter};
    use crate::model::employee::{Department, EmployeeStatus};

    #[test]
    fn select_values_parse_with_all_sentinel() {
        assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
        assert_eq!(
            "inactive".parse::<StatusFilter>(),
            Ok(StatusFilter::Only(EmployeeStatus::Inactive))
        );
        assert_eq!("all".parse::<DepartmentFilter>(), Ok(DepartmentFilter::All));
        assert_eq!(
            "HR".parse::<DepartmentFilter>(),
            Ok(DepartmentFilter::Only(Department::Hr))
        );
        assert!("Legal".parse::<DepartmentFilter>().is_err());
    }

    #[test]
    fn all_sentinel_is_case_insensitive_for_both_selects() {
        for raw in ["all", "ALL", " All "] {
            assert_eq!(raw.parse::<StatusFilter>(), Ok(StatusFilter::All));
            assert_eq!(raw.parse::<DepartmentFilter>(), Ok(DepartmentFilter::All));
        }
    }

    #[test]
    fn option_values_match_select_labels() {
        assert_eq!(StatusFilter::Only(EmployeeStatus::Active).value(), "active");
        assert_eq!(DepartmentFilter::All.value(), "all");
    }
}
