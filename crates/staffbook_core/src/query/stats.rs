//! Dashboard aggregates.

use crate::model::employee::{Department, Employee, EmployeeStatus};
use serde::Serialize;

/// Number of recent hires shown on the dashboard.
pub const DEFAULT_RECENT_HIRES: usize = 5;

/// Headcount for one department.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DepartmentCount {
    pub department: Department,
    pub count: usize,
}

/// Aggregate counts over the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeStats {
    pub total: usize,
    pub active_count: usize,
    pub inactive_count: usize,
    /// Sum over every record regardless of status.
    pub total_salary: f64,
    /// Ordered by first occurrence of each department.
    pub counts_by_department: Vec<DepartmentCount>,
}

/// Computes all dashboard counters in one pass.
pub fn aggregate_counts(employees: &[Employee]) -> EmployeeStats {
    let mut stats = EmployeeStats {
        total: 0,
        active_count: 0,
        inactive_count: 0,
        total_salary: 0.0,
        counts_by_department: Vec::new(),
    };

    for employee in employees {
        stats.total += 1;
        match employee.status {
            EmployeeStatus::Active => stats.active_count += 1,
            EmployeeStatus::Inactive => stats.inactive_count += 1,
        }
        stats.total_salary += employee.salary;

        match stats
            .counts_by_department
            .iter_mut()
            .find(|entry| entry.department == employee.department)
        {
            Some(entry) => entry.count += 1,
            None => stats.counts_by_department.push(DepartmentCount {
                department: employee.department,
                count: 1,
            }),
        }
    }

    stats
}

/// Returns up to `limit` active records, newest hire date first.
///
/// Records sharing a hire date keep their collection order.
pub fn recent_hires(employees: &[Employee], limit: usize) -> Vec<&Employee> {
    let mut hires = employees
        .iter()
        .filter(|employee| employee.is_active())
        .collect::<Vec<_>>();
    hires.sort_by(|left, right| right.hire_date.cmp(&left.hire_date));
    hires.truncate(limit);
    hires
}
