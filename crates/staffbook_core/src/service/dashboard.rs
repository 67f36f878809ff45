//! Dashboard view: headline counters, department distribution, recent hires.

use crate::display::{format_currency, format_hire_date};
use crate::model::employee::{Department, EmployeeId};
use crate::query::stats::{aggregate_counts, recent_hires, EmployeeStats, DEFAULT_RECENT_HIRES};
use crate::repo::employee_store::{EmployeeStore, IdClock};
use crate::routing::route::Route;
use crate::service::LinkView;
use crate::storage::KeyValueStore;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Total,
    Active,
    Inactive,
    Salary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub kind: StatKind,
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRow {
    pub department: Department,
    pub count: usize,
    /// `1 employee` / `N employees`.
    pub caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentHireRow {
    pub id: EmployeeId,
    pub full_name: String,
    pub position: String,
    pub hire_date: String,
    pub detail_path: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub title: &'static str,
    pub stats: EmployeeStats,
    pub cards: Vec<StatCard>,
    pub departments: Vec<DepartmentRow>,
    pub recent_hires: Vec<RecentHireRow>,
    pub quick_actions: Vec<LinkView>,
}

pub fn dashboard_view<S: KeyValueStore, C: IdClock>(store: &EmployeeStore<S, C>) -> DashboardView {
    let employees = store.employees();
    let stats = aggregate_counts(employees);

    let cards = vec![
        StatCard {
            kind: StatKind::Total,
            label: "Total Employees",
            value: stats.total.to_string(),
        },
        StatCard {
            kind: StatKind::Active,
            label: "Active Employees",
            value: stats.active_count.to_string(),
        },
        StatCard {
            kind: StatKind::Inactive,
            label: "Inactive Employees",
            value: stats.inactive_count.to_string(),
        },
        StatCard {
            kind: StatKind::Salary,
            label: "Total Salary",
            value: format_currency(stats.total_salary),
        },
    ];

    let departments = stats
        .counts_by_department
        .iter()
        .map(|entry| DepartmentRow {
            department: entry.department,
            count: entry.count,
            caption: headcount_caption(entry.count),
        })
        .collect();

    let recent_hires = recent_hires(employees, DEFAULT_RECENT_HIRES)
        .into_iter()
        .map(|employee| RecentHireRow {
            id: employee.id,
            full_name: employee.full_name(),
            position: employee.position.clone(),
            hire_date: format_hire_date(employee.hire_date),
            detail_path: Route::detail(employee.id).path(),
        })
        .collect();

    DashboardView {
        title: "Dashboard",
        stats,
        cards,
        departments,
        recent_hires,
        quick_actions: vec![
            LinkView::new("View All Employees", &Route::EmployeeList),
            LinkView::new("Add New Employee", &Route::EmployeeAdd),
        ],
    }
}

fn headcount_caption(count: usize) -> String {
    if count == 1 {
        "1 employee".to_string()
    } else {
        format!("{count} employees")
    }
}
