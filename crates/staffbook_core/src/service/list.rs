//! Employee list view with live search and select filters.

use crate::display::{format_currency, format_hire_date};
use crate::model::employee::{Department, Employee, EmployeeId, EmployeeStatus};
use crate::query::filter::{distinct_departments, filter_employees, EmployeeFilter, FILTER_ALL};
use crate::repo::employee_store::{EmployeeStore, IdClock};
use crate::routing::route::Route;
use crate::service::delete::confirmation_prompt;
use crate::service::{LinkView, SelectOption};
use crate::storage::KeyValueStore;
use serde::Serialize;

/// Summary card for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeCard {
    pub id: EmployeeId,
    pub full_name: String,
    pub initials: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub department: Department,
    pub email: String,
    pub phone: String,
    pub hire_date: String,
    pub salary: String,
    pub detail_path: String,
    pub edit_path: String,
    /// Prompt shown before the card's delete action runs.
    pub delete_prompt: String,
}

impl EmployeeCard {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            full_name: employee.full_name(),
            initials: employee.initials(),
            position: employee.position.clone(),
            status: employee.status,
            department: employee.department,
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            hire_date: format_hire_date(employee.hire_date),
            salary: format_currency(employee.salary),
            detail_path: Route::detail(employee.id).path(),
            edit_path: Route::edit(employee.id).path(),
            delete_prompt: confirmation_prompt(employee),
        }
    }
}

/// Shown instead of the grid when no card matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub title: &'static str,
    pub message: &'static str,
    /// Offered only when no filter is active.
    pub add_link: Option<LinkView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeListView {
    pub heading: String,
    pub count: usize,
    pub filter: EmployeeFilter,
    pub status_options: Vec<SelectOption>,
    pub department_options: Vec<SelectOption>,
    pub cards: Vec<EmployeeCard>,
    pub empty_state: Option<EmptyState>,
    pub add_link: LinkView,
}

/// Builds the list view for the current filter state.
pub fn employee_list_view<S: KeyValueStore, C: IdClock>(
    store: &EmployeeStore<S, C>,
    filter: &EmployeeFilter,
) -> EmployeeListView {
    let employees = store.employees();
    let cards = filter_employees(employees, filter)
        .into_iter()
        .map(EmployeeCard::from_employee)
        .collect::<Vec<_>>();

    let empty_state = cards.is_empty().then(|| empty_state(filter));

    EmployeeListView {
        heading: format!("Employees ({})", cards.len()),
        count: cards.len(),
        status_options: status_options(filter),
        department_options: department_options(employees, filter),
        filter: filter.clone(),
        cards,
        empty_state,
        add_link: LinkView::new("Add Employee", &Route::EmployeeAdd),
    }
}

fn status_options(filter: &EmployeeFilter) -> Vec<SelectOption> {
    let current = filter.status.value();
    vec![
        SelectOption::new(FILTER_ALL, "All Status", current),
        SelectOption::new(EmployeeStatus::Active.label(), "Active", current),
        SelectOption::new(EmployeeStatus::Inactive.label(), "Inactive", current),
    ]
}

fn department_options(employees: &[Employee], filter: &EmployeeFilter) -> Vec<SelectOption> {
    let current = filter.department.value();
    std::iter::once(SelectOption::new(FILTER_ALL, "All Departments", current))
        .chain(
            distinct_departments(employees)
                .into_iter()
                .map(|department| SelectOption::new(department.label(), department.label(), current)),
        )
        .collect()
}

fn empty_state(filter: &EmployeeFilter) -> EmptyState {
    if filter.is_active() {
        EmptyState {
            title: "No employees found",
            message: "Try adjusting your search or filters",
            add_link: None,
        }
    } else {
        EmptyState {
            title: "No employees found",
            message: "Get started by adding your first employee",
            add_link: Some(LinkView::new("Add First Employee", &Route::EmployeeAdd)),
        }
    }
}
