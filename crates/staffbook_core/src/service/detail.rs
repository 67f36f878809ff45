//! Single-employee detail view.

use crate::display::{format_currency, format_hire_date};
use crate::model::employee::{Department, EmployeeId, EmployeeStatus};
use crate::repo::employee_store::{EmployeeStore, IdClock};
use crate::routing::route::{Route, RouteId};
use crate::service::LinkView;
use crate::storage::KeyValueStore;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmployeeDetail {
    pub id: EmployeeId,
    pub full_name: String,
    pub initials: String,
    pub position: String,
    pub status: EmployeeStatus,
    pub department: Department,
    /// Department, email, phone, hire date, salary, then address when set.
    pub fields: Vec<DetailField>,
    pub edit_link: LinkView,
    pub back_link: LinkView,
    /// Prompt shown before the delete action runs.
    pub delete_prompt: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DetailView {
    Found(EmployeeDetail),
    NotFound {
        message: &'static str,
        back_link: LinkView,
    },
}

impl DetailView {
    fn not_found() -> Self {
        Self::NotFound {
            message: "Employee not found",
            back_link: LinkView::new("Back to Employees", &Route::EmployeeList),
        }
    }
}

/// Resolves the routed id and builds the detail view.
///
/// Unknown and non-numeric ids yield `DetailView::NotFound`.
pub fn employee_detail_view<S: KeyValueStore, C: IdClock>(
    store: &EmployeeStore<S, C>,
    id: &RouteId,
) -> DetailView {
    let Some(employee) = id.employee_id().and_then(|id| store.get_by_id(id)) else {
        return DetailView::not_found();
    };

    let mut fields = vec![
        DetailField {
            label: "Department",
            value: employee.department.label().to_string(),
        },
        DetailField {
            label: "Email",
            value: employee.email.clone(),
        },
        DetailField {
            label: "Phone",
            value: employee.phone.clone(),
        },
        DetailField {
            label: "Hire Date",
            value: format_hire_date(employee.hire_date),
        },
        DetailField {
            label: "Salary",
            value: format_currency(employee.salary),
        },
    ];
    if let Some(address) = employee.address.as_deref().filter(|value| !value.is_empty()) {
        fields.push(DetailField {
            label: "Address",
            value: address.to_string(),
        });
    }

    DetailView::Found(EmployeeDetail {
        id: employee.id,
        full_name: employee.full_name(),
        initials: employee.initials(),
        position: employee.position.clone(),
        status: employee.status,
        department: employee.department,
        fields,
        edit_link: LinkView::new("Edit", &Route::edit(employee.id)),
        back_link: LinkView::new("Back to Employees", &Route::EmployeeList),
        delete_prompt: super::delete::confirmation_prompt(employee),
    })
}
