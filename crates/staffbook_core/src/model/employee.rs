//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its enumerated attributes.
//! - Define create input and strongly typed partial-update shapes.
//!
//! # Invariants
//! - `id` is assigned once by the record store and never rewritten.
//! - `status` starts as `Active`; no operation toggles it afterwards.
//! - `salary` is finite and non-negative.
//! - Serialized field names are camelCase; `hireDate` is `YYYY-MM-DD`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = i64;

/// Fixed set of departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    #[serde(rename = "HR")]
    Hr,
    Finance,
    Support,
    Operations,
    Product,
    Design,
}

impl Department {
    /// All departments in form-option order.
    pub const ALL: [Department; 9] = [
        Department::Engineering,
        Department::Marketing,
        Department::Sales,
        Department::Hr,
        Department::Finance,
        Department::Support,
        Department::Operations,
        Department::Product,
        Department::Design,
    ];

    /// Display and storage label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Engineering => "Engineering",
            Self::Marketing => "Marketing",
            Self::Sales => "Sales",
            Self::Hr => "HR",
            Self::Finance => "Finance",
            Self::Support => "Support",
            Self::Operations => "Operations",
            Self::Product => "Product",
            Self::Design => "Design",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|department| department.label() == trimmed)
            .ok_or_else(|| ParseEnumError {
                kind: "department",
                value: trimmed.to_string(),
            })
    }
}

/// Employment status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl Display for EmployeeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeStatus {
    type Err = ParseEnumError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            other => Err(ParseEnumError {
                kind: "status",
                value: other.to_string(),
            }),
        }
    }
}

/// Error returned when a label does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

impl Display for ParseEnumError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} `{}`", self.kind, self.value)
    }
}

impl Error for ParseEnumError {}

/// Canonical employee record, stored as one element of the persisted array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl Employee {
    /// Builds a record from create input with the given id and `Active` status.
    pub fn from_new(id: EmployeeId, new: NewEmployee) -> Self {
        Self {
            id,
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            department: new.department,
            position: new.position,
            hire_date: new.hire_date,
            salary: new.salary,
            status: EmployeeStatus::Active,
            address: new.address,
        }
    }

    /// "First Last".
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercased first letters of first and last name.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .take(1)
            .chain(self.last_name.chars().take(1))
            .flat_map(char::to_uppercase)
            .collect()
    }

    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }

    /// Overlays every supplied patch field onto this record.
    ///
    /// Omitted fields keep their current values; `id` and `status` are
    /// never touched.
    pub fn apply_patch(&mut self, patch: &EmployeePatch) {
        if let Some(value) = &patch.first_name {
            self.first_name.clone_from(value);
        }
        if let Some(value) = &patch.last_name {
            self.last_name.clone_from(value);
        }
        if let Some(value) = &patch.email {
            self.email.clone_from(value);
        }
        if let Some(value) = &patch.phone {
            self.phone.clone_from(value);
        }
        if let Some(value) = patch.department {
            self.department = value;
        }
        if let Some(value) = &patch.position {
            self.position.clone_from(value);
        }
        if let Some(value) = patch.hire_date {
            self.hire_date = value;
        }
        if let Some(value) = patch.salary {
            self.salary = value;
        }
        if let Some(value) = &patch.address {
            self.address.clone_from(value);
        }
    }
}

/// Create input: every user-supplied field, no id and no status.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: Department,
    pub position: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
    pub address: Option<String>,
}

/// Partial update: `None` keeps the stored value.
///
/// `address` is doubly optional so a patch can clear it
/// (`Some(None)`) as well as leave it alone (`None`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub department: Option<Department>,
    pub position: Option<String>,
    pub hire_date: Option<NaiveDate>,
    pub salary: Option<f64>,
    pub address: Option<Option<String>>,
}
