//! Add/edit employee form.
//!
//! # Responsibility
//! - Hold raw text input for one record in create or edit mode.
//! - Validate required fields and coerce text into typed values on submit.
//! - Hand the result to the record store and point navigation at the list.
//!
//! # Invariants
//! - Edit mode pre-fills from the store; an unresolved id leaves the form
//!   blank but usable.
//! - A failed validation never reaches the store and never changes field
//!   values.
//! - Address is the only optional field; blank address is stored as `None`.

use crate::model::employee::{Department, Employee, EmployeeId, EmployeePatch, NewEmployee};
use crate::repo::employee_store::{EmployeeStore, IdClock, StoreError};
use crate::routing::route::{Route, RouteId};
use crate::service::{LinkView, SelectOption};
use crate::storage::KeyValueStore;
use chrono::NaiveDate;
use log::{info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Date format accepted by the hire date input.
pub const HIRE_DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

const MISSING_FIELDS_MESSAGE: &str = "Please fill in all required fields.";

/// Addressable form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Phone,
    Department,
    Position,
    HireDate,
    Salary,
    Address,
}

impl FormField {
    /// Inputs in display order.
    pub const ALL: [FormField; 9] = [
        FormField::FirstName,
        FormField::LastName,
        FormField::Email,
        FormField::Phone,
        FormField::Department,
        FormField::Position,
        FormField::HireDate,
        FormField::Salary,
        FormField::Address,
    ];

    /// Input `name` attribute, matching the persisted field name.
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Department => "department",
            Self::Position => "position",
            Self::HireDate => "hireDate",
            Self::Salary => "salary",
            Self::Address => "address",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Department => "Department",
            Self::Position => "Position",
            Self::HireDate => "Hire Date",
            Self::Salary => "Salary ($)",
            Self::Address => "Address",
        }
    }

    pub fn is_required(self) -> bool {
        self != Self::Address
    }

    fn input_type(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Department => "select",
            Self::HireDate => "date",
            Self::Salary => "number",
            _ => "text",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == value.trim())
            .ok_or_else(|| ValidationError::UnknownField(value.trim().to_string()))
    }
}

/// Blocking, user-correctable form problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required inputs left blank, in display order.
    MissingFields(Vec<FormField>),
    /// Input present but not coercible to the field's type.
    InvalidField { field: FormField, reason: String },
    /// Field name not known to the form.
    UnknownField(String),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(_) => f.write_str(MISSING_FIELDS_MESSAGE),
            Self::InvalidField { field, reason } => write!(f, "{}: {reason}", field.label()),
            Self::UnknownField(name) => write!(f, "unknown form field `{name}`"),
        }
    }
}

impl Error for ValidationError {}

/// Submit failure.
#[derive(Debug)]
pub enum FormError {
    Validation(ValidationError),
    Store(StoreError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<ValidationError> for FormError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for FormError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Create or edit, chosen by whether a target id was routed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "target", rename_all = "snake_case")]
pub enum FormMode {
    Create,
    Edit(RouteId),
}

/// Raw text of every input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub hire_date: String,
    pub salary: String,
    pub address: String,
}

impl FormValues {
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.label().to_string(),
            position: employee.position.clone(),
            hire_date: employee.hire_date.format(HIRE_DATE_INPUT_FORMAT).to_string(),
            salary: employee.salary.to_string(),
            address: employee.address.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::Department => &self.department,
            FormField::Position => &self.position,
            FormField::HireDate => &self.hire_date,
            FormField::Salary => &self.salary,
            FormField::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::Department => &mut self.department,
            FormField::Position => &mut self.position,
            FormField::HireDate => &mut self.hire_date,
            FormField::Salary => &mut self.salary,
            FormField::Address => &mut self.address,
        };
        *slot = value.into();
    }

    /// Checks required inputs and coerces them into a typed record.
    pub fn validate(&self) -> Result<NewEmployee, ValidationError> {
        let missing = FormField::ALL
            .into_iter()
            .filter(|field| field.is_required() && self.get(*field).trim().is_empty())
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }

        let department = self
            .department
            .parse::<Department>()
            .map_err(|err| invalid(FormField::Department, err.to_string()))?;
        let hire_date = NaiveDate::parse_from_str(self.hire_date.trim(), HIRE_DATE_INPUT_FORMAT)
            .map_err(|_| invalid(FormField::HireDate, "expected a YYYY-MM-DD date"))?;
        let salary = parse_salary(&self.salary)?;
        let address = Some(self.address.trim())
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Ok(NewEmployee {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            department,
            position: self.position.trim().to_string(),
            hire_date,
            salary,
            address,
        })
    }
}

fn invalid(field: FormField, reason: impl Into<String>) -> ValidationError {
    ValidationError::InvalidField {
        field,
        reason: reason.into(),
    }
}

fn parse_salary(raw: &str) -> Result<f64, ValidationError> {
    let salary = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| invalid(FormField::Salary, "expected a number"))?;
    if !salary.is_finite() || salary < 0.0 {
        return Err(invalid(FormField::Salary, "must be zero or greater"));
    }
    Ok(salary)
}

/// Result of a successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    /// Created id, or the edited id when it resolved to a number.
    pub employee_id: Option<EmployeeId>,
    pub navigate_to: Route,
}

/// One rendered input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormInputView {
    pub name: &'static str,
    pub label: &'static str,
    pub input_type: &'static str,
    pub required: bool,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub mode: FormMode,
    pub title: &'static str,
    pub submit_label: &'static str,
    pub inputs: Vec<FormInputView>,
    pub department_options: Vec<SelectOption>,
    pub cancel_link: LinkView,
    /// Whether edit mode found its record.
    pub prefilled: bool,
    /// Last blocking message, cleared by a successful submit.
    pub error: Option<String>,
}

/// Form state machine for one add or edit session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeForm {
    mode: FormMode,
    values: FormValues,
    prefilled: bool,
    error: Option<String>,
}

impl EmployeeForm {
    /// Blank create form.
    pub fn create() -> Self {
        Self {
            mode: FormMode::Create,
            values: FormValues::default(),
            prefilled: false,
            error: None,
        }
    }

    /// Edit form pre-filled from the record `target` resolves to.
    pub fn edit<S: KeyValueStore, C: IdClock>(store: &EmployeeStore<S, C>, target: RouteId) -> Self {
        let existing = target.employee_id().and_then(|id| store.get_by_id(id));
        if existing.is_none() {
            warn!(
                "event=form_prefill module=service status=not_found target={}",
                target.as_str()
            );
        }
        Self {
            prefilled: existing.is_some(),
            values: existing.map(FormValues::from_employee).unwrap_or_default(),
            mode: FormMode::Edit(target),
            error: None,
        }
    }

    /// Opens create mode without a target, edit mode with one.
    pub fn open<S: KeyValueStore, C: IdClock>(
        store: &EmployeeStore<S, C>,
        target: Option<RouteId>,
    ) -> Self {
        match target {
            Some(target) => Self::edit(store, target),
            None => Self::create(),
        }
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn prefilled(&self) -> bool {
        self.prefilled
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Validates and saves the form.
    ///
    /// # Errors
    /// - `FormError::Validation` leaves the store untouched and records the
    ///   message on the form.
    /// - `FormError::Store` when persisting fails.
    pub fn submit<S: KeyValueStore, C: IdClock>(
        &mut self,
        store: &mut EmployeeStore<S, C>,
    ) -> Result<FormSubmission, FormError> {
        let record = match self.values.validate() {
            Ok(record) => record,
            Err(err) => {
                self.error = Some(err.to_string());
                info!(
                    "event=form_submit module=service status=invalid mode={}",
                    self.mode_label()
                );
                return Err(err.into());
            }
        };

        let employee_id = match &self.mode {
            FormMode::Create => Some(store.add(record)?.id),
            FormMode::Edit(target) => {
                let id = target.employee_id();
                match id {
                    Some(id) => store.update(id, &patch_from(record))?,
                    None => warn!(
                        "event=form_submit module=service status=noop mode=edit target={}",
                        target.as_str()
                    ),
                }
                id
            }
        };

        self.error = None;
        info!(
            "event=form_submit module=service status=ok mode={}",
            self.mode_label()
        );
        Ok(FormSubmission {
            employee_id,
            navigate_to: Route::EmployeeList,
        })
    }

    pub fn view(&self) -> FormView {
        let (title, submit_label) = match self.mode {
            FormMode::Create => ("Add New Employee", "Add Employee"),
            FormMode::Edit(_) => ("Edit Employee", "Update Employee"),
        };
        let current_department = self.values.department.as_str();
        let department_options = std::iter::once(SelectOption::new(
            "",
            "Select Department",
            current_department,
        ))
        .chain(Department::ALL.into_iter().map(|department| {
            SelectOption::new(department.label(), department.label(), current_department)
        }))
        .collect();

        FormView {
            mode: self.mode.clone(),
            title,
            submit_label,
            inputs: FormField::ALL
                .into_iter()
                .map(|field| FormInputView {
                    name: field.name(),
                    label: field.label(),
                    input_type: field.input_type(),
                    required: field.is_required(),
                    value: self.values.get(field).to_string(),
                })
                .collect(),
            department_options,
            cancel_link: LinkView::new("Cancel", &Route::EmployeeList),
            prefilled: self.prefilled,
            error: self.error.clone(),
        }
    }

    fn mode_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "create",
            FormMode::Edit(_) => "edit",
        }
    }
}

fn patch_from(record: NewEmployee) -> EmployeePatch {
    EmployeePatch {
        first_name: Some(record.first_name),
        last_name: Some(record.last_name),
        email: Some(record.email),
        phone: Some(record.phone),
        department: Some(record.department),
        position: Some(record.position),
        hire_date: Some(record.hire_date),
        salary: Some(record.salary),
        address: Some(record.address),
    }
}
