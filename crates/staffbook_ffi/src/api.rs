//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose screen rendering and record mutations to Dart via FRB.
//! - Convert typed core errors into message strings inside envelopes.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every call loads the collection from the database, runs one use case
//!   and releases the connection; calls are serialized process-wide.
//! - View payloads are JSON strings with the core's serde shape.

use log::warn;
use staffbook_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    AppConfig, DeleteOutcome, DepartmentFilter, EmployeeFilter, EmployeeForm, EmployeeStore,
    FormField, Route, RouteId, Screen, Shell, SqliteKeyValueStore, StatusFilter, DEFAULT_STORAGE_KEY,
};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock, PoisonError};

static DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static STORE_LOCK: Mutex<()> = Mutex::new(());

type FfiStore = EmployeeStore<SqliteKeyValueStore>;

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), Path::new(log_dir.trim())) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Rendered screen envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenResponse {
    pub ok: bool,
    /// Canonical path of the route actually shown (after redirects).
    pub path: String,
    /// JSON-encoded content view; empty on failure.
    pub view_json: String,
    /// JSON-encoded header; empty on failure.
    pub header_json: String,
    pub message: String,
}

impl ScreenResponse {
    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            path: String::new(),
            view_json: String::new(),
            header_json: String::new(),
            message: message.into(),
        }
    }
}

/// Mutation envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    /// Affected employee id, when one is known.
    pub employee_id: Option<i64>,
    /// Path the UI should show next.
    pub navigate_to: Option<String>,
    pub message: String,
}

impl ActionResponse {
    fn success(
        message: impl Into<String>,
        employee_id: Option<i64>,
        navigate_to: Option<&Route>,
    ) -> Self {
        Self {
            ok: true,
            employee_id,
            navigate_to: navigate_to.map(Route::path),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            employee_id: None,
            navigate_to: None,
            message: message.into(),
        }
    }
}

/// Raw add/edit form input as typed by the user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeFormInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    /// `YYYY-MM-DD`.
    pub hire_date: String,
    pub salary: String,
    pub address: String,
}

/// Renders the screen for `path`.
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Unknown paths render an unmatched view, not a failure.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn open_screen(path: String) -> ScreenResponse {
    with_shell(|shell| screen_response(shell.navigate(&path)))
        .unwrap_or_else(|err| ScreenResponse::failure(format!("open_screen failed: {err}")))
}

/// Renders the employee list with search and select filters applied.
///
/// `status` and `department` accept select-option values (`all`, `active`,
/// `HR`, ...); `None` means `all`.
#[flutter_rust_bridge::frb(sync)]
pub fn list_employees(
    search: String,
    status: Option<String>,
    department: Option<String>,
) -> ScreenResponse {
    let filter = match parse_filter(search, status, department) {
        Ok(filter) => filter,
        Err(err) => return ScreenResponse::failure(format!("list_employees failed: {err}")),
    };

    let result = with_shell(|shell| {
        shell.go(Route::EmployeeList);
        screen_response(shell.set_list_filter(filter))
    });
    result.unwrap_or_else(|err| ScreenResponse::failure(format!("list_employees failed: {err}")))
}

/// Validates and saves an add (`employee_id = None`) or edit form.
///
/// # FFI contract
/// - Validation failures return `ok=false` with the form's message and
///   leave storage untouched.
/// - On success `navigate_to` is the employee list path.
#[flutter_rust_bridge::frb(sync)]
pub fn submit_employee_form(
    employee_id: Option<i64>,
    input: EmployeeFormInput,
) -> ActionResponse {
    let result = with_store(|store| {
        let mut form = EmployeeForm::open(store, employee_id.map(RouteId::from));
        fill_form(&mut form, input);
        let submission = form.submit(store).map_err(|err| err.to_string())?;
        Ok(ActionResponse::success(
            match employee_id {
                Some(_) => "Employee updated.",
                None => "Employee added.",
            },
            submission.employee_id,
            Some(&submission.navigate_to),
        ))
    });
    result.unwrap_or_else(|err| ActionResponse::failure(format!("submit_employee_form failed: {err}")))
}

/// Deletes one employee once the UI has asked the user.
///
/// `confirmed` is the user's answer to the confirmation prompt; `false`
/// leaves the record in place.
///
/// # FFI contract
/// - A completed delete sets `navigate_to` to the employee list path,
///   whether it was started from the list or from the detail screen.
/// - A cancelled delete sets no `navigate_to`; the UI stays where it is.
#[flutter_rust_bridge::frb(sync)]
pub fn delete_employee(id: i64, confirmed: bool) -> ActionResponse {
    let result = with_shell(|shell| {
        shell.go(Route::detail(id));
        let (outcome, screen) = shell
            .delete_employee(id, &mut |_: &str| confirmed)
            .map_err(|err| err.to_string())?;
        Ok(match outcome {
            DeleteOutcome::Deleted => {
                ActionResponse::success("Employee deleted.", Some(id), Some(&screen.route))
            }
            DeleteOutcome::Declined => ActionResponse::success("Delete cancelled.", Some(id), None),
            DeleteOutcome::NotFound => ActionResponse::failure("Employee not found"),
        })
    });
    result.unwrap_or_else(|err| ActionResponse::failure(format!("delete_employee failed: {err}")))
}

fn screen_response(screen: Screen) -> Result<ScreenResponse, String> {
    let view_json = serde_json::to_string(&screen.view).map_err(|err| err.to_string())?;
    let header_json = serde_json::to_string(&screen.header).map_err(|err| err.to_string())?;
    Ok(ScreenResponse {
        ok: true,
        path: screen.path,
        view_json,
        header_json,
        message: String::new(),
    })
}

fn parse_filter(
    search: String,
    status: Option<String>,
    department: Option<String>,
) -> Result<EmployeeFilter, String> {
    let status = match status {
        Some(raw) => raw.parse::<StatusFilter>().map_err(|err| err.to_string())?,
        None => StatusFilter::All,
    };
    let department = match department {
        Some(raw) => raw
            .parse::<DepartmentFilter>()
            .map_err(|err| err.to_string())?,
        None => DepartmentFilter::All,
    };
    Ok(EmployeeFilter::new(search, status, department))
}

fn fill_form(form: &mut EmployeeForm, input: EmployeeFormInput) {
    form.set(FormField::FirstName, input.first_name);
    form.set(FormField::LastName, input.last_name);
    form.set(FormField::Email, input.email);
    form.set(FormField::Phone, input.phone);
    form.set(FormField::Department, input.department);
    form.set(FormField::Position, input.position);
    form.set(FormField::HireDate, input.hire_date);
    form.set(FormField::Salary, input.salary);
    form.set(FormField::Address, input.address);
}

fn resolve_db_path() -> PathBuf {
    DB_PATH
        .get_or_init(|| AppConfig::from_env().db_path_or_temp())
        .clone()
}

fn load_store() -> Result<FfiStore, String> {
    let db_path = resolve_db_path();
    let storage = SqliteKeyValueStore::open(&db_path).map_err(|err| {
        warn!("event=ffi_store_open module=ffi status=error error={err}");
        format!("employee DB open failed: {err}")
    })?;
    EmployeeStore::load(storage, DEFAULT_STORAGE_KEY)
        .map_err(|err| format!("employee store load failed: {err}"))
}

fn with_store<T>(f: impl FnOnce(&mut FfiStore) -> Result<T, String>) -> Result<T, String> {
    let _guard = STORE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let mut store = load_store()?;
    f(&mut store)
}

fn with_shell<T>(
    f: impl FnOnce(&mut Shell<SqliteKeyValueStore>) -> Result<T, String>,
) -> Result<T, String> {
    let _guard = STORE_LOCK.lock().unwrap_or_else(PoisonError::into_inner);
    let mut shell = Shell::new(load_store()?);
    f(&mut shell)
}
