//! Logical routes and path parsing.
//!
//! # Invariants
//! - `/employees/add` wins over `/employees/{id}`.
//! - Parsing never fails: unknown paths become `Route::Unmatched`.
//! - `Route::parse(route.path())` returns an equal route.

use crate::model::employee::EmployeeId;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt::{Display, Formatter};

static EDIT_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/employees/edit/([^/]+)$").expect("valid edit path regex"));
static DETAIL_PATH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/employees/([^/]+)$").expect("valid detail path regex"));

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const EMPLOYEES_PATH: &str = "/employees";
pub const EMPLOYEE_ADD_PATH: &str = "/employees/add";

/// Raw `{id}` path segment.
///
/// Kept verbatim so a non-numeric segment can still be echoed back; such a
/// segment resolves to no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteId(String);

impl RouteId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parses the segment as an employee id.
    pub fn employee_id(&self) -> Option<EmployeeId> {
        self.0.parse().ok()
    }
}

impl From<EmployeeId> for RouteId {
    fn from(value: EmployeeId) -> Self {
        Self(value.to_string())
    }
}

/// Navigation target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "name", content = "param", rename_all = "snake_case")]
pub enum Route {
    /// `/`, always redirected to the dashboard.
    Root,
    Dashboard,
    EmployeeList,
    EmployeeAdd,
    EmployeeEdit(RouteId),
    EmployeeDetail(RouteId),
    Unmatched(String),
}

impl Route {
    /// Maps a path onto a route.
    ///
    /// Surrounding whitespace, query strings, fragments and trailing slashes
    /// are ignored.
    pub fn parse(path: &str) -> Self {
        let path = normalize_path(path);
        match path {
            "/" => Self::Root,
            DASHBOARD_PATH => Self::Dashboard,
            EMPLOYEES_PATH => Self::EmployeeList,
            EMPLOYEE_ADD_PATH => Self::EmployeeAdd,
            _ => {
                if let Some(caps) = EDIT_PATH_RE.captures(path) {
                    return Self::EmployeeEdit(RouteId(caps[1].to_string()));
                }
                if let Some(caps) = DETAIL_PATH_RE.captures(path) {
                    return Self::EmployeeDetail(RouteId(caps[1].to_string()));
                }
                Self::Unmatched(path.to_string())
            }
        }
    }

    pub fn detail(id: EmployeeId) -> Self {
        Self::EmployeeDetail(id.into())
    }

    pub fn edit(id: EmployeeId) -> Self {
        Self::EmployeeEdit(id.into())
    }

    /// Canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Self::Root => "/".to_string(),
            Self::Dashboard => DASHBOARD_PATH.to_string(),
            Self::EmployeeList => EMPLOYEES_PATH.to_string(),
            Self::EmployeeAdd => EMPLOYEE_ADD_PATH.to_string(),
            Self::EmployeeEdit(id) => format!("/employees/edit/{}", id.as_str()),
            Self::EmployeeDetail(id) => format!("/employees/{}", id.as_str()),
            Self::Unmatched(path) => path.clone(),
        }
    }

    /// Route this one is immediately replaced by, if any.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            Self::Root => Some(Self::Dashboard),
            _ => None,
        }
    }
}

impl Display for Route {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.path())
    }
}

fn normalize_path(raw: &str) -> &str {
    let trimmed = raw.trim();
    let without_suffix = trimmed
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let without_slash = without_suffix.trim_end_matches('/');
    if without_slash.is_empty() {
        "/"
    } else {
        without_slash
    }
}

#[cfg(test)]
mod tests {
    use super::{normalize_path, Route};

    #[test]
    fn normalize_path_strips_trailing_slashes_and_queries() {
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path(" /employees/ "), "/employees");
        assert_eq!(normalize_path("/employees?x=1#top"), "/employees");
    }

    #[test]
    fn add_path_is_not_parsed_as_detail() {
        assert_eq!(Route::parse("/employees/add"), Route::EmployeeAdd);
    }

    #[test]
    fn paths_roundtrip() {
        for route in [
            Route::Dashboard,
            Route::EmployeeList,
            Route::EmployeeAdd,
            Route::edit(42),
            Route::detail(42),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }
}
