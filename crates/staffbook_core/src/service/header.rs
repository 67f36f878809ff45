//! Top navigation bar.

use crate::routing::route::Route;
use serde::Serialize;

pub const APP_TITLE: &str = "Employee Management System";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: String,
    /// Highlighted when the current path equals `path` exactly.
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub title: &'static str,
    pub links: Vec<NavLink>,
    /// Always-visible call to action.
    pub add_link: NavLink,
}

pub fn header_view(current: &Route) -> HeaderView {
    let current_path = current.path();
    let link = |label: &'static str, route: Route, highlight: bool| {
        let path = route.path();
        NavLink {
            label,
            active: highlight && path == current_path,
            path,
        }
    };

    HeaderView {
        title: APP_TITLE,
        links: vec![
            link("Dashboard", Route::Dashboard, true),
            link("Employees", Route::EmployeeList, true),
        ],
        add_link: link("Add Employee", Route::EmployeeAdd, false),
    }
}

#[cfg(test)]
mod tests {
    use super::header_view;
    use crate::routing::route::Route;

    #[test]
    fn only_exact_path_is_active() {
        let header = header_view(&Route::detail(1));
        assert!(header.links.iter().all(|link| !link.active));

        let header = header_view(&Route::EmployeeList);
        let active = header
            .links
            .iter()
            .filter(|link| link.active)
            .map(|link| link.label)
            .collect::<Vec<_>>();
        assert_eq!(active, vec!["Employees"]);
    }
}
