//! Plain-text rendering of screens.

use staffbook_core::service::dashboard::DashboardView;
use staffbook_core::service::detail::DetailView;
use staffbook_core::service::form::FormView;
use staffbook_core::service::list::EmployeeListView;
use staffbook_core::{Screen, View};
use std::fmt::Write;

/// Renders the header line followed by the content view.
pub fn screen_text(screen: &Screen) -> String {
    let mut out = String::new();
    let nav = screen
        .header
        .links
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{} :: {} :: {}", screen.header.title, nav, screen.path);
    out.push('\n');

    match &screen.view {
        View::Dashboard(view) => dashboard_text(&mut out, view),
        View::EmployeeList(view) => list_text(&mut out, view),
        View::EmployeeDetail(view) => detail_text(&mut out, view),
        View::EmployeeForm(view) => form_text(&mut out, view),
        View::Unmatched { path } => {
            let _ = writeln!(out, "No route matches `{path}`.");
        }
    }
    out
}

fn dashboard_text(out: &mut String, view: &DashboardView) {
    let _ = writeln!(out, "{}", view.title);
    for card in &view.cards {
        let _ = writeln!(out, "  {:<20} {}", card.label, card.value);
    }

    let _ = writeln!(out, "\nDepartments");
    for row in &view.departments {
        let _ = writeln!(out, "  {:<20} {}", row.department.label(), row.caption);
    }

    let _ = writeln!(out, "\nRecent Hires");
    if view.recent_hires.is_empty() {
        let _ = writeln!(out, "  (none)");
    }
    for hire in &view.recent_hires {
        let _ = writeln!(
            out,
            "  {:<24} {:<24} {}",
            hire.full_name, hire.position, hire.hire_date
        );
    }
}

fn list_text(out: &mut String, view: &EmployeeListView) {
    let _ = writeln!(out, "{}", view.heading);
    if let Some(empty) = &view.empty_state {
        let _ = writeln!(out, "  {}\n  {}", empty.title, empty.message);
        return;
    }
    for card in &view.cards {
        let _ = writeln!(
            out,
            "  #{:<14} {:<4} {:<22} {:<24} {:<12} {:<8} {}",
            card.id,
            card.initials,
            card.full_name,
            card.position,
            card.department.label(),
            card.status.label(),
            card.salary
        );
    }
}

fn detail_text(out: &mut String, view: &DetailView) {
    match view {
        DetailView::Found(employee) => {
            let _ = writeln!(
                out,
                "{} ({}) [{}]",
                employee.full_name,
                employee.position,
                employee.status.label()
            );
            for field in &employee.fields {
                let _ = writeln!(out, "  {:<12} {}", field.label, field.value);
            }
        }
        DetailView::NotFound { message, .. } => {
            let _ = writeln!(out, "{message}");
        }
    }
}

fn form_text(out: &mut String, view: &FormView) {
    let _ = writeln!(out, "{}", view.title);
    for input in &view.inputs {
        let marker = if input.required { "*" } else { " " };
        let _ = writeln!(out, "  {:<14}{} {}", input.label, marker, input.value);
    }
    if let Some(error) = &view.error {
        let _ = writeln!(out, "\n  {error}");
    }
}
