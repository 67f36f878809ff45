//! Route-driven screen controller.

use crate::model::employee::EmployeeId;
use crate::query::filter::EmployeeFilter;
use crate::repo::employee_store::{EmployeeStore, IdClock, StoreError, SystemIdClock};
use crate::routing::route::Route;
use crate::service::dashboard::{dashboard_view, DashboardView};
use crate::service::delete::{delete_with_confirmation, Confirm, DeleteOutcome};
use crate::service::detail::{employee_detail_view, DetailView};
use crate::service::form::{EmployeeForm, FormError, FormView};
use crate::service::header::{header_view, HeaderView};
use crate::service::list::{employee_list_view, EmployeeListView};
use crate::storage::KeyValueStore;
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Content area of a screen.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "view", rename_all = "snake_case")]
pub enum View {
    Dashboard(DashboardView),
    EmployeeList(EmployeeListView),
    EmployeeDetail(DetailView),
    EmployeeForm(FormView),
    /// No route matched; renders nothing but the header.
    Unmatched { path: String },
}

/// Everything the UI needs to draw the current page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Screen {
    pub route: Route,
    pub path: String,
    pub redirected_from: Option<Route>,
    pub header: HeaderView,
    pub view: View,
}

#[derive(Debug)]
pub enum ShellError {
    /// Submit requested while no add/edit screen is open.
    NoActiveForm,
    Form(FormError),
    Store(StoreError),
}

impl Display for ShellError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoActiveForm => write!(f, "no employee form is open"),
            Self::Form(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShellError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoActiveForm => None,
            Self::Form(err) => Some(err),
            Self::Store(err) => Some(err),
        }
    }
}

impl From<FormError> for ShellError {
    fn from(value: FormError) -> Self {
        Self::Form(value)
    }
}

impl From<StoreError> for ShellError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Owns the record store and the active route.
pub struct Shell<S: KeyValueStore, C: IdClock = SystemIdClock> {
    store: EmployeeStore<S, C>,
    route: Route,
    list_filter: EmployeeFilter,
    form: Option<EmployeeForm>,
}

impl<S: KeyValueStore, C: IdClock> Shell<S, C> {
    /// Starts on the dashboard.
    pub fn new(store: EmployeeStore<S, C>) -> Self {
        Self {
            store,
            route: Route::Dashboard,
            list_filter: EmployeeFilter::default(),
            form: None,
        }
    }

    pub fn store(&self) -> &EmployeeStore<S, C> {
        &self.store
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn list_filter(&self) -> &EmployeeFilter {
        &self.list_filter
    }

    pub fn form(&self) -> Option<&EmployeeForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut EmployeeForm> {
        self.form.as_mut()
    }

    /// Parses `path` and switches to the resulting route.
    pub fn navigate(&mut self, path: &str) -> Screen {
        self.go(Route::parse(path))
    }

    /// Switches to `route`, following redirects and resetting screen state.
    pub fn go(&mut self, route: Route) -> Screen {
        let (route, redirected_from) = match route.redirect() {
            Some(target) => (target, Some(route)),
            None => (route, None),
        };

        self.form = match &route {
            Route::EmployeeAdd => Some(EmployeeForm::create()),
            Route::EmployeeEdit(target) => Some(EmployeeForm::edit(&self.store, target.clone())),
            _ => None,
        };
        if route == Route::EmployeeList {
            self.list_filter = EmployeeFilter::default();
        }

        info!(
            "event=navigate module=routing status=ok path={} redirected={}",
            route.path(),
            redirected_from.is_some()
        );
        self.route = route;
        self.screen(redirected_from)
    }

    /// Re-renders the current route without changing state.
    pub fn render(&self) -> Screen {
        self.screen(None)
    }

    /// Replaces the list filter and re-renders.
    pub fn set_list_filter(&mut self, filter: EmployeeFilter) -> Screen {
        self.list_filter = filter;
        self.render()
    }

    /// Submits the open form and moves to the list on success.
    ///
    /// On failure the form stays open with its error message set.
    pub fn submit_form(&mut self) -> Result<Screen, ShellError> {
        let form = self.form.as_mut().ok_or(ShellError::NoActiveForm)?;
        let submission = form.submit(&mut self.store)?;
        Ok(self.go(submission.navigate_to))
    }

    /// Leaves the form without saving.
    pub fn cancel_form(&mut self) -> Screen {
        self.go(Route::EmployeeList)
    }

    /// Runs the confirm-then-delete flow.
    ///
    /// A confirmed delete from the detail screen returns to the list.
    pub fn delete_employee(
        &mut self,
        id: EmployeeId,
        confirmer: &mut impl Confirm,
    ) -> Result<(DeleteOutcome, Screen), ShellError> {
        let outcome = delete_with_confirmation(&mut self.store, id, confirmer)?;
        let leave_detail =
            outcome == DeleteOutcome::Deleted && matches!(self.route, Route::EmployeeDetail(_));
        let screen = if leave_detail {
            self.go(Route::EmployeeList)
        } else {
            self.render()
        };
        Ok((outcome, screen))
    }

    fn screen(&self, redirected_from: Option<Route>) -> Screen {
        let view = match &self.route {
            Route::Dashboard | Route::Root => View::Dashboard(dashboard_view(&self.store)),
            Route::EmployeeList => {
                View::EmployeeList(employee_list_view(&self.store, &self.list_filter))
            }
            Route::EmployeeDetail(id) => View::EmployeeDetail(employee_detail_view(&self.store, id)),
            Route::EmployeeAdd | Route::EmployeeEdit(_) => match &self.form {
                Some(form) => View::EmployeeForm(form.view()),
                None => View::EmployeeForm(EmployeeForm::create().view()),
            },
            Route::Unmatched(path) => View::Unmatched { path: path.clone() },
        };

        Screen {
            path: self.route.path(),
            route: self.route.clone(),
            redirected_from,
            header: header_view(&self.route),
            view,
        }
    }
}
