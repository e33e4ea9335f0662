//! Route table and navigation shell
//!
//! Unknown paths resolve to [`Route::NotFound`] instead of failing.

use serde::Serialize;

use crate::domain::aggregates::FormKind;

pub const BRAND: &str = "MediCare";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    Form(FormKind),
    NotFound(String),
}

impl Route {
    /// Match a request path, ignoring any query string and trailing slash
    pub fn resolve(path: &str) -> Self {
        let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');

        if trimmed.is_empty() {
            return Route::Home;
        }

        FormKind::ALL
            .into_iter()
            .find(|kind| Route::Form(*kind).path() == trimmed)
            .map(Route::Form)
            .unwrap_or_else(|| Route::NotFound(path.to_string()))
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Home => "/",
            Route::Form(FormKind::PatientRegistration) => "/patient-registration",
            Route::Form(FormKind::DoctorRegistration) => "/doctor-registration",
            Route::Form(FormKind::BookAppointment) => "/book-appointment",
            Route::Form(FormKind::ManageAppointments) => "/manage-appointments",
            Route::Form(FormKind::Feedback) => "/feedback",
            Route::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Form(FormKind::PatientRegistration) => "Patient Registration",
            Route::Form(FormKind::DoctorRegistration) => "Doctor Registration",
            Route::Form(FormKind::BookAppointment) => "Book Appointment",
            Route::Form(FormKind::ManageAppointments) => "Manage Appointments",
            Route::Form(FormKind::Feedback) => "Feedback",
            Route::NotFound(_) => "Page Not Found",
        }
    }

    pub fn form_kind(&self) -> Option<FormKind> {
        match self {
            Route::Form(kind) => Some(*kind),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

/// Static navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { label: "Home", path: "/" },
    NavItem { label: "Patient Registration", path: "/patient-registration" },
    NavItem { label: "Doctor Registration", path: "/doctor-registration" },
    NavItem { label: "Book Appointment", path: "/book-appointment" },
    NavItem { label: "Manage Appointments", path: "/manage-appointments" },
    NavItem { label: "Feedback", path: "/feedback" },
];

/// Rendered navigation entry
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

/// Everything the header needs to draw itself
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavView {
    pub brand: &'static str,
    pub links: Vec<NavLink>,
    pub menu_open: bool,
}

impl NavView {
    pub fn active(&self) -> Option<&NavLink> {
        self.links.iter().find(|l| l.active)
    }
}

/// Header shell with a collapsible menu for narrow viewports
#[derive(Clone, Debug, Default)]
pub struct NavShell {
    menu_open: bool,
}

impl NavShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follow an entry; the collapsible menu closes behind it
    pub fn navigate(&mut self, path: &str) -> Route {
        self.menu_open = false;
        Route::resolve(path)
    }

    pub fn view(&self, current: &Route) -> NavView {
        let current_path = current.path();
        NavView {
            brand: BRAND,
            links: NAV_ITEMS
                .iter()
                .map(|item| NavLink {
                    label: item.label,
                    path: item.path,
                    active: !current.is_not_found() && item.path == current_path,
                })
                .collect(),
            menu_open: self.menu_open,
        }
    }
}
