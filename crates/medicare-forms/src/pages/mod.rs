//! Concrete pages
//!
//! One [`FormPage`] per data-entry route, plus the static home content.

pub mod booking;
pub mod doctor;
pub mod feedback;
pub mod home;
pub mod manage;
pub mod patient;

use std::sync::Arc;

use crate::domain::aggregates::FormKind;
use crate::domain::value_objects::FieldOption;
use crate::ports::FormPage;

pub use booking::BookAppointmentPage;
pub use doctor::DoctorRegistrationPage;
pub use feedback::FeedbackPage;
pub use home::{FeatureCard, SupportContact, FEATURES, SUPPORT};
pub use manage::ManageAppointmentsPage;
pub use patient::PatientRegistrationPage;

pub(crate) fn specializations() -> Vec<FieldOption> {
    vec![
        FieldOption::new("general", "General Physician"),
        FieldOption::new("cardiology", "Cardiology"),
        FieldOption::new("dermatology", "Dermatology"),
        FieldOption::new("pediatrics", "Pediatrics"),
        FieldOption::new("orthopedics", "Orthopedics"),
        FieldOption::new("neurology", "Neurology"),
        FieldOption::new("ent", "ENT"),
        FieldOption::new("ophthalmology", "Ophthalmology"),
    ]
}

pub(crate) fn time_slots() -> Vec<FieldOption> {
    vec![
        FieldOption::new("09:00", "09:00 AM"),
        FieldOption::new("10:00", "10:00 AM"),
        FieldOption::new("11:00", "11:00 AM"),
        FieldOption::new("14:00", "02:00 PM"),
        FieldOption::new("15:00", "03:00 PM"),
        FieldOption::new("16:00", "04:00 PM"),
    ]
}

/// Label of an option value, falling back to the raw value
pub(crate) fn option_label(options: &[FieldOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| value.to_string())
}

/// Every form page, built once and shared between mounts
#[derive(Clone)]
pub struct PageCatalog {
    pages: Vec<Arc<dyn FormPage>>,
}

impl PageCatalog {
    pub fn standard() -> Self {
        Self {
            pages: vec![
                Arc::new(PatientRegistrationPage::new()),
                Arc::new(DoctorRegistrationPage::new()),
                Arc::new(BookAppointmentPage::new()),
                Arc::new(ManageAppointmentsPage::new()),
                Arc::new(FeedbackPage::new()),
            ],
        }
    }

    pub fn get(&self, kind: FormKind) -> Option<Arc<dyn FormPage>> {
        self.pages.iter().find(|p| p.kind() == kind).cloned()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn FormPage>> {
        self.pages.iter()
    }
}

impl Default for PageCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
