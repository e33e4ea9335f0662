//! MediCare Form Workflows
//!
//! Headless core of the MediCare appointment portal: field schemas,
//! validation, the submit workflow shared by every data-entry page,
//! notifications, routing and navigation.
//!
//! ## Architecture
//!
//! - **Domain Layer**: field specs, form records, the workflow aggregate, events
//! - **Ports Layer**: what a page provides, what a submission talks to
//! - **Infrastructure Layer**: simulated submission backend, notification queue
//! - **Pages**: the five concrete forms plus the static home content
//! - **Navigation**: route table and navigation shell
//!
//! ## Flow
//!
//! ```text
//! mount ──> Editing ──submit──> validate ──fail──> Editing (errors attached)
//!              ^                    │
//!              │                  pass
//!              │                    v
//!              └──── reset ◄── Submitting ──> side effect ──> notification
//! ```

pub mod controls;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod navigation;
pub mod pages;
pub mod ports;

pub use controls::RatingControl;
pub use domain::aggregates::{
    FormKind, FormRecord, FormSchema, FormWorkflow, PendingSubmission, SubmitOutcome,
    Submission, SubmissionTicket, WorkflowState,
};
pub use domain::events::FormEvent;
pub use domain::services::validation::{FieldError, ValidationErrors};
pub use domain::value_objects::{
    Condition, DateBound, FieldKind, FieldOption, FieldRule, FieldSpec, Notice, NoticeKind,
    Presence, SubmitAffordance, SubmitIntent,
};
pub use error::{FormsError, Result, SubmissionError};
pub use infrastructure::{Notification, NotificationCenter, SimulatedSubmission};
pub use navigation::{NavItem, NavLink, NavShell, NavView, Route, BRAND, NAV_ITEMS};
pub use pages::PageCatalog;
pub use ports::{FormPage, Notifier, SubmissionHandler};
