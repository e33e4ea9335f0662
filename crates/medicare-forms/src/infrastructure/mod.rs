//! Infrastructure adapters for the outbound ports

pub mod notifications;
pub mod simulated;

pub use notifications::{Notification, NotificationCenter};
pub use simulated::SimulatedSubmission;
