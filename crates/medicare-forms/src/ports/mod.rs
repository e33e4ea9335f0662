//! Ports
//!
//! Inbound: what a concrete page contributes to the shared workflow.
//! Outbound: the submission backend and the notification channel.

pub mod inbound;
pub mod outbound;

pub use inbound::FormPage;
pub use outbound::{Notifier, SubmissionHandler};
