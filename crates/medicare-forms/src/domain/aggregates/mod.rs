//! Aggregates

pub mod record;
pub mod schema;
pub mod submission;
pub mod workflow;

pub use record::FormRecord;
pub use schema::{FormKind, FormSchema};
pub use submission::Submission;
pub use workflow::{FormWorkflow, PendingSubmission, SubmitOutcome, SubmissionTicket, WorkflowState};
