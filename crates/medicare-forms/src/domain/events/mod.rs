//! Form events
//!
//! Raised by the workflow aggregate and drained by the host.

use crate::domain::aggregates::FormKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    FieldUpdated { kind: FormKind, field: String },
    ValidationFailed { kind: FormKind, fields: Vec<String> },
    SubmissionStarted { kind: FormKind, submission_id: String },
    Submitted { kind: FormKind, submission_id: String, notification_id: u64 },
    SubmissionFailed { kind: FormKind, submission_id: String, reason: String, notification_id: u64 },
    SubmissionAbandoned { kind: FormKind, submission_id: String },
    Reset { kind: FormKind },
}
