//! Error types for MediCare form workflows

use thiserror::Error;

use crate::domain::services::validation::ValidationErrors;

/// Workflow error type
#[derive(Error, Debug)]
pub enum FormsError {
    /// A submission is in flight; the form is not interactable
    #[error("form is busy submitting")]
    Busy,

    /// Field name is not declared by the form schema
    #[error("unknown field: {0}")]
    UnknownField(String),

    /// One or more fields failed validation
    #[error("validation failed: {0}")]
    Validation(ValidationErrors),

    /// Completion arrived for a submission that is no longer current
    #[error("stale submission ticket")]
    StaleSubmission,
}

/// Failure reported by a submission backend
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("service unavailable: {0}")]
    Unavailable(String),

    #[error("submission rejected: {0}")]
    Rejected(String),
}

/// Result type for form workflows
pub type Result<T> = std::result::Result<T, FormsError>;
