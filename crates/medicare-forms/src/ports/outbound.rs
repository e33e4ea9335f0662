//! Outbound ports
//!
//! Infrastructure implements these; the workflow only sees the traits.

use async_trait::async_trait;

use crate::domain::aggregates::Submission;
use crate::domain::value_objects::Notice;
use crate::error::SubmissionError;

/// Backend that receives validated submissions
#[async_trait]
pub trait SubmissionHandler: Send + Sync {
    async fn handle(&self, submission: &Submission) -> Result<(), SubmissionError>;
}

/// Process-wide notification channel
pub trait Notifier: Send + Sync {
    /// Queue a notice, returning its sequence id
    fn publish(&self, notice: Notice) -> u64;
}
