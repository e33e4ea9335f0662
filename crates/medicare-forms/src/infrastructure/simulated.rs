//! Simulated submission backend
//!
//! Logs the submitted values and settles after a fixed delay. Failure
//! can be switched on to exercise the negative path.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;
use tracing::info;

use crate::domain::aggregates::Submission;
use crate::error::SubmissionError;
use crate::ports::SubmissionHandler;

/// Delay used by the portal unless configured otherwise
pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug)]
pub struct SimulatedSubmission {
    delay: Duration,
    failure: Option<SubmissionError>,
}

impl SimulatedSubmission {
    pub fn new(delay: Duration) -> Self {
        Self { delay, failure: None }
    }

    /// Every submission fails with the given error
    pub fn failing(mut self, error: SubmissionError) -> Self {
        self.failure = Some(error);
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmission {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

#[async_trait]
impl SubmissionHandler for SimulatedSubmission {
    async fn handle(&self, submission: &Submission) -> Result<(), SubmissionError> {
        info!(
            form = %submission.kind,
            submission_id = %submission.id,
            values = ?submission.values,
            "received submission"
        );
        sleep(self.delay).await;

        match &self.failure {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::aggregates::FormKind;

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_delay() {
        let handler = SimulatedSubmission::default();
        let submission = Submission::create(FormKind::Feedback, vec![]);

        let start = tokio::time::Instant::now();
        handler.handle(&submission).await.unwrap();
        assert!(start.elapsed() >= DEFAULT_DELAY);
    }

    #[tokio::test]
    async fn test_configured_failure() {
        let handler = SimulatedSubmission::new(Duration::ZERO)
            .failing(SubmissionError::Rejected("duplicate".into()));
        let submission = Submission::create(FormKind::DoctorRegistration, vec![]);

        let err = handler.handle(&submission).await.unwrap_err();
        assert_eq!(err, SubmissionError::Rejected("duplicate".into()));
    }
}
