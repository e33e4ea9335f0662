//! Form Workflow Aggregate
//!
//! One instance per mounted page. Owns the page-local record and moves
//! between Editing and Submitting. Completion always lands back in
//! Editing, with the record reset on success and retained on failure.

use chrono::{Local, NaiveDate};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::domain::aggregates::{FormKind, FormRecord, Submission};
use crate::domain::events::FormEvent;
use crate::domain::services::validation::{validate, validate_field};
use crate::domain::value_objects::{FieldSpec, SubmitAffordance};
use crate::error::{FormsError, Result, SubmissionError};
use crate::ports::{FormPage, Notifier, SubmissionHandler};

/// Identifies one in-flight submission of a workflow
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkflowState {
    Editing,
    Submitting,
}

/// Validated submission waiting for its side effect
#[derive(Clone, Debug)]
pub struct PendingSubmission {
    pub ticket: SubmissionTicket,
    pub submission: Submission,
}

/// How a submission settled
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded {
        submission_id: String,
        notification_id: u64,
    },
    Failed {
        submission_id: String,
        notification_id: u64,
        error: SubmissionError,
    },
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmitOutcome::Succeeded { .. })
    }

    pub fn notification_id(&self) -> u64 {
        match self {
            SubmitOutcome::Succeeded { notification_id, .. }
            | SubmitOutcome::Failed { notification_id, .. } => *notification_id,
        }
    }
}

struct InFlight {
    ticket: SubmissionTicket,
    submission: Submission,
}

pub struct FormWorkflow {
    page: Arc<dyn FormPage>,
    record: FormRecord,
    in_flight: Option<InFlight>,
    next_ticket: u64,
    pinned_today: Option<NaiveDate>,
    events: Vec<FormEvent>,
}

impl FormWorkflow {
    /// Mount a fresh instance with default field values
    pub fn mount(page: Arc<dyn FormPage>) -> Self {
        let record = FormRecord::from_schema(page.schema());
        debug!(form = %page.kind(), "form mounted");
        Self {
            page,
            record,
            in_flight: None,
            next_ticket: 0,
            pinned_today: None,
            events: Vec::new(),
        }
    }

    /// Validate date fields against a fixed day instead of the local clock
    pub fn pin_today(mut self, today: NaiveDate) -> Self {
        self.pinned_today = Some(today);
        self
    }

    pub fn page(&self) -> &dyn FormPage {
        self.page.as_ref()
    }

    pub fn kind(&self) -> FormKind {
        self.page.kind()
    }

    pub fn state(&self) -> WorkflowState {
        if self.in_flight.is_some() {
            WorkflowState::Submitting
        } else {
            WorkflowState::Editing
        }
    }

    pub fn record(&self) -> &FormRecord {
        &self.record
    }

    pub fn value(&self, name: &str) -> &str {
        self.record.value(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.record.error(name)
    }

    pub fn is_visible(&self, name: &str) -> bool {
        self.page
            .schema()
            .get(name)
            .is_some_and(|f| f.is_visible(self.record.values()))
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.page.schema().visible_fields(self.record.values())
    }

    pub fn label(&self, field: &FieldSpec) -> String {
        self.page.label_for(field, self.record.values())
    }

    pub fn placeholder(&self, field: &FieldSpec) -> Option<String> {
        self.page.placeholder_for(field, self.record.values())
    }

    /// Submit trigger, disabled while a submission is in flight
    pub fn submit_affordance(&self) -> SubmitAffordance {
        let mut affordance = self.page.submit_affordance(self.record.values());
        affordance.disabled = self.in_flight.is_some();
        affordance
    }

    /// Store a raw value. A field that already shows an error is
    /// re-validated on its own; no other field is touched.
    pub fn update_field(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        if self.in_flight.is_some() {
            return Err(FormsError::Busy);
        }
        let today = self.today();
        let Some(spec) = self.page.schema().get(name) else {
            return Err(FormsError::UnknownField(name.to_string()));
        };

        self.record.set(name, value);
        if self.record.error(name).is_some() {
            match validate_field(spec, self.record.values(), today) {
                Some(message) => self.record.set_error(name, message),
                None => self.record.clear_error(name),
            }
        }

        let kind = self.page.kind();
        debug!(form = %kind, field = name, "field updated");
        self.events.push(FormEvent::FieldUpdated { kind, field: name.to_string() });
        Ok(())
    }

    /// Validate and enter Submitting. On failure the errors are attached
    /// to the record and the workflow stays in Editing.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission> {
        if self.in_flight.is_some() {
            return Err(FormsError::Busy);
        }
        let kind = self.page.kind();
        let schema = self.page.schema();

        if let Err(errors) = validate(schema, self.record.values(), self.today()) {
            warn!(form = %kind, invalid = %errors, "submission rejected by validation");
            self.record.apply_errors(&errors);
            self.events.push(FormEvent::ValidationFailed {
                kind,
                fields: errors.fields().map(str::to_string).collect(),
            });
            return Err(FormsError::Validation(errors));
        }

        let values = schema
            .visible_fields(self.record.values())
            .map(|f| (f.name.clone(), self.record.value(&f.name).to_string()))
            .collect();
        self.record.clear_errors();

        self.next_ticket += 1;
        let ticket = SubmissionTicket(self.next_ticket);
        let submission = Submission::create(kind, values);

        info!(form = %kind, submission_id = %submission.id, "submission started");
        self.events.push(FormEvent::SubmissionStarted {
            kind,
            submission_id: submission.id.clone(),
        });
        self.in_flight = Some(InFlight { ticket, submission: submission.clone() });

        Ok(PendingSubmission { ticket, submission })
    }

    /// Settle the in-flight submission and publish exactly one notice
    pub fn complete(
        &mut self,
        ticket: SubmissionTicket,
        outcome: std::result::Result<(), SubmissionError>,
        notifier: &dyn Notifier,
    ) -> Result<SubmitOutcome> {
        let in_flight = match self.in_flight.take() {
            Some(current) if current.ticket == ticket => current,
            other => {
                self.in_flight = other;
                warn!(form = %self.kind(), ?ticket, "completion for stale submission discarded");
                return Err(FormsError::StaleSubmission);
            }
        };

        let kind = self.page.kind();
        let submission = in_flight.submission;

        match outcome {
            Ok(()) => {
                let notification_id = notifier.publish(self.page.success_notice(&submission));
                self.record.reset(self.page.schema());
                info!(form = %kind, submission_id = %submission.id, "submission succeeded");

                self.events.push(FormEvent::Submitted {
                    kind,
                    submission_id: submission.id.clone(),
                    notification_id,
                });
                self.events.push(FormEvent::Reset { kind });
                Ok(SubmitOutcome::Succeeded { submission_id: submission.id, notification_id })
            }
            Err(err) => {
                let notification_id = notifier.publish(self.page.failure_notice(&submission));
                error!(form = %kind, submission_id = %submission.id, error = %err, "submission failed");

                self.events.push(FormEvent::SubmissionFailed {
                    kind,
                    submission_id: submission.id.clone(),
                    reason: err.to_string(),
                    notification_id,
                });
                Ok(SubmitOutcome::Failed { submission_id: submission.id, notification_id, error: err })
            }
        }
    }

    /// Invalidate the in-flight submission, e.g. when the page unmounts
    pub fn abandon(&mut self) -> Option<SubmissionTicket> {
        let in_flight = self.in_flight.take()?;
        let kind = self.page.kind();
        warn!(form = %kind, submission_id = %in_flight.submission.id, "in-flight submission abandoned");
        self.events.push(FormEvent::SubmissionAbandoned {
            kind,
            submission_id: in_flight.submission.id,
        });
        Some(in_flight.ticket)
    }

    /// Validate, run the side effect, and settle
    pub async fn submit(
        &mut self,
        handler: &dyn SubmissionHandler,
        notifier: &dyn Notifier,
    ) -> Result<SubmitOutcome> {
        let pending = self.begin_submit()?;
        let outcome = handler.handle(&pending.submission).await;
        self.complete(pending.ticket, outcome, notifier)
    }

    pub fn take_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.events)
    }

    fn today(&self) -> NaiveDate {
        self.pinned_today.unwrap_or_else(|| Local::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{NoticeKind, SubmitIntent};
    use crate::infrastructure::{NotificationCenter, SimulatedSubmission};
    use crate::pages::{FeedbackPage, ManageAppointmentsPage};
    use std::time::Duration;
    use tokio_test::{assert_err, assert_ok};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn feedback() -> FormWorkflow {
        FormWorkflow::mount(Arc::new(FeedbackPage::new())).pin_today(today())
    }

    fn manage() -> FormWorkflow {
        FormWorkflow::mount(Arc::new(ManageAppointmentsPage::new())).pin_today(today())
    }

    fn fill_feedback(wf: &mut FormWorkflow) {
        for (name, value) in [
            ("patientName", "John Doe"),
            ("patientNIC", "200012345678"),
            ("appointmentId", "APT-2025-001"),
            ("doctorName", "Dr. Jane Smith"),
            ("rating", "4"),
            ("serviceQuality", "Very Good"),
            ("comments", "Friendly staff and short waiting time."),
        ] {
            assert_ok!(wf.update_field(name, value));
        }
    }

    fn instant() -> SimulatedSubmission {
        SimulatedSubmission::new(Duration::ZERO)
    }

    #[tokio::test]
    async fn test_valid_submission_resets_and_notifies_once() {
        let center = NotificationCenter::default();
        let mut wf = feedback();
        fill_feedback(&mut wf);

        let outcome = wf.submit(&instant(), &center).await.unwrap();
        assert!(outcome.is_success());
        assert_eq!(wf.state(), WorkflowState::Editing);
        assert!(wf.record().is_pristine());

        let notes = center.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].notice.kind, NoticeKind::Success);
        assert_eq!(notes[0].notice.title, "Thank you for your feedback!");
        assert_eq!(notes[0].id, outcome.notification_id());
    }

    #[tokio::test]
    async fn test_missing_required_field_blocks_side_effect() {
        let center = NotificationCenter::default();
        let mut wf = feedback();
        fill_feedback(&mut wf);
        assert_ok!(wf.update_field("doctorName", ""));

        let err = wf.submit(&instant(), &center).await.unwrap_err();
        let FormsError::Validation(errors) = err else { panic!("expected validation error") };
        assert_eq!(errors.len(), 1);
        assert_eq!(wf.error("doctorName"), Some("Doctor name is required"));
        assert_eq!(wf.value("patientName"), "John Doe");
        assert_eq!(wf.state(), WorkflowState::Editing);
        assert!(center.is_empty());
    }

    #[tokio::test]
    async fn test_failed_side_effect_retains_values() {
        let center = NotificationCenter::default();
        let handler = instant().failing(SubmissionError::Unavailable("backend offline".into()));
        let mut wf = feedback();
        fill_feedback(&mut wf);

        // a failing side effect settles the workflow; it is not an Err
        let outcome = wf.submit(&handler, &center).await.unwrap();
        assert!(matches!(
            &outcome,
            SubmitOutcome::Failed { error: SubmissionError::Unavailable(reason), .. } if reason == "backend offline"
        ));
        assert_eq!(wf.state(), WorkflowState::Editing);
        assert_eq!(wf.value("comments"), "Friendly staff and short waiting time.");

        let notes = center.drain();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].notice.kind, NoticeKind::Error);
        assert_eq!(notes[0].notice.title, "Submission failed");
    }

    #[test]
    fn test_busy_while_submitting() {
        let mut wf = feedback();
        fill_feedback(&mut wf);
        let pending = wf.begin_submit().unwrap();

        assert_eq!(wf.state(), WorkflowState::Submitting);
        assert!(matches!(wf.update_field("comments", "changed"), Err(FormsError::Busy)));
        assert!(matches!(wf.begin_submit(), Err(FormsError::Busy)));

        let affordance = wf.submit_affordance();
        assert!(affordance.disabled);
        assert_eq!(affordance.current_label(), "Submitting...");

        let center = NotificationCenter::default();
        assert_ok!(wf.complete(pending.ticket, Ok(()), &center));
        assert!(!wf.submit_affordance().disabled);
    }

    #[test]
    fn test_abandoned_submission_is_discarded() {
        let center = NotificationCenter::default();
        let mut wf = feedback();
        fill_feedback(&mut wf);
        let pending = wf.begin_submit().unwrap();

        assert_eq!(wf.abandon(), Some(pending.ticket));
        assert_eq!(wf.state(), WorkflowState::Editing);
        assert!(matches!(wf.complete(pending.ticket, Ok(()), &center), Err(FormsError::StaleSubmission)));
        assert!(center.is_empty());
        assert_eq!(wf.value("patientName"), "John Doe");
    }

    #[test]
    fn test_stale_ticket_does_not_settle_newer_submission() {
        let center = NotificationCenter::default();
        let mut wf = feedback();
        fill_feedback(&mut wf);
        let first = wf.begin_submit().unwrap();
        wf.abandon();
        let second = wf.begin_submit().unwrap();

        assert_err!(wf.complete(first.ticket, Ok(()), &center));
        assert_eq!(wf.state(), WorkflowState::Submitting);
        assert_ok!(wf.complete(second.ticket, Ok(()), &center));
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let mut wf = feedback();
        assert!(matches!(wf.update_field("nickname", "JD"), Err(FormsError::UnknownField(f)) if f == "nickname"));
    }

    #[test]
    fn test_update_revalidates_only_the_edited_field() {
        let mut wf = feedback();
        assert_err!(wf.begin_submit());
        assert_eq!(wf.error("patientName"), Some("Name is required"));
        assert_eq!(wf.error("comments"), Some("Comments must be at least 10 characters"));

        assert_ok!(wf.update_field("patientName", "John Doe"));
        assert_eq!(wf.error("patientName"), None);
        assert_eq!(wf.error("comments"), Some("Comments must be at least 10 characters"));

        assert_ok!(wf.update_field("comments", "short"));
        assert_eq!(wf.error("comments"), Some("Comments must be at least 10 characters"));
    }

    #[test]
    fn test_action_gates_date_and_time_fields() {
        let mut wf = manage();
        assert!(!wf.is_visible("newDate"));

        assert_ok!(wf.update_field("action", "update"));
        assert!(wf.is_visible("newDate"));
        assert!(wf.is_visible("newTime"));
        let affordance = wf.submit_affordance();
        assert_eq!(affordance.label, "Update Appointment");
        assert_eq!(affordance.intent, SubmitIntent::Default);

        assert_ok!(wf.update_field("action", "cancel"));
        assert!(!wf.is_visible("newDate"));
        assert!(!wf.is_visible("newTime"));
        let affordance = wf.submit_affordance();
        assert_eq!(affordance.label, "Cancel Appointment");
        assert_eq!(affordance.intent, SubmitIntent::Destructive);
        assert_eq!(affordance.busy_label, "Processing...");
    }

    #[test]
    fn test_update_action_requires_new_date_and_time() {
        let mut wf = manage();
        for (name, value) in [
            ("appointmentId", "APT-2025-001"),
            ("patientNIC", "200012345678"),
            ("action", "update"),
            ("reason", "Travelling that week"),
        ] {
            assert_ok!(wf.update_field(name, value));
        }

        let FormsError::Validation(errors) = wf.begin_submit().unwrap_err() else {
            panic!("expected validation error")
        };
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["newDate", "newTime"]);

        assert_ok!(wf.update_field("newDate", "2025-07-01"));
        assert_ok!(wf.update_field("newTime", "10:00"));
        let pending = wf.begin_submit().unwrap();
        assert_eq!(pending.submission.value("newTime"), "10:00");
    }

    #[test]
    fn test_cancel_submission_omits_hidden_fields() {
        let center = NotificationCenter::default();
        let mut wf = manage();
        for (name, value) in [
            ("appointmentId", "APT-2025-001"),
            ("patientNIC", "200012345678"),
            ("action", "update"),
            ("newDate", "2025-07-01"),
            ("action", "cancel"),
            ("reason", "Feeling better now"),
        ] {
            assert_ok!(wf.update_field(name, value));
        }

        let pending = wf.begin_submit().unwrap();
        assert!(pending.submission.values.iter().all(|(k, _)| k != "newDate" && k != "newTime"));

        wf.complete(pending.ticket, Ok(()), &center).unwrap();
        assert_eq!(center.drain()[0].notice.title, "Appointment cancelled");
    }

    #[tokio::test]
    async fn test_event_trail() {
        let center = NotificationCenter::default();
        let mut wf = feedback();
        assert_err!(wf.begin_submit());
        fill_feedback(&mut wf);
        wf.submit(&instant(), &center).await.unwrap();

        let events = wf.take_events();
        assert!(matches!(events.first(), Some(FormEvent::ValidationFailed { .. })));
        assert!(matches!(events.last(), Some(FormEvent::Reset { kind: FormKind::Feedback })));
        assert!(events.iter().any(|e| matches!(e, FormEvent::Submitted { .. })));
        assert!(wf.take_events().is_empty());
    }
}
