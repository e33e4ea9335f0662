//! Appointment management
//!
//! The action field gates the rest of the form: `update` reveals and
//! requires the new date and time, `cancel` hides them and turns the
//! submit trigger destructive.

use crate::domain::aggregates::{FormKind, FormSchema, Submission};
use crate::domain::value_objects::{
    Condition, DateBound, FieldKind, FieldOption, FieldSpec, Notice, SubmitAffordance,
};
use crate::domain::FieldValues;
use crate::pages::time_slots;
use crate::ports::FormPage;

pub const ACTION_UPDATE: &str = "update";
pub const ACTION_CANCEL: &str = "cancel";

pub struct ManageAppointmentsPage {
    schema: FormSchema,
}

impl ManageAppointmentsPage {
    pub fn new() -> Self {
        let on_update = Condition::new("action", ACTION_UPDATE);

        let schema = FormSchema::new(FormKind::ManageAppointments)
            .field(
                FieldSpec::new("appointmentId", "Appointment ID", FieldKind::Text)
                    .placeholder("APT-2025-001")
                    .required_message("Appointment ID is required"),
            )
            .field(
                FieldSpec::new("patientNIC", "Patient NIC", FieldKind::Text)
                    .placeholder("200012345678")
                    .min_len(10, "NIC is required")
                    .max_len(12),
            )
            .field(
                FieldSpec::new("action", "Action", FieldKind::Select)
                    .placeholder("Select action")
                    .one_of(
                        vec![
                            FieldOption::new(ACTION_UPDATE, "Update Appointment"),
                            FieldOption::new(ACTION_CANCEL, "Cancel Appointment"),
                        ],
                        "Please select an action",
                    ),
            )
            .field(
                FieldSpec::new("newDate", "New Date", FieldKind::Date)
                    .visible_when(on_update.clone())
                    .required_when(on_update.clone())
                    .required_message("New date is required to reschedule")
                    .date(DateBound::NotBeforeToday, "New date cannot be in the past"),
            )
            .field(
                FieldSpec::new("newTime", "New Time", FieldKind::Select)
                    .placeholder("Select time")
                    .visible_when(on_update.clone())
                    .one_of(time_slots(), "New time is required to reschedule")
                    .required_when(on_update),
            )
            .field(
                FieldSpec::new("reason", "Reason for Update", FieldKind::TextArea)
                    .min_len(5, "Reason must be at least 5 characters")
                    .max_len(500),
            );

        Self { schema }
    }

    fn is_cancel(values: &FieldValues) -> bool {
        values.get("action").is_some_and(|a| a == ACTION_CANCEL)
    }
}

impl Default for ManageAppointmentsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage for ManageAppointmentsPage {
    fn kind(&self) -> FormKind {
        FormKind::ManageAppointments
    }

    fn title(&self) -> &'static str {
        "Manage Appointments"
    }

    fn description(&self) -> &'static str {
        "Update or cancel existing appointments"
    }

    fn schema(&self) -> &FormSchema {
        &self.schema
    }

    fn submit_affordance(&self, values: &FieldValues) -> SubmitAffordance {
        if Self::is_cancel(values) {
            SubmitAffordance::new("Cancel Appointment", "Processing...").destructive()
        } else {
            SubmitAffordance::new("Update Appointment", "Processing...")
        }
    }

    fn success_notice(&self, submission: &Submission) -> Notice {
        if submission.value("action") == ACTION_CANCEL {
            Notice::success("Appointment cancelled", "Your appointment has been cancelled successfully.")
        } else {
            Notice::success("Appointment updated", "Your appointment has been rescheduled successfully.")
        }
    }

    fn failure_notice(&self, _submission: &Submission) -> Notice {
        Notice::error("Operation failed", "Please try again later.")
    }

    fn label_for(&self, field: &FieldSpec, values: &FieldValues) -> String {
        match field.name.as_str() {
            "reason" if Self::is_cancel(values) => "Reason for Cancellation".to_string(),
            _ => field.label.clone(),
        }
    }

    fn placeholder_for(&self, field: &FieldSpec, values: &FieldValues) -> Option<String> {
        match field.name.as_str() {
            "reason" if Self::is_cancel(values) => Some("Please provide a reason for cancellation...".into()),
            "reason" => Some("Please provide a reason for rescheduling...".into()),
            _ => field.placeholder.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_reason_label_follows_action() {
        let page = ManageAppointmentsPage::new();
        let reason = page.schema().get("reason").unwrap();
        assert_eq!(page.label_for(reason, &values(&[("action", "cancel")])), "Reason for Cancellation");
        assert_eq!(page.label_for(reason, &values(&[("action", "update")])), "Reason for Update");
        assert_eq!(
            page.placeholder_for(reason, &values(&[("action", "cancel")])).as_deref(),
            Some("Please provide a reason for cancellation...")
        );
    }

    #[test]
    fn test_update_notice() {
        let page = ManageAppointmentsPage::new();
        let submission = Submission::create(FormKind::ManageAppointments, vec![("action".into(), "update".into())]);
        assert_eq!(page.success_notice(&submission).title, "Appointment updated");
    }
}
