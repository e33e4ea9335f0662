//! Appointment booking

use crate::domain::aggregates::{FormKind, FormSchema, Submission};
use crate::domain::value_objects::{DateBound, FieldKind, FieldSpec, Notice, SubmitAffordance};
use crate::domain::FieldValues;
use crate::pages::{option_label, specializations, time_slots};
use crate::ports::FormPage;

pub struct BookAppointmentPage {
    schema: FormSchema,
}

impl BookAppointmentPage {
    pub fn new() -> Self {
        let schema = FormSchema::new(FormKind::BookAppointment)
            .field(
                FieldSpec::new("patientName", "Patient Name", FieldKind::Text)
                    .placeholder("John Doe")
                    .min_len(2, "Name is required")
                    .max_len(100),
            )
            .field(
                FieldSpec::new("patientNIC", "Patient NIC", FieldKind::Text)
                    .placeholder("200012345678")
                    .min_len(10, "NIC is required")
                    .max_len(12),
            )
            .field(
                FieldSpec::new("contactNumber", "Contact Number", FieldKind::Text)
                    .placeholder("+94 77 123 4567")
                    .min_len(10, "Contact number must be at least 10 digits")
                    .max_len(15),
            )
            .field(
                FieldSpec::new("specialization", "Specialization", FieldKind::Select)
                    .placeholder("Select specialization")
                    .one_of(specializations(), "Specialization is required"),
            )
            .field(
                FieldSpec::new("doctorName", "Preferred Doctor", FieldKind::Text)
                    .placeholder("Dr. Jane Smith")
                    .min_len(2, "Doctor name is required")
                    .max_len(100),
            )
            .field(
                FieldSpec::new("appointmentDate", "Appointment Date", FieldKind::Date)
                    .required_message("Appointment date is required")
                    .date(DateBound::NotBeforeToday, "Appointment date cannot be in the past"),
            )
            .field(
                FieldSpec::new("appointmentTime", "Appointment Time", FieldKind::Select)
                    .placeholder("Select time")
                    .one_of(time_slots(), "Appointment time is required"),
            )
            .field(
                FieldSpec::new("symptoms", "Symptoms / Reason for Visit (Optional)", FieldKind::TextArea)
                    .placeholder("Briefly describe your symptoms...")
                    .optional()
                    .max_len(500),
            );

        Self { schema }
    }
}

impl Default for BookAppointmentPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage for BookAppointmentPage {
    fn kind(&self) -> FormKind {
        FormKind::BookAppointment
    }

    fn title(&self) -> &'static str {
        "Book Appointment"
    }

    fn description(&self) -> &'static str {
        "Schedule appointments with available doctors"
    }

    fn schema(&self) -> &FormSchema {
        &self.schema
    }

    fn submit_affordance(&self, _values: &FieldValues) -> SubmitAffordance {
        SubmitAffordance::new("Book Appointment", "Booking...")
    }

    fn success_notice(&self, submission: &Submission) -> Notice {
        Notice::success(
            "Appointment booked successfully!",
            format!(
                "Your appointment on {} at {} has been confirmed.",
                submission.value("appointmentDate"),
                option_label(&time_slots(), submission.value("appointmentTime")),
            ),
        )
    }

    fn failure_notice(&self, _submission: &Submission) -> Notice {
        Notice::error("Booking failed", "Please try again later.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::validation::validate;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid() -> FieldValues {
        [
            ("patientName", "John Doe"),
            ("patientNIC", "200012345678"),
            ("contactNumber", "0771234567"),
            ("specialization", "general"),
            ("doctorName", "Dr. Jane Smith"),
            ("appointmentDate", "2025-06-20"),
            ("appointmentTime", "14:00"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_valid_booking_passes() {
        let page = BookAppointmentPage::new();
        assert!(validate(page.schema(), &valid(), today()).is_ok());
    }

    #[test]
    fn test_unknown_time_slot_rejected() {
        let page = BookAppointmentPage::new();
        let mut values = valid();
        values.insert("appointmentTime".into(), "13:00".into());
        let errors = validate(page.schema(), &values, today()).unwrap_err();
        assert_eq!(errors.get("appointmentTime"), Some("Appointment time is required"));
    }

    #[test]
    fn test_past_date_rejected() {
        let page = BookAppointmentPage::new();
        let mut values = valid();
        values.insert("appointmentDate".into(), "2025-06-14".into());
        assert!(validate(page.schema(), &values, today()).is_err());
    }

    #[test]
    fn test_success_notice_uses_slot_label() {
        let page = BookAppointmentPage::new();
        let submission = Submission::create(
            FormKind::BookAppointment,
            vec![("appointmentDate".into(), "2025-06-20".into()), ("appointmentTime".into(), "14:00".into())],
        );
        assert_eq!(
            page.success_notice(&submission).description,
            "Your appointment on 2025-06-20 at 02:00 PM has been confirmed."
        );
    }
}
