//! Patient feedback

use crate::controls::RatingControl;
use crate::domain::aggregates::{FormKind, FormSchema, Submission};
use crate::domain::value_objects::{FieldKind, FieldOption, FieldSpec, Notice, SubmitAffordance};
use crate::domain::FieldValues;
use crate::ports::FormPage;

pub const SERVICE_QUALITIES: [&str; 5] = ["Poor", "Fair", "Good", "Very Good", "Excellent"];

pub struct FeedbackPage {
    schema: FormSchema,
}

impl FeedbackPage {
    pub fn new() -> Self {
        let levels = (1..=RatingControl::LEVELS)
            .map(|l| FieldOption::new(l.to_string(), format!("{} out of {} stars", l, RatingControl::LEVELS)))
            .collect();

        let schema = FormSchema::new(FormKind::Feedback)
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
                FieldSpec::new("appointmentId", "Appointment ID", FieldKind::Text)
                    .placeholder("APT-2025-001")
                    .required_message("Appointment ID is required"),
            )
            .field(
                FieldSpec::new("doctorName", "Doctor Name", FieldKind::Text)
                    .placeholder("Dr. Jane Smith")
                    .min_len(2, "Doctor name is required")
                    .max_len(100),
            )
            .field(
                FieldSpec::new("rating", "Overall Rating", FieldKind::Rating)
                    .one_of(levels, "Please provide a rating"),
            )
            .field(
                FieldSpec::new("serviceQuality", "Service Quality Rating", FieldKind::ChoiceGroup).one_of(
                    SERVICE_QUALITIES.iter().map(|q| FieldOption::plain(q)).collect(),
                    "Please rate the service quality",
                ),
            )
            .field(
                FieldSpec::new("comments", "Comments & Suggestions", FieldKind::TextArea)
                    .placeholder("Please share your experience, suggestions, or any concerns...")
                    .min_len(10, "Comments must be at least 10 characters")
                    .max_len(1000),
            );

        Self { schema }
    }
}

impl Default for FeedbackPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage for FeedbackPage {
    fn kind(&self) -> FormKind {
        FormKind::Feedback
    }

    fn title(&self) -> &'static str {
        "Service Feedback"
    }

    fn description(&self) -> &'static str {
        "Share your experience and rate our services"
    }

    fn schema(&self) -> &FormSchema {
        &self.schema
    }

    fn submit_affordance(&self, _values: &FieldValues) -> SubmitAffordance {
        SubmitAffordance::new("Submit Feedback", "Submitting...")
    }

    fn success_notice(&self, _submission: &Submission) -> Notice {
        Notice::success("Thank you for your feedback!", "Your feedback helps us improve our services.")
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
            ("appointmentId", "APT-2025-001"),
            ("doctorName", "Dr. Jane Smith"),
            ("rating", "5"),
            ("serviceQuality", "Excellent"),
            ("comments", "Very attentive doctor."),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_rating_outside_range_rejected() {
        let page = FeedbackPage::new();
        assert!(validate(page.schema(), &valid(), today()).is_ok());

        for bad in ["0", "6", ""] {
            let mut values = valid();
            values.insert("rating".into(), bad.into());
            let errors = validate(page.schema(), &values, today()).unwrap_err();
            assert_eq!(errors.get("rating"), Some("Please provide a rating"), "{:?}", bad);
        }
    }

    #[test]
    fn test_rating_control_value_is_accepted() {
        let page = FeedbackPage::new();
        let mut control = RatingControl::new();
        control.hover(3);
        let value = control.select(3).unwrap();

        let mut values = valid();
        values.insert("rating".into(), value);
        assert!(validate(page.schema(), &values, today()).is_ok());
    }

    #[test]
    fn test_comment_boundaries() {
        let page = FeedbackPage::new();
        for (len, ok) in [(9, false), (10, true), (1000, true), (1001, false)] {
            let mut values = valid();
            values.insert("comments".into(), "c".repeat(len));
            assert_eq!(validate(page.schema(), &values, today()).is_ok(), ok, "len {}", len);
        }
    }
}
