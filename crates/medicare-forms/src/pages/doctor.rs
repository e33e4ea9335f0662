//! Doctor registration

use crate::domain::aggregates::{FormKind, FormSchema, Submission};
use crate::domain::value_objects::{FieldKind, FieldSpec, Notice, SubmitAffordance};
use crate::domain::FieldValues;
use crate::pages::specializations;
use crate::ports::FormPage;

pub struct DoctorRegistrationPage {
    schema: FormSchema,
}

impl DoctorRegistrationPage {
    pub fn new() -> Self {
        let schema = FormSchema::new(FormKind::DoctorRegistration)
            .field(
                FieldSpec::new("fullName", "Full Name", FieldKind::Text)
                    .placeholder("Dr. Jane Smith")
                    .min_len(2, "Name must be at least 2 characters")
                    .max_len(100),
            )
            .field(
                FieldSpec::new("slmcNumber", "SLMC Registration Number", FieldKind::Text)
                    .placeholder("12345")
                    .min_len(5, "SLMC number is required")
                    .max_len(20),
            )
            .field(
                FieldSpec::new("specialization", "Specialization", FieldKind::Select)
                    .placeholder("Select specialization")
                    .one_of(specializations(), "Specialization is required"),
            )
            .field(
                FieldSpec::new("qualification", "Qualifications", FieldKind::Text)
                    .placeholder("MBBS, MD")
                    .min_len(2, "Qualification is required")
                    .max_len(200),
            )
            .field(
                FieldSpec::new("experience", "Years of Experience", FieldKind::Number)
                    .placeholder("10")
                    .required_message("Experience is required")
                    .numeric("Experience must be a number"),
            )
            .field(
                FieldSpec::new("contactNumber", "Contact Number", FieldKind::Text)
                    .placeholder("+94 77 123 4567")
                    .min_len(10, "Contact number must be at least 10 digits")
                    .max_len(15),
            )
            .field(
                FieldSpec::new("email", "Email Address", FieldKind::Email)
                    .placeholder("doctor@hospital.lk")
                    .required_message("Invalid email address")
                    .email("Invalid email address")
                    .max_len(255),
            )
            .field(
                FieldSpec::new("hospital", "Hospital/Clinic", FieldKind::Text)
                    .placeholder("Colombo General Hospital")
                    .min_len(2, "Hospital/Clinic name is required")
                    .max_len(200),
            )
            .field(
                FieldSpec::new("consultationFee", "Consultation Fee (LKR)", FieldKind::Text)
                    .placeholder("2000")
                    .required_message("Consultation fee is required")
                    .numeric("Consultation fee must be a number"),
            )
            .field(
                FieldSpec::new("availableDays", "Available Days", FieldKind::Text)
                    .placeholder("Mon, Wed, Fri")
                    .required_message("Available days are required"),
            )
            .field(
                FieldSpec::new("availableTime", "Available Time", FieldKind::Text)
                    .placeholder("9:00 AM - 5:00 PM")
                    .required_message("Available time is required"),
            )
            .field(
                FieldSpec::new("bio", "Biography (Optional)", FieldKind::TextArea)
                    .placeholder("Brief professional background and expertise...")
                    .optional()
                    .max_len(1000),
            );

        Self { schema }
    }
}

impl Default for DoctorRegistrationPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage for DoctorRegistrationPage {
    fn kind(&self) -> FormKind {
        FormKind::DoctorRegistration
    }

    fn title(&self) -> &'static str {
        "Doctor Registration"
    }

    fn description(&self) -> &'static str {
        "Register doctors with specialization and availability"
    }

    fn schema(&self) -> &FormSchema {
        &self.schema
    }

    fn submit_affordance(&self, _values: &FieldValues) -> SubmitAffordance {
        SubmitAffordance::new("Register Doctor", "Registering...")
    }

    fn success_notice(&self, submission: &Submission) -> Notice {
        Notice::success(
            "Doctor registered successfully!",
            format!("Dr. {} has been registered.", submission.value("fullName")),
        )
    }

    fn failure_notice(&self, _submission: &Submission) -> Notice {
        Notice::error("Registration failed", "Please try again later.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::validation::validate;
    use chrono::NaiveDate;

    fn valid() -> FieldValues {
        [
            ("fullName", "Jane Smith"),
            ("slmcNumber", "12345"),
            ("specialization", "cardiology"),
            ("qualification", "MBBS, MD"),
            ("experience", "10"),
            ("contactNumber", "+94771234567"),
            ("email", "jane@hospital.lk"),
            ("hospital", "Colombo General Hospital"),
            ("consultationFee", "2000"),
            ("availableDays", "Mon, Wed, Fri"),
            ("availableTime", "9:00 AM - 5:00 PM"),
            ("bio", ""),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn test_valid_record_passes() {
        let page = DoctorRegistrationPage::new();
        assert!(validate(page.schema(), &valid(), today()).is_ok());
    }

    #[test]
    fn test_every_required_field_reports_when_empty() {
        let page = DoctorRegistrationPage::new();
        for spec in page.schema().fields().iter().filter(|f| f.name != "bio") {
            let mut values = valid();
            values.insert(spec.name.clone(), String::new());
            let errors = validate(page.schema(), &values, today()).unwrap_err();
            assert_eq!(errors.get(&spec.name), Some(spec.required_message.as_str()), "{}", spec.name);
        }
    }

    #[test]
    fn test_unknown_specialization_rejected() {
        let page = DoctorRegistrationPage::new();
        let mut values = valid();
        values.insert("specialization".into(), "astrology".into());
        let errors = validate(page.schema(), &values, today()).unwrap_err();
        assert_eq!(errors.get("specialization"), Some("Specialization is required"));
    }

    #[test]
    fn test_success_notice_echoes_name() {
        let page = DoctorRegistrationPage::new();
        let submission = Submission::create(FormKind::DoctorRegistration, vec![("fullName".into(), "Jane Smith".into())]);
        assert_eq!(page.success_notice(&submission).description, "Dr. Jane Smith has been registered.");
    }
}
