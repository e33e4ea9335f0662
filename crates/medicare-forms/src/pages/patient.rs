//! Patient registration

use crate::domain::aggregates::{FormKind, FormSchema, Submission};
use crate::domain::value_objects::{DateBound, FieldKind, FieldOption, FieldSpec, Notice, SubmitAffordance};
use crate::domain::FieldValues;
use crate::ports::FormPage;

const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

pub struct PatientRegistrationPage {
    schema: FormSchema,
}

impl PatientRegistrationPage {
    pub fn new() -> Self {
        let genders = vec![
            FieldOption::new("male", "Male"),
            FieldOption::new("female", "Female"),
            FieldOption::new("other", "Other"),
        ];

        let schema = FormSchema::new(FormKind::PatientRegistration)
            .field(
                FieldSpec::new("fullName", "Full Name", FieldKind::Text)
                    .placeholder("John Doe")
                    .min_len(2, "Name must be at least 2 characters")
                    .max_len(100),
            )
            .field(
                FieldSpec::new("nic", "NIC Number", FieldKind::Text)
                    .placeholder("200012345678")
                    .min_len(10, "NIC must be at least 10 characters")
                    .max_len(12),
            )
            .field(
                FieldSpec::new("dateOfBirth", "Date of Birth", FieldKind::Date)
                    .required_message("Date of birth is required")
                    .date(DateBound::NotAfterToday, "Date of birth cannot be in the future"),
            )
            .field(
                FieldSpec::new("gender", "Gender", FieldKind::Select)
                    .placeholder("Select gender")
                    .one_of(genders, "Please select a gender"),
            )
            .field(
                FieldSpec::new("contactNumber", "Contact Number", FieldKind::Text)
                    .placeholder("+94 77 123 4567")
                    .min_len(10, "Contact number must be at least 10 digits")
                    .max_len(15),
            )
            .field(
                FieldSpec::new("email", "Email Address", FieldKind::Email)
                    .placeholder("patient@example.com")
                    .required_message("Invalid email address")
                    .email("Invalid email address")
                    .max_len(255),
            )
            .field(
                FieldSpec::new("address", "Address", FieldKind::TextArea)
                    .placeholder("No. 12, Galle Road, Colombo 03")
                    .min_len(5, "Address must be at least 5 characters")
                    .max_len(200),
            )
            .field(
                FieldSpec::new("bloodGroup", "Blood Group (Optional)", FieldKind::Select)
                    .placeholder("Select blood group")
                    .one_of(
                        BLOOD_GROUPS.iter().map(|g| FieldOption::plain(g)).collect(),
                        "Please select a valid blood group",
                    )
                    .optional(),
            )
            .field(
                FieldSpec::new("emergencyContactName", "Emergency Contact Name", FieldKind::Text)
                    .placeholder("Jane Doe")
                    .min_len(2, "Emergency contact name is required")
                    .max_len(100),
            )
            .field(
                FieldSpec::new("emergencyContactNumber", "Emergency Contact Number", FieldKind::Text)
                    .placeholder("+94 77 765 4321")
                    .min_len(10, "Emergency contact number must be at least 10 digits")
                    .max_len(15),
            )
            .field(
                FieldSpec::new("medicalHistory", "Medical History (Optional)", FieldKind::TextArea)
                    .placeholder("Allergies, chronic conditions, current medications...")
                    .optional()
                    .max_len(1000),
            );

        Self { schema }
    }
}

impl Default for PatientRegistrationPage {
    fn default() -> Self {
        Self::new()
    }
}

impl FormPage for PatientRegistrationPage {
    fn kind(&self) -> FormKind {
        FormKind::PatientRegistration
    }

    fn title(&self) -> &'static str {
        "Patient Registration"
    }

    fn description(&self) -> &'static str {
        "Register new patients with complete medical details"
    }

    fn schema(&self) -> &FormSchema {
        &self.schema
    }

    fn submit_affordance(&self, _values: &FieldValues) -> SubmitAffordance {
        SubmitAffordance::new("Register Patient", "Registering...")
    }

    fn success_notice(&self, submission: &Submission) -> Notice {
        Notice::success(
            "Patient registered successfully!",
            format!("{} has been registered.", submission.value("fullName")),
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

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn valid() -> FieldValues {
        [
            ("fullName", "John Doe"),
            ("nic", "200012345678"),
            ("dateOfBirth", "1990-04-21"),
            ("gender", "male"),
            ("contactNumber", "0771234567"),
            ("email", "john@example.com"),
            ("address", "No. 12, Galle Road, Colombo 03"),
            ("bloodGroup", ""),
            ("emergencyContactName", "Jane Doe"),
            ("emergencyContactNumber", "0777654321"),
            ("medicalHistory", ""),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    #[test]
    fn test_valid_record_passes() {
        let page = PatientRegistrationPage::new();
        assert!(validate(page.schema(), &valid(), today()).is_ok());
    }

    #[test]
    fn test_optional_blood_group_must_be_known_when_given() {
        let page = PatientRegistrationPage::new();
        let mut values = valid();
        values.insert("bloodGroup".into(), "O+".into());
        assert!(validate(page.schema(), &values, today()).is_ok());

        values.insert("bloodGroup".into(), "Z".into());
        let errors = validate(page.schema(), &values, today()).unwrap_err();
        assert_eq!(errors.get("bloodGroup"), Some("Please select a valid blood group"));
    }

    #[test]
    fn test_nic_length_bounds() {
        let page = PatientRegistrationPage::new();
        for (nic, ok) in [("123456789V", true), ("123456789", false), ("200012345678", true), ("2000123456789", false)] {
            let mut values = valid();
            values.insert("nic".into(), nic.into());
            assert_eq!(validate(page.schema(), &values, today()).is_ok(), ok, "{}", nic);
        }
    }

    #[test]
    fn test_birth_date_in_future_rejected() {
        let page = PatientRegistrationPage::new();
        let mut values = valid();
        values.insert("dateOfBirth".into(), "2030-01-01".into());
        let errors = validate(page.schema(), &values, today()).unwrap_err();
        assert_eq!(errors.get("dateOfBirth"), Some("Date of birth cannot be in the future"));
    }
}
