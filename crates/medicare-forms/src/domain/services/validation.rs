//! Schema validation
//!
//! Evaluates field specs against raw values. Hidden fields are skipped,
//! empty values only fail when the field is required, and the first
//! failing rule of a field wins.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::domain::aggregates::FormSchema;
use crate::domain::value_objects::{is_email, DateBound, FieldRule, FieldSpec};
use crate::domain::FieldValues;

/// Message attached to a single failing field
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Failing fields in schema order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.iter().find(|e| e.field == field).map(|e| e.message.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn push(&mut self, field: &str, message: String) {
        self.0.push(FieldError { field: field.to_string(), message });
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.fields().collect();
        write!(f, "{} field(s) invalid: {}", fields.len(), fields.join(", "))
    }
}

/// Validate every visible field of the schema
pub fn validate(schema: &FormSchema, values: &FieldValues, today: NaiveDate) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    for spec in schema.fields() {
        if let Some(message) = validate_field(spec, values, today) {
            errors.push(&spec.name, message);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate one field, returning its message on failure
pub fn validate_field(spec: &FieldSpec, values: &FieldValues, today: NaiveDate) -> Option<String> {
    if !spec.is_visible(values) {
        return None;
    }

    let value = values.get(&spec.name).map(String::as_str).unwrap_or("");
    if value.trim().is_empty() {
        return spec.is_required(values).then(|| spec.required_message.clone());
    }

    spec.rules.iter().find_map(|rule| check_rule(rule, value, today).err())
}

fn check_rule(rule: &FieldRule, value: &str, today: NaiveDate) -> Result<(), String> {
    let ok = match rule {
        FieldRule::MinLength { min, .. } => value.chars().count() >= *min,
        FieldRule::MaxLength { max, .. } => value.chars().count() <= *max,
        FieldRule::Email { .. } => is_email(value),
        FieldRule::Numeric { .. } => value
            .trim()
            .parse::<f64>()
            .is_ok_and(|n| n.is_finite() && n >= 0.0),
        FieldRule::OneOf { options, .. } => options.iter().any(|o| o == value),
        FieldRule::Date { bound, .. } => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            Ok(date) => match bound {
                DateBound::Any => true,
                DateBound::NotBeforeToday => date >= today,
                DateBound::NotAfterToday => date <= today,
            },
            Err(_) => false,
        },
    };

    if ok {
        Ok(())
    } else {
        Err(rule_message(rule).to_string())
    }
}

fn rule_message(rule: &FieldRule) -> &str {
    match rule {
        FieldRule::MinLength { message, .. }
        | FieldRule::MaxLength { message, .. }
        | FieldRule::Email { message }
        | FieldRule::Numeric { message }
        | FieldRule::OneOf { message, .. }
        | FieldRule::Date { message, .. } => message,
    }
}
