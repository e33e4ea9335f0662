//! Page-local form record

use std::collections::HashMap;

use crate::domain::aggregates::FormSchema;
use crate::domain::services::validation::ValidationErrors;
use crate::domain::FieldValues;

/// Current raw values of a mounted form plus per-field error text
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormRecord {
    values: FieldValues,
    errors: HashMap<String, String>,
}

impl FormRecord {
    pub fn from_schema(schema: &FormSchema) -> Self {
        Self { values: schema.defaults(), errors: HashMap::new() }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn set(&mut self, name: &str, value: impl Into<String>) {
        self.values.insert(name.to_string(), value.into());
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn set_error(&mut self, name: &str, message: impl Into<String>) {
        self.errors.insert(name.to_string(), message.into());
    }

    pub fn clear_error(&mut self, name: &str) {
        self.errors.remove(name);
    }

    /// Replace all errors with the given set
    pub fn apply_errors(&mut self, errors: &ValidationErrors) {
        self.errors = errors
            .iter()
            .map(|e| (e.field.clone(), e.message.clone()))
            .collect();
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    /// Back to schema defaults with no errors
    pub fn reset(&mut self, schema: &FormSchema) {
        self.values = schema.defaults();
        self.errors.clear();
    }

    pub fn is_pristine(&self) -> bool {
        self.errors.is_empty() && self.values.values().all(String::is_empty)
    }
}
