//! Inbound port implemented by every data-entry page

use crate::domain::aggregates::{FormKind, FormSchema, Submission};
use crate::domain::value_objects::{FieldSpec, Notice, SubmitAffordance};
use crate::domain::FieldValues;

/// Page-specific parts of a form workflow
pub trait FormPage: Send + Sync {
    fn kind(&self) -> FormKind;

    fn title(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn schema(&self) -> &FormSchema;

    /// Submit trigger for the current values
    fn submit_affordance(&self, values: &FieldValues) -> SubmitAffordance;

    /// Positive notice published after the side effect succeeds
    fn success_notice(&self, submission: &Submission) -> Notice;

    /// Negative notice published after the side effect fails
    fn failure_notice(&self, _submission: &Submission) -> Notice {
        Notice::error("Submission failed", "Please try again later.")
    }

    /// Label shown for a field; pages override for value-dependent labels
    fn label_for(&self, field: &FieldSpec, _values: &FieldValues) -> String {
        field.label.clone()
    }

    /// Placeholder shown for a field
    fn placeholder_for(&self, field: &FieldSpec, _values: &FieldValues) -> Option<String> {
        field.placeholder.clone()
    }
}
