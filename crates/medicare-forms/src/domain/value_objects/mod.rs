//! Form value objects
//!
//! Field declarations, the rules attached to them, and the notices a
//! workflow publishes.

pub mod email;
pub mod notice;

use serde::{Deserialize, Serialize};

use crate::domain::FieldValues;

pub use email::is_email;
pub use notice::{Notice, NoticeKind, SubmitAffordance, SubmitIntent};

/// Input control used to edit a field
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    TextArea,
    Email,
    Number,
    Date,
    Select,
    ChoiceGroup,
    Rating,
}

/// Selectable option of a select or choice-group field
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

impl FieldOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into() }
    }

    /// Option whose label is its value
    pub fn plain(value: &str) -> Self {
        Self::new(value, value)
    }
}

/// Holds when another field currently equals a given value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub field: String,
    pub equals: String,
}

impl Condition {
    pub fn new(field: impl Into<String>, equals: impl Into<String>) -> Self {
        Self { field: field.into(), equals: equals.into() }
    }

    pub fn holds(&self, values: &FieldValues) -> bool {
        values.get(&self.field).is_some_and(|v| *v == self.equals)
    }
}

/// Whether a field must carry a value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Required,
    Optional,
    RequiredWhen(Condition),
}

/// Which calendar days a date field accepts, relative to today
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateBound {
    Any,
    NotBeforeToday,
    NotAfterToday,
}

/// Declarative constraint on a non-empty field value
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum FieldRule {
    MinLength { min: usize, message: String },
    MaxLength { max: usize, message: String },
    Email { message: String },
    Numeric { message: String },
    OneOf { options: Vec<String>, message: String },
    Date { bound: DateBound, message: String },
}

/// Declaration of a single form field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub presence: Presence,
    /// Reported when a required field is empty
    pub required_message: String,
    pub visible_when: Option<Condition>,
    pub options: Vec<FieldOption>,
    pub rules: Vec<FieldRule>,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        let label = label.into();
        Self {
            name: name.into(),
            required_message: format!("{} is required", label),
            label,
            kind,
            placeholder: None,
            presence: Presence::Required,
            visible_when: None,
            options: Vec::new(),
            rules: Vec::new(),
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn optional(mut self) -> Self {
        self.presence = Presence::Optional;
        self
    }

    pub fn required_when(mut self, condition: Condition) -> Self {
        self.presence = Presence::RequiredWhen(condition);
        self
    }

    pub fn required_message(mut self, message: impl Into<String>) -> Self {
        self.required_message = message.into();
        self
    }

    pub fn visible_when(mut self, condition: Condition) -> Self {
        self.visible_when = Some(condition);
        self
    }

    /// Minimum length; an empty required value reports the same message.
    pub fn min_len(mut self, min: usize, message: impl Into<String>) -> Self {
        let message = message.into();
        self.required_message = message.clone();
        self.rules.push(FieldRule::MinLength { min, message });
        self
    }

    pub fn max_len(mut self, max: usize) -> Self {
        self.rules.push(FieldRule::MaxLength {
            max,
            message: format!("Must be at most {} characters", max),
        });
        self
    }

    pub fn email(mut self, message: impl Into<String>) -> Self {
        self.rules.push(FieldRule::Email { message: message.into() });
        self
    }

    pub fn numeric(mut self, message: impl Into<String>) -> Self {
        self.rules.push(FieldRule::Numeric { message: message.into() });
        self
    }

    pub fn date(mut self, bound: DateBound, message: impl Into<String>) -> Self {
        self.rules.push(FieldRule::Date { bound, message: message.into() });
        self
    }

    /// Restrict the value to the given options. Also used as the empty-value message.
    pub fn one_of(mut self, options: Vec<FieldOption>, message: impl Into<String>) -> Self {
        let message = message.into();
        self.required_message = message.clone();
        self.rules.push(FieldRule::OneOf {
            options: options.iter().map(|o| o.value.clone()).collect(),
            message,
        });
        self.options = options;
        self
    }

    pub fn is_visible(&self, values: &FieldValues) -> bool {
        self.visible_when.as_ref().map_or(true, |c| c.holds(values))
    }

    pub fn is_required(&self, values: &FieldValues) -> bool {
        match &self.presence {
            Presence::Required => true,
            Presence::Optional => false,
            Presence::RequiredWhen(condition) => condition.holds(values),
        }
    }
}
