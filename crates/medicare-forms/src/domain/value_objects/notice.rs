//! User-facing notices and submit affordances

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown to the user after a submission settles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Success, title: title.into(), description: description.into() }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, title: title.into(), description: description.into() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitIntent {
    #[default]
    Default,
    Destructive,
}

/// How the submit trigger is presented
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAffordance {
    pub label: String,
    pub busy_label: String,
    pub intent: SubmitIntent,
    pub disabled: bool,
}

impl SubmitAffordance {
    pub fn new(label: impl Into<String>, busy_label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            busy_label: busy_label.into(),
            intent: SubmitIntent::Default,
            disabled: false,
        }
    }

    pub fn destructive(mut self) -> Self {
        self.intent = SubmitIntent::Destructive;
        self
    }

    /// Label currently displayed on the trigger
    pub fn current_label(&self) -> &str {
        if self.disabled {
            &self.busy_label
        } else {
            &self.label
        }
    }
}
