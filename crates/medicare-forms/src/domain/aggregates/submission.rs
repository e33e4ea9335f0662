//! Validated submission handed to the side effect

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::aggregates::FormKind;

#[derive(Clone, Debug, Serialize)]
pub struct Submission {
    pub id: String,
    pub kind: FormKind,
    /// Visible field values in schema order
    pub values: Vec<(String, String)>,
    pub validated_at: DateTime<Utc>,
}

impl Submission {
    pub fn create(kind: FormKind, values: Vec<(String, String)>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            kind,
            values,
            validated_at: Utc::now(),
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.values
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }
}
