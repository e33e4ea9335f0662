//! Form schemas

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::value_objects::FieldSpec;
use crate::domain::FieldValues;

/// The data-entry pages of the portal
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    PatientRegistration,
    DoctorRegistration,
    BookAppointment,
    ManageAppointments,
    Feedback,
}

impl FormKind {
    pub const ALL: [FormKind; 5] = [
        FormKind::PatientRegistration,
        FormKind::DoctorRegistration,
        FormKind::BookAppointment,
        FormKind::ManageAppointments,
        FormKind::Feedback,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormKind::PatientRegistration => "patient-registration",
            FormKind::DoctorRegistration => "doctor-registration",
            FormKind::BookAppointment => "book-appointment",
            FormKind::ManageAppointments => "manage-appointments",
            FormKind::Feedback => "feedback",
        }
    }
}

impl fmt::Display for FormKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered field declarations of one form
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormSchema {
    kind: FormKind,
    fields: Vec<FieldSpec>,
}

impl FormSchema {
    pub fn new(kind: FormKind) -> Self {
        Self { kind, fields: Vec::new() }
    }

    pub fn field(mut self, spec: FieldSpec) -> Self {
        debug_assert!(self.get(&spec.name).is_none(), "duplicate field {}", spec.name);
        self.fields.push(spec);
        self
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn visible_fields<'a>(&'a self, values: &'a FieldValues) -> impl Iterator<Item = &'a FieldSpec> + 'a {
        self.fields.iter().filter(move |f| f.is_visible(values))
    }

    /// Default value of every field (all empty)
    pub fn defaults(&self) -> FieldValues {
        self.fields.iter().map(|f| (f.name.clone(), String::new())).collect()
    }
}
