//! Domain layer
//!
//! Field declarations, form records, the workflow aggregate and its events.

pub mod aggregates;
pub mod events;
pub mod services;
pub mod value_objects;

/// Raw field values keyed by field name
pub type FieldValues = std::collections::HashMap<String, String>;
