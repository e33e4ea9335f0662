//! Domain services

pub mod validation;

pub use validation::{validate, validate_field, FieldError, ValidationErrors};
