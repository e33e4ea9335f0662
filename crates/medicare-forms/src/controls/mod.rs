//! Interactive sub-controls with their own transient state

pub mod rating;

pub use rating::{RatingControl, RatingIndicator};
