//! Email format check
//!
//! Accepts `local@domain.tld` shapes with a letters-only TLD of at least
//! two characters.

use regex::Regex;
use std::sync::OnceLock;

fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

/// Whether the value is shaped like an email address
pub fn is_email(value: &str) -> bool {
    // Leading dots and consecutive dots are rejected outside the pattern
    if value.starts_with('.') || value.contains("..") {
        return false;
    }
    pattern().is_match(value)
}
