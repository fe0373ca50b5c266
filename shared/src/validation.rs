//! Request validation
//!
//! Pure checks run before anything reaches the store. Checks short-circuit
//! in a fixed order and report only the first failure:
//!
//! 1. name present and not blank
//! 2. email present and not blank
//! 3. email shaped like `local@domain.tld`
//! 4. position present and not blank

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::EmployeeInput;

/// Same shape the web form accepts: no whitespace anywhere, exactly one `@`,
/// and a dot inside the domain with characters on both sides.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// First failing reason for a submitted record
///
/// `Display` is the message returned to API callers verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required")]
    NameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Position is required")]
    PositionRequired,
}

/// Input that passed validation, with every field trimmed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmployee {
    pub name: String,
    pub email: String,
    pub position: String,
}

/// Check an employee payload.
///
/// The email pattern is applied to the value as submitted, so surrounding
/// whitespace makes an email invalid even though the stored value is trimmed.
pub fn validate_employee(input: &EmployeeInput) -> Result<ValidEmployee, ValidationError> {
    let name = required(&input.name).ok_or(ValidationError::NameRequired)?;
    let email = required(&input.email).ok_or(ValidationError::EmailRequired)?;

    if !is_valid_email(input.email.as_deref().unwrap_or_default()) {
        return Err(ValidationError::InvalidEmailFormat);
    }

    let position = required(&input.position).ok_or(ValidationError::PositionRequired)?;

    Ok(ValidEmployee {
        name: name.to_string(),
        email: email.to_string(),
        position: position.to_string(),
    })
}

/// Simple shape check, not RFC 5322.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
