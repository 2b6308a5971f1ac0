//! Company admin validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during admin validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AdminValidationError {
    #[error("Admin name cannot be empty")]
    EmptyName,

    #[error("Admin name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Malformed email address: '{0}'")]
    InvalidEmail(String),
}

const MAX_ADMIN_NAME_LENGTH: usize = 100;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Validate an admin display name
pub fn validate_admin_name(name: &str) -> Result<(), AdminValidationError> {
    if name.trim().is_empty() {
        return Err(AdminValidationError::EmptyName);
    }

    if name.len() > MAX_ADMIN_NAME_LENGTH {
        return Err(AdminValidationError::NameTooLong(MAX_ADMIN_NAME_LENGTH));
    }

    Ok(())
}

/// Validate the email an invitation is addressed to
pub fn validate_admin_email(email: &str) -> Result<(), AdminValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(AdminValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
