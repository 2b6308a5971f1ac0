//! Company validation

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during company validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompanyValidationError {
    #[error("Company name cannot be empty")]
    EmptyName,

    #[error("Company name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Malformed email address: '{0}'")]
    InvalidEmail(String),

    #[error("Unknown company status: '{0}'")]
    UnknownStatus(String),

    #[error("Unknown company type: '{0}'")]
    UnknownCompanyType(String),

    #[error("Status change reason cannot be empty")]
    EmptyReason,
}

const MAX_COMPANY_NAME_LENGTH: usize = 200;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Validate a company display name
pub fn validate_company_name(name: &str) -> Result<(), CompanyValidationError> {
    if name.trim().is_empty() {
        return Err(CompanyValidationError::EmptyName);
    }

    if name.len() > MAX_COMPANY_NAME_LENGTH {
        return Err(CompanyValidationError::NameTooLong(MAX_COMPANY_NAME_LENGTH));
    }

    Ok(())
}

/// Validate a contact email address
pub fn validate_email(email: &str) -> Result<(), CompanyValidationError> {
    if !EMAIL_RE.is_match(email) {
        return Err(CompanyValidationError::InvalidEmail(email.to_string()));
    }

    Ok(())
}

/// Validate the human-readable justification for a status change
pub fn validate_status_reason(reason: &str) -> Result<(), CompanyValidationError> {
    if reason.trim().is_empty() {
        return Err(CompanyValidationError::EmptyReason);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_company_name() {
        assert!(validate_company_name("Acme Corporation").is_ok());
        assert!(validate_company_name("Initech LLC").is_ok());
    }

    #[test]
    fn test_empty_company_name() {
        assert_eq!(
            validate_company_name(""),
            Err(CompanyValidationError::EmptyName)
        );
        assert_eq!(
            validate_company_name("   "),
            Err(CompanyValidationError::EmptyName)
        );
    }

    #[test]
    fn test_company_name_too_long() {
        let long_name = "a".repeat(201);
        assert_eq!(
            validate_company_name(&long_name),
            Err(CompanyValidationError::NameTooLong(200))
        );
    }

    #[test]
    fn test_valid_email() {
        assert!(validate_email("admin@acme.com").is_ok());
        assert!(validate_email("billing+ops@globex.co.uk").is_ok());
    }

    #[test]
    fn test_invalid_email() {
        assert!(validate_email("").is_err());
        assert!(validate_email("admin").is_err());
        assert!(validate_email("admin@acme").is_err());
        assert!(validate_email("admin acme@example.com").is_err());
    }

    #[test]
    fn test_status_reason() {
        assert!(validate_status_reason("policy violation").is_ok());
        assert_eq!(
            validate_status_reason("  "),
            Err(CompanyValidationError::EmptyReason)
        );
    }
}
