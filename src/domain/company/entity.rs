//! Company entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lifecycle::{check_transition, InvalidTransitionError};
use super::validation::{validate_company_name, CompanyValidationError};
use crate::domain::storage::{StorageEntity, StorageKey};

/// Company identifier - numeric, allocated by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(u64);

impl CompanyId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for CompanyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CompanyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for CompanyId {
    fn to_key(&self) -> String {
        self.0.to_string()
    }
}

/// Lifecycle status of a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyStatus {
    /// Tenant is live and serving its users
    #[default]
    Active,
    /// Temporarily blocked, can be reactivated
    Suspended,
    /// Retired from service, kept for the record
    Archived,
    /// Queued for permanent removal
    Deleting,
}

impl CompanyStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }

    pub const ALL: [CompanyStatus; 4] = [
        Self::Active,
        Self::Suspended,
        Self::Archived,
        Self::Deleting,
    ];
}

impl std::fmt::Display for CompanyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Suspended => write!(f, "SUSPENDED"),
            Self::Archived => write!(f, "ARCHIVED"),
            Self::Deleting => write!(f, "DELETING"),
        }
    }
}

impl std::str::FromStr for CompanyStatus {
    type Err = CompanyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "SUSPENDED" => Ok(Self::Suspended),
            "ARCHIVED" => Ok(Self::Archived),
            "DELETING" => Ok(Self::Deleting),
            other => Err(CompanyValidationError::UnknownStatus(other.to_string())),
        }
    }
}

/// Commercial segment of a company
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompanyType {
    Enterprise,
    MidSize,
    SmallBusiness,
    Consultancy,
}

impl std::fmt::Display for CompanyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Enterprise => write!(f, "ENTERPRISE"),
            Self::MidSize => write!(f, "MID_SIZE"),
            Self::SmallBusiness => write!(f, "SMALL_BUSINESS"),
            Self::Consultancy => write!(f, "CONSULTANCY"),
        }
    }
}

impl std::str::FromStr for CompanyType {
    type Err = CompanyValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENTERPRISE" => Ok(Self::Enterprise),
            "MID_SIZE" => Ok(Self::MidSize),
            "SMALL_BUSINESS" => Ok(Self::SmallBusiness),
            "CONSULTANCY" => Ok(Self::Consultancy),
            other => Err(CompanyValidationError::UnknownCompanyType(other.to_string())),
        }
    }
}

/// Tenant company entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    /// Unique identifier
    id: CompanyId,
    /// Display name
    name: String,
    /// Contact email
    #[serde(skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    /// Physical address
    #[serde(skip_serializing_if = "Option::is_none")]
    physical_address: Option<String>,
    /// Logo URL
    #[serde(skip_serializing_if = "Option::is_none")]
    logo: Option<String>,
    /// Current lifecycle status
    status: CompanyStatus,
    /// Commercial segment
    #[serde(skip_serializing_if = "Option::is_none")]
    company_type: Option<CompanyType>,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last update timestamp
    updated_at: DateTime<Utc>,
}

impl Company {
    /// Create a new active company
    pub fn new(id: CompanyId, name: impl Into<String>) -> Result<Self, CompanyValidationError> {
        let name = name.into();
        validate_company_name(&name)?;
        let now = Utc::now();

        Ok(Self {
            id,
            name,
            email: None,
            physical_address: None,
            logo: None,
            status: CompanyStatus::Active,
            company_type: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Set contact email (builder pattern)
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set physical address (builder pattern)
    pub fn with_physical_address(mut self, address: impl Into<String>) -> Self {
        self.physical_address = Some(address.into());
        self
    }

    /// Set logo URL (builder pattern)
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    /// Set commercial segment (builder pattern)
    pub fn with_company_type(mut self, company_type: CompanyType) -> Self {
        self.company_type = Some(company_type);
        self
    }

    /// Pin both timestamps, for seeding and imports
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    // Getters

    pub fn id(&self) -> CompanyId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn physical_address(&self) -> Option<&str> {
        self.physical_address.as_deref()
    }

    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    pub fn status(&self) -> CompanyStatus {
        self.status
    }

    pub fn company_type(&self) -> Option<CompanyType> {
        self.company_type
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    // Mutators

    /// Update the name
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), CompanyValidationError> {
        let name = name.into();
        validate_company_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Update the contact email
    pub fn set_email(&mut self, email: Option<String>) {
        self.email = email;
        self.touch();
    }

    /// Update the physical address
    pub fn set_physical_address(&mut self, address: Option<String>) {
        self.physical_address = address;
        self.touch();
    }

    /// Update the logo URL
    pub fn set_logo(&mut self, logo: Option<String>) {
        self.logo = logo;
        self.touch();
    }

    /// Update the commercial segment
    pub fn set_company_type(&mut self, company_type: Option<CompanyType>) {
        self.company_type = company_type;
        self.touch();
    }

    /// Move to a new lifecycle status, enforcing the transition graph
    pub fn transition_to(&mut self, new_status: CompanyStatus) -> Result<(), InvalidTransitionError> {
        check_transition(self.status, new_status)?;
        self.status = new_status;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl StorageEntity for Company {
    type Key = CompanyId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_company_creation() {
        let company = Company::new(CompanyId::new(1), "Acme Corporation").unwrap();

        assert_eq!(company.id().value(), 1);
        assert_eq!(company.name(), "Acme Corporation");
        assert_eq!(company.status(), CompanyStatus::Active);
        assert!(company.email().is_none());
        assert_eq!(company.created_at(), company.updated_at());
    }

    #[test]
    fn test_company_empty_name() {
        assert!(Company::new(CompanyId::new(1), "").is_err());
    }

    #[test]
    fn test_company_builders() {
        let company = Company::new(CompanyId::new(2), "Globex Industries")
            .unwrap()
            .with_email("admin@globex.com")
            .with_physical_address("456 Market St, New York, NY 10001")
            .with_logo("https://cdn.example.com/globex.png")
            .with_company_type(CompanyType::MidSize);

        assert_eq!(company.email(), Some("admin@globex.com"));
        assert_eq!(company.company_type(), Some(CompanyType::MidSize));
        assert!(company.logo().is_some());
    }

    #[test]
    fn test_set_name_touches_updated_at() {
        let mut company = Company::new(CompanyId::new(1), "Acme").unwrap();
        let original = company.updated_at();

        std::thread::sleep(std::time::Duration::from_millis(10));

        company.set_name("Acme Corporation").unwrap();
        assert_eq!(company.name(), "Acme Corporation");
        assert!(company.updated_at() > original);
    }

    #[test]
    fn test_transition_active_to_suspended() {
        let mut company = Company::new(CompanyId::new(1), "Acme").unwrap();

        company.transition_to(CompanyStatus::Suspended).unwrap();
        assert_eq!(company.status(), CompanyStatus::Suspended);
    }

    #[test]
    fn test_self_transition_is_rejected() {
        let mut company = Company::new(CompanyId::new(1), "Acme").unwrap();

        let result = company.transition_to(CompanyStatus::Active);
        assert!(result.is_err());
        assert_eq!(company.status(), CompanyStatus::Active);
    }

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&CompanyStatus::Active).unwrap(),
            "\"ACTIVE\""
        );
        assert_eq!(
            serde_json::to_string(&CompanyType::MidSize).unwrap(),
            "\"MID_SIZE\""
        );
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "SUSPENDED".parse::<CompanyStatus>().unwrap(),
            CompanyStatus::Suspended
        );
        assert!("suspended".parse::<CompanyStatus>().is_err());
    }

    #[test]
    fn test_company_type_from_str() {
        assert_eq!(
            "SMALL_BUSINESS".parse::<CompanyType>().unwrap(),
            CompanyType::SmallBusiness
        );
        assert!("TINY".parse::<CompanyType>().is_err());
    }

    #[test]
    fn test_with_created_at_pins_both_timestamps() {
        let pinned: DateTime<Utc> = "2023-01-15T08:30:00Z".parse().unwrap();
        let company = Company::new(CompanyId::new(1), "Acme")
            .unwrap()
            .with_created_at(pinned);

        assert_eq!(company.created_at(), pinned);
        assert_eq!(company.updated_at(), pinned);
    }
}
