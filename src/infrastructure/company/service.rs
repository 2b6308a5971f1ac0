//! Company service for tenant management

use std::sync::Arc;

use tracing::info;

use crate::domain::company::{
    validate_company_name, validate_email, validate_status_reason, Company, CompanyFilter,
    CompanyId, CompanyQuery, CompanyRepository, CompanyStatus, CompanyType,
};
use crate::domain::pagination::Paginated;
use crate::domain::DomainError;

/// Request for creating a new company
#[derive(Debug, Clone)]
pub struct CreateCompanyRequest {
    pub name: String,
    pub email: Option<String>,
    pub physical_address: Option<String>,
    pub logo: Option<String>,
    pub company_type: Option<CompanyType>,
}

/// Request for updating a company's profile fields
///
/// `None` fields are left untouched; lifecycle status changes go through
/// [`CompanyService::change_status`] instead.
#[derive(Debug, Clone, Default)]
pub struct UpdateCompanyRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub physical_address: Option<String>,
    pub logo: Option<String>,
    pub company_type: Option<CompanyType>,
}

/// Company service for managing tenant companies
#[derive(Debug)]
pub struct CompanyService {
    repository: Arc<dyn CompanyRepository>,
}

impl CompanyService {
    /// Create a new company service
    pub fn new(repository: Arc<dyn CompanyRepository>) -> Self {
        Self { repository }
    }

    /// Create a new company, active from the start
    pub async fn create(&self, request: CreateCompanyRequest) -> Result<Company, DomainError> {
        info!(name = %request.name, "Creating company");

        validate_company_name(&request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(ref email) = request.email {
            validate_email(email).map_err(|e| DomainError::validation(e.to_string()))?;
        }

        let id = self.repository.next_id().await?;

        let mut company = Company::new(id, &request.name)
            .map_err(|e| DomainError::validation(e.to_string()))?;

        if let Some(email) = request.email {
            company = company.with_email(email);
        }
        if let Some(address) = request.physical_address {
            company = company.with_physical_address(address);
        }
        if let Some(logo) = request.logo {
            company = company.with_logo(logo);
        }
        if let Some(company_type) = request.company_type {
            company = company.with_company_type(company_type);
        }

        self.repository.create(company).await
    }

    /// Get a company by ID, failing when it does not exist
    pub async fn get(&self, id: CompanyId) -> Result<Company, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Company '{}' not found", id)))
    }

    /// Filtered, sorted, paginated directory listing
    pub async fn list(&self, query: CompanyQuery) -> Result<Paginated<Company>, DomainError> {
        self.repository.list(&query).await
    }

    /// Count companies matching a filter
    pub async fn count(&self, filter: &CompanyFilter) -> Result<usize, DomainError> {
        self.repository.count(filter).await
    }

    /// Check if a company exists
    pub async fn exists(&self, id: CompanyId) -> Result<bool, DomainError> {
        self.repository.exists(id).await
    }

    /// Update a company's profile fields
    pub async fn update(
        &self,
        id: CompanyId,
        request: UpdateCompanyRequest,
    ) -> Result<Company, DomainError> {
        info!(id = %id, "Updating company");

        let mut company = self.get(id).await?;

        if let Some(name) = request.name {
            company
                .set_name(&name)
                .map_err(|e| DomainError::validation(e.to_string()))?;
        }

        if let Some(email) = request.email {
            validate_email(&email).map_err(|e| DomainError::validation(e.to_string()))?;
            company.set_email(Some(email));
        }

        if let Some(address) = request.physical_address {
            company.set_physical_address(Some(address));
        }

        if let Some(logo) = request.logo {
            company.set_logo(Some(logo));
        }

        if let Some(company_type) = request.company_type {
            company.set_company_type(Some(company_type));
        }

        self.repository.update(company).await
    }

    /// Move a company to a new lifecycle status
    ///
    /// Requires a non-empty reason, which goes to the audit log. Illegal
    /// transitions (including self-transitions) are rejected without
    /// touching the company.
    pub async fn change_status(
        &self,
        id: CompanyId,
        new_status: CompanyStatus,
        reason: &str,
    ) -> Result<Company, DomainError> {
        validate_status_reason(reason).map_err(|e| DomainError::validation(e.to_string()))?;

        let mut company = self.get(id).await?;
        let previous = company.status();

        company
            .transition_to(new_status)
            .map_err(|e| DomainError::invalid_transition(e.to_string()))?;

        info!(
            id = %id,
            from = %previous,
            to = %new_status,
            reason = %reason,
            "Company status changed"
        );

        self.repository.update(company).await
    }
}
