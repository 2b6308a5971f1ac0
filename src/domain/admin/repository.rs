//! Company admin repository trait

use async_trait::async_trait;

use super::entity::{AdminId, CompanyAdmin};
use crate::domain::company::CompanyId;
use crate::domain::DomainError;

/// Repository for managing company admins and their invitations
#[async_trait]
pub trait CompanyAdminRepository: Send + Sync + std::fmt::Debug {
    /// Get an admin by ID
    async fn get(&self, id: AdminId) -> Result<Option<CompanyAdmin>, DomainError>;

    /// Create a new admin
    async fn create(&self, admin: CompanyAdmin) -> Result<CompanyAdmin, DomainError>;

    /// Update an existing admin
    async fn update(&self, admin: CompanyAdmin) -> Result<CompanyAdmin, DomainError>;

    /// List the admins of one company, in insertion order
    async fn list_by_company(&self, company_id: CompanyId)
        -> Result<Vec<CompanyAdmin>, DomainError>;

    /// Allocate the next free admin ID
    async fn next_id(&self) -> Result<AdminId, DomainError>;
}
