//! Company admin invitation service

use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use crate::domain::admin::{
    AdminId, CompanyAdmin, CompanyAdminRepository, InvitationStatus,
};
use crate::domain::company::{CompanyId, CompanyRepository};
use crate::domain::DomainError;

/// Request for inviting a new company admin
#[derive(Debug, Clone)]
pub struct InviteAdminRequest {
    pub name: String,
    pub email: String,
}

/// Service for company admins and their invitation lifecycle
///
/// Admins belong to a company, so operations that take a company ID verify
/// the company first. Resend and cancel judge the invitation by its derived
/// status, so an invitation that lapsed without ever being rewritten still
/// counts as expired.
#[derive(Debug)]
pub struct CompanyAdminService {
    repository: Arc<dyn CompanyAdminRepository>,
    company_repository: Arc<dyn CompanyRepository>,
}

impl CompanyAdminService {
    /// Create a new company admin service
    pub fn new(
        repository: Arc<dyn CompanyAdminRepository>,
        company_repository: Arc<dyn CompanyRepository>,
    ) -> Self {
        Self {
            repository,
            company_repository,
        }
    }

    async fn ensure_company_exists(&self, company_id: CompanyId) -> Result<(), DomainError> {
        if !self.company_repository.exists(company_id).await? {
            return Err(DomainError::not_found(format!(
                "Company '{}' not found",
                company_id
            )));
        }

        Ok(())
    }

    async fn get_admin(&self, id: AdminId) -> Result<CompanyAdmin, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("Company admin '{}' not found", id)))
    }

    /// Invite a new admin to a company
    pub async fn invite(
        &self,
        company_id: CompanyId,
        request: InviteAdminRequest,
    ) -> Result<CompanyAdmin, DomainError> {
        info!(company_id = %company_id, email = %request.email, "Inviting company admin");

        self.ensure_company_exists(company_id).await?;

        let id = self.repository.next_id().await?;
        let admin = CompanyAdmin::invite(id, company_id, &request.name, &request.email, Utc::now())
            .map_err(|e| DomainError::validation(e.to_string()))?;

        self.repository.create(admin).await
    }

    /// Get an admin by ID, failing when it does not exist
    pub async fn get(&self, id: AdminId) -> Result<CompanyAdmin, DomainError> {
        self.get_admin(id).await
    }

    /// List the admins of one company, in insertion order
    pub async fn list_for_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<CompanyAdmin>, DomainError> {
        self.ensure_company_exists(company_id).await?;
        self.repository.list_by_company(company_id).await
    }

    /// Re-send an invitation, restarting its validity window
    ///
    /// Legal while the invitation reads SENT or EXPIRED; an accepted or
    /// canceled invitation cannot be revived.
    pub async fn resend_invitation(&self, id: AdminId) -> Result<CompanyAdmin, DomainError> {
        let mut admin = self.get_admin(id).await?;
        let now = Utc::now();

        match admin.status_at(now) {
            InvitationStatus::Sent | InvitationStatus::Expired => {}
            status => {
                return Err(DomainError::invalid_state(format!(
                    "Cannot resend an invitation in status {}",
                    status
                )));
            }
        }

        admin.mark_resent(now);
        info!(id = %id, company_id = %admin.company_id(), "Invitation resent");

        self.repository.update(admin).await
    }

    /// Withdraw a pending invitation
    ///
    /// Legal only while the invitation reads SENT. Expired invitations are
    /// already dead and cannot be canceled.
    pub async fn cancel_invitation(&self, id: AdminId) -> Result<CompanyAdmin, DomainError> {
        let mut admin = self.get_admin(id).await?;
        let now = Utc::now();

        match admin.status_at(now) {
            InvitationStatus::Sent => {}
            status => {
                return Err(DomainError::invalid_state(format!(
                    "Cannot cancel an invitation in status {}",
                    status
                )));
            }
        }

        admin.cancel();
        info!(id = %id, company_id = %admin.company_id(), "Invitation canceled");

        self.repository.update(admin).await
    }
}
