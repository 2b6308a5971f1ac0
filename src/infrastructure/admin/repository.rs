//! Storage-backed company admin repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::admin::{AdminId, CompanyAdmin, CompanyAdminRepository};
use crate::domain::company::CompanyId;
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of CompanyAdminRepository
#[derive(Debug)]
pub struct StorageCompanyAdminRepository {
    storage: Arc<dyn Storage<CompanyAdmin>>,
}

impl StorageCompanyAdminRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<CompanyAdmin>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CompanyAdminRepository for StorageCompanyAdminRepository {
    async fn get(&self, id: AdminId) -> Result<Option<CompanyAdmin>, DomainError> {
        self.storage.get(&id).await
    }

    async fn create(&self, admin: CompanyAdmin) -> Result<CompanyAdmin, DomainError> {
        if self.storage.exists(&admin.id()).await? {
            return Err(DomainError::conflict(format!(
                "Company admin '{}' already exists",
                admin.id()
            )));
        }

        self.storage.create(admin).await
    }

    async fn update(&self, admin: CompanyAdmin) -> Result<CompanyAdmin, DomainError> {
        if !self.storage.exists(&admin.id()).await? {
            return Err(DomainError::not_found(format!(
                "Company admin '{}' not found",
                admin.id()
            )));
        }

        self.storage.update(admin).await
    }

    async fn list_by_company(
        &self,
        company_id: CompanyId,
    ) -> Result<Vec<CompanyAdmin>, DomainError> {
        let all = self.storage.list().await?;
        Ok(all
            .into_iter()
            .filter(|a| a.company_id() == company_id)
            .collect())
    }

    async fn next_id(&self) -> Result<AdminId, DomainError> {
        let all = self.storage.list().await?;
        let max = all.iter().map(|a| a.id().value()).max().unwrap_or(0);
        Ok(AdminId::new(max + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::storage::InMemoryStorage;
    use chrono::Utc;

    fn create_repo() -> StorageCompanyAdminRepository {
        let storage = Arc::new(InMemoryStorage::<CompanyAdmin>::new());
        StorageCompanyAdminRepository::new(storage)
    }

    fn admin(id: u64, company_id: u64, name: &str, email: &str) -> CompanyAdmin {
        CompanyAdmin::invite(
            AdminId::new(id),
            CompanyId::new(company_id),
            name,
            email,
            Utc::now(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let repo = create_repo();
        let created = repo
            .create(admin(1, 1, "John Doe", "john@acme.com"))
            .await
            .unwrap();

        let retrieved = repo.get(created.id()).await.unwrap();
        assert_eq!(retrieved.unwrap().email(), "john@acme.com");
    }

    #[tokio::test]
    async fn test_update_nonexistent() {
        let repo = create_repo();

        let result = repo.update(admin(9, 1, "Ghost", "ghost@acme.com")).await;
        assert!(matches!(
            result.unwrap_err(),
            DomainError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_list_by_company_keeps_insertion_order() {
        let repo = create_repo();

        repo.create(admin(1, 1, "John", "john@acme.com")).await.unwrap();
        repo.create(admin(2, 2, "Jane", "jane@globex.com")).await.unwrap();
        repo.create(admin(3, 1, "Mike", "mike@acme.com")).await.unwrap();

        let admins = repo.list_by_company(CompanyId::new(1)).await.unwrap();
        assert_eq!(admins.len(), 2);
        assert_eq!(admins[0].name(), "John");
        assert_eq!(admins[1].name(), "Mike");
    }

    #[tokio::test]
    async fn test_next_id() {
        let repo = create_repo();
        assert_eq!(repo.next_id().await.unwrap(), AdminId::new(1));

        repo.create(admin(7, 1, "John", "john@acme.com")).await.unwrap();
        assert_eq!(repo.next_id().await.unwrap(), AdminId::new(8));
    }
}
