//! Storage-backed company repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::company::{Company, CompanyFilter, CompanyId, CompanyQuery, CompanyRepository};
use crate::domain::pagination::{Paginated, SortDirection};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of CompanyRepository
#[derive(Debug)]
pub struct StorageCompanyRepository {
    storage: Arc<dyn Storage<Company>>,
}

impl StorageCompanyRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<Company>>) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl CompanyRepository for StorageCompanyRepository {
    async fn get(&self, id: CompanyId) -> Result<Option<Company>, DomainError> {
        self.storage.get(&id).await
    }

    async fn create(&self, company: Company) -> Result<Company, DomainError> {
        if self.storage.exists(&company.id()).await? {
            return Err(DomainError::conflict(format!(
                "Company '{}' already exists",
                company.id()
            )));
        }

        self.storage.create(company).await
    }

    async fn update(&self, company: Company) -> Result<Company, DomainError> {
        if !self.storage.exists(&company.id()).await? {
            return Err(DomainError::not_found(format!(
                "Company '{}' not found",
                company.id()
            )));
        }

        self.storage.update(company).await
    }

    async fn list(&self, query: &CompanyQuery) -> Result<Paginated<Company>, DomainError> {
        let all = self.storage.list().await?;
        let mut result: Vec<Company> = all
            .into_iter()
            .filter(|c| query.filter.matches(c))
            .collect();

        let total = result.len();

        // Stable sort, so equal keys keep their insertion order
        if let Some(sort) = query.sort {
            result.sort_by(|a, b| {
                let ordering = sort.key.compare(a, b);
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        let offset = query.page.offset();
        let data = if offset < result.len() {
            result
                .into_iter()
                .skip(offset)
                .take(query.page.page_size)
                .collect()
        } else {
            Vec::new()
        };

        Ok(Paginated::new(data, total, &query.page))
    }

    async fn count(&self, filter: &CompanyFilter) -> Result<usize, DomainError> {
        let all = self.storage.list().await?;
        Ok(all.iter().filter(|c| filter.matches(c)).count())
    }

    async fn exists(&self, id: CompanyId) -> Result<bool, DomainError> {
        self.storage.exists(&id).await
    }

    async fn next_id(&self) -> Result<CompanyId, DomainError> {
        let all = self.storage.list().await?;
        let max = all.iter().map(|c| c.id().value()).max().unwrap_or(0);
        Ok(CompanyId::new(max + 1))
    }
}
