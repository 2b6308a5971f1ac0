//! Company repository trait and directory query types

use std::cmp::Ordering;

use async_trait::async_trait;

use super::entity::{Company, CompanyId, CompanyStatus, CompanyType};
use crate::domain::pagination::{PageRequest, Paginated, SortDirection};
use crate::domain::DomainError;

/// Directory filter; the filters AND together, membership within a set ORs
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompanyFilter {
    /// Keep companies whose status is in this set (empty = no constraint)
    pub status: Vec<CompanyStatus>,
    /// Keep companies whose type is in this set (empty = no constraint)
    pub company_type: Vec<CompanyType>,
    /// Case-insensitive substring match against name or email
    pub search_term: Option<String>,
}

impl CompanyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_status(mut self, status: impl IntoIterator<Item = CompanyStatus>) -> Self {
        self.status = status.into_iter().collect();
        self
    }

    pub fn with_company_type(mut self, types: impl IntoIterator<Item = CompanyType>) -> Self {
        self.company_type = types.into_iter().collect();
        self
    }

    pub fn with_search_term(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// Whether a company passes every active filter
    pub fn matches(&self, company: &Company) -> bool {
        if !self.status.is_empty() && !self.status.contains(&company.status()) {
            return false;
        }

        if !self.company_type.is_empty() {
            match company.company_type() {
                Some(t) if self.company_type.contains(&t) => {}
                _ => return false,
            }
        }

        if let Some(ref term) = self.search_term {
            let needle = term.to_lowercase();
            let in_name = company.name().to_lowercase().contains(&needle);
            let in_email = company
                .email()
                .map(|e| e.to_lowercase().contains(&needle))
                .unwrap_or(false);

            if !in_name && !in_email {
                return false;
            }
        }

        true
    }
}

/// Sortable company fields, named by their wire form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanySortKey {
    Id,
    Name,
    Email,
    Status,
    CompanyType,
    CreatedAt,
    UpdatedAt,
}

impl CompanySortKey {
    /// Compare two companies on this key; callers break ties by keeping
    /// the incoming order (stable sort)
    pub fn compare(&self, a: &Company, b: &Company) -> Ordering {
        match self {
            Self::Id => a.id().cmp(&b.id()),
            Self::Name => a.name().cmp(b.name()),
            Self::Email => a.email().cmp(&b.email()),
            Self::Status => a.status().to_string().cmp(&b.status().to_string()),
            Self::CompanyType => {
                let a_type = a.company_type().map(|t| t.to_string());
                let b_type = b.company_type().map(|t| t.to_string());
                a_type.cmp(&b_type)
            }
            Self::CreatedAt => a.created_at().cmp(&b.created_at()),
            Self::UpdatedAt => a.updated_at().cmp(&b.updated_at()),
        }
    }
}

impl std::str::FromStr for CompanySortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "status" => Ok(Self::Status),
            "companyType" => Ok(Self::CompanyType),
            "createdAt" => Ok(Self::CreatedAt),
            "updatedAt" => Ok(Self::UpdatedAt),
            other => Err(DomainError::validation(format!(
                "Unknown sort key: '{other}'"
            ))),
        }
    }
}

/// Single-key sort: which field, and which way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompanySort {
    pub key: CompanySortKey,
    pub direction: SortDirection,
}

impl CompanySort {
    pub fn new(key: CompanySortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn ascending(key: CompanySortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn descending(key: CompanySortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }
}

/// Complete directory query: filter + sort + page
#[derive(Debug, Clone, Default)]
pub struct CompanyQuery {
    pub filter: CompanyFilter,
    pub sort: Option<CompanySort>,
    pub page: PageRequest,
}

impl CompanyQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filter(mut self, filter: CompanyFilter) -> Self {
        self.filter = filter;
        self
    }

    pub fn with_sort(mut self, sort: CompanySort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_page(mut self, page: PageRequest) -> Self {
        self.page = page;
        self
    }
}

/// Repository for managing the company directory
#[async_trait]
pub trait CompanyRepository: Send + Sync + std::fmt::Debug {
    /// Get a company by ID
    async fn get(&self, id: CompanyId) -> Result<Option<Company>, DomainError>;

    /// Create a new company
    async fn create(&self, company: Company) -> Result<Company, DomainError>;

    /// Update an existing company
    async fn update(&self, company: Company) -> Result<Company, DomainError>;

    /// Filtered, sorted, paginated directory listing
    async fn list(&self, query: &CompanyQuery) -> Result<Paginated<Company>, DomainError>;

    /// Count companies matching a filter
    async fn count(&self, filter: &CompanyFilter) -> Result<usize, DomainError>;

    /// Check if a company exists
    async fn exists(&self, id: CompanyId) -> Result<bool, DomainError>;

    /// Allocate the next free company ID
    async fn next_id(&self) -> Result<CompanyId, DomainError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(id: u64, name: &str, email: Option<&str>) -> Company {
        let mut c = Company::new(CompanyId::new(id), name).unwrap();
        if let Some(e) = email {
            c = c.with_email(e);
        }
        c
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let filter = CompanyFilter::new();
        assert!(filter.matches(&company(1, "Acme", None)));
    }

    #[test]
    fn test_status_filter() {
        let filter = CompanyFilter::new().with_status([CompanyStatus::Suspended]);
        let mut c = company(1, "Acme", None);

        assert!(!filter.matches(&c));

        c.transition_to(CompanyStatus::Suspended).unwrap();
        assert!(filter.matches(&c));
    }

    #[test]
    fn test_type_filter_excludes_untyped_companies() {
        let filter = CompanyFilter::new().with_company_type([CompanyType::Enterprise]);
        assert!(!filter.matches(&company(1, "Acme", None)));

        let typed = company(1, "Acme", None).with_company_type(CompanyType::Enterprise);
        assert!(filter.matches(&typed));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let c = company(1, "Acme Corporation", Some("admin@acme.com"));

        assert!(CompanyFilter::new().with_search_term("acme").matches(&c));
        assert!(CompanyFilter::new().with_search_term("ACME").matches(&c));
        assert!(CompanyFilter::new().with_search_term("CORPORATION").matches(&c));
    }

    #[test]
    fn test_search_matches_email() {
        let c = company(1, "Globex", Some("billing@initech.example"));
        assert!(CompanyFilter::new().with_search_term("initech").matches(&c));
        assert!(!CompanyFilter::new().with_search_term("umbrella").matches(&c));
    }

    #[test]
    fn test_filters_and_together() {
        let filter = CompanyFilter::new()
            .with_status([CompanyStatus::Active])
            .with_search_term("acme");

        assert!(filter.matches(&company(1, "Acme", None)));
        assert!(!filter.matches(&company(2, "Globex", None)));
    }

    #[test]
    fn test_sort_key_from_str() {
        assert_eq!(
            "companyType".parse::<CompanySortKey>().unwrap(),
            CompanySortKey::CompanyType
        );
        assert_eq!(
            "createdAt".parse::<CompanySortKey>().unwrap(),
            CompanySortKey::CreatedAt
        );
        assert!("company_type".parse::<CompanySortKey>().is_err());
    }

    #[test]
    fn test_sort_key_compare_name() {
        let a = company(1, "Acme", None);
        let b = company(2, "Globex", None);
        assert_eq!(CompanySortKey::Name.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_sort_key_compare_missing_email_sorts_first() {
        let a = company(1, "Acme", None);
        let b = company(2, "Globex", Some("admin@globex.com"));
        assert_eq!(CompanySortKey::Email.compare(&a, &b), Ordering::Less);
    }
}
