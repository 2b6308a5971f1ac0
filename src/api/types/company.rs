//! Company request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ApiError;
use crate::domain::company::{
    Company, CompanyFilter, CompanyId, CompanyQuery, CompanySort, CompanySortKey, CompanyStatus,
    CompanyType,
};
use crate::domain::pagination::{PageRequest, SortDirection};

/// Company as exposed on the wire
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompany {
    pub id: CompanyId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub physical_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    pub status: CompanyStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_type: Option<CompanyType>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ApiCompany {
    pub fn from_domain(company: &Company) -> Self {
        Self {
            id: company.id(),
            name: company.name().to_string(),
            email: company.email().map(String::from),
            physical_address: company.physical_address().map(String::from),
            logo: company.logo().map(String::from),
            status: company.status(),
            company_type: company.company_type(),
            created_at: company.created_at(),
            updated_at: company.updated_at(),
        }
    }
}

/// POST /v1/companies request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyBody {
    pub name: String,
    pub email: Option<String>,
    pub physical_address: Option<String>,
    pub logo: Option<String>,
    pub company_type: Option<CompanyType>,
}

/// PUT /v1/companies/{id} request body; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyBody {
    pub name: Option<String>,
    pub email: Option<String>,
    pub physical_address: Option<String>,
    pub logo: Option<String>,
    pub company_type: Option<CompanyType>,
}

/// POST /v1/companies/{id}/status request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusBody {
    pub new_status: CompanyStatus,
    pub reason: String,
}

/// GET /v1/companies query parameters
///
/// `status` and `companyType` accept comma-separated lists; membership
/// within a list is OR, the parameters themselves AND together.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesParams {
    pub page: Option<usize>,
    pub page_size: Option<usize>,
    pub status: Option<String>,
    pub company_type: Option<String>,
    pub search_term: Option<String>,
    pub sort_by: Option<String>,
    pub sort_direction: Option<SortDirection>,
}

impl ListCompaniesParams {
    /// Turn the raw query string values into a directory query
    pub fn into_query(self) -> Result<CompanyQuery, ApiError> {
        let page = PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(PageRequest::DEFAULT_PAGE_SIZE),
        )
        .map_err(|e| ApiError::bad_request(e.to_string()).with_param("page"))?;

        let mut filter = CompanyFilter::new();

        if let Some(raw) = self.status {
            let statuses = parse_list::<CompanyStatus>(&raw)
                .map_err(|e| ApiError::bad_request(e).with_param("status"))?;
            filter = filter.with_status(statuses);
        }

        if let Some(raw) = self.company_type {
            let types = parse_list::<CompanyType>(&raw)
                .map_err(|e| ApiError::bad_request(e).with_param("companyType"))?;
            filter = filter.with_company_type(types);
        }

        if let Some(term) = self.search_term {
            if !term.is_empty() {
                filter = filter.with_search_term(term);
            }
        }

        let sort = self
            .sort_by
            .map(|raw| {
                let key: CompanySortKey = raw
                    .parse()
                    .map_err(|e: crate::domain::DomainError| {
                        ApiError::bad_request(e.to_string()).with_param("sortBy")
                    })?;
                Ok::<_, ApiError>(CompanySort::new(
                    key,
                    self.sort_direction.unwrap_or_default(),
                ))
            })
            .transpose()?;

        let mut query = CompanyQuery::new().with_filter(filter).with_page(page);
        if let Some(sort) = sort {
            query = query.with_sort(sort);
        }

        Ok(query)
    }
}

fn parse_list<T>(raw: &str) -> Result<Vec<T>, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<T>().map_err(|e| e.to_string()))
        .collect()
}
