//! Domain layer - Core business logic and entities

pub mod admin;
pub mod company;
pub mod error;
pub mod metrics;
pub mod pagination;
pub mod storage;

pub use admin::{AdminId, CompanyAdmin, CompanyAdminRepository, InvitationStatus};
pub use company::{
    Company, CompanyFilter, CompanyId, CompanyQuery, CompanyRepository, CompanySort,
    CompanySortKey, CompanyStatus, CompanyType,
};
pub use error::DomainError;
pub use metrics::{GrowthFigure, GrowthMetrics, HealthMetrics, UsageMetrics};
pub use pagination::{PageRequest, Paginated, SortDirection};
pub use storage::{Storage, StorageEntity, StorageKey};
