//! Company domain module
//!
//! Companies are the tenant unit of the platform. Their lifecycle status
//! moves through a small directed graph enforced by [`lifecycle`], and the
//! directory supports filtered, sorted, paginated listing.

mod entity;
pub mod lifecycle;
mod repository;
mod validation;

pub use entity::{Company, CompanyId, CompanyStatus, CompanyType};
pub use lifecycle::{check_transition, is_legal_transition, InvalidTransitionError};
pub use repository::{
    CompanyFilter, CompanyQuery, CompanyRepository, CompanySort, CompanySortKey,
};
pub use validation::{
    validate_company_name, validate_email, validate_status_reason, CompanyValidationError,
};
