//! Wire types for the HTTP API
//!
//! Bodies and responses use camelCase keys; enums keep their
//! SCREAMING_SNAKE_CASE wire form.

pub mod admin;
pub mod company;
pub mod error;

pub use admin::{ApiCompanyAdmin, InviteAdminBody};
pub use company::{
    ApiCompany, ChangeStatusBody, CreateCompanyBody, ListCompaniesParams, UpdateCompanyBody,
};
pub use error::{ApiError, ApiErrorResponse, ApiErrorType};
