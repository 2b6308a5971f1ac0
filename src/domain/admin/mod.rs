//! Company admin domain module
//!
//! Admins gain access to a company through an invitation that expires after
//! seven days. Expiry is a derived reading, never a stored value.

mod entity;
mod repository;
mod validation;

pub use entity::{
    derived_status, AdminId, CompanyAdmin, InvitationStatus, INVITATION_TTL_DAYS,
};
pub use repository::CompanyAdminRepository;
pub use validation::{validate_admin_email, validate_admin_name, AdminValidationError};
