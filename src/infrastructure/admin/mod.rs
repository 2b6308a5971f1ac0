//! Company admin infrastructure

mod repository;
mod service;

pub use repository::StorageCompanyAdminRepository;
pub use service::{CompanyAdminService, InviteAdminRequest};
