//! Company infrastructure

mod repository;
mod service;

pub use repository::StorageCompanyRepository;
pub use service::{CompanyService, CreateCompanyRequest, UpdateCompanyRequest};
