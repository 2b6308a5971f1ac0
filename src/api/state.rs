//! Application state for shared services

use std::sync::Arc;

use crate::infrastructure::admin::CompanyAdminService;
use crate::infrastructure::company::CompanyService;
use crate::infrastructure::metrics::MetricsService;

/// Application state containing shared services
#[derive(Clone)]
pub struct AppState {
    pub company_service: Arc<CompanyService>,
    pub admin_service: Arc<CompanyAdminService>,
    pub metrics_service: Arc<MetricsService>,
}

impl AppState {
    /// Create new application state with provided services
    pub fn new(
        company_service: Arc<CompanyService>,
        admin_service: Arc<CompanyAdminService>,
        metrics_service: Arc<MetricsService>,
    ) -> Self {
        Self {
            company_service,
            admin_service,
            metrics_service,
        }
    }
}
