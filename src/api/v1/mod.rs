//! Tenant management v1 API endpoints

pub mod admins;
pub mod companies;
pub mod monitoring;

use axum::{
    routing::{get, post},
    Router,
};

use super::state::AppState;

/// Create v1 API router
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(companies::list_companies).post(companies::create_company),
        )
        .route(
            "/companies/{company_id}",
            get(companies::get_company).put(companies::update_company),
        )
        .route(
            "/companies/{company_id}/status",
            post(companies::change_company_status),
        )
        .route(
            "/companies/{company_id}/admins",
            get(admins::list_company_admins).post(admins::invite_company_admin),
        )
        .route(
            "/company-admins/{admin_id}/resend",
            post(admins::resend_invitation),
        )
        .route(
            "/company-admins/{admin_id}/cancel",
            post(admins::cancel_invitation),
        )
        .route(
            "/companies/{company_id}/monitoring/health",
            get(monitoring::company_health),
        )
        .route(
            "/companies/{company_id}/monitoring/usage",
            get(monitoring::company_usage),
        )
        .route(
            "/companies/{company_id}/monitoring/growth",
            get(monitoring::company_growth),
        )
}
