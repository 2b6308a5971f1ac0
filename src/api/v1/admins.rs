//! Company admin endpoint handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiCompanyAdmin, ApiError, InviteAdminBody};
use crate::domain::admin::AdminId;
use crate::domain::company::CompanyId;
use crate::infrastructure::admin::InviteAdminRequest;

/// GET /v1/companies/{company_id}/admins
pub async fn list_company_admins(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
) -> Result<Json<Vec<ApiCompanyAdmin>>, ApiError> {
    debug!(company_id = %company_id, "Listing company admins");

    let admins = state
        .admin_service
        .list_for_company(CompanyId::new(company_id))
        .await?;

    let now = Utc::now();
    Ok(Json(
        admins
            .iter()
            .map(|a| ApiCompanyAdmin::from_domain(a, now))
            .collect(),
    ))
}

/// POST /v1/companies/{company_id}/admins
pub async fn invite_company_admin(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
    Json(body): Json<InviteAdminBody>,
) -> Result<(StatusCode, Json<ApiCompanyAdmin>), ApiError> {
    let request = InviteAdminRequest {
        name: body.name,
        email: body.email,
    };

    let admin = state
        .admin_service
        .invite(CompanyId::new(company_id), request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiCompanyAdmin::from_domain(&admin, Utc::now())),
    ))
}

/// POST /v1/company-admins/{admin_id}/resend
pub async fn resend_invitation(
    State(state): State<AppState>,
    Path(admin_id): Path<u64>,
) -> Result<Json<ApiCompanyAdmin>, ApiError> {
    let admin = state
        .admin_service
        .resend_invitation(AdminId::new(admin_id))
        .await?;

    Ok(Json(ApiCompanyAdmin::from_domain(&admin, Utc::now())))
}

/// POST /v1/company-admins/{admin_id}/cancel
pub async fn cancel_invitation(
    State(state): State<AppState>,
    Path(admin_id): Path<u64>,
) -> Result<Json<ApiCompanyAdmin>, ApiError> {
    let admin = state
        .admin_service
        .cancel_invitation(AdminId::new(admin_id))
        .await?;

    Ok(Json(ApiCompanyAdmin::from_domain(&admin, Utc::now())))
}
