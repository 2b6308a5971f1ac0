//! Company endpoint handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{
    ApiCompany, ApiError, ChangeStatusBody, CreateCompanyBody, ListCompaniesParams,
    UpdateCompanyBody,
};
use crate::domain::company::CompanyId;
use crate::domain::pagination::Paginated;
use crate::infrastructure::company::{CreateCompanyRequest, UpdateCompanyRequest};

/// GET /v1/companies
pub async fn list_companies(
    State(state): State<AppState>,
    Query(params): Query<ListCompaniesParams>,
) -> Result<Json<Paginated<ApiCompany>>, ApiError> {
    debug!("Listing companies");

    let query = params.into_query()?;
    let page = state.company_service.list(query).await?;

    Ok(Json(page.map(|c| ApiCompany::from_domain(&c))))
}

/// POST /v1/companies
pub async fn create_company(
    State(state): State<AppState>,
    Json(body): Json<CreateCompanyBody>,
) -> Result<(StatusCode, Json<ApiCompany>), ApiError> {
    let request = CreateCompanyRequest {
        name: body.name,
        email: body.email,
        physical_address: body.physical_address,
        logo: body.logo,
        company_type: body.company_type,
    };

    let company = state.company_service.create(request).await?;

    Ok((StatusCode::CREATED, Json(ApiCompany::from_domain(&company))))
}

/// GET /v1/companies/{company_id}
pub async fn get_company(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
) -> Result<Json<ApiCompany>, ApiError> {
    debug!(company_id = %company_id, "Getting company");

    let company = state
        .company_service
        .get(CompanyId::new(company_id))
        .await?;

    Ok(Json(ApiCompany::from_domain(&company)))
}

/// PUT /v1/companies/{company_id}
pub async fn update_company(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
    Json(body): Json<UpdateCompanyBody>,
) -> Result<Json<ApiCompany>, ApiError> {
    let request = UpdateCompanyRequest {
        name: body.name,
        email: body.email,
        physical_address: body.physical_address,
        logo: body.logo,
        company_type: body.company_type,
    };

    let company = state
        .company_service
        .update(CompanyId::new(company_id), request)
        .await?;

    Ok(Json(ApiCompany::from_domain(&company)))
}

/// POST /v1/companies/{company_id}/status
pub async fn change_company_status(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
    Json(body): Json<ChangeStatusBody>,
) -> Result<Json<ApiCompany>, ApiError> {
    let company = state
        .company_service
        .change_status(CompanyId::new(company_id), body.new_status, &body.reason)
        .await?;

    Ok(Json(ApiCompany::from_domain(&company)))
}
