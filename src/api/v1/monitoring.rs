//! Per-company monitoring endpoint handlers

use axum::{
    extract::{Path, State},
    Json,
};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::company::CompanyId;
use crate::domain::metrics::{GrowthMetrics, HealthMetrics, UsageMetrics};

/// GET /v1/companies/{company_id}/monitoring/health
pub async fn company_health(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
) -> Result<Json<HealthMetrics>, ApiError> {
    debug!(company_id = %company_id, "Reading company health metrics");

    let health = state
        .metrics_service
        .health(CompanyId::new(company_id))
        .await?;

    Ok(Json(health))
}

/// GET /v1/companies/{company_id}/monitoring/usage
pub async fn company_usage(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
) -> Result<Json<UsageMetrics>, ApiError> {
    debug!(company_id = %company_id, "Reading company usage metrics");

    let usage = state
        .metrics_service
        .usage(CompanyId::new(company_id))
        .await?;

    Ok(Json(usage))
}

/// GET /v1/companies/{company_id}/monitoring/growth
pub async fn company_growth(
    State(state): State<AppState>,
    Path(company_id): Path<u64>,
) -> Result<Json<GrowthMetrics>, ApiError> {
    debug!(company_id = %company_id, "Reading company growth metrics");

    let growth = state
        .metrics_service
        .growth(CompanyId::new(company_id))
        .await?;

    Ok(Json(growth))
}
