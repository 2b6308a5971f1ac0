//! Per-company monitoring service

use std::sync::Arc;

use chrono::Utc;

use crate::domain::company::{CompanyId, CompanyRepository};
use crate::domain::metrics::{GrowthFigure, GrowthMetrics, HealthMetrics, UsageMetrics};
use crate::domain::DomainError;

const MEGABYTE: u64 = 1024 * 1024;

/// Monitoring readings for companies
///
/// The in-memory build serves fixed demo figures; a production deployment
/// would read the monitoring backend instead. Every operation verifies the
/// company first, so readings for unknown companies fail as not-found
/// rather than fabricating data.
#[derive(Debug)]
pub struct MetricsService {
    company_repository: Arc<dyn CompanyRepository>,
}

impl MetricsService {
    /// Create a new metrics service
    pub fn new(company_repository: Arc<dyn CompanyRepository>) -> Self {
        Self { company_repository }
    }

    async fn ensure_company_exists(&self, company_id: CompanyId) -> Result<(), DomainError> {
        if !self.company_repository.exists(company_id).await? {
            return Err(DomainError::not_found(format!(
                "Company '{}' not found",
                company_id
            )));
        }

        Ok(())
    }

    /// Today's availability snapshot for a company
    pub async fn health(&self, company_id: CompanyId) -> Result<HealthMetrics, DomainError> {
        self.ensure_company_exists(company_id).await?;

        let now = Utc::now();
        Ok(HealthMetrics {
            company_id,
            metric_date: now.date_naive(),
            uptime_percentage: 99.8,
            error_rate: 0.2,
            notes: None,
            recorded_at: now,
        })
    }

    /// Current resource consumption for a company
    pub async fn usage(&self, company_id: CompanyId) -> Result<UsageMetrics, DomainError> {
        self.ensure_company_exists(company_id).await?;

        Ok(UsageMetrics {
            active_users: 45,
            total_users: 50,
            active_spaces: 8,
            total_spaces: 10,
            storage_used: 500 * MEGABYTE,
            api_calls: 15_000,
            last_activity_date: Utc::now(),
        })
    }

    /// Period-over-period growth for a company
    pub async fn growth(&self, company_id: CompanyId) -> Result<GrowthMetrics, DomainError> {
        self.ensure_company_exists(company_id).await?;

        Ok(GrowthMetrics {
            user_growth: GrowthFigure::new(50, 40),
            space_growth: GrowthFigure::new(10, 8),
            storage_growth: GrowthFigure::new(500 * MEGABYTE, 400 * MEGABYTE),
            api_usage_growth: GrowthFigure::new(15_000, 12_000),
        })
    }
}
