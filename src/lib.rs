//! SuperAdmin Gateway
//!
//! Tenant management API for platform operators:
//! - Company directory with filtered, sorted, paginated listing
//! - Company lifecycle (suspend, reactivate, archive, delete)
//! - Company admin invitations with expiry
//! - Per-company monitoring readings

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};

use api::state::AppState;
use domain::admin::{AdminId, CompanyAdmin};
use domain::company::{Company, CompanyId, CompanyStatus, CompanyType};
use infrastructure::{
    admin::{CompanyAdminService, StorageCompanyAdminRepository},
    company::{CompanyService, StorageCompanyRepository},
    metrics::MetricsService,
    storage::InMemoryStorage,
};

/// Create the application state with all services initialized
///
/// The in-memory build starts from a small seeded directory so the API is
/// usable out of the box.
pub fn create_app_state() -> AppState {
    let company_storage = Arc::new(InMemoryStorage::<Company>::with_entities(
        default_companies(),
    ));
    let admin_storage = Arc::new(InMemoryStorage::<CompanyAdmin>::with_entities(
        default_admins(),
    ));

    let company_repository = Arc::new(StorageCompanyRepository::new(company_storage));
    let admin_repository = Arc::new(StorageCompanyAdminRepository::new(admin_storage));

    let company_service = Arc::new(CompanyService::new(company_repository.clone()));
    let admin_service = Arc::new(CompanyAdminService::new(
        admin_repository,
        company_repository.clone(),
    ));
    let metrics_service = Arc::new(MetricsService::new(company_repository));

    AppState::new(company_service, admin_service, metrics_service)
}

fn seed_time(raw: &str) -> DateTime<Utc> {
    raw.parse().expect("seed timestamp is valid RFC 3339")
}

fn seed_company(
    id: u64,
    name: &str,
    email: &str,
    company_type: CompanyType,
    status: CompanyStatus,
    created_at: &str,
) -> Company {
    let mut company = Company::new(CompanyId::new(id), name)
        .expect("seed company is valid")
        .with_email(email)
        .with_company_type(company_type);

    if status != CompanyStatus::Active {
        company
            .transition_to(status)
            .expect("seed status is reachable from ACTIVE");
    }

    company.with_created_at(seed_time(created_at))
}

fn default_companies() -> Vec<Company> {
    vec![
        seed_company(
            1,
            "Acme Corporation",
            "admin@acme.com",
            CompanyType::Enterprise,
            CompanyStatus::Active,
            "2023-01-15T08:30:00Z",
        ),
        seed_company(
            2,
            "Globex Industries",
            "admin@globex.com",
            CompanyType::MidSize,
            CompanyStatus::Active,
            "2023-02-20T10:00:00Z",
        ),
        seed_company(
            3,
            "Initech",
            "it@initech.com",
            CompanyType::SmallBusiness,
            CompanyStatus::Suspended,
            "2023-03-10T14:15:00Z",
        ),
        seed_company(
            4,
            "Umbrella Corp",
            "contact@umbrella.com",
            CompanyType::Consultancy,
            CompanyStatus::Archived,
            "2023-04-05T09:45:00Z",
        ),
        seed_company(
            5,
            "Soylent Inc",
            "hello@soylent.com",
            CompanyType::MidSize,
            CompanyStatus::Active,
            "2023-05-12T16:20:00Z",
        ),
    ]
}

fn seed_admin(id: u64, company_id: u64, name: &str, email: &str, sent_at: &str) -> CompanyAdmin {
    CompanyAdmin::invite(
        AdminId::new(id),
        CompanyId::new(company_id),
        name,
        email,
        seed_time(sent_at),
    )
    .expect("seed admin is valid")
}

fn default_admins() -> Vec<CompanyAdmin> {
    let mut john = seed_admin(1, 1, "John Smith", "john.smith@acme.com", "2023-01-16T09:00:00Z");
    john.accept(101);

    let mut sarah = seed_admin(2, 2, "Sarah Johnson", "sarah@globex.com", "2023-02-21T11:30:00Z");
    sarah.accept(102);

    // Pending invitation, still inside its validity window
    let mut mike = seed_admin(3, 1, "Mike Johnson", "mike@acme.com", "2023-01-16T09:00:00Z");
    mike.mark_resent(Utc::now() - Duration::days(1));

    let mut emily = seed_admin(4, 3, "Emily Davis", "emily@initech.com", "2023-03-11T08:00:00Z");
    emily.accept(104);

    // Stored as SENT but past its expiry, so it reads EXPIRED
    let david = seed_admin(
        5,
        4,
        "David Brown",
        "david@umbrella.com",
        "2023-04-06T10:00:00Z",
    );

    vec![john, sarah, mike, emily, david]
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::admin::{InvitationStatus, INVITATION_TTL_DAYS};

    #[test]
    fn test_seeded_companies() {
        let companies = default_companies();
        assert_eq!(companies.len(), 5);

        let active = companies.iter().filter(|c| c.status().is_active()).count();
        assert_eq!(active, 3);

        assert_eq!(companies[2].status(), CompanyStatus::Suspended);
        assert_eq!(companies[3].status(), CompanyStatus::Archived);
        assert_eq!(companies[0].created_at(), seed_time("2023-01-15T08:30:00Z"));
    }

    #[test]
    fn test_seeded_admins() {
        let admins = default_admins();
        let now = Utc::now();
        assert_eq!(admins.len(), 5);

        assert_eq!(admins[0].user_id(), Some(101));
        assert_eq!(admins[0].status_at(now), InvitationStatus::Accepted);

        assert_eq!(admins[2].status_at(now), InvitationStatus::Sent);

        // David's invitation lapsed long ago
        assert_eq!(admins[4].stored_status(), InvitationStatus::Sent);
        assert_eq!(admins[4].status_at(now), InvitationStatus::Expired);
        assert!(admins[4].invitation_expires_at() < now - Duration::days(INVITATION_TTL_DAYS));
    }

    #[tokio::test]
    async fn test_create_app_state_serves_seeded_directory() {
        let state = create_app_state();

        let page = state
            .company_service
            .list(domain::company::CompanyQuery::new())
            .await
            .unwrap();
        assert_eq!(page.total, 5);

        let admins = state
            .admin_service
            .list_for_company(CompanyId::new(1))
            .await
            .unwrap();
        assert_eq!(admins.len(), 2);
    }
}
