//! Company admin request/response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::admin::{AdminId, CompanyAdmin, InvitationStatus};
use crate::domain::company::CompanyId;

/// Company admin as exposed on the wire
///
/// `invitationStatus` is the derived reading, so a lapsed invitation shows
/// EXPIRED even though storage still holds SENT.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCompanyAdmin {
    pub id: AdminId,
    pub company_id: CompanyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    pub email: String,
    pub name: String,
    pub invitation_status: InvitationStatus,
    pub invitation_sent_at: DateTime<Utc>,
    pub invitation_expires_at: DateTime<Utc>,
}

impl ApiCompanyAdmin {
    pub fn from_domain(admin: &CompanyAdmin, now: DateTime<Utc>) -> Self {
        Self {
            id: admin.id(),
            company_id: admin.company_id(),
            user_id: admin.user_id(),
            email: admin.email().to_string(),
            name: admin.name().to_string(),
            invitation_status: admin.status_at(now),
            invitation_sent_at: admin.invitation_sent_at(),
            invitation_expires_at: admin.invitation_expires_at(),
        }
    }
}

/// POST /v1/companies/{id}/admins request body
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteAdminBody {
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn admin() -> CompanyAdmin {
        CompanyAdmin::invite(
            AdminId::new(1),
            CompanyId::new(1),
            "John Doe",
            "john@acme.com",
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let json =
            serde_json::to_string(&ApiCompanyAdmin::from_domain(&admin(), Utc::now())).unwrap();

        assert!(json.contains("\"companyId\":1"));
        assert!(json.contains("\"invitationStatus\":\"SENT\""));
        assert!(json.contains("\"invitationSentAt\""));
        assert!(!json.contains("userId"));
    }

    #[test]
    fn test_lapsed_invitation_reads_expired() {
        let admin = admin();
        let later = Utc::now() + Duration::days(8);

        let api = ApiCompanyAdmin::from_domain(&admin, later);
        assert_eq!(api.invitation_status, InvitationStatus::Expired);
        assert_eq!(admin.stored_status(), InvitationStatus::Sent);
    }

    #[test]
    fn test_invite_body_deserializes() {
        let body: InviteAdminBody =
            serde_json::from_str(r#"{"name":"Jane Smith","email":"jane@acme.com"}"#).unwrap();

        assert_eq!(body.name, "Jane Smith");
        assert_eq!(body.email, "jane@acme.com");
    }
}
