//! Company admin entity and invitation state

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{validate_admin_email, validate_admin_name, AdminValidationError};
use crate::domain::company::CompanyId;
use crate::domain::storage::{StorageEntity, StorageKey};

/// How long an invitation stays valid
pub const INVITATION_TTL_DAYS: i64 = 7;

/// Company admin identifier - numeric, allocated by the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdminId(u64);

impl AdminId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl From<u64> for AdminId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for AdminId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StorageKey for AdminId {
    fn to_key(&self) -> String {
        self.0.to_string()
    }
}

/// Invitation status of a company admin
///
/// `Expired` is a derived reading: the stored value stays `Sent` and the
/// expiry is evaluated lazily against the clock at read time. It is never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvitationStatus {
    Sent,
    Accepted,
    Canceled,
    Expired,
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sent => write!(f, "SENT"),
            Self::Accepted => write!(f, "ACCEPTED"),
            Self::Canceled => write!(f, "CANCELED"),
            Self::Expired => write!(f, "EXPIRED"),
        }
    }
}

/// Pure derived-status function: a stored-SENT invitation past its expiry
/// reads as EXPIRED
pub fn derived_status(
    stored: InvitationStatus,
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> InvitationStatus {
    match stored {
        InvitationStatus::Sent if now > expires_at => InvitationStatus::Expired,
        other => other,
    }
}

/// Company admin entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyAdmin {
    /// Unique identifier
    id: AdminId,
    /// Owning company
    company_id: CompanyId,
    /// Platform user, set once the invitation is accepted
    #[serde(skip_serializing_if = "Option::is_none")]
    user_id: Option<u64>,
    /// Contact email the invitation was sent to
    email: String,
    /// Display name
    name: String,
    /// Stored invitation status (EXPIRED is never written here)
    invitation_status: InvitationStatus,
    /// When the invitation was (last) sent
    invitation_sent_at: DateTime<Utc>,
    /// When the invitation lapses
    invitation_expires_at: DateTime<Utc>,
}

impl CompanyAdmin {
    /// Create an admin with a freshly sent invitation
    pub fn invite(
        id: AdminId,
        company_id: CompanyId,
        name: impl Into<String>,
        email: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, AdminValidationError> {
        let name = name.into();
        let email = email.into();
        validate_admin_name(&name)?;
        validate_admin_email(&email)?;

        Ok(Self {
            id,
            company_id,
            user_id: None,
            email,
            name,
            invitation_status: InvitationStatus::Sent,
            invitation_sent_at: now,
            invitation_expires_at: now + Duration::days(INVITATION_TTL_DAYS),
        })
    }

    // Getters

    pub fn id(&self) -> AdminId {
        self.id
    }

    pub fn company_id(&self) -> CompanyId {
        self.company_id
    }

    pub fn user_id(&self) -> Option<u64> {
        self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The stored status, without expiry evaluation
    pub fn stored_status(&self) -> InvitationStatus {
        self.invitation_status
    }

    /// The status as observed at `now`, with lazy expiry
    pub fn status_at(&self, now: DateTime<Utc>) -> InvitationStatus {
        derived_status(self.invitation_status, self.invitation_expires_at, now)
    }

    pub fn invitation_sent_at(&self) -> DateTime<Utc> {
        self.invitation_sent_at
    }

    pub fn invitation_expires_at(&self) -> DateTime<Utc> {
        self.invitation_expires_at
    }

    // Mutators

    /// Re-send the invitation: back to SENT with fresh timestamps
    pub fn mark_resent(&mut self, now: DateTime<Utc>) {
        self.invitation_status = InvitationStatus::Sent;
        self.invitation_sent_at = now;
        self.invitation_expires_at = now + Duration::days(INVITATION_TTL_DAYS);
    }

    /// Withdraw the invitation
    pub fn cancel(&mut self) {
        self.invitation_status = InvitationStatus::Canceled;
    }

    /// Record acceptance by a platform user
    pub fn accept(&mut self, user_id: u64) {
        self.invitation_status = InvitationStatus::Accepted;
        self.user_id = Some(user_id);
    }
}

impl StorageEntity for CompanyAdmin {
    type Key = AdminId;

    fn key(&self) -> Self::Key {
        self.id
    }
}
