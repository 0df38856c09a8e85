//! Invitation Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Invitation lifecycle as reported by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Declined,
    #[serde(other)]
    Unknown,
}

/// Invitation entity (`/invitations`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    pub project_id: i64,
    #[serde(default)]
    pub project_name: Option<String>,
    pub invitee_email: String,
    #[serde(default)]
    pub inviter_id: Option<i64>,
    pub status: InvitationStatus,
    #[serde(default, with = "crate::util::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Invite expert payload (`POST /projects/:id/invite`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InviteRequest {
    pub email: String,
}
