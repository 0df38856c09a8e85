//! Member Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role of a user inside a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Expert,
    #[serde(other)]
    Unknown,
}

/// Project member entity (`/projects/:id/members`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub user_id: i64,
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
    pub role: MemberRole,
    #[serde(default, with = "crate::util::timestamp")]
    pub joined_at: Option<DateTime<Utc>>,
}
