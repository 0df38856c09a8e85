//! Project Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project entity (决策项目)
///
/// Experts place their opinions on the `[scale_min, scale_max]` scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub owner_id: i64,
    pub scale_min: f64,
    pub scale_max: f64,
    #[serde(default)]
    pub scale_unit: Option<String>,
    #[serde(default, with = "crate::util::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::util::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create project payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub scale_min: f64,
    pub scale_max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_unit: Option<String>,
}

/// Update project payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_unit: Option<String>,
}
