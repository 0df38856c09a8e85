//! Opinion Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Expert opinion entity (`/projects/:id/opinions`)
///
/// A triangular fuzzy estimate `(lower_bound, peak, upper_bound)` on the
/// project's scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opinion {
    pub id: i64,
    pub project_id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user_email: Option<String>,
    #[serde(default)]
    pub user_full_name: Option<String>,
    pub lower_bound: f64,
    pub peak: f64,
    pub upper_bound: f64,
    #[serde(default, with = "crate::util::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::util::timestamp")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create-or-update opinion payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpinionCreate {
    pub lower_bound: f64,
    pub peak: f64,
    pub upper_bound: f64,
}
