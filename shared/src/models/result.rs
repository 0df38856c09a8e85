//! Calculation Result Model
//!
//! Computed server-side from the submitted opinions; the client only decodes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Triangular fuzzy number
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TriangularEstimate {
    pub lower: f64,
    pub peak: f64,
    pub upper: f64,
}

/// Aggregated result (`GET /projects/:id/result`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    pub project_id: i64,
    /// Best-compromise mean of all expert opinions
    pub best_compromise: TriangularEstimate,
    pub centroid: f64,
    pub max_error: f64,
    #[serde(default)]
    pub opinions_count: u32,
    #[serde(default, with = "crate::util::timestamp")]
    pub calculated_at: Option<DateTime<Utc>>,
}
