use serde::{Deserialize, Serialize};

use crate::models::domain::RankedResult;

/// Response for the candidate search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCandidatesResponse {
    pub results: Vec<RankedResult>,
    /// Size of the full surviving set, before the limit is applied
    #[serde(rename = "totalFound")]
    pub total_found: usize,
    /// Arithmetic mean score of the full surviving set; 0.0 when empty
    #[serde(rename = "meanScore")]
    pub mean_score: f64,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
