use serde::{Deserialize, Serialize};

use crate::models::domain::{BatchMetrics, ScoredLead};

/// Response for the rank endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankLeadsResponse {
    pub success: bool,
    pub rankings: Vec<ScoredLead>,
    pub model_metrics: BatchMetrics,
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
