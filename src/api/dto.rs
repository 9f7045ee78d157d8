//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::data::{Dataset, Filters, JsonRecord};

// ============================================
// DATA DTOs
// ============================================

/// Query string of `GET /api/v1/data`
///
/// Every field is kept as raw text so that malformed numbers surface as
/// generation errors instead of extractor rejections.
#[derive(Debug, Default, Deserialize)]
pub struct DataQuery {
    /// Dataset type: scatter, line, bar, employees (default: scatter)
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Number of records (days for `line`)
    pub count: Option<String>,
    /// Inclusive lower bound on `value`
    pub threshold: Option<String>,
    /// Required category
    pub category: Option<String>,
    /// Seed for reproducible values; dates still follow the request time
    pub seed: Option<String>,
}

/// Generated dataset response
#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub data: Dataset,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/v1/data`
#[derive(Debug, Deserialize)]
pub struct ProcessRequest {
    /// Caller-supplied records; each needs a numeric `value`
    pub data: Vec<Value>,
    pub filters: Filters,
}

/// Filtered records response
#[derive(Debug, Serialize)]
pub struct ProcessResponse {
    pub data: Vec<JsonRecord>,
    pub count: usize,
    pub timestamp: DateTime<Utc>,
}

// ============================================
// SESSION DTOs
// ============================================

/// Counter value after a counter operation
#[derive(Debug, Serialize, Deserialize)]
pub struct CounterResponse {
    pub counter: i64,
}

/// Chat input
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub content: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy or degraded
    pub status: String,
    /// Session store status
    pub session_store: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}
