//! API response wrappers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Envelope for successful responses
///
/// Failures are rendered as [`ErrorResponse`](crate::errors::ErrorResponse).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    pub data: Option<T>,

    /// Response timestamp
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            timestamp: Utc::now(),
        }
    }
}

/// Liveness response for `/health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy(version: impl Into<String>) -> Self {
        Self {
            status: String::from("healthy"),
            version: version.into(),
            timestamp: Utc::now(),
        }
    }
}
