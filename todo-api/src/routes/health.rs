//! Health check endpoints
//!
//! Static liveness payloads; they touch neither the service nor the
//! database.
//!
//! # Endpoints
//!
//! ```text
//! GET /        -> {"status": "ok", "message": "Todo API is running", "version": "0.1.0"}
//! GET /health  -> {"status": "healthy", "version": "0.1.0"}
//! ```

use axum::Json;
use serde::{Deserialize, Serialize};

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Optional human-readable note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Application version
    pub version: String,
}

/// `GET /`
pub async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        message: Some("Todo API is running".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /health`
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        message: None,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
