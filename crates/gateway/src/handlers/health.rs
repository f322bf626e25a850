//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct DatabaseHealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub database: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Liveness probe - always returns healthy if server is running
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: readlist_common::VERSION,
    })
}

/// Database probe - runs `SELECT 1` and answers 200 or 503
pub async fn database_health(
    State(state): State<AppState>,
) -> (StatusCode, Json<DatabaseHealthResponse>) {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);

    match state.db.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(DatabaseHealthResponse {
                status: "healthy",
                timestamp,
                database: "connected",
                service: Some(state.config.observability.service_name.clone()),
                error: None,
            }),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(DatabaseHealthResponse {
                    status: "unhealthy",
                    timestamp,
                    database: "disconnected",
                    service: None,
                    error: Some(e.to_string()),
                }),
            )
        }
    }
}
