//! Health check endpoint with database ping.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Instant;

/// Application state for health checks.
#[derive(Clone)]
pub struct HealthState {
    pub pool: PgPool,
    pub start_time: Instant,
    pub version: String,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    pub uptime_secs: u64,
    pub database: DatabaseStatus,
}

/// Overall health status.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Database connectivity status.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseStatus {
    Up,
    Down,
}

/// Create health check routes.
pub fn health_routes(state: Arc<HealthState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// GET /health - liveness plus a database ping.
async fn health_handler(State(state): State<Arc<HealthState>>) -> impl IntoResponse {
    let database = match sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => DatabaseStatus::Up,
        Err(e) => {
            tracing::warn!(error = %e, "Health check database ping failed");
            DatabaseStatus::Down
        }
    };

    let status = match database {
        DatabaseStatus::Up => HealthStatus::Healthy,
        DatabaseStatus::Down => HealthStatus::Unhealthy,
    };

    let http_status = match status {
        HealthStatus::Healthy => StatusCode::OK,
        HealthStatus::Unhealthy => StatusCode::SERVICE_UNAVAILABLE,
    };

    (
        http_status,
        Json(HealthResponse {
            status,
            version: state.version.clone(),
            uptime_secs: state.start_time.elapsed().as_secs(),
            database,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_serialization() {
        assert_eq!(
            serde_json::to_string(&HealthStatus::Healthy).unwrap(),
            "\"healthy\""
        );
        assert_eq!(
            serde_json::to_string(&DatabaseStatus::Down).unwrap(),
            "\"down\""
        );
    }
}
