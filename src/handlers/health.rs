// src/handlers/health.rs

use axum::{Json, extract::State, response::IntoResponse};
use serde_json::json;
use sqlx::AnyPool;

use crate::db::{self, Backend};

/// Liveness check that also reports whether the database answers.
pub async fn health(
    State(pool): State<AnyPool>,
    State(backend): State<Backend>,
) -> impl IntoResponse {
    let db_healthy = match db::ping(&pool).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!("Health check could not reach the database: {}", e);
            false
        }
    };

    Json(json!({
        "status": true,
        "version": env!("CARGO_PKG_VERSION"),
        "backend": backend.as_str(),
        "db_healthy": db_healthy,
    }))
}
