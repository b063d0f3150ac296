//! Route handlers.

pub mod cities;
pub mod roads;

use axum::Json;

/// Liveness check. Does not touch Neo4j.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
