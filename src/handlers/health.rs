// src/handlers/health.rs
use axum::Json;
use serde_json::{json, Value};

// GET /
pub async fn home() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Supermarket backend is alive",
    }))
}

// GET /health
pub async fn health_check() -> &'static str {
    "OK"
}
