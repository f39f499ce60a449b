use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Returns service status, version, and what was loaded at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "herpath-api",
        "model": state.config.groq_model,
        "catalogs": {
            "programs": state.catalogs.programs.len(),
            "colleges": state.catalogs.colleges.len()
        },
        "sessions": state.sessions.len().await
    }))
}
