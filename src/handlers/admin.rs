//! Root status and store initialization endpoints.

use crate::response::{status_body, StatusBody};
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};

pub async fn root(State(state): State<AppState>) -> Json<StatusBody> {
    let status = if state.store.is_ready() {
        "Server running. Store initialized."
    } else {
        "Server running. Store not initialized yet."
    };
    Json(status_body(status))
}

/// Idempotent schema setup. Setup failures are reported inline in the body
/// with a 200; existing clients key off the `error` field, not the status.
pub async fn init_db(State(state): State<AppState>) -> Json<Value> {
    match state.store.init().await {
        Ok(()) => Json(json!({ "status": "Database initialized successfully" })),
        Err(e) => {
            tracing::error!(error = %e, "store init failed");
            Json(json!({ "error": e.to_string() }))
        }
    }
}
