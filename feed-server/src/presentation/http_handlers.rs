use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use super::{AppState, routes};

/// All API routes plus the liveness probe, with state applied.
pub(crate) fn routes(state: AppState) -> Router {
    routes::router(state.clone())
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
