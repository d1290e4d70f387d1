use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub fn health_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/healthz", get(healthz))
}

/// Keep-alive root — uptime pingers hit this.
async fn home() -> &'static str {
    "✅ Bot is running!"
}

/// Health check endpoint — no auth required.
async fn healthz(State(state): State<AppState>) -> Json<Value> {
    let last_sweep = (*state.last_sweep.read().await).map(|t| t.to_rfc3339());
    Json(json!({
        "status": "ok",
        "mode": state.bot_mode,
        "symbols": state.symbol_count,
        "last_sweep": last_sweep,
    }))
}
