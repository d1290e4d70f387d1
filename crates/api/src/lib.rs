pub mod routes;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

/// Shared application state injected into every route handler.
#[derive(Clone)]
pub struct AppState {
    pub symbol_count: usize,
    pub bot_mode: String,
    /// Completion time of the most recent sweep, written by the scheduler.
    pub last_sweep: Arc<RwLock<Option<DateTime<Utc>>>>,
}

/// Build and run the keep-alive HTTP server.
///
/// Hosting platforms ping `/` to keep the process warm; `/healthz` serves
/// ops checks.
pub async fn serve(state: AppState, port: u16) {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    let app = Router::new()
        .merge(routes::health_router())
        .with_state(state)
        .layer(cors);

    info!(%addr, "Keep-alive server listening");
    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
