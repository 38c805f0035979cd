//! Route table

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::web::{handlers::*, types::AppState};

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/greet", get(greet))
        .route("/api/stats", get(get_stats))
        .route("/health", get(health))
}
