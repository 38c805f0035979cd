//! Usage statistics API handler

use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::translation::Stats;
use crate::web::types::AppState;

/// `GET /api/stats`: totals over every greeting served since startup
pub async fn get_stats(State(state): State<Arc<AppState>>) -> Json<Stats> {
    Json(state.stats.snapshot())
}
