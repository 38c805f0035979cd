//! Greeting API handler

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use tokio::task;

use crate::translation::{ErrorCategory, Stats, TranslationError};
use crate::web::types::{AppState, GreetQuery, GreetingResponse};

/// `GET /api/greet?name=<recipient>&language=<code>`
pub async fn greet(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GreetQuery>,
) -> Result<Json<GreetingResponse>, (StatusCode, String)> {
    let (name, language) = match (non_empty(query.name), non_empty(query.language)) {
        (Some(name), Some(language)) => (name, language),
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                "Missing name or language parameter".to_string(),
            ))
        }
    };

    // provider calls block, keep them off the async workers
    let worker = Arc::clone(&state);
    let outcome = task::spawn_blocking(move || {
        let mut stats = Stats::default();
        worker
            .greeter
            .greet(&name, &language, worker.clock.as_ref(), &mut stats)
            .map(|greeting| (greeting, stats))
    })
    .await
    .map_err(|e| {
        tracing::error!("Greeting task failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("Failed to get greeting: {}", e),
        )
    })?;

    let (greeting, stats) = outcome.map_err(|e| {
        tracing::error!(
            category = ?e.category(),
            retryable = e.is_retryable(),
            "Failed to get greeting: {}",
            e
        );
        (status_for(&e), format!("Failed to get greeting: {}", e))
    })?;

    state.stats.merge(&stats);

    let stats = if stats.has_activity() {
        tracing::info!(
            "Stats: calls={}, chars={}, cost={:.5}, hits={}",
            stats.api_calls,
            stats.chars_sent,
            stats.cost_estimate,
            stats.cache_hits
        );
        Some(stats)
    } else {
        None
    };

    Ok(Json(GreetingResponse { greeting, stats }))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn status_for(error: &TranslationError) -> StatusCode {
    match error.category() {
        ErrorCategory::Input => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
