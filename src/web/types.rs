//! Web data types

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::greeter::Greeter;
use crate::greeting::{Clock, SystemClock};
use crate::translation::{SharedStats, Stats};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub greeter: Arc<Greeter>,
    pub stats: SharedStats,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(greeter: Arc<Greeter>) -> Self {
        Self::with_clock(greeter, Arc::new(SystemClock))
    }

    pub fn with_clock(greeter: Arc<Greeter>, clock: Arc<dyn Clock>) -> Self {
        Self {
            greeter,
            stats: SharedStats::new(),
            clock,
        }
    }
}

/// Query string of `GET /api/greet`
#[derive(Debug, Default, Deserialize)]
pub struct GreetQuery {
    pub name: Option<String>,
    pub language: Option<String>,
}

/// Greeting response
#[derive(Debug, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub greeting: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Stats>,
}
