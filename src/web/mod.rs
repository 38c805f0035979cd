//! HTTP API backing the greeting web form

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::http::{header, Method};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::core::GreeterResult;
use crate::greeter::Greeter;

/// Web server
pub struct WebServer {
    config: WebConfig,
    state: Arc<AppState>,
}

impl WebServer {
    pub fn new(config: WebConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Serves until the listener fails
    pub async fn start(&self) -> GreeterResult<()> {
        let app = create_router(Arc::clone(&self.state), &self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address()).await?;

        tracing::info!(
            "Server starting on http://{}",
            self.config.listen_address()
        );

        axum::serve(listener, app).await?;

        Ok(())
    }
}

/// Builds the application router: API routes, CORS and the static frontend.
pub fn create_router(state: Arc<AppState>, config: &WebConfig) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    let mut app = create_routes().with_state(state);

    if let Some(static_dir) = &config.static_dir {
        app = app.fallback_service(ServeDir::new(static_dir));
    }

    app.layer(cors)
}

/// Runs the server on a fresh multi-threaded runtime, blocking the calling thread.
///
/// The caller keeps its own handle on `greeter` so the blocking HTTP client is never
/// dropped from inside the runtime.
pub fn run(config: WebConfig, greeter: Arc<Greeter>) -> GreeterResult<()> {
    config.validate()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let server = WebServer::new(config, AppState::new(greeter));
    runtime.block_on(server.start())
}
