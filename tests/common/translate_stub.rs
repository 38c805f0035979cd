// Local stand-in for the Cloud Translation v3 `translateText` endpoint
//
// Accepts `POST /v3/projects/test-project:translateText` with `Bearer test-token` and answers
// `[<target>] <text>`. Target `xx` is rejected with a 400 like the real service.

use std::net::{SocketAddr, TcpListener};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::thread;

use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};

pub const PROJECT_ID: &str = "test-project";
pub const ACCESS_TOKEN: &str = "test-token";

#[derive(Default)]
struct StubState {
    requests: AtomicUsize,
    last_body: Mutex<Option<Value>>,
}

/// Handle on a running stub. The server thread lives until the test process exits.
pub struct TranslateStub {
    addr: SocketAddr,
    state: Arc<StubState>,
}

impl TranslateStub {
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
        listener.set_nonblocking(true).expect("nonblocking listener");
        let addr = listener.local_addr().expect("stub address");

        let state = Arc::new(StubState::default());
        let app = Router::new()
            .route("/v3/projects/:resource", post(translate_text))
            .with_state(Arc::clone(&state));

        thread::spawn(move || {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("stub runtime");
            runtime.block_on(async move {
                let listener =
                    tokio::net::TcpListener::from_std(listener).expect("tokio listener");
                axum::serve(listener, app).await.expect("stub server");
            });
        });

        Self { addr, state }
    }

    /// Base URL to hand to the client, e.g. `http://127.0.0.1:49152`
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> usize {
        self.state.requests.load(Ordering::SeqCst)
    }

    pub fn last_body(&self) -> Option<Value> {
        self.state.last_body.lock().expect("stub body lock").clone()
    }
}

async fn translate_text(
    State(state): State<Arc<StubState>>,
    Path(resource): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    state.requests.fetch_add(1, Ordering::SeqCst);
    *state.last_body.lock().expect("stub body lock") = Some(body.clone());

    if resource != format!("{}:translateText", PROJECT_ID) {
        return api_error(StatusCode::NOT_FOUND, "Project not found.");
    }

    let authorized = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map_or(false, |value| value == format!("Bearer {}", ACCESS_TOKEN));
    if !authorized {
        return api_error(
            StatusCode::UNAUTHORIZED,
            "Request had invalid authentication credentials.",
        );
    }

    let target = body["targetLanguageCode"].as_str().unwrap_or_default();
    let text = body["contents"][0].as_str().unwrap_or_default();
    if target == "xx" {
        return api_error(StatusCode::BAD_REQUEST, "Target language is invalid.");
    }

    (
        StatusCode::OK,
        Json(json!({
            "translations": [{ "translatedText": format!("[{}] {}", target, text) }]
        })),
    )
}

fn api_error(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (
        status,
        Json(json!({
            "error": { "code": status.as_u16(), "message": message, "status": "ERROR" }
        })),
    )
}
