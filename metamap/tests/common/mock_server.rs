use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    extract::State,
    http::{header, HeaderMap, Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Router,
};
use tokio::{net::TcpListener, task::JoinHandle};

/// A request as seen by the mock upstream
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    /// Path without the leading slash, e.g. `govchecks/v1/ar/dni`
    pub path: String,
    pub authorization: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("Request body is not JSON")
    }
}

#[derive(Clone, Default)]
struct MockState {
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    responses: Arc<Mutex<HashMap<String, (StatusCode, String)>>>,
    latency: Arc<Mutex<Duration>>,
}

/// In-process stand-in for the MetaMap API.
///
/// Records every request and answers with the canned response registered for
/// its path, or 404.
pub struct MockServer {
    pub base_url: String,
    state: MockState,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = MockState::default();
        let router = Router::new().fallback(record).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock server");
        let addr = listener.local_addr().expect("Mock server has no address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        Self {
            base_url: format!("http://{addr}/"),
            state,
            handle,
        }
    }

    /// Registers the JSON answer for `path`
    pub fn respond(&self, path: &str, status: StatusCode, body: serde_json::Value) {
        self.respond_raw(path, status, &body.to_string());
    }

    /// Registers a raw body answer for `path`
    pub fn respond_raw(&self, path: &str, status: StatusCode, body: &str) {
        self.state
            .responses
            .lock()
            .unwrap()
            .insert(path.to_string(), (status, body.to_string()));
    }

    /// Delays every answer by `latency`
    pub fn set_latency(&self, latency: Duration) {
        *self.state.latency.lock().unwrap() = latency;
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.requests.lock().unwrap().clone()
    }

    pub fn requests_to(&self, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|request| request.path == path)
            .collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn record(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> Response {
    let header_value = |name: header::HeaderName| {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    };

    let path = uri.path().trim_start_matches('/').to_string();

    state.requests.lock().unwrap().push(RecordedRequest {
        method,
        path: path.clone(),
        authorization: header_value(header::AUTHORIZATION),
        content_type: header_value(header::CONTENT_TYPE),
        body,
    });

    let latency = *state.latency.lock().unwrap();
    if !latency.is_zero() {
        tokio::time::sleep(latency).await;
    }

    let canned = state.responses.lock().unwrap().get(&path).cloned();
    match canned {
        Some((status, body)) => {
            (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
        }
        None => (StatusCode::NOT_FOUND, "no canned response").into_response(),
    }
}
