//! In-process mock of the upstream recipe API.
//!
//! Integration tests point a source at [`MockUpstream::base_url`] (plus the keyed path the
//! source composes), stub one JSON envelope per endpoint file name, and assert on the raw
//! request lines the mock records. Unstubbed endpoints answer 404 so status propagation can be
//! exercised without extra wiring.

use anyhow::Context as _;
use axum::Router;
use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

#[derive(Clone, Default)]
struct MockState {
    stubs: Arc<Mutex<HashMap<String, Value>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

/// An ephemeral-port HTTP server impersonating the upstream recipe API.
///
/// Shuts down gracefully when dropped.
pub struct MockUpstream {
    addr: SocketAddr,
    state: MockState,
    shutdown: Option<oneshot::Sender<()>>,
    server: JoinHandle<()>,
}

impl MockUpstream {
    /// Bind an ephemeral localhost port and start serving.
    ///
    /// # Errors
    ///
    /// Returns an error if the listener cannot bind or its local address cannot be read.
    pub async fn start() -> anyhow::Result<Self> {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("bind ephemeral port")?;
        let addr = listener.local_addr().context("read local addr")?;

        let state = MockState::default();
        let app = Router::new()
            .route("/{*path}", any(serve_stub))
            .with_state(state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let server = tokio::spawn(async move {
            let _ = serve.await;
        });

        Ok(Self {
            addr,
            state,
            shutdown: Some(shutdown_tx),
            server,
        })
    }

    /// Base URL of the mock (`http://127.0.0.1:{port}`), without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Stub the JSON envelope returned for an endpoint file name (e.g. `search.php`).
    ///
    /// Stubbing the same endpoint again replaces the previous envelope.
    pub fn stub(&self, endpoint: &str, envelope: Value) {
        self.state
            .stubs
            .lock()
            .expect("stubs lock")
            .insert(endpoint.to_string(), envelope);
    }

    /// Every request seen so far, as `path?query` lines in arrival order.
    ///
    /// The query is reproduced byte-for-byte, so tests can assert that parameters went out
    /// verbatim.
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.state.requests.lock().expect("requests lock").clone()
    }
}

impl Drop for MockUpstream {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.server.abort();
    }
}

async fn serve_stub(State(state): State<MockState>, request: Request) -> Response {
    let path = request.uri().path().to_string();
    let line = match request.uri().query() {
        Some(query) => format!("{path}?{query}"),
        None => path.clone(),
    };
    state.requests.lock().expect("requests lock").push(line);

    let endpoint = path.rsplit('/').next().unwrap_or_default();
    let stub = state
        .stubs
        .lock()
        .expect("stubs lock")
        .get(endpoint)
        .cloned();

    match stub {
        Some(envelope) => axum::Json(envelope).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
