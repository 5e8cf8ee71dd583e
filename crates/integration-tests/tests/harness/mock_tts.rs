//! Mock speech backend for integration tests
//!
//! Answers the `OpenAI`, `ElevenLabs` and Google synthesis endpoints with a
//! fixed number of audio bytes and records what it was sent.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use base64::Engine;
use serde::Deserialize;
use tokio_util::sync::CancellationToken;

/// One request seen by the mock
#[derive(Debug, Clone)]
pub struct Recorded {
    /// Which API was called: `openai`, `elevenlabs` or `google`
    pub api: &'static str,
    /// Credential as sent (bearer token, `xi-api-key` or `key` query param)
    pub credential: Option<String>,
    /// Model, voice, or text depending on the API
    pub body: serde_json::Value,
}

struct MockTtsState {
    audio_len: usize,
    /// Status returned instead of audio when set
    fail_status: Option<u16>,
    requests: Mutex<Vec<Recorded>>,
}

impl MockTtsState {
    fn record(&self, api: &'static str, credential: Option<String>, body: serde_json::Value) {
        self.requests
            .lock()
            .expect("mock state lock")
            .push(Recorded { api, credential, body });
    }

    fn audio(&self) -> Vec<u8> {
        vec![0xAA; self.audio_len]
    }

    fn failure(&self) -> Option<Response> {
        self.fail_status.map(|status| {
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, "mock failure").into_response()
        })
    }
}

/// Mock TTS backend returning predictable audio
pub struct MockTts {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockTtsState>,
}

impl MockTts {
    /// Start a mock that returns `audio_len` bytes per request
    pub async fn start(audio_len: usize) -> anyhow::Result<Self> {
        Self::start_inner(audio_len, None).await
    }

    /// Start a mock that answers every request with `status`
    pub async fn start_failing(status: u16) -> anyhow::Result<Self> {
        Self::start_inner(0, Some(status)).await
    }

    async fn start_inner(audio_len: usize, fail_status: Option<u16>) -> anyhow::Result<Self> {
        let state = Arc::new(MockTtsState {
            audio_len,
            fail_status,
            requests: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .route("/v1/audio/speech", routing::post(handle_openai))
            .route("/v1/text-to-speech/{voice}", routing::post(handle_elevenlabs))
            .route("/v1/text:synthesize", routing::post(handle_google))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    /// Base URL for configuring the mock as a provider
    ///
    /// Includes `/v1` since providers append paths like `/audio/speech`
    pub fn base_url(&self) -> String {
        format!("http://{}/v1", self.addr)
    }

    /// Everything received so far
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.requests.lock().expect("mock state lock").clone()
    }

    pub fn request_count(&self) -> usize {
        self.state.requests.lock().expect("mock state lock").len()
    }
}

impl Drop for MockTts {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_owned)
}

async fn handle_openai(
    State(state): State<Arc<MockTtsState>>,
    headers: HeaderMap,
    Json(body): Json<serde_json::Value>,
) -> Response {
    let credential = header_value(&headers, "authorization").map(|v| v.trim_start_matches("Bearer ").to_owned());
    state.record("openai", credential, body);

    if let Some(failure) = state.failure() {
        return failure;
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], state.audio()).into_response()
}

async fn handle_elevenlabs(
    State(state): State<Arc<MockTtsState>>,
    Path(voice): Path<String>,
    headers: HeaderMap,
    Json(mut body): Json<serde_json::Value>,
) -> Response {
    body["voice"] = serde_json::Value::String(voice);
    state.record("elevenlabs", header_value(&headers, "xi-api-key"), body);

    if let Some(failure) = state.failure() {
        return failure;
    }

    ([(header::CONTENT_TYPE, "audio/mpeg")], state.audio()).into_response()
}

#[derive(Deserialize)]
struct GoogleQuery {
    key: Option<String>,
}

async fn handle_google(
    State(state): State<Arc<MockTtsState>>,
    Query(query): Query<GoogleQuery>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    state.record("google", query.key, body);

    if let Some(failure) = state.failure() {
        return failure;
    }

    let audio_content = base64::engine::general_purpose::STANDARD.encode(state.audio());

    Json(serde_json::json!({ "audioContent": audio_content })).into_response()
}
