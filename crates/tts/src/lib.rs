#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod error;
mod provider;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{Result, TtsError};
pub use provider::TtsProvider;
pub use request::RequestContext;
pub use server::{Server, TtsServerBuilder};
pub use types::{LipSyncSpeechResponse, SpeechRequest, SpeechResponse};
use request::ExtractPayload;

/// Build the TTS server from configuration
pub fn build_server(config: &lipsync_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        TtsServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize TTS server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for TTS
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/v1/audio/speech", post(synthesize))
        .route("/v1/audio/lipsync", post(synthesize_lipsync))
}

/// Handle speech synthesis requests
async fn synthesize(
    State(server): State<Arc<Server>>,
    ExtractPayload(context, request): ExtractPayload<types::SpeechRequest>,
) -> Result<axum::response::Response> {
    tracing::debug!("TTS speech handler called for model: {}", request.model);

    let response = server.synthesize(request, &context).await?;

    tracing::debug!("Speech synthesis complete");

    Ok(response.into_response())
}

/// Handle speech synthesis requests that also want mouth cues
async fn synthesize_lipsync(
    State(server): State<Arc<Server>>,
    ExtractPayload(context, request): ExtractPayload<types::SpeechRequest>,
) -> Result<Json<types::LipSyncSpeechResponse>> {
    tracing::debug!("TTS lip-sync handler called for model: {}", request.model);

    let response = server.synthesize_with_lipsync(request, &context).await?;

    tracing::debug!("Lip-sync synthesis complete");

    Ok(Json(response))
}
