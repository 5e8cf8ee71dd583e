pub mod elevenlabs;
pub mod google_tts;
pub mod openai_tts;

use async_trait::async_trait;
use visemes::AudioProfile;

use crate::{
    error::TtsError,
    request::RequestContext,
    types::{SpeechRequest, SpeechResponse},
};

/// Trait for TTS provider implementations
#[async_trait]
pub trait TtsProvider: Send + Sync {
    /// Synthesize text to speech
    ///
    /// `request.model` arrives without the provider prefix.
    async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse>;

    /// Bitrate assumption for the audio this provider returns
    ///
    /// Takes the lower-cased `response_format` of the request, so the estimate
    /// matches the encoding that was actually asked for upstream.
    fn audio_profile(&self, response_format: Option<&str>) -> AudioProfile {
        AudioProfile::for_format(response_format)
    }

    /// Get the provider name
    fn name(&self) -> &str;
}

/// Turn a non-success upstream response into a [`TtsError`]
async fn ensure_success(response: reqwest::Response, provider: &str) -> crate::error::Result<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());

    tracing::error!("{provider} API error ({status}): {error_text}");

    Err(TtsError::from_provider_status(status.as_u16(), error_text))
}

/// Send an upstream request, mapping transport failures to [`TtsError::ConnectionError`]
async fn send(builder: reqwest::RequestBuilder, provider: &str) -> crate::error::Result<reqwest::Response> {
    let response = builder.send().await.map_err(|e| {
        tracing::error!("{provider} request failed: {e}");
        TtsError::ConnectionError(format!("Failed to send request to {provider}: {e}"))
    })?;

    ensure_success(response, provider).await
}

/// Collect a binary audio body, keeping the upstream content type if present
async fn read_audio(
    response: reqwest::Response,
    provider: &str,
    fallback_content_type: &str,
) -> crate::error::Result<SpeechResponse> {
    let content_type = response
        .headers()
        .get(http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or(fallback_content_type)
        .to_string();

    let audio = response.bytes().await.map_err(|e| {
        tracing::error!("Failed to read {provider} response body: {e}");
        TtsError::InternalError(None)
    })?;

    tracing::debug!(provider, bytes = audio.len(), %content_type, "speech audio received");

    Ok(SpeechResponse {
        audio: audio.to_vec(),
        content_type,
    })
}
