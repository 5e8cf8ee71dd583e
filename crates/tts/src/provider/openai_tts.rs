use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::{
    request::RequestContext,
    types::{SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, read_audio, send};

const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com/v1";

/// `OpenAI` speech endpoint, also used for compatible self-hosted servers
pub(crate) struct OpenAiTtsProvider {
    name: String,
    client: Client,
    speech_url: String,
    api_key: SecretString,
}

impl OpenAiTtsProvider {
    pub fn new(name: String, client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.as_deref().unwrap_or(DEFAULT_OPENAI_API_URL);

        Self {
            name,
            client,
            speech_url: format!("{}/audio/speech", base_url.trim_end_matches('/')),
            api_key,
        }
    }
}

#[derive(Serialize)]
struct SpeechBody<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speed: Option<f64>,
}

impl<'a> From<&'a SpeechRequest> for SpeechBody<'a> {
    fn from(request: &'a SpeechRequest) -> Self {
        Self {
            model: &request.model,
            input: &request.input,
            voice: &request.voice,
            response_format: request.response_format.as_deref(),
            speed: request.speed,
        }
    }
}

/// Content type to report when the upstream omits one
fn fallback_content_type(response_format: Option<&str>) -> &'static str {
    match response_format {
        Some("opus") => "audio/opus",
        Some("aac") => "audio/aac",
        Some("flac") => "audio/flac",
        Some("wav") => "audio/wav",
        Some("pcm") => "audio/pcm",
        _ => "audio/mpeg",
    }
}

#[async_trait]
impl TtsProvider for OpenAiTtsProvider {
    async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        tracing::debug!(
            model = %request.model,
            voice = %request.voice,
            input_len = request.input.len(),
            "OpenAI TTS request"
        );

        let api_key = context.effective_api_key(&self.api_key);

        let builder = self
            .client
            .post(&self.speech_url)
            .bearer_auth(api_key.expose_secret())
            .json(&SpeechBody::from(&request));

        let response = send(builder, "OpenAI TTS").await?;

        read_audio(
            response,
            "OpenAI TTS",
            fallback_content_type(request.response_format.as_deref()),
        )
        .await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
