use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use visemes::{AudioProfile, DEFAULT_BITRATE_BPS, PCM_24KHZ_BITRATE_BPS};

use crate::{
    request::RequestContext,
    types::{SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, read_audio, send};

const DEFAULT_ELEVENLABS_API_URL: &str = "https://api.elevenlabs.io/v1";

/// `ElevenLabs` TTS provider
pub(crate) struct ElevenLabsProvider {
    name: String,
    client: Client,
    base_url: String,
    api_key: SecretString,
}

impl ElevenLabsProvider {
    pub fn new(name: String, client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_ELEVENLABS_API_URL.to_string());

        Self {
            name,
            client,
            base_url,
            api_key,
        }
    }
}

#[derive(serde::Serialize)]
struct ElevenLabsRequest<'a> {
    text: &'a str,
    model_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    voice_settings: Option<VoiceSettings>,
}

#[derive(serde::Serialize)]
struct VoiceSettings {
    speed: f64,
}

/// `ElevenLabs` `output_format` query value for an `OpenAI`-style format name
///
/// `None` leaves the upstream default, `mp3_44100_128`.
fn output_format(response_format: Option<&str>) -> Option<&'static str> {
    match response_format? {
        "mp3" => Some("mp3_44100_128"),
        "pcm" | "wav" | "linear16" => Some("pcm_24000"),
        "opus" => Some("opus_48000_64"),
        _ => None,
    }
}

/// Bitrate of the audio returned for a given `output_format`
fn output_bitrate_bps(output_format: Option<&str>) -> u32 {
    match output_format {
        Some("pcm_24000") => PCM_24KHZ_BITRATE_BPS,
        Some("opus_48000_64") => 64_000,
        _ => DEFAULT_BITRATE_BPS,
    }
}

#[async_trait]
impl TtsProvider for ElevenLabsProvider {
    async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/text-to-speech/{}", self.base_url.trim_end_matches('/'), request.voice);

        tracing::debug!(
            model = %request.model,
            voice = %request.voice,
            input_len = request.input.len(),
            "ElevenLabs TTS request"
        );

        let body = ElevenLabsRequest {
            text: &request.input,
            model_id: &request.model,
            voice_settings: request.speed.map(|speed| VoiceSettings { speed }),
        };

        let api_key = context.effective_api_key(&self.api_key);

        let mut builder = self
            .client
            .post(&url)
            .header("xi-api-key", api_key.expose_secret())
            .json(&body);

        let format = output_format(request.response_format.as_deref());
        if let Some(format) = format {
            builder = builder.query(&[("output_format", format)]);
        }

        let response = send(builder, "ElevenLabs").await?;

        let fallback = if format.is_some_and(|f| f.starts_with("pcm")) {
            "audio/pcm"
        } else {
            "audio/mpeg"
        };

        read_audio(response, "ElevenLabs", fallback).await
    }

    fn audio_profile(&self, response_format: Option<&str>) -> AudioProfile {
        AudioProfile::from_bitrate(output_bitrate_bps(output_format(response_format))).unwrap_or_default()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
