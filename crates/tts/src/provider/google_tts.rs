use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use visemes::{AudioProfile, PCM_24KHZ_BITRATE_BPS};

use crate::{
    error::TtsError,
    request::RequestContext,
    types::{SpeechRequest, SpeechResponse},
};

use super::{TtsProvider, send};

const DEFAULT_GOOGLE_TTS_API_URL: &str = "https://texttospeech.googleapis.com/v1";

const DEFAULT_LANGUAGE_CODE: &str = "en-US";

/// Sample rate requested for uncompressed audio so its length can be derived from the byte count
const LINEAR16_SAMPLE_RATE_HZ: u32 = 24_000;

/// Google Cloud Text-to-Speech provider
///
/// Unlike the other providers, audio comes back base64-encoded inside a JSON
/// body and is decoded here.
pub(crate) struct GoogleTtsProvider {
    client: Client,
    base_url: String,
    api_key: SecretString,
    name: String,
}

impl GoogleTtsProvider {
    pub fn new(name: String, client: Client, api_key: SecretString, base_url: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_GOOGLE_TTS_API_URL.to_string());

        Self {
            client,
            base_url,
            api_key,
            name,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeRequest<'a> {
    input: SynthesisInput<'a>,
    voice: VoiceSelection<'a>,
    audio_config: AudioConfig,
}

#[derive(Serialize)]
struct SynthesisInput<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct VoiceSelection<'a> {
    language_code: &'a str,
    name: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AudioConfig {
    audio_encoding: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample_rate_hertz: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    speaking_rate: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SynthesizeResponse {
    #[serde(default)]
    audio_content: String,
}

/// Bitrate of Google's `MP3` output
const MP3_BITRATE_BPS: u32 = 32_000;

/// Bitrate assumed for Google's `OGG_OPUS` output
const OGG_OPUS_BITRATE_BPS: u32 = 32_000;

/// Audio encoding requested from Google for a given format name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Encoding {
    name: &'static str,
    content_type: &'static str,
    bitrate_bps: u32,
}

const MP3: Encoding = Encoding {
    name: "MP3",
    content_type: "audio/mpeg",
    bitrate_bps: MP3_BITRATE_BPS,
};

const LINEAR16: Encoding = Encoding {
    name: "LINEAR16",
    content_type: "audio/wav",
    bitrate_bps: PCM_24KHZ_BITRATE_BPS,
};

const OGG_OPUS: Encoding = Encoding {
    name: "OGG_OPUS",
    content_type: "audio/ogg",
    bitrate_bps: OGG_OPUS_BITRATE_BPS,
};

/// Formats arrive lower-cased from the server
fn encoding(response_format: Option<&str>) -> Encoding {
    match response_format {
        Some("pcm" | "wav" | "linear16") => LINEAR16,
        Some("opus") => OGG_OPUS,
        _ => MP3,
    }
}

/// Language code embedded in a voice name such as `en-US-Neural2-F`
fn language_code(voice: &str) -> &str {
    let mut dashes = voice.match_indices('-').map(|(index, _)| index);

    match (dashes.next(), dashes.next()) {
        (Some(_), Some(end)) => &voice[..end],
        _ => DEFAULT_LANGUAGE_CODE,
    }
}

#[async_trait]
impl TtsProvider for GoogleTtsProvider {
    async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        let url = format!("{}/text:synthesize", self.base_url.trim_end_matches('/'));

        tracing::debug!(
            "Google TTS request: voice={}, input_len={}",
            request.voice,
            request.input.len(),
        );

        let selected = encoding(request.response_format.as_deref());

        let body = SynthesizeRequest {
            input: SynthesisInput { text: &request.input },
            voice: VoiceSelection {
                language_code: language_code(&request.voice),
                name: &request.voice,
            },
            audio_config: AudioConfig {
                audio_encoding: selected.name,
                sample_rate_hertz: (selected == LINEAR16).then_some(LINEAR16_SAMPLE_RATE_HZ),
                speaking_rate: request.speed,
            },
        };

        let api_key = context.effective_api_key(&self.api_key);

        let builder = self
            .client
            .post(&url)
            .query(&[("key", api_key.expose_secret())])
            .json(&body);

        let response = send(builder, "Google TTS").await?;

        let payload: SynthesizeResponse = response.json().await.map_err(|e| {
            tracing::error!("Failed to parse Google TTS response body: {e}");
            TtsError::InternalError(None)
        })?;

        let audio = decode_audio(&payload)?;

        tracing::debug!("Google TTS synthesis complete, {} bytes", audio.len());

        Ok(SpeechResponse {
            audio,
            content_type: selected.content_type.to_string(),
        })
    }

    fn audio_profile(&self, response_format: Option<&str>) -> AudioProfile {
        AudioProfile::from_bitrate(encoding(response_format).bitrate_bps).unwrap_or_default()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Audio bytes from a successful response
///
/// A response without usable audio reports a message the client may see.
fn decode_audio(payload: &SynthesizeResponse) -> crate::error::Result<Vec<u8>> {
    if payload.audio_content.is_empty() {
        tracing::error!("Google TTS response contained no audio");
        return Err(TtsError::InternalError(Some("Google TTS returned no audio".to_string())));
    }

    STANDARD.decode(payload.audio_content.as_bytes()).map_err(|e| {
        tracing::error!("Google TTS returned invalid base64 audio: {e}");
        TtsError::InternalError(Some("Google TTS returned malformed audio".to_string()))
    })
}
