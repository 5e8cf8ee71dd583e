use base64::{Engine, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};
use visemes::LipSync;

/// Speech synthesis request following `OpenAI` TTS API format
#[derive(Debug, Clone, Deserialize)]
pub struct SpeechRequest {
    /// Model identifier, optionally prefixed with a provider name
    /// (e.g. "openai/tts-1" or "`eleven_multilingual_v2`")
    pub model: String,
    /// Text to synthesize into speech
    pub input: String,
    /// Voice identifier (e.g. "alloy", an `ElevenLabs` voice ID, or a
    /// Google voice name such as "en-US-Neural2-F")
    pub voice: String,
    /// Output audio format (mp3, opus, aac, flac, wav, pcm)
    pub response_format: Option<String>,
    /// Speech speed multiplier (0.25 to 4.0)
    pub speed: Option<f64>,
}

/// Raw audio response from a TTS provider
#[derive(Debug)]
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl SpeechResponse {
    /// Convert the speech response into an axum HTTP response
    pub fn into_response(self) -> axum::response::Response {
        use axum::response::IntoResponse;

        match http::HeaderValue::from_str(&self.content_type) {
            Ok(content_type) => ([(http::header::CONTENT_TYPE, content_type)], self.audio).into_response(),
            Err(_) => http::StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        }
    }
}

/// Synthesized audio together with its mouth cues
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LipSyncSpeechResponse {
    /// Base64-encoded audio bytes
    pub audio_content: String,
    pub content_type: String,
    pub lipsync: LipSync,
}

impl LipSyncSpeechResponse {
    pub fn new(speech: &SpeechResponse, lipsync: LipSync) -> Self {
        Self {
            audio_content: STANDARD.encode(&speech.audio),
            content_type: speech.content_type.clone(),
            lipsync,
        }
    }
}
