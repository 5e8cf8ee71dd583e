use std::time::Duration;

use lipsync_config::{TtsProviderConfig, TtsProviderType};
use reqwest::Client;
use secrecy::SecretString;
use visemes::{AudioProfile, LipSyncGenerator};

use crate::{
    error::TtsError,
    provider::{
        TtsProvider, elevenlabs::ElevenLabsProvider, google_tts::GoogleTtsProvider, openai_tts::OpenAiTtsProvider,
    },
    request::RequestContext,
    types::{LipSyncSpeechResponse, SpeechRequest, SpeechResponse},
};

/// A configured provider and its audio length assumption
struct ProviderEntry {
    provider: Box<dyn TtsProvider>,
    /// Bitrate override from configuration
    audio: Option<AudioProfile>,
}

impl ProviderEntry {
    fn audio_profile(&self, response_format: Option<&str>) -> AudioProfile {
        self.audio.unwrap_or_else(|| self.provider.audio_profile(response_format))
    }
}

/// Lower-cased, trimmed `response_format`; blank values count as unset
fn normalize_format(response_format: Option<String>) -> Option<String> {
    response_format
        .map(|format| format.trim().to_ascii_lowercase())
        .filter(|format| !format.is_empty())
}

/// TTS server that routes requests to the appropriate provider
pub struct Server {
    providers: Vec<ProviderEntry>,
    generator: LipSyncGenerator,
}

impl Server {
    /// Find the provider for `model` and return it with the bare model name
    ///
    /// Model format: "provider/model" (e.g. "openai/tts-1" or
    /// "elevenlabs/`eleven_multilingual_v2`"). Without a provider prefix the
    /// first configured provider is used and the model is passed through.
    fn route<'a>(&self, model: &'a str) -> crate::error::Result<(&ProviderEntry, &'a str)> {
        match model.split_once('/') {
            Some((provider_name, model_name)) if !provider_name.is_empty() => self
                .providers
                .iter()
                .find(|entry| entry.provider.name() == provider_name)
                .map(|entry| (entry, model_name))
                .ok_or_else(|| TtsError::ProviderNotFound(provider_name.to_string())),
            _ => self
                .providers
                .first()
                .map(|entry| (entry, model))
                .ok_or_else(|| TtsError::ProviderNotFound("No TTS providers configured".to_string())),
        }
    }

    async fn dispatch(
        &self,
        mut request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<(SpeechResponse, AudioProfile)> {
        if request.input.trim().is_empty() {
            return Err(TtsError::InvalidRequest("input must not be empty".to_string()));
        }

        let (entry, model_name) = self.route(&request.model)?;

        request.response_format = normalize_format(request.response_format.take());
        let audio = entry.audio_profile(request.response_format.as_deref());

        request.model = model_name.to_string();

        let response = entry.provider.synthesize(request, context).await?;

        Ok((response, audio))
    }

    /// Synthesize text to speech using the appropriate provider
    pub async fn synthesize(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<SpeechResponse> {
        let (response, _) = self.dispatch(request, context).await?;
        Ok(response)
    }

    /// Synthesize text to speech and derive mouth cues for the result
    ///
    /// The cue track is stretched to the audio length estimated from the
    /// returned byte count and the provider's bitrate.
    pub async fn synthesize_with_lipsync(
        &self,
        request: SpeechRequest,
        context: &RequestContext,
    ) -> crate::error::Result<LipSyncSpeechResponse> {
        let text = request.input.clone();
        let (speech, audio) = self.dispatch(request, context).await?;

        let byte_len = i64::try_from(speech.audio.len()).unwrap_or(i64::MAX);
        let lipsync = self.generator.generate(&text, byte_len, &audio);

        tracing::debug!(
            cues = lipsync.mouth_cues.len(),
            duration_secs = lipsync.duration(),
            bitrate_bps = audio.bitrate_bps(),
            "Lip-sync track generated"
        );

        Ok(LipSyncSpeechResponse::new(&speech, lipsync))
    }
}

/// Builder for constructing the TTS server from configuration
pub struct TtsServerBuilder<'a> {
    config: &'a lipsync_config::Config,
}

impl<'a> TtsServerBuilder<'a> {
    pub const fn new(config: &'a lipsync_config::Config) -> Self {
        Self { config }
    }

    pub fn build(self) -> crate::error::Result<Server> {
        let generator = LipSyncGenerator::new(self.config.lipsync.timing_profile())
            .map_err(|e| TtsError::ConfigError(format!("invalid lipsync configuration: {e}")))?;

        let client = http_client()?;
        let mut providers = Vec::new();

        for (name, provider_config) in &self.config.tts.providers {
            tracing::debug!("Initializing TTS provider: {name}");

            let api_key = resolve_api_key(name, provider_config)?;
            let base_url = provider_config.base_url.clone();

            let provider: Box<dyn TtsProvider> = match provider_config.provider_type {
                TtsProviderType::OpenaiTts => {
                    Box::new(OpenAiTtsProvider::new(name.clone(), client.clone(), api_key, base_url))
                }
                TtsProviderType::Elevenlabs => {
                    Box::new(ElevenLabsProvider::new(name.clone(), client.clone(), api_key, base_url))
                }
                TtsProviderType::GoogleTts => {
                    Box::new(GoogleTtsProvider::new(name.clone(), client.clone(), api_key, base_url))
                }
            };

            let audio = provider_config
                .bitrate_kbps
                .map(|kbps| AudioProfile::from_bitrate(kbps.saturating_mul(1000)))
                .transpose()
                .map_err(|e| TtsError::ConfigError(format!("TTS provider '{name}': {e}")))?;

            providers.push(ProviderEntry { provider, audio });
        }

        if providers.is_empty() {
            tracing::debug!("No TTS providers configured");
        } else {
            tracing::debug!("TTS server initialized with {} provider(s)", providers.len());
        }

        Ok(Server { providers, generator })
    }
}

/// HTTP client shared by all providers so connections are reused
fn http_client() -> crate::error::Result<Client> {
    let mut headers = http::HeaderMap::new();
    headers.insert(http::header::CONNECTION, http::HeaderValue::from_static("keep-alive"));

    Client::builder()
        .timeout(Duration::from_secs(120))
        .pool_idle_timeout(Some(Duration::from_secs(5)))
        .tcp_nodelay(true)
        .tcp_keepalive(Some(Duration::from_secs(60)))
        .default_headers(headers)
        .build()
        .map_err(|e| TtsError::ConfigError(format!("failed to build HTTP client: {e}")))
}

/// Configured API key, or an empty one when callers are expected to bring
/// their own through the BYOK header
fn resolve_api_key(name: &str, config: &TtsProviderConfig) -> crate::error::Result<SecretString> {
    match (&config.api_key, config.provider_type) {
        (Some(key), _) => Ok(key.clone()),
        (None, TtsProviderType::GoogleTts) => Err(TtsError::ConfigError(format!(
            "API key required for TTS provider '{name}'"
        ))),
        (None, _) => Ok(SecretString::from(String::new())),
    }
}
