//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use lipsync_config::{
    Config, CorsConfig, HealthConfig, LipSyncConfig, ServerConfig, TelemetryConfig, TtsConfig, TtsProviderConfig,
    TtsProviderType,
};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                    cors: None,
                },
                tts: TtsConfig::default(),
                lipsync: LipSyncConfig::default(),
                telemetry: TelemetryConfig::default(),
            },
        }
    }

    fn with_provider(mut self, name: &str, provider_type: TtsProviderType, base_url: &str) -> Self {
        self.config.tts.providers.insert(
            name.to_owned(),
            TtsProviderConfig {
                provider_type,
                api_key: Some(SecretString::from("test-key")),
                base_url: Some(base_url.to_owned()),
                bitrate_kbps: None,
            },
        );
        self
    }

    /// Add an OpenAI TTS provider pointed at a mock backend
    pub fn with_openai_provider(self, name: &str, base_url: &str) -> Self {
        self.with_provider(name, TtsProviderType::OpenaiTts, base_url)
    }

    /// Add an ElevenLabs provider pointed at a mock backend
    pub fn with_elevenlabs_provider(self, name: &str, base_url: &str) -> Self {
        self.with_provider(name, TtsProviderType::Elevenlabs, base_url)
    }

    /// Add a Google TTS provider pointed at a mock backend
    pub fn with_google_provider(self, name: &str, base_url: &str) -> Self {
        self.with_provider(name, TtsProviderType::GoogleTts, base_url)
    }

    /// Override the bitrate assumption of an already added provider
    pub fn with_bitrate(mut self, name: &str, kbps: u32) -> Self {
        if let Some(provider) = self.config.tts.providers.get_mut(name) {
            provider.bitrate_kbps = Some(kbps);
        }
        self
    }

    /// Replace the lip-sync timing constants
    pub fn with_lipsync(mut self, lipsync: LipSyncConfig) -> Self {
        self.config.lipsync = lipsync;
        self
    }

    /// Set CORS configuration
    pub fn with_cors(mut self, config: CorsConfig) -> Self {
        self.config.server.cors = Some(config);
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
