use std::path::Path;

use secrecy::ExposeSecret;

use crate::{AllowList, Config, TtsProviderType};

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        Self::from_toml(&raw)
    }

    /// Parse and validate configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if expansion, parsing, or validation fails
    pub fn from_toml(raw: &str) -> anyhow::Result<Self> {
        let expanded =
            crate::env::expand_env(raw).map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self = toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if no provider is configured or any provider,
    /// timing, or CORS setting is invalid
    pub fn validate(&self) -> anyhow::Result<()> {
        self.validate_tts_config()?;
        self.validate_lipsync_config()?;
        self.validate_cors_config()?;
        Ok(())
    }

    fn validate_tts_config(&self) -> anyhow::Result<()> {
        if self.tts.providers.is_empty() {
            anyhow::bail!("at least one TTS provider must be configured");
        }

        for (name, provider) in &self.tts.providers {
            if name.contains('/') {
                anyhow::bail!("TTS provider name '{name}' must not contain '/'");
            }

            if provider.bitrate_kbps == Some(0) {
                anyhow::bail!("bitrate_kbps for TTS provider '{name}' must be greater than 0");
            }

            if provider.api_key.as_ref().is_some_and(|key| key.expose_secret().is_empty()) {
                anyhow::bail!("api_key for TTS provider '{name}' must not be empty");
            }

            if provider.provider_type == TtsProviderType::GoogleTts && provider.api_key.is_none() {
                anyhow::bail!("TTS provider '{name}' requires an api_key");
            }
        }

        Ok(())
    }

    fn validate_lipsync_config(&self) -> anyhow::Result<()> {
        self.lipsync
            .timing_profile()
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid lipsync configuration: {e}"))
    }

    fn validate_cors_config(&self) -> anyhow::Result<()> {
        let Some(ref cors) = self.server.cors else {
            return Ok(());
        };

        if let AllowList::Only(ref origins) = cors.origins {
            for origin in origins {
                http::HeaderValue::from_str(origin)
                    .map_err(|e| anyhow::anyhow!("invalid CORS origin '{origin}': {e}"))?;
            }
        }

        if let AllowList::Only(ref methods) = cors.methods {
            for method in methods {
                http::Method::from_bytes(method.as_bytes())
                    .map_err(|e| anyhow::anyhow!("invalid CORS method '{method}': {e}"))?;
            }
        }

        let any_wildcard = [&cors.origins, &cors.methods, &cors.headers]
            .into_iter()
            .any(|list| *list == AllowList::Any);

        if cors.credentials && any_wildcard {
            anyhow::bail!("CORS credentials require explicit origins, methods and headers");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use crate::{Config, LogFormat, TtsProviderType};

    const MINIMAL: &str = r#"
        [tts.providers.openai]
        type = "openai_tts"
        api_key = "sk-test"
    "#;

    #[test]
    fn minimal_config() {
        let config = Config::from_toml(MINIMAL).unwrap();

        assert_eq!(config.tts.providers.len(), 1);
        assert!(config.server.health.enabled);
        assert_eq!(config.server.health.path, "/health");
        assert_eq!(config.server.listen_address().port(), 3000);
        assert_eq!(config.telemetry.format, LogFormat::Text);
    }

    #[test]
    fn full_config() {
        let raw = r#"
            [server]
            listen_address = "127.0.0.1:8080"

            [server.health]
            path = "/healthz"

            [server.cors]
            origins = ["http://localhost:5173"]
            methods = ["POST", "OPTIONS"]
            headers = ["content-type", "x-provider-api-key"]
            credentials = true

            [tts.providers.google]
            type = "google_tts"
            api_key = "g-key"
            bitrate_kbps = 32

            [tts.providers.eleven]
            type = "elevenlabs"
            api_key = "xi-key"

            [lipsync]
            words_per_minute = 150.0
            final_pause_ms = 200

            [telemetry]
            filter = "debug"
            format = "json"
        "#;

        let config = Config::from_toml(raw).unwrap();

        assert_eq!(config.server.listen_address().to_string(), "127.0.0.1:8080");
        assert_eq!(config.server.health.path, "/healthz");
        assert_eq!(config.tts.providers["eleven"].provider_type, TtsProviderType::Elevenlabs);
        assert!((config.lipsync.timing_profile().final_pause - 0.2).abs() < 1e-12);
        assert_eq!(config.telemetry.filter.as_deref(), Some("debug"));
        assert_eq!(config.telemetry.format, LogFormat::Json);
    }

    #[test]
    fn requires_a_provider() {
        let err = Config::from_toml("").unwrap_err();
        assert!(err.to_string().contains("at least one TTS provider"));
    }

    #[test]
    fn rejects_zero_bitrate() {
        let raw = format!("{MINIMAL}\nbitrate_kbps = 0\n");
        let err = Config::from_toml(&raw).unwrap_err();
        assert!(err.to_string().contains("bitrate_kbps"));
    }

    #[test]
    fn google_requires_api_key() {
        let raw = r#"
            [tts.providers.google]
            type = "google_tts"
        "#;

        let err = Config::from_toml(raw).unwrap_err();
        assert!(err.to_string().contains("requires an api_key"));
    }

    #[test]
    fn rejects_invalid_timing() {
        let raw = format!("{MINIMAL}\n[lipsync]\nwords_per_minute = 0.0\n");
        let err = Config::from_toml(&raw).unwrap_err();
        assert!(err.to_string().contains("words_per_minute"));
    }

    #[test]
    fn rejects_credentials_with_wildcards() {
        let raw = format!("{MINIMAL}\n[server.cors]\ncredentials = true\n");
        let err = Config::from_toml(&raw).unwrap_err();
        assert!(err.to_string().contains("explicit origins"));
    }

    #[test]
    fn rejects_unknown_sections() {
        let raw = format!("{MINIMAL}\n[llm]\nenabled = true\n");
        assert!(Config::from_toml(&raw).is_err());
    }

    #[test]
    fn load_expands_environment() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[tts.providers.openai]\ntype = \"openai_tts\"\napi_key = \"{{{{ env.LIPSYNC_LOADER_KEY }}}}\""
        )
        .unwrap();

        temp_env::with_var("LIPSYNC_LOADER_KEY", Some("sk-from-env"), || {
            use secrecy::ExposeSecret;

            let config = Config::load(file.path()).unwrap();
            let key = config.tts.providers["openai"].api_key.as_ref().unwrap();
            assert_eq!(key.expose_secret(), "sk-from-env");
        });
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(std::path::Path::new("/nonexistent/lipsync.toml")).unwrap_err();
        assert!(err.to_string().contains("failed to read config file"));
    }
}
