#![allow(clippy::must_use_candidate)]

pub mod cors;
mod env;
pub mod health;
pub mod lipsync;
mod loader;
pub mod server;
pub mod telemetry;
pub mod tts;

use serde::Deserialize;

pub use cors::*;
pub use health::*;
pub use lipsync::*;
pub use server::*;
pub use telemetry::*;
pub use tts::*;

/// Top-level gateway configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Speech synthesis providers
    #[serde(default)]
    pub tts: TtsConfig,
    /// Mouth-cue timing constants
    #[serde(default)]
    pub lipsync: LipSyncConfig,
    /// Log output configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
