use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Lip-sync speech gateway
#[derive(Debug, Parser)]
#[command(name = "lipsync", about = "Text-to-speech proxy that returns avatar mouth cues with the audio")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lipsync.toml", env = "LIPSYNC_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LIPSYNC_LISTEN")]
    pub listen: Option<SocketAddr>,
}
