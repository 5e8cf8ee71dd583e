//! Lip-sync timing for synthesized speech
//!
//! Turns the text that was spoken, plus the size of the synthesized audio,
//! into a contiguous track of timed mouth shapes for an avatar renderer.
//! Timing is estimated from a speaking-rate heuristic and then stretched to
//! the estimated audio length; the audio itself is never inspected.

#![allow(clippy::must_use_candidate)]

mod audio;
mod classifier;
mod cue;
mod error;
mod normalize;
mod rescale;
mod sequencer;
mod timing;

pub use audio::{AudioProfile, DEFAULT_BITRATE_BPS, PCM_24KHZ_BITRATE_BPS};
pub use classifier::classify;
pub use cue::{LipSync, MouthCue, Viseme};
pub use error::InvalidProfile;
pub use normalize::normalize;
pub use rescale::{END_TOLERANCE, rescale};
pub use sequencer::sequence;
pub use timing::*;

/// Produces lip-sync tracks with a fixed timing profile
#[derive(Debug, Clone, Default)]
pub struct LipSyncGenerator {
    profile: TimingProfile,
}

impl LipSyncGenerator {
    /// # Errors
    ///
    /// Returns an error if the profile would produce non-positive durations
    pub fn new(profile: TimingProfile) -> Result<Self, InvalidProfile> {
        profile.validate()?;
        Ok(Self { profile })
    }

    pub const fn profile(&self) -> &TimingProfile {
        &self.profile
    }

    /// Generate the mouth cues for `text` spoken over `audio_byte_len` bytes
    ///
    /// Empty text gives an empty track. A non-positive byte length leaves the
    /// synthetic timings untouched.
    pub fn generate(&self, text: &str, audio_byte_len: i64, audio: &AudioProfile) -> LipSync {
        let mut mouth_cues = sequence(text, &self.profile);
        let synthetic = mouth_cues.last().map_or(0.0, |cue| cue.end);
        let target = audio.duration_secs(audio_byte_len);

        rescale(&mut mouth_cues, target);

        tracing::trace!(
            cues = mouth_cues.len(),
            synthetic_secs = synthetic,
            audio_secs = target,
            "generated lip-sync track"
        );

        LipSync { mouth_cues }
    }
}
