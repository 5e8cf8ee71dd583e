use serde::Deserialize;
use visemes::TimingProfile;

/// Mouth-cue timing constants
///
/// Every field defaults to the value the avatar animation was tuned with.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LipSyncConfig {
    #[serde(default = "default_words_per_minute")]
    pub words_per_minute: f64,
    #[serde(default = "default_long_word_threshold")]
    pub long_word_threshold: usize,
    #[serde(default = "default_long_word_factor")]
    pub long_word_factor: f64,
    #[serde(default = "default_short_word_threshold")]
    pub short_word_threshold: usize,
    #[serde(default = "default_short_word_factor")]
    pub short_word_factor: f64,
    /// Pause between words in milliseconds
    #[serde(default = "default_word_pause_ms")]
    pub word_pause_ms: u64,
    /// Pause after the last word in milliseconds
    #[serde(default = "default_final_pause_ms")]
    pub final_pause_ms: u64,
}

impl Default for LipSyncConfig {
    fn default() -> Self {
        Self {
            words_per_minute: default_words_per_minute(),
            long_word_threshold: default_long_word_threshold(),
            long_word_factor: default_long_word_factor(),
            short_word_threshold: default_short_word_threshold(),
            short_word_factor: default_short_word_factor(),
            word_pause_ms: default_word_pause_ms(),
            final_pause_ms: default_final_pause_ms(),
        }
    }
}

impl LipSyncConfig {
    #[allow(clippy::cast_precision_loss)]
    pub fn timing_profile(&self) -> TimingProfile {
        TimingProfile {
            words_per_minute: self.words_per_minute,
            long_word_threshold: self.long_word_threshold,
            long_word_factor: self.long_word_factor,
            short_word_threshold: self.short_word_threshold,
            short_word_factor: self.short_word_factor,
            word_pause: self.word_pause_ms as f64 / 1000.0,
            final_pause: self.final_pause_ms as f64 / 1000.0,
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_words_per_minute() -> f64 {
    visemes::DEFAULT_WORDS_PER_MINUTE
}

#[allow(clippy::missing_const_for_fn)]
fn default_long_word_threshold() -> usize {
    visemes::DEFAULT_LONG_WORD_THRESHOLD
}

#[allow(clippy::missing_const_for_fn)]
fn default_long_word_factor() -> f64 {
    visemes::DEFAULT_LONG_WORD_FACTOR
}

#[allow(clippy::missing_const_for_fn)]
fn default_short_word_threshold() -> usize {
    visemes::DEFAULT_SHORT_WORD_THRESHOLD
}

#[allow(clippy::missing_const_for_fn)]
fn default_short_word_factor() -> f64 {
    visemes::DEFAULT_SHORT_WORD_FACTOR
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn secs_to_millis(secs: f64) -> u64 {
    (secs * 1000.0).round() as u64
}

fn default_word_pause_ms() -> u64 {
    secs_to_millis(visemes::DEFAULT_WORD_PAUSE)
}

fn default_final_pause_ms() -> u64 {
    secs_to_millis(visemes::DEFAULT_FINAL_PAUSE)
}
