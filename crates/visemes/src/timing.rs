use crate::error::InvalidProfile;

/// Assumed speaking rate in words per minute
pub const DEFAULT_WORDS_PER_MINUTE: f64 = 160.0;
/// Words longer than this many characters are stretched
pub const DEFAULT_LONG_WORD_THRESHOLD: usize = 6;
pub const DEFAULT_LONG_WORD_FACTOR: f64 = 1.2;
/// Words shorter than this many characters are compressed
pub const DEFAULT_SHORT_WORD_THRESHOLD: usize = 3;
pub const DEFAULT_SHORT_WORD_FACTOR: f64 = 0.8;
/// Neutral gap between two words, in seconds
pub const DEFAULT_WORD_PAUSE: f64 = 0.05;
/// Neutral tail after the last word, in seconds
pub const DEFAULT_FINAL_PAUSE: f64 = 0.1;

/// Tuning constants for the synthetic timeline
///
/// These are heuristics rather than measurements. The defaults reproduce the
/// timings the avatar animation was tuned against.
#[derive(Debug, Clone, PartialEq)]
pub struct TimingProfile {
    pub words_per_minute: f64,
    pub long_word_threshold: usize,
    pub long_word_factor: f64,
    pub short_word_threshold: usize,
    pub short_word_factor: f64,
    pub word_pause: f64,
    pub final_pause: f64,
}

impl Default for TimingProfile {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
            long_word_threshold: DEFAULT_LONG_WORD_THRESHOLD,
            long_word_factor: DEFAULT_LONG_WORD_FACTOR,
            short_word_threshold: DEFAULT_SHORT_WORD_THRESHOLD,
            short_word_factor: DEFAULT_SHORT_WORD_FACTOR,
            word_pause: DEFAULT_WORD_PAUSE,
            final_pause: DEFAULT_FINAL_PAUSE,
        }
    }
}

impl TimingProfile {
    /// Seconds allotted to an average word
    pub fn base_word_duration(&self) -> f64 {
        60.0 / self.words_per_minute
    }

    /// Length-based multiplier applied to the base word duration
    pub const fn complexity_factor(&self, word_len: usize) -> f64 {
        if word_len > self.long_word_threshold {
            self.long_word_factor
        } else if word_len < self.short_word_threshold {
            self.short_word_factor
        } else {
            1.0
        }
    }

    /// Seconds allotted to `word`
    pub fn word_duration(&self, word: &str) -> f64 {
        self.base_word_duration() * self.complexity_factor(word.len())
    }

    /// Check that every constant yields positive, finite durations
    ///
    /// # Errors
    ///
    /// Returns the first offending field
    pub fn validate(&self) -> Result<(), InvalidProfile> {
        let positive = [
            ("words_per_minute", self.words_per_minute),
            ("long_word_factor", self.long_word_factor),
            ("short_word_factor", self.short_word_factor),
        ];

        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(InvalidProfile::NotPositive { field, value });
            }
        }

        let non_negative = [("word_pause", self.word_pause), ("final_pause", self.final_pause)];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(InvalidProfile::Negative { field, value });
            }
        }

        if self.short_word_threshold > self.long_word_threshold {
            return Err(InvalidProfile::Thresholds {
                short: self.short_word_threshold,
                long: self.long_word_threshold,
            });
        }

        Ok(())
    }
}
