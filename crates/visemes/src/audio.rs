use crate::error::InvalidProfile;

/// 128 kbit/s, i.e. 16 000 bytes per second of audio
pub const DEFAULT_BITRATE_BPS: u32 = 128_000;

/// Bitrate of 24 kHz 16-bit mono PCM
pub const PCM_24KHZ_BITRATE_BPS: u32 = 24_000 * 16;

/// Byte-rate assumption used to turn an audio payload size into seconds
///
/// The generator never decodes audio; the duration is estimated as
/// `bytes * 8 / bitrate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioProfile {
    bitrate_bps: u32,
}

impl Default for AudioProfile {
    fn default() -> Self {
        Self {
            bitrate_bps: DEFAULT_BITRATE_BPS,
        }
    }
}

impl AudioProfile {
    /// # Errors
    ///
    /// Returns an error if the bitrate is zero
    pub const fn from_bitrate(bitrate_bps: u32) -> Result<Self, InvalidProfile> {
        if bitrate_bps == 0 {
            return Err(InvalidProfile::NotPositive {
                field: "bitrate",
                value: 0.0,
            });
        }

        Ok(Self { bitrate_bps })
    }

    /// Profile for a provider output format name such as `mp3` or `pcm`
    ///
    /// Uncompressed formats assume 24 kHz 16-bit mono; every other format
    /// falls back to the default compressed bitrate.
    pub fn for_format(format: Option<&str>) -> Self {
        let bitrate_bps = match format.map(str::to_ascii_lowercase).as_deref() {
            Some("pcm" | "wav" | "linear16") => PCM_24KHZ_BITRATE_BPS,
            _ => DEFAULT_BITRATE_BPS,
        };

        Self { bitrate_bps }
    }

    pub const fn bitrate_bps(&self) -> u32 {
        self.bitrate_bps
    }

    /// Estimated playback length in seconds of `byte_len` bytes of audio
    ///
    /// Non-positive lengths yield zero.
    #[allow(clippy::cast_precision_loss)]
    pub fn duration_secs(&self, byte_len: i64) -> f64 {
        if byte_len <= 0 {
            return 0.0;
        }

        byte_len as f64 * 8.0 / f64::from(self.bitrate_bps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_sixteen_thousand_bytes_per_second() {
        let profile = AudioProfile::default();

        assert!((profile.duration_secs(16_000) - 1.0).abs() < 1e-12);
        assert!((profile.duration_secs(8_000) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn non_positive_lengths_are_zero() {
        let profile = AudioProfile::default();

        assert!(profile.duration_secs(0).abs() < f64::EPSILON);
        assert!(profile.duration_secs(-42).abs() < f64::EPSILON);
    }

    #[test]
    fn format_defaults() {
        assert_eq!(AudioProfile::for_format(Some("mp3")).bitrate_bps(), DEFAULT_BITRATE_BPS);
        assert_eq!(AudioProfile::for_format(Some("PCM")).bitrate_bps(), PCM_24KHZ_BITRATE_BPS);
        assert_eq!(AudioProfile::for_format(None).bitrate_bps(), DEFAULT_BITRATE_BPS);
    }

    #[test]
    fn zero_bitrate_rejected() {
        assert!(AudioProfile::from_bitrate(0).is_err());
        assert_eq!(AudioProfile::from_bitrate(64_000).unwrap().bitrate_bps(), 64_000);
    }
}
