use serde::{Deserialize, Serialize};

/// Mouth shape driving the avatar's lips
///
/// Serialized as its single upper-case letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Viseme {
    /// Open mouth (low back vowel)
    A,
    /// Closed mouth (bilabial stop or nasal)
    B,
    /// Wide mouth (high front vowel)
    C,
    /// Round mouth (back rounded vowel)
    D,
    /// Small mouth (mid front vowel)
    E,
    /// Lower lip against teeth, or high back rounded vowel
    F,
    /// Teeth together (alveolar, sibilant, velar)
    G,
    /// Tongue visible (dental or liquid)
    H,
    /// Neutral mouth, used for silence and anything unrecognized
    X,
}

impl Viseme {
    /// Every symbol in the alphabet
    pub const ALL: [Self; 9] = [
        Self::A,
        Self::B,
        Self::C,
        Self::D,
        Self::E,
        Self::F,
        Self::G,
        Self::H,
        Self::X,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
            Self::G => "G",
            Self::H => "H",
            Self::X => "X",
        }
    }
}

impl std::fmt::Display for Viseme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A timed interval holding one mouth shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MouthCue {
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds, always after `start`
    pub end: f64,
    pub value: Viseme,
}

impl MouthCue {
    pub const fn new(start: f64, end: f64, value: Viseme) -> Self {
        Self { start, end, value }
    }

    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Lip-sync track returned next to synthesized audio
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LipSync {
    pub mouth_cues: Vec<MouthCue>,
}

impl LipSync {
    /// End time of the last cue, or zero for an empty track
    pub fn duration(&self) -> f64 {
        self.mouth_cues.last().map_or(0.0, |cue| cue.end)
    }

    pub fn is_empty(&self) -> bool {
        self.mouth_cues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viseme_serializes_as_letter() {
        let json = serde_json::to_string(&Viseme::H).unwrap();
        assert_eq!(json, "\"H\"");

        let parsed: Viseme = serde_json::from_str("\"X\"").unwrap();
        assert_eq!(parsed, Viseme::X);
    }

    #[test]
    fn lipsync_uses_camel_case_key() {
        let track = LipSync {
            mouth_cues: vec![MouthCue::new(0.0, 0.5, Viseme::A)],
        };

        let json = serde_json::to_value(&track).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "mouthCues": [{ "start": 0.0, "end": 0.5, "value": "A" }] })
        );
    }

    #[test]
    fn empty_track_has_zero_duration() {
        assert!(LipSync::default().is_empty());
        assert!(LipSync::default().duration().abs() < f64::EPSILON);
    }

    #[test]
    fn display_matches_serialized_form() {
        for viseme in Viseme::ALL {
            let json = serde_json::to_string(&viseme).unwrap();
            assert_eq!(json, format!("\"{viseme}\""));
        }
    }
}
