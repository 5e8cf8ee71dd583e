use crate::{
    classifier::classify,
    cue::{MouthCue, Viseme},
    normalize::normalize,
    timing::TimingProfile,
};

/// Build the synthetic cue timeline for `text`, starting at zero
///
/// Each word gets its estimated duration, split across the graphemes the
/// classifier consumes in proportion to their character count. Words are
/// separated by a neutral pause and the last word is followed by a neutral
/// tail. Zero-length pauses are omitted so every cue has a positive length.
pub fn sequence(text: &str, profile: &TimingProfile) -> Vec<MouthCue> {
    let normalized = normalize(text);
    let words: Vec<&str> = normalized.split(' ').filter(|word| !word.is_empty()).collect();

    let mut cues = Vec::with_capacity(normalized.len() + words.len());
    let mut time = 0.0;

    for (index, word) in words.iter().enumerate() {
        let word_duration = profile.word_duration(word);
        #[allow(clippy::cast_precision_loss)]
        let per_char = word_duration / word.len() as f64;

        let mut cursor = 0;
        while cursor < word.len() {
            let (value, consumed) = classify(word, cursor);
            #[allow(clippy::cast_precision_loss)]
            let end = time + per_char * consumed as f64;

            cues.push(MouthCue::new(time, end, value));
            time = end;
            cursor += consumed;
        }

        let pause = if index + 1 == words.len() {
            profile.final_pause
        } else {
            profile.word_pause
        };

        if pause > 0.0 {
            cues.push(MouthCue::new(time, time + pause, Viseme::X));
            time += pause;
        }
    }

    cues
}
