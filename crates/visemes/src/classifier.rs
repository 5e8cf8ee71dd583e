//! Grapheme to mouth-shape lookup
//!
//! Matching is greedy: a trigraph wins over a digraph, a digraph over a
//! single character. Anything not in the tables is neutral.

use crate::cue::Viseme;

const TRIGRAPHS: &[(&[u8; 3], Viseme)] = &[
    (b"tch", Viseme::G),
    (b"sch", Viseme::G),
    (b"thr", Viseme::H),
    (b"igh", Viseme::C),
];

const DIGRAPHS: &[(&[u8; 2], Viseme)] = &[
    (b"ah", Viseme::A),
    (b"aa", Viseme::A),
    (b"ar", Viseme::A),
    (b"ee", Viseme::C),
    (b"oh", Viseme::D),
    (b"oo", Viseme::D),
    (b"ow", Viseme::D),
    (b"wh", Viseme::D),
    (b"eh", Viseme::E),
    (b"er", Viseme::E),
    (b"uh", Viseme::F),
    (b"uw", Viseme::F),
    (b"ph", Viseme::F),
    (b"sh", Viseme::G),
    (b"ch", Viseme::G),
    (b"ng", Viseme::G),
    (b"ck", Viseme::G),
    (b"th", Viseme::H),
    (b"dh", Viseme::H),
];

const fn single(byte: u8) -> Option<Viseme> {
    match byte {
        b'a' => Some(Viseme::A),
        b'p' | b'b' | b'm' => Some(Viseme::B),
        b'i' | b'y' => Some(Viseme::C),
        b'o' | b'w' => Some(Viseme::D),
        b'e' => Some(Viseme::E),
        b'f' | b'v' | b'u' => Some(Viseme::F),
        b't' | b'd' | b'n' | b'k' | b'g' | b's' | b'z' | b'j' | b'c' | b'q' | b'x' => Some(Viseme::G),
        b'l' | b'r' => Some(Viseme::H),
        b'h' | b' ' | b'.' | b',' | b'!' | b'?' | b';' | b':' | b'\'' | b'"' | b'-' => Some(Viseme::X),
        _ => None,
    }
}

/// Classify the grapheme starting at byte offset `cursor` of `word`
///
/// Returns the mouth shape together with the number of bytes consumed
/// (1 to 3). Expects normalized, lower-case ASCII input; any other byte is
/// classified as [`Viseme::X`] and consumes one byte, as does a cursor at or
/// past the end of the word.
pub fn classify(word: &str, cursor: usize) -> (Viseme, usize) {
    let rest = word.as_bytes().get(cursor..).unwrap_or_default();

    if let Some(head) = rest.get(..3)
        && let Some((_, viseme)) = TRIGRAPHS.iter().find(|(pattern, _)| pattern.as_slice() == head)
    {
        return (*viseme, 3);
    }

    if let Some(head) = rest.get(..2)
        && let Some((_, viseme)) = DIGRAPHS.iter().find(|(pattern, _)| pattern.as_slice() == head)
    {
        return (*viseme, 2);
    }

    let viseme = rest.first().and_then(|&byte| single(byte)).unwrap_or(Viseme::X);

    (viseme, 1)
}
