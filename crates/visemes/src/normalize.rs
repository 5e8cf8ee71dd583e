/// Punctuation kept through normalization
const KEPT_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '-'];

const fn is_kept(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit()
}

/// Prepare text for classification
///
/// Lower-cases the input, replaces every character outside
/// `[a-z0-9\s.,!?;:'"-]` with a space, collapses whitespace runs into a
/// single space and trims both ends. The result is always ASCII.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        let c = if is_kept(c) || KEPT_PUNCTUATION.contains(&c) { c } else { ' ' };

        if c == ' ' {
            pending_space = !out.is_empty();
            continue;
        }

        if pending_space {
            out.push(' ');
            pending_space = false;
        }

        out.push(c);
    }

    out
}
