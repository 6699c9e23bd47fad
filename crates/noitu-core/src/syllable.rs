// Syllable splitting and placeholder detection for Vietnamese words

/// Three-dot ellipsis as written in truncated dataset rows.
pub const ASCII_ELLIPSIS: &str = "...";

/// HORIZONTAL ELLIPSIS (U+2026).
pub const UNICODE_ELLIPSIS: char = '\u{2026}';

/// Iterate over the syllables of a word.
///
/// A syllable is a whitespace-delimited token; runs of whitespace count as a
/// single separator.
pub fn syllables(word: &str) -> impl Iterator<Item = &str> {
    word.split_whitespace()
}

/// Number of syllables in `word`.
pub fn syllable_count(word: &str) -> usize {
    syllables(word).count()
}

/// First syllable of `word`, or `None` if it has no syllables.
pub fn first_syllable(word: &str) -> Option<&str> {
    syllables(word).next()
}

/// Last syllable of `word`, or `None` if it has no syllables.
///
/// For multi-syllable words this is the final token, regardless of how many
/// syllables precede it: `"xe đạp điện"` yields `"điện"`.
pub fn last_syllable(word: &str) -> Option<&str> {
    word.split_whitespace().next_back()
}

/// Check whether `word` carries an ellipsis marker.
///
/// Dataset rows containing `"..."` or `"…"` are truncated placeholders and
/// must never be played.
pub fn has_ellipsis(word: &str) -> bool {
    word.contains(ASCII_ELLIPSIS) || word.contains(UNICODE_ELLIPSIS)
}
