// Text normalization: the comparable form used by every other component

use unicode_normalization::UnicodeNormalization;

/// Normalize text into the canonical comparable form.
///
/// Applies, in order:
/// - Unicode canonical composition (NFC)
/// - lowercase mapping
/// - leading/trailing whitespace trim
///
/// Lowercasing can produce decomposed sequences for a handful of characters
/// (e.g. U+0130 becomes `i` + U+0307), so the composed form is taken again
/// after lowercasing. This keeps the function idempotent.
///
/// Inner whitespace is left untouched: `"công  nghệ"` keeps both spaces and
/// does not compare equal to `"công nghệ"`.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }
    let composed: String = text.nfc().collect();
    let lowered = composed.to_lowercase();
    let recomposed: String = lowered.nfc().collect();
    recomposed.trim().to_string()
}

/// Check whether `text` is already in normalized form.
pub fn is_normalized(text: &str) -> bool {
    normalize(text) == text
}
