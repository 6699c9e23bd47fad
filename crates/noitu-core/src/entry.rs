// Lexicon record type

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;
use crate::syllable::{first_syllable, last_syllable, syllable_count};

/// One two-syllable word of the lexicon together with its chaining syllables.
///
/// All three fields are in normalized form and
/// `word == first_syllable + " " + last_syllable`. Entries are built once when
/// a dataset is loaded and never mutated afterwards.
///
/// The serialized shape (`{"word", "first_syllable", "last_syllable"}`) is the
/// pre-split record format of the word-chain dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LexiconEntry {
    /// The whole word, e.g. `"công nghệ"`.
    pub word: String,
    /// Syllable a reply must end with to reach this word.
    pub first_syllable: String,
    /// Syllable the next word in the chain must start with.
    pub last_syllable: String,
}

impl LexiconEntry {
    /// Build an entry from a plain two-syllable word.
    ///
    /// Returns `None` unless the normalized word is exactly two syllables
    /// separated by a single space.
    pub fn from_word(raw: &str) -> Option<Self> {
        let word = normalize(raw);
        if syllable_count(&word) != 2 {
            return None;
        }
        let entry = Self {
            first_syllable: first_syllable(&word)?.to_string(),
            last_syllable: last_syllable(&word)?.to_string(),
            word,
        };
        entry.is_well_formed().then_some(entry)
    }

    /// Build an entry from pre-split parts, normalizing every field.
    ///
    /// Returns `None` if any field is empty after normalization, if either
    /// syllable has inner whitespace, or if `word` is not the two syllables
    /// joined by a space.
    pub fn from_parts(word: &str, first: &str, last: &str) -> Option<Self> {
        let entry = Self {
            word: normalize(word),
            first_syllable: normalize(first),
            last_syllable: normalize(last),
        };
        entry.is_well_formed().then_some(entry)
    }

    /// Whether the entry is two single syllables and `word` is exactly
    /// `first_syllable + " " + last_syllable`.
    pub fn is_well_formed(&self) -> bool {
        syllable_count(&self.first_syllable) == 1
            && syllable_count(&self.last_syllable) == 1
            && self
                .word
                .strip_prefix(self.first_syllable.as_str())
                .and_then(|rest| rest.strip_prefix(' '))
                == Some(self.last_syllable.as_str())
    }
}
