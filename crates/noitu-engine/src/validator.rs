// Turn validation: rule checks for a submitted word

use noitu_core::outcome::RejectReason;
use noitu_core::syllable::syllable_count;

use crate::history::ChainHistory;
use crate::lexicon::Lexicon;

/// Rule parameters for accepting a user's word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainRules {
    /// Minimum number of syllables in a user's word. Default: 2.
    pub min_syllables: usize,
    /// Maximum number of syllables in a user's word. Default: 4.
    pub max_syllables: usize,
}

impl Default for ChainRules {
    fn default() -> Self {
        Self {
            min_syllables: 2,
            max_syllables: 4,
        }
    }
}

impl ChainRules {
    /// Whether `count` syllables is an acceptable length.
    pub fn accepts_length(&self, count: usize) -> bool {
        (self.min_syllables..=self.max_syllables).contains(&count)
    }
}

/// Checks a user's word against the lexicon and the chain history.
///
/// Checks run in a fixed order and the first failure wins:
/// 1. syllable count within [`ChainRules`] bounds (`InvalidLength`)
/// 2. lexicon membership (`DegradedLexicon` when nothing is loaded,
///    `UnknownWord` otherwise)
/// 3. not already played (`AlreadyUsed`)
///
/// The order is observable: the rejection message shown to the player depends
/// on it.
pub struct TurnValidator<'a> {
    lexicon: &'a Lexicon,
    rules: ChainRules,
}

impl<'a> TurnValidator<'a> {
    pub fn new(lexicon: &'a Lexicon, rules: ChainRules) -> Self {
        Self { lexicon, rules }
    }

    /// Validate a normalized `word` against `history`.
    pub fn validate(&self, word: &str, history: &ChainHistory) -> Result<(), RejectReason> {
        if !self.rules.accepts_length(syllable_count(word)) {
            return Err(RejectReason::InvalidLength);
        }
        if self.lexicon.is_empty() {
            return Err(RejectReason::DegradedLexicon);
        }
        if !self.lexicon.contains(word) {
            return Err(RejectReason::UnknownWord);
        }
        if history.contains(word) {
            return Err(RejectReason::AlreadyUsed);
        }
        Ok(())
    }
}
