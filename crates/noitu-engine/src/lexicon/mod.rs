// Lexicon: the loaded word list plus its lookup structures

mod index;
mod loader;

pub use index::SyllableIndex;
pub use loader::{DatasetSource, RawEntry};

use hashbrown::HashSet;

use noitu_core::entry::LexiconEntry;
use noitu_core::normalize::normalize;
use noitu_core::syllable::syllable_count;

/// A normalized dataset word, by the part it can play in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconWord {
    /// Two syllables: a legal move and a possible engine reply.
    Chain(LexiconEntry),
    /// Three or more syllables: accepted from the player, never used as a
    /// reply.
    MoveOnly(String),
}

impl LexiconWord {
    /// Classify a plain word.
    ///
    /// Returns `None` for blank and single-syllable words, and for
    /// two-syllable words that do not form a valid entry.
    pub fn from_word(raw: &str) -> Option<Self> {
        let word = normalize(raw);
        match syllable_count(&word) {
            0 | 1 => None,
            2 => LexiconEntry::from_word(&word).map(Self::Chain),
            _ => Some(Self::MoveOnly(word)),
        }
    }
}

/// The full set of playable words.
///
/// Built in one step: duplicates are collapsed to the first occurrence, then
/// the membership set and the first-syllable index are derived from the
/// surviving words. Only two-syllable entries are indexed, so every reply
/// candidate is a two-syllable word; longer words are only known moves. A
/// `Lexicon` is never modified after construction; reloading builds a new one.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: Vec<LexiconEntry>,
    known_words: HashSet<String>,
    index: SyllableIndex,
}

impl Lexicon {
    /// An empty lexicon. Every lookup misses.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a lexicon from classified words.
    pub fn from_lexicon_words<I>(words: I) -> Self
    where
        I: IntoIterator<Item = LexiconWord>,
    {
        let mut known_words = HashSet::new();
        let mut kept = Vec::new();
        for word in words {
            match word {
                LexiconWord::Chain(entry) => {
                    if known_words.insert(entry.word.clone()) {
                        kept.push(entry);
                    }
                }
                LexiconWord::MoveOnly(word) => {
                    known_words.insert(word);
                }
            }
        }
        let index = SyllableIndex::build(&kept);
        Self {
            entries: kept,
            known_words,
            index,
        }
    }

    /// Build a lexicon from already-normalized entries.
    ///
    /// Entries that are not well formed are dropped.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = LexiconEntry>,
    {
        Self::from_lexicon_words(
            entries
                .into_iter()
                .filter(LexiconEntry::is_well_formed)
                .map(LexiconWord::Chain),
        )
    }

    /// Build a lexicon from plain words, splitting each on whitespace.
    ///
    /// Blank and single-syllable words are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_lexicon_words(
            words
                .into_iter()
                .filter_map(|w| LexiconWord::from_word(w.as_ref())),
        )
    }

    /// Whether the normalized `word` is in the lexicon.
    pub fn contains(&self, word: &str) -> bool {
        self.known_words.contains(word)
    }

    /// Two-syllable entries whose first syllable is `syllable`.
    pub fn starting_with<'a>(
        &'a self,
        syllable: &str,
    ) -> impl Iterator<Item = &'a LexiconEntry> + 'a {
        self.index
            .positions(syllable)
            .iter()
            .map(move |&pos| &self.entries[pos])
    }

    /// All two-syllable entries, in dataset order.
    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    /// The first-syllable index.
    pub fn index(&self) -> &SyllableIndex {
        &self.index
    }

    /// Number of distinct words, including move-only ones.
    pub fn len(&self) -> usize {
        self.known_words.len()
    }

    /// Whether no words are loaded (the degraded state).
    pub fn is_empty(&self) -> bool {
        self.known_words.is_empty()
    }
}
