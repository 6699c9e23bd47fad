// Chain history: the words already played in one game

use hashbrown::HashSet;

use noitu_core::normalize::normalize;

/// Ordered list of the words played so far in one game, in normalized form.
///
/// The history belongs to the caller. The engine only reads it; after a
/// successful exchange the caller records both the user's word and the
/// engine's reply with [`ChainHistory::push`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChainHistory {
    words: Vec<String>,
    seen: HashSet<String>,
}

impl ChainHistory {
    /// An empty history for a new game.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a history from raw words, normalizing each.
    ///
    /// Blank words are dropped and repeated words are kept once.
    pub fn from_raw<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut history = Self::new();
        for word in words {
            history.push(word.as_ref());
        }
        history
    }

    /// Record a played word. Returns `false` if it was blank or already present.
    pub fn push(&mut self, word: &str) -> bool {
        let word = normalize(word);
        if word.is_empty() || !self.seen.insert(word.clone()) {
            return false;
        }
        self.words.push(word);
        true
    }

    /// Whether the normalized `word` has been played.
    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    /// The most recently played word.
    pub fn last(&self) -> Option<&str> {
        self.words.last().map(String::as_str)
    }

    /// Words in play order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
