// First-syllable index over the lexicon entries

use hashbrown::HashMap;

use noitu_core::entry::LexiconEntry;

/// Maps a normalized first syllable to the positions of the entries that
/// start with it.
///
/// The index is a derived view of an entry slice and is only ever built in
/// one pass from that slice. It stores positions rather than words so the
/// lexicon keeps a single copy of every entry.
#[derive(Debug, Clone, Default)]
pub struct SyllableIndex {
    by_first: HashMap<String, Vec<usize>>,
}

impl SyllableIndex {
    /// Build the index for `entries`.
    pub fn build(entries: &[LexiconEntry]) -> Self {
        let mut by_first: HashMap<String, Vec<usize>> = HashMap::new();
        for (pos, entry) in entries.iter().enumerate() {
            by_first
                .entry_ref(entry.first_syllable.as_str())
                .or_default()
                .push(pos);
        }
        Self { by_first }
    }

    /// Positions of the entries whose first syllable is `syllable`.
    ///
    /// Returns an empty slice for syllables no word starts with.
    pub fn positions(&self, syllable: &str) -> &[usize] {
        self.by_first.get(syllable).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct first syllables.
    pub fn syllable_count(&self) -> usize {
        self.by_first.len()
    }

    /// Iterate over the distinct first syllables (in no particular order).
    pub fn syllables(&self) -> impl Iterator<Item = &str> {
        self.by_first.keys().map(String::as_str)
    }
}
