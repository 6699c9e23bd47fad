// Dataset builder: plain word list -> pre-split word-chain records

use hashbrown::HashSet;

use noitu_core::entry::LexiconEntry;
use noitu_core::normalize::normalize;
use noitu_core::syllable::syllable_count;

/// Number of syllables every dataset word must have.
pub const DATASET_SYLLABLES: usize = 2;

/// Counters reported after building a dataset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetStats {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Lines empty after normalization.
    pub blank: usize,
    /// Words dropped for not having exactly two syllables.
    pub wrong_length: usize,
    /// Words dropped because they were seen earlier.
    pub duplicates: usize,
    /// Records written.
    pub kept: usize,
}

/// Accumulates two-syllable records from a word list, one word per line.
///
/// Lines are normalized, words with other than two syllables are dropped and
/// repeated words keep their first occurrence. Output order follows input
/// order.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    entries: Vec<LexiconEntry>,
    seen: HashSet<String>,
    stats: DatasetStats,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line of the word list. Returns `true` if a record was added.
    pub fn push_line(&mut self, line: &str) -> bool {
        self.stats.lines += 1;
        let word = normalize(line);
        if word.is_empty() {
            self.stats.blank += 1;
            return false;
        }
        if syllable_count(&word) != DATASET_SYLLABLES {
            self.stats.wrong_length += 1;
            return false;
        }
        if self.seen.contains(&word) {
            self.stats.duplicates += 1;
            return false;
        }
        let Some(entry) = LexiconEntry::from_word(&word) else {
            self.stats.blank += 1;
            return false;
        };
        self.seen.insert(word);
        self.entries.push(entry);
        self.stats.kept += 1;
        true
    }

    /// Feed every line of `text`.
    pub fn extend_lines(&mut self, text: &str) {
        for line in text.lines() {
            self.push_line(line);
        }
    }

    pub fn stats(&self) -> DatasetStats {
        self.stats
    }

    /// Finish, returning the records and the final counters.
    pub fn finish(self) -> (Vec<LexiconEntry>, DatasetStats) {
        (self.entries, self.stats)
    }
}

/// Build records from a whole word list.
pub fn build_from_wordlist(text: &str) -> (Vec<LexiconEntry>, DatasetStats) {
    let mut builder = DatasetBuilder::new();
    builder.extend_lines(text);
    builder.finish()
}

/// Serialize records as the pretty-printed JSON dataset.
///
/// Non-ASCII text is written verbatim, not escaped.
pub fn to_json(entries: &[LexiconEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Lexicon;

    const WORDLIST: &str = concat!(
        "a\nCông nghệ\n\ncông nghệ\n",
        "nghệ sĩ\nxe đạp điện\n  sĩ diện  \nNghệ Sĩ\n",
    );

    #[test]
    fn keeps_two_syllable_words_in_order() {
        let (entries, _) = build_from_wordlist(WORDLIST);
        let words: Vec<&str> = entries.iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["công nghệ", "nghệ sĩ", "sĩ diện"]);
        assert_eq!(entries[2].first_syllable, "sĩ");
        assert_eq!(entries[2].last_syllable, "diện");
    }

    #[test]
    fn counts_every_line() {
        let (_, stats) = build_from_wordlist(WORDLIST);
        assert_eq!(
            stats,
            DatasetStats {
                lines: 8,
                blank: 1,
                wrong_length: 2,
                duplicates: 2,
                kept: 3,
            }
        );
    }

    #[test]
    fn json_keeps_vietnamese_text() {
        let (entries, _) = build_from_wordlist("nghệ sĩ\n");
        let json = to_json(&entries).unwrap();
        assert!(json.contains("\"word\": \"nghệ sĩ\""));
        assert!(json.contains("\"first_syllable\": \"nghệ\""));
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn output_loads_as_lexicon() {
        let (entries, _) = build_from_wordlist(WORDLIST);
        let lex = Lexicon::from_json_str(&to_json(&entries).unwrap()).unwrap();
        assert_eq!(lex.len(), 3);
        assert!(lex.contains("sĩ diện"));
    }

    #[test]
    fn push_line_reports_additions() {
        let mut b = DatasetBuilder::new();
        assert!(b.push_line("mèo mun"));
        assert!(!b.push_line("mèo mun"));
        assert!(!b.push_line("mèo"));
        assert_eq!(b.stats().kept, 1);
    }
}
