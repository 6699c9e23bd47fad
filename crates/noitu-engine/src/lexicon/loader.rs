// Dataset loading: JSON word lists in either plain or pre-split shape

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{debug, warn};

use noitu_core::entry::LexiconEntry;

use super::{Lexicon, LexiconWord};
use crate::error::LexiconError;

/// One element of a word-chain dataset.
///
/// A dataset is a JSON array whose elements are either plain words
/// (`"công nghệ"`) or pre-split records
/// (`{"word": "công nghệ", "first_syllable": "công", "last_syllable": "nghệ"}`).
/// Each element is parsed on its own, so both shapes may appear in one file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RawEntry {
    Plain(String),
    Split {
        word: String,
        first_syllable: String,
        last_syllable: String,
    },
}

impl RawEntry {
    /// Normalize and classify the row.
    ///
    /// Returns `None` for blank or single-syllable words and for records
    /// whose `word` is not `first_syllable + " " + last_syllable`.
    pub fn into_word(self) -> Option<LexiconWord> {
        match self {
            RawEntry::Plain(word) => LexiconWord::from_word(&word),
            RawEntry::Split {
                word,
                first_syllable,
                last_syllable,
            } => LexiconEntry::from_parts(&word, &first_syllable, &last_syllable)
                .map(LexiconWord::Chain),
        }
    }
}

/// Where a dataset comes from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// A JSON file on disk.
    File(PathBuf),
    /// JSON text already in memory.
    Json(String),
    /// Parsed rows, e.g. produced by the dataset builder.
    Entries(Vec<RawEntry>),
}

impl Lexicon {
    /// Load a lexicon, degrading to an empty one on failure.
    ///
    /// A missing or malformed dataset is logged and yields an empty lexicon;
    /// callers detect the degraded state with [`Lexicon::is_empty`].
    pub fn load(source: DatasetSource) -> Self {
        match Self::try_load(source) {
            Ok(lexicon) => lexicon,
            Err(e) => {
                warn!(error = %e, "word-chain dataset unavailable, using an empty lexicon");
                Lexicon::empty()
            }
        }
    }

    /// Load a lexicon, reporting why the dataset could not be used.
    pub fn try_load(source: DatasetSource) -> Result<Self, LexiconError> {
        let rows = match source {
            DatasetSource::File(path) => {
                let text = std::fs::read_to_string(&path)
                    .map_err(|source| LexiconError::Io { path, source })?;
                parse_rows(&text)?
            }
            DatasetSource::Json(text) => parse_rows(&text)?,
            DatasetSource::Entries(rows) => rows,
        };
        Ok(Self::from_rows(rows))
    }

    /// Parse JSON dataset text into a lexicon.
    pub fn from_json_str(text: &str) -> Result<Self, LexiconError> {
        Ok(Self::from_rows(parse_rows(text)?))
    }

    fn from_rows(rows: Vec<RawEntry>) -> Self {
        let total = rows.len();
        let words: Vec<LexiconWord> = rows.into_iter().filter_map(RawEntry::into_word).collect();
        let skipped = total - words.len();
        if skipped > 0 {
            debug!(skipped, "skipped unusable dataset rows");
        }
        let lexicon = Self::from_lexicon_words(words);
        debug!(
            words = lexicon.len(),
            chainable = lexicon.entries().len(),
            syllables = lexicon.index().syllable_count(),
            "lexicon loaded"
        );
        lexicon
    }
}

fn parse_rows(text: &str) -> Result<Vec<RawEntry>, LexiconError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_strings() {
        let lex = Lexicon::from_json_str(r#"["Công Nghệ", "nghệ sĩ"]"#).unwrap();
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("công nghệ"));
        assert_eq!(lex.starting_with("nghệ").count(), 1);
    }

    #[test]
    fn split_records() {
        let json = r#"[
            {"word": "Công nghệ", "first_syllable": "Công", "last_syllable": "nghệ"},
            {"word": "nghệ sĩ", "first_syllable": "nghệ", "last_syllable": "sĩ"}
        ]"#;
        let lex = Lexicon::from_json_str(json).unwrap();
        assert_eq!(lex.len(), 2);
        assert_eq!(lex.starting_with("công").count(), 1);
    }

    #[test]
    fn mixed_shapes_in_one_file() {
        let json = r#"[
            "công nghệ",
            {"word": "nghệ sĩ", "first_syllable": "nghệ", "last_syllable": "sĩ"}
        ]"#;
        let lex = Lexicon::from_json_str(json).unwrap();
        assert_eq!(lex.len(), 2);
    }

    #[test]
    fn decomposed_dataset_matches_composed_lookup() {
        let json = "[\"ngh\u{0065}\u{0302}\u{0323} s\u{0069}\u{0303}\"]";
        let lex = Lexicon::from_json_str(json).unwrap();
        assert!(lex.contains("nghệ sĩ"));
        assert_eq!(lex.starting_with("nghệ").count(), 1);
    }

    #[test]
    fn single_syllable_rows_are_skipped() {
        let lex = Lexicon::from_json_str(r#"["công nghệ", "nghệ"]"#).unwrap();
        assert_eq!(lex.len(), 1);
        assert!(!lex.contains("nghệ"));
    }

    #[test]
    fn mismatched_records_are_skipped() {
        let json = r#"[
            "công nghệ",
            {"word": "mèo", "first_syllable": "nghệ", "last_syllable": "sĩ"},
            {"word": "nghệ sĩ nhân", "first_syllable": "nghệ", "last_syllable": "nhân"}
        ]"#;
        let lex = Lexicon::from_json_str(json).unwrap();
        assert_eq!(lex.len(), 1);
        assert!(!lex.contains("mèo"));
        assert_eq!(lex.starting_with("nghệ").count(), 0);
    }

    #[test]
    fn long_plain_rows_are_move_only() {
        let lex = Lexicon::from_json_str(r#"["công nghệ", "nghệ sĩ nhân dân"]"#).unwrap();
        assert!(lex.contains("nghệ sĩ nhân dân"));
        assert_eq!(lex.starting_with("nghệ").count(), 0);
    }

    #[test]
    fn blank_rows_are_skipped() {
        let lex = Lexicon::from_json_str(r#"["", "   ", "nghệ sĩ"]"#).unwrap();
        assert_eq!(lex.len(), 1);
    }

    #[test]
    fn malformed_json_is_an_error_for_try_load() {
        let err = Lexicon::try_load(DatasetSource::Json("{not json".into())).unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
        let err = Lexicon::try_load(DatasetSource::Json("[1, 2]".into())).unwrap_err();
        assert!(matches!(err, LexiconError::Parse(_)));
    }

    #[test]
    fn malformed_json_degrades_to_empty() {
        let lex = Lexicon::load(DatasetSource::Json(r#"{"word": "x"}"#.into()));
        assert!(lex.is_empty());
    }

    #[test]
    fn missing_file_degrades_to_empty() {
        let path = std::env::temp_dir().join("noitu-definitely-missing-dataset.json");
        let err = Lexicon::try_load(DatasetSource::File(path.clone())).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
        assert!(Lexicon::load(DatasetSource::File(path)).is_empty());
    }

    #[test]
    fn loads_from_file() {
        let path = std::env::temp_dir().join(format!("noitu-loader-{}.json", std::process::id()));
        {
            let mut f = std::fs::File::create(&path).unwrap();
            f.write_all(r#"["công nghệ", "nghệ sĩ", "sĩ diện"]"#.as_bytes())
                .unwrap();
        }
        let lex = Lexicon::load(DatasetSource::File(path.clone()));
        std::fs::remove_file(&path).ok();
        assert_eq!(lex.len(), 3);
    }

    #[test]
    fn entries_source_skips_parsing() {
        let lex = Lexicon::load(DatasetSource::Entries(vec![
            RawEntry::Plain("công nghệ".into()),
            RawEntry::Split {
                word: "nghệ sĩ".into(),
                first_syllable: "nghệ".into(),
                last_syllable: "sĩ".into(),
            },
        ]));
        assert_eq!(lex.len(), 2);
    }
}
