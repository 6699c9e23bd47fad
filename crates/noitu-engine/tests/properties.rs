//! Property tests for reply safety and index completeness.

use proptest::prelude::*;

use noitu_core::normalize::normalize;
use noitu_core::outcome::{MoveOutcome, RejectReason};
use noitu_core::syllable::{has_ellipsis, last_syllable, syllable_count};
use noitu_engine::{ChainHistory, Lexicon, WordChainEngine};

const SYLLABLES: &[&str] = &[
    "công", "nghệ", "sĩ", "diện", "nhân", "dân", "mèo", "mun", "...", "xe", "đạp",
];

fn word_of(len: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    prop::collection::vec(0..SYLLABLES.len(), len).prop_map(|picks| {
        picks
            .into_iter()
            .map(|i| SYLLABLES[i])
            .collect::<Vec<_>>()
            .join(" ")
    })
}

/// A move the player may legally attempt: two to four syllables.
fn word() -> impl Strategy<Value = String> {
    word_of(2..=4)
}

/// Dataset rows, including single-syllable and long rows.
fn lexicon_words() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word_of(1..=4), 0..40)
}

proptest! {
    #[test]
    fn index_is_complete(words in lexicon_words()) {
        let lex = Lexicon::from_words(&words);
        for entry in lex.entries() {
            prop_assert!(lex.starting_with(&entry.first_syllable).any(|e| e.word == entry.word));
        }
        let indexed: usize = lex
            .index()
            .syllables()
            .map(|s| lex.starting_with(s).count())
            .sum();
        prop_assert_eq!(indexed, lex.entries().len());
    }

    #[test]
    fn entries_are_two_syllables(words in lexicon_words()) {
        let lex = Lexicon::from_words(&words);
        for entry in lex.entries() {
            prop_assert_eq!(syllable_count(&entry.word), 2);
            prop_assert_eq!(
                &entry.word,
                &format!("{} {}", entry.first_syllable, entry.last_syllable)
            );
        }
    }

    #[test]
    fn replies_have_two_syllables(
        words in lexicon_words(),
        user in word(),
    ) {
        let engine = WordChainEngine::new(Lexicon::from_words(&words));
        if let MoveOutcome::EngineReplies { word } = engine.submit_move(&user, &[] as &[&str]) {
            prop_assert_eq!(syllable_count(&word), 2);
        }
    }

    #[test]
    fn replies_are_always_legal(
        words in lexicon_words(),
        user in word(),
        played in prop::collection::vec(word(), 0..10),
    ) {
        let engine = WordChainEngine::new(Lexicon::from_words(&words));
        let history = ChainHistory::from_raw(&played);
        let outcome = engine.submit_move_in(&user, &history);
        let user = normalize(&user);

        match outcome {
            MoveOutcome::EngineReplies { word } => {
                prop_assert_ne!(&word, &user);
                prop_assert!(!history.contains(&word));
                prop_assert!(!has_ellipsis(&word));
                prop_assert!(engine.is_valid_word(&word));
                prop_assert_eq!(syllable_count(&word), 2);
                prop_assert_eq!(
                    word.split_whitespace().next(),
                    last_syllable(&user)
                );
            }
            MoveOutcome::EngineConcedes => {
                let snapshot = engine.snapshot();
                let tail = last_syllable(&user).unwrap_or_default();
                let legal = snapshot
                    .starting_with(tail)
                    .filter(|e| e.word != user)
                    .filter(|e| !history.contains(&e.word) && !has_ellipsis(&e.word))
                    .count();
                prop_assert_eq!(legal, 0);
            }
            MoveOutcome::Rejected { reason, word } => {
                prop_assert_eq!(&word, &user);
                match reason {
                    RejectReason::DegradedLexicon => prop_assert!(engine.is_degraded()),
                    RejectReason::UnknownWord => prop_assert!(!engine.is_valid_word(&user)),
                    RejectReason::AlreadyUsed => prop_assert!(history.contains(&user)),
                    RejectReason::InvalidLength => {
                        prop_assert!(false, "generated moves have two to four syllables")
                    }
                }
            }
        }
    }
}
