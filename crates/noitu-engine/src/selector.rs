// Reply selection: pick the engine's next word from the legal continuations

use rand::Rng;
use rand::seq::SliceRandom;

use noitu_core::entry::LexiconEntry;
use noitu_core::syllable::{has_ellipsis, last_syllable};

use crate::history::ChainHistory;
use crate::lexicon::Lexicon;

/// Chooses the engine's reply to an accepted word.
///
/// A legal reply starts with the user's last syllable and is none of:
/// - a word already in the history
/// - the user's own word
/// - a truncated placeholder row (contains `"..."` or `"…"`)
///
/// Among the legal replies one is picked uniformly at random. When none is
/// left the engine concedes.
pub struct MoveSelector<'a> {
    lexicon: &'a Lexicon,
}

impl<'a> MoveSelector<'a> {
    pub fn new(lexicon: &'a Lexicon) -> Self {
        Self { lexicon }
    }

    /// All legal replies to the normalized `user_word`, in no particular order.
    pub fn legal_replies(&self, user_word: &str, history: &ChainHistory) -> Vec<&'a LexiconEntry> {
        let Some(tail) = last_syllable(user_word) else {
            return Vec::new();
        };
        self.lexicon
            .starting_with(tail)
            .filter(|e| e.word != user_word)
            .filter(|e| !history.contains(&e.word))
            .filter(|e| !has_ellipsis(&e.word))
            .collect()
    }

    /// Pick a reply using the thread-local RNG. `None` means the engine concedes.
    pub fn select_reply(&self, user_word: &str, history: &ChainHistory) -> Option<String> {
        self.select_reply_with(user_word, history, &mut rand::thread_rng())
    }

    /// Pick a reply using `rng`.
    pub fn select_reply_with<R: Rng + ?Sized>(
        &self,
        user_word: &str,
        history: &ChainHistory,
        rng: &mut R,
    ) -> Option<String> {
        self.legal_replies(user_word, history)
            .choose(rng)
            .map(|e| e.word.clone())
    }

    /// Words that can open a fresh chain: any entry not yet played and not a
    /// truncated placeholder row.
    pub fn openings(&self, history: &ChainHistory) -> Vec<&'a LexiconEntry> {
        self.lexicon
            .entries()
            .iter()
            .filter(|e| !history.contains(&e.word))
            .filter(|e| !has_ellipsis(&e.word))
            .collect()
    }

    /// Pick a fresh opening word using `rng`. `None` when every word is used.
    pub fn select_opening_with<R: Rng + ?Sized>(
        &self,
        history: &ChainHistory,
        rng: &mut R,
    ) -> Option<String> {
        self.openings(history).choose(rng).map(|e| e.word.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn lexicon() -> Lexicon {
        Lexicon::from_words([
            "công nghệ",
            "nghệ sĩ",
            "nghệ nhân",
            "nghệ ...",
            "nghệ thuật\u{2026}",
            "sĩ diện",
            "diện diện",
        ])
    }

    fn words(entries: Vec<&LexiconEntry>) -> Vec<&str> {
        let mut w: Vec<&str> = entries.into_iter().map(|e| e.word.as_str()).collect();
        w.sort_unstable();
        w
    }

    #[test]
    fn candidates_start_with_last_syllable() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let replies = sel.legal_replies("công nghệ", &ChainHistory::new());
        assert_eq!(words(replies), vec!["nghệ nhân", "nghệ sĩ"]);
    }

    #[test]
    fn openings_skip_played_and_placeholder_rows() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let history = ChainHistory::from_raw(["công nghệ", "nghệ sĩ", "nghệ nhân", "sĩ diện"]);
        assert_eq!(words(sel.openings(&history)), vec!["diện diện"]);

        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert_eq!(
            sel.select_opening_with(&history, &mut rng).as_deref(),
            Some("diện diện")
        );
        let all = ChainHistory::from_raw(lex.entries().iter().map(|e| e.word.as_str()));
        assert_eq!(sel.select_opening_with(&all, &mut rng), None);
    }

    #[test]
    fn only_two_syllable_words_are_offered() {
        let lex = Lexicon::from_words(["công nghệ", "nghệ", "nghệ sĩ nhân dân", "nghệ nhân"]);
        let replies = MoveSelector::new(&lex).legal_replies("công nghệ", &ChainHistory::new());
        assert_eq!(words(replies), vec!["nghệ nhân"]);
    }

    #[test]
    fn ellipsis_rows_are_never_offered() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let history = ChainHistory::from_raw(["nghệ sĩ", "nghệ nhân"]);
        let replies = sel.legal_replies("công nghệ", &history);
        assert!(replies.is_empty());
    }

    #[test]
    fn history_is_excluded() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let history = ChainHistory::from_raw(["nghệ sĩ"]);
        assert_eq!(words(sel.legal_replies("công nghệ", &history)), vec!["nghệ nhân"]);
    }

    #[test]
    fn own_word_is_excluded() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        // "diện diện" chains into itself
        assert!(sel.legal_replies("diện diện", &ChainHistory::new()).is_empty());
        assert_eq!(sel.select_reply("diện diện", &ChainHistory::new()), None);
    }

    #[test]
    fn uses_last_token_of_long_words() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let replies = sel.legal_replies("ca sĩ sĩ", &ChainHistory::new());
        assert_eq!(words(replies), vec!["sĩ diện"]);
    }

    #[test]
    fn blank_word_has_no_replies() {
        let lex = lexicon();
        assert!(MoveSelector::new(&lex).legal_replies("", &ChainHistory::new()).is_empty());
    }

    #[test]
    fn seeded_selection_stays_within_legal_set() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let history = ChainHistory::new();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let reply = sel.select_reply_with("công nghệ", &history, &mut rng).unwrap();
            assert!(reply == "nghệ sĩ" || reply == "nghệ nhân", "unexpected {reply}");
        }
    }

    #[test]
    fn selection_covers_every_candidate() {
        let lex = lexicon();
        let sel = MoveSelector::new(&lex);
        let history = ChainHistory::new();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(sel.select_reply_with("công nghệ", &history, &mut rng).unwrap());
        }
        assert_eq!(seen.len(), 2);
    }
}
