// WordChainEngine: the single entry point for playing the word-chain game.
//
// Owns the current lexicon behind a shared, reload-capable handle and wires
// normalization, validation and reply selection into one call.
//
// Design notes:
// - The lexicon is published as `Arc<Lexicon>` inside an `RwLock`. The lock
//   is held only to clone or replace the `Arc`; all lookups run on the
//   snapshot, so a reload never blocks in-flight moves and a move never sees
//   a half-built index.
// - Validator and selector are lightweight borrowing views created per call.
// - There is no per-game state: the chain history comes from the caller.

use std::sync::{Arc, PoisonError, RwLock};

use rand::Rng;

use noitu_core::normalize::normalize;
use noitu_core::outcome::MoveOutcome;

use crate::history::ChainHistory;
use crate::lexicon::{DatasetSource, Lexicon};
use crate::selector::MoveSelector;
use crate::validator::{ChainRules, TurnValidator};

/// Reloadable word-chain opponent.
///
/// `WordChainEngine` is `Send + Sync`; share it behind an `Arc` to serve
/// several games at once.
pub struct WordChainEngine {
    lexicon: RwLock<Arc<Lexicon>>,
    rules: ChainRules,
}

impl WordChainEngine {
    /// Create an engine over an already-built lexicon.
    pub fn new(lexicon: Lexicon) -> Self {
        Self {
            lexicon: RwLock::new(Arc::new(lexicon)),
            rules: ChainRules::default(),
        }
    }

    /// Create an engine from a dataset source.
    ///
    /// A missing or malformed dataset leaves the engine in the degraded state
    /// (empty lexicon) rather than failing.
    pub fn from_source(source: DatasetSource) -> Self {
        Self::new(Lexicon::load(source))
    }

    /// Create an engine with no words loaded.
    pub fn empty() -> Self {
        Self::new(Lexicon::empty())
    }

    // =========================================================================
    // Game
    // =========================================================================

    /// Play one exchange.
    ///
    /// `history` holds the words played so far in this game, raw or
    /// normalized. The engine never modifies it; on
    /// [`MoveOutcome::EngineReplies`] the caller appends both the user's word
    /// and the reply before the next call.
    pub fn submit_move<S: AsRef<str>>(&self, user_word: &str, history: &[S]) -> MoveOutcome {
        self.submit_move_in(user_word, &ChainHistory::from_raw(history))
    }

    /// Play one exchange against a caller-maintained [`ChainHistory`].
    pub fn submit_move_in(&self, user_word: &str, history: &ChainHistory) -> MoveOutcome {
        self.submit_move_with_rng(user_word, history, &mut rand::thread_rng())
    }

    /// Play one exchange, drawing the reply with `rng`.
    pub fn submit_move_with_rng<R: Rng + ?Sized>(
        &self,
        user_word: &str,
        history: &ChainHistory,
        rng: &mut R,
    ) -> MoveOutcome {
        let word = normalize(user_word);
        let lexicon = self.snapshot();

        if let Err(reason) = TurnValidator::new(&lexicon, self.rules).validate(&word, history) {
            return MoveOutcome::Rejected { reason, word };
        }

        match MoveSelector::new(&lexicon).select_reply_with(&word, history, rng) {
            Some(reply) => MoveOutcome::EngineReplies { word: reply },
            None => MoveOutcome::EngineConcedes,
        }
    }

    /// A random unplayed word to restart the chain from, e.g. when the
    /// player gives up on the current syllable.
    ///
    /// `None` when every word of the lexicon has been played.
    pub fn fresh_word(&self, history: &ChainHistory) -> Option<String> {
        self.fresh_word_with_rng(history, &mut rand::thread_rng())
    }

    /// Like [`WordChainEngine::fresh_word`], drawing with `rng`.
    pub fn fresh_word_with_rng<R: Rng + ?Sized>(
        &self,
        history: &ChainHistory,
        rng: &mut R,
    ) -> Option<String> {
        MoveSelector::new(&self.snapshot()).select_opening_with(history, rng)
    }

    /// Whether `word` (raw or normalized) is in the current lexicon.
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.snapshot().contains(&normalize(word))
    }

    // =========================================================================
    // Lexicon management
    // =========================================================================

    /// Replace the lexicon with one loaded from `source`.
    ///
    /// The new lexicon is built before the swap. A failed load installs an
    /// empty lexicon, matching startup behavior.
    pub fn reload(&self, source: DatasetSource) {
        self.replace_lexicon(Lexicon::load(source));
    }

    /// Atomically install `lexicon`, returning the previous one.
    pub fn replace_lexicon(&self, lexicon: Lexicon) -> Arc<Lexicon> {
        let mut guard = self.lexicon.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(lexicon))
    }

    /// The lexicon currently in use. Later reloads do not affect the snapshot.
    pub fn snapshot(&self) -> Arc<Lexicon> {
        let guard = self.lexicon.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Number of words in the current lexicon.
    pub fn lexicon_len(&self) -> usize {
        self.snapshot().len()
    }

    /// Whether the engine is running without words.
    pub fn is_degraded(&self) -> bool {
        self.snapshot().is_empty()
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    pub fn rules(&self) -> ChainRules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: ChainRules) {
        self.rules = rules;
    }

    pub fn set_min_syllables(&mut self, value: usize) {
        self.rules.min_syllables = value;
    }

    pub fn set_max_syllables(&mut self, value: usize) {
        self.rules.max_syllables = value;
    }
}

impl Default for WordChainEngine {
    fn default() -> Self {
        Self::empty()
    }
}
