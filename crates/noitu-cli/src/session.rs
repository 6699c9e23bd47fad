// Terminal game session: the caller-side state around the stateless engine

use noitu_core::normalize::normalize;
use noitu_core::outcome::{MoveOutcome, MoveResponse};
use noitu_core::syllable::{first_syllable, last_syllable};
use noitu_engine::{ChainHistory, WordChainEngine};

/// Lives a player starts with.
pub const DEFAULT_LIVES: u32 = 3;

/// Points for each word the engine answers.
pub const REPLY_POINTS: u32 = 1;

/// Bonus points when the engine concedes.
pub const CONCEDE_BONUS: u32 = 5;

/// Times a player may give up on the current syllable.
pub const DEFAULT_SKIPS: u32 = 3;

/// Message for a move that does not continue the chain.
pub fn mismatch_message(expected: &str) -> String {
    format!("Từ phải bắt đầu bằng '{expected}'.")
}

/// Message announcing the word the chain restarts from after a skip.
pub fn skip_message(word: &str) -> String {
    format!("Được thôi! Từ mới là: {word}")
}

/// Message for a skip with none left.
pub const NO_SKIPS_MESSAGE: &str = "Bạn đã hết lượt bỏ qua.";

/// Message for a skip after every word has been played.
pub const FREE_RESTART_MESSAGE: &str = "Hết từ để đổi! Bạn có thể bắt đầu bằng bất kỳ từ nào.";

/// Result of one turn in a [`GameSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// The word did not start with the last syllable of the engine's reply.
    /// The engine was not consulted.
    Mismatch { expected: String },
    /// The engine rejected the word; carries the rejection outcome.
    Rejected(MoveOutcome),
    /// The engine answered.
    Replied(String),
    /// The engine had no answer; the player wins.
    EngineConceded,
    /// The player skipped; the chain continues from this engine word, or
    /// from any word when `None`.
    Skipped(Option<String>),
    /// A skip was requested with none left. Costs nothing.
    NoSkipsLeft,
    /// The game already ended; nothing happened.
    Finished,
}

impl Turn {
    /// The turn as a wire response. `None` for [`Turn::Finished`].
    pub fn response(&self) -> Option<MoveResponse> {
        let response = match self {
            Turn::Mismatch { expected } => MoveResponse {
                valid: false,
                next_word: None,
                message: Some(mismatch_message(expected)),
            },
            Turn::Rejected(outcome) => MoveResponse::from(outcome),
            Turn::Replied(reply) => MoveResponse::from(MoveOutcome::EngineReplies {
                word: reply.clone(),
            }),
            Turn::EngineConceded => MoveResponse::from(MoveOutcome::EngineConcedes),
            Turn::Skipped(Some(word)) => MoveResponse {
                valid: true,
                next_word: Some(word.clone()),
                message: Some(skip_message(word)),
            },
            Turn::Skipped(None) => MoveResponse {
                valid: true,
                next_word: None,
                message: Some(FREE_RESTART_MESSAGE.to_string()),
            },
            Turn::NoSkipsLeft => MoveResponse {
                valid: false,
                next_word: None,
                message: Some(NO_SKIPS_MESSAGE.to_string()),
            },
            Turn::Finished => return None,
        };
        Some(response)
    }
}

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEnd {
    EngineConceded,
    OutOfLives,
}

/// One game against the engine.
///
/// Owns the chain history, the remaining lives, skips and the score. The
/// player must continue from the last syllable of the engine's previous word;
/// a broken chain or a rejected word costs one life. A skip swaps the engine's
/// word for a fresh one.
#[derive(Debug, Clone)]
pub struct GameSession {
    history: ChainHistory,
    tail: Option<String>,
    lives: u32,
    skips: u32,
    score: u32,
    end: Option<GameEnd>,
}

impl GameSession {
    pub fn new(lives: u32) -> Self {
        Self::with_skips(lives, DEFAULT_SKIPS)
    }

    pub fn with_skips(lives: u32, skips: u32) -> Self {
        Self {
            history: ChainHistory::new(),
            tail: None,
            lives,
            skips,
            score: 0,
            end: if lives == 0 {
                Some(GameEnd::OutOfLives)
            } else {
                None
            },
        }
    }

    /// Syllable the next word must start with, if any.
    pub fn expected_syllable(&self) -> Option<&str> {
        self.tail.as_deref().and_then(last_syllable)
    }

    /// Play `word` against `engine`.
    pub fn play(&mut self, engine: &WordChainEngine, word: &str) -> Turn {
        if self.end.is_some() {
            return Turn::Finished;
        }

        if let Some(expected) = self.expected_syllable() {
            let normalized = normalize(word);
            if first_syllable(&normalized) != Some(expected) {
                let expected = expected.to_string();
                self.lose_life();
                return Turn::Mismatch { expected };
            }
        }

        let outcome = engine.submit_move_in(word, &self.history);
        match outcome {
            MoveOutcome::Rejected { .. } => {
                self.lose_life();
                Turn::Rejected(outcome)
            }
            MoveOutcome::EngineReplies { word: reply } => {
                self.history.push(word);
                self.history.push(&reply);
                self.tail = Some(reply.clone());
                self.score += REPLY_POINTS;
                Turn::Replied(reply)
            }
            MoveOutcome::EngineConcedes => {
                self.history.push(word);
                self.score += CONCEDE_BONUS;
                self.end = Some(GameEnd::EngineConceded);
                Turn::EngineConceded
            }
        }
    }

    /// Give up on the current syllable and let the engine pick a fresh word.
    pub fn skip(&mut self, engine: &WordChainEngine) -> Turn {
        if self.end.is_some() {
            return Turn::Finished;
        }
        if self.skips == 0 {
            return Turn::NoSkipsLeft;
        }
        self.skips -= 1;
        self.tail = engine.fresh_word(&self.history);
        if let Some(word) = &self.tail {
            self.history.push(word);
        }
        Turn::Skipped(self.tail.clone())
    }

    fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        if self.lives == 0 {
            self.end = Some(GameEnd::OutOfLives);
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn skips(&self) -> u32 {
        self.skips
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn history(&self) -> &ChainHistory {
        &self.history
    }

    pub fn end(&self) -> Option<GameEnd> {
        self.end
    }

    pub fn is_over(&self) -> bool {
        self.end.is_some()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(DEFAULT_LIVES)
    }
}
