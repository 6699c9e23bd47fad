//! Word-chain engine for the Vietnamese "nối từ" game.
//!
//! The engine plays against a human: the user submits a word, the engine
//! checks it against the chain rules and answers with a word that starts with
//! the user's last syllable, or concedes when no such word is left.
//!
//! # Architecture
//!
//! - [`lexicon`] -- Dataset loading and the first-syllable index
//! - [`validator`] -- Rule checks for a submitted word, in fixed order
//! - [`selector`] -- Reply selection among the legal continuations
//! - [`history`] -- Caller-owned chain history in normalized form
//! - [`handle`] -- `WordChainEngine`, the reloadable facade
//! - [`dataset`] -- Building the record dataset from a plain word list
//!
//! The engine holds no per-game state. Each call to
//! [`handle::WordChainEngine::submit_move`] receives the chain history from
//! the caller, so one engine can serve any number of concurrent games.

pub mod dataset;
pub mod error;
pub mod handle;
pub mod history;
pub mod lexicon;
pub mod selector;
pub mod validator;

pub use error::LexiconError;
pub use handle::WordChainEngine;
pub use history::ChainHistory;
pub use lexicon::{DatasetSource, Lexicon, LexiconWord, RawEntry};
