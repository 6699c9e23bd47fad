//! Shared types and text utilities for the noitu word-chain engine.
//!
//! Everything that crosses a crate boundary lives here: the normalized text
//! form, syllable splitting, the lexicon record, and the per-move outcome.
//!
//! # Architecture
//!
//! - [`normalize`] -- Canonical comparable form (NFC, lowercase, trimmed)
//! - [`syllable`] -- Syllable splitting and placeholder detection
//! - [`entry`] -- `LexiconEntry`, the immutable lexicon record
//! - [`outcome`] -- `MoveOutcome`, `RejectReason` and the wire response

pub mod entry;
pub mod normalize;
pub mod outcome;
pub mod syllable;
