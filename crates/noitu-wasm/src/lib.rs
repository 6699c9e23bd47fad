// WASM bindings for the noitu word-chain game.
//
// Provides a `WasmWordChain` class exported via wasm-bindgen that wraps the
// `WordChainEngine` from noitu-engine. Move outcomes are returned as plain
// JavaScript objects in the same shape as the word-chain HTTP endpoint.
//
// Usage from JavaScript:
//
//   const game = new WasmWordChain(datasetJsonText);
//   game.submitMove("công nghệ", []);
//     // => { valid: true, next_word: "nghệ sĩ", message: null }
//   game.submitMove("a", []);
//     // => { valid: false, next_word: null, message: "Từ phải có độ dài ..." }
//   game.isValidWord("mèo mun");   // => true
//   game.lexiconSize();            // => 36000
//   game.reload(newDatasetJson);

use serde::Serialize;
use wasm_bindgen::prelude::*;

use noitu_core::outcome::MoveResponse;
use noitu_engine::{DatasetSource, WordChainEngine};

// ============================================================================
// Conversion helpers
// ============================================================================

/// Serialize with `null` for missing values (the default would be `undefined`).
fn response_to_js(response: &MoveResponse) -> Result<JsValue, JsError> {
    response
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmWordChain
// ============================================================================

/// Vietnamese word-chain opponent for WebAssembly.
///
/// The chain history stays on the JavaScript side and is passed in with each
/// move.
#[wasm_bindgen]
pub struct WasmWordChain {
    engine: WordChainEngine,
}

#[wasm_bindgen]
impl WasmWordChain {
    /// Create a new instance from the JSON dataset text.
    ///
    /// A malformed dataset does not throw: the instance starts with no words
    /// and `isDegraded()` returns true.
    #[wasm_bindgen(constructor)]
    pub fn new(dataset_json: &str) -> WasmWordChain {
        WasmWordChain {
            engine: WordChainEngine::from_source(DatasetSource::Json(dataset_json.to_string())),
        }
    }

    /// Play one move.
    ///
    /// - `word`: the player's word
    /// - `history`: every word played so far in this game
    ///
    /// Returns `{ valid, next_word, message }`.
    #[wasm_bindgen(js_name = "submitMove")]
    pub fn submit_move(&self, word: &str, history: Vec<String>) -> Result<JsValue, JsError> {
        let outcome = self.engine.submit_move(word, history.as_slice());
        response_to_js(&MoveResponse::from(&outcome))
    }

    /// Check whether a word is in the lexicon.
    #[wasm_bindgen(js_name = "isValidWord")]
    pub fn is_valid_word(&self, word: &str) -> bool {
        self.engine.is_valid_word(word)
    }

    /// Number of words loaded.
    #[wasm_bindgen(js_name = "lexiconSize")]
    pub fn lexicon_size(&self) -> usize {
        self.engine.lexicon_len()
    }

    /// Whether no words are loaded.
    #[wasm_bindgen(js_name = "isDegraded")]
    pub fn is_degraded(&self) -> bool {
        self.engine.is_degraded()
    }

    /// Replace the lexicon with the given JSON dataset text.
    pub fn reload(&self, dataset_json: &str) {
        self.engine.reload(DatasetSource::Json(dataset_json.to_string()));
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set the minimum number of syllables in a player's word.
    #[wasm_bindgen(js_name = "setMinSyllables")]
    pub fn set_min_syllables(&mut self, value: usize) {
        self.engine.set_min_syllables(value);
    }

    /// Set the maximum number of syllables in a player's word.
    #[wasm_bindgen(js_name = "setMaxSyllables")]
    pub fn set_max_syllables(&mut self, value: usize) {
        self.engine.set_max_syllables(value);
    }
}
