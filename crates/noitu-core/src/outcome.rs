// Move outcome types and the wire response of the word-chain endpoint

use std::fmt;

use serde::{Deserialize, Serialize};

/// Message shown when the engine has no legal continuation.
pub const CONCEDE_MESSAGE: &str = "Hệ thống chịu thua! Bạn đã thắng!";

/// Why a submitted word was not accepted.
///
/// The variants are listed in the order the checks run; the first failing
/// check decides the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// Syllable count outside the allowed range.
    InvalidLength,
    /// The lexicon is empty, so no word can be checked.
    DegradedLexicon,
    /// The word is not in the lexicon.
    UnknownWord,
    /// The word has already been played in this chain.
    AlreadyUsed,
}

impl RejectReason {
    /// Stable machine-readable code, e.g. `"invalid_length"`.
    pub fn code(self) -> &'static str {
        match self {
            RejectReason::InvalidLength => "invalid_length",
            RejectReason::DegradedLexicon => "degraded_lexicon",
            RejectReason::UnknownWord => "unknown_word",
            RejectReason::AlreadyUsed => "already_used",
        }
    }

    /// User-facing explanation for the rejected (normalized) `word`.
    pub fn message(self, word: &str) -> String {
        match self {
            RejectReason::InvalidLength => {
                "Từ phải có độ dài từ 2 đến 4 tiếng (ví dụ: 'mèo mun', 'công nghệ').".to_string()
            }
            RejectReason::DegradedLexicon => {
                "Từ điển của hệ thống chưa sẵn sàng, vui lòng thử lại sau.".to_string()
            }
            RejectReason::UnknownWord => {
                format!("Từ '{word}' không có trong từ điển tiếng Việt của hệ thống.")
            }
            RejectReason::AlreadyUsed => format!("Từ '{word}' đã được sử dụng rồi!"),
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Result of one exchange with the engine.
///
/// Serializes to the `{valid, next_word, message}` response shape through
/// [`MoveResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "MoveResponse")]
pub enum MoveOutcome {
    /// The user's word broke a rule. `word` is the normalized submission.
    Rejected { reason: RejectReason, word: String },
    /// The user's word was accepted and the engine answers with `word`.
    EngineReplies { word: String },
    /// The user's word was accepted and the engine has no legal reply.
    EngineConcedes,
}

impl MoveOutcome {
    /// Whether the user's word was accepted.
    pub fn is_valid(&self) -> bool {
        !matches!(self, MoveOutcome::Rejected { .. })
    }

    /// The rejection reason, if the move was rejected.
    pub fn rejection(&self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Rejected { reason, .. } => Some(*reason),
            _ => None,
        }
    }

    /// The engine's reply word, if any.
    pub fn reply(&self) -> Option<&str> {
        match self {
            MoveOutcome::EngineReplies { word } => Some(word),
            _ => None,
        }
    }

    /// Human-readable message; `None` when the engine simply replies.
    pub fn message(&self) -> Option<String> {
        match self {
            MoveOutcome::Rejected { reason, word } => Some(reason.message(word)),
            MoveOutcome::EngineReplies { .. } => None,
            MoveOutcome::EngineConcedes => Some(CONCEDE_MESSAGE.to_string()),
        }
    }
}

/// Wire representation of a [`MoveOutcome`].
///
/// - rejected: `{ "valid": false, "next_word": null, "message": "..." }`
/// - reply: `{ "valid": true, "next_word": "...", "message": null }`
/// - concede: `{ "valid": true, "next_word": null, "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResponse {
    pub valid: bool,
    pub next_word: Option<String>,
    pub message: Option<String>,
}

impl From<&MoveOutcome> for MoveResponse {
    fn from(outcome: &MoveOutcome) -> Self {
        Self {
            valid: outcome.is_valid(),
            next_word: outcome.reply().map(str::to_string),
            message: outcome.message(),
        }
    }
}

impl From<MoveOutcome> for MoveResponse {
    fn from(outcome: MoveOutcome) -> Self {
        MoveResponse::from(&outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reason_codes() {
        assert_eq!(RejectReason::InvalidLength.code(), "invalid_length");
        assert_eq!(RejectReason::UnknownWord.to_string(), "unknown_word");
        assert_eq!(
            serde_json::to_value(RejectReason::AlreadyUsed).unwrap(),
            json!("already_used")
        );
    }

    #[test]
    fn messages_mention_the_word() {
        let msg = RejectReason::UnknownWord.message("mèo mun");
        assert!(msg.contains("'mèo mun'"));
        let msg = RejectReason::AlreadyUsed.message("công nghệ");
        assert!(msg.contains("'công nghệ'"));
    }

    #[test]
    fn rejected_serializes_as_invalid() {
        let outcome = MoveOutcome::Rejected {
            reason: RejectReason::InvalidLength,
            word: "a".to_string(),
        };
        let v = serde_json::to_value(&outcome).unwrap();
        assert_eq!(v["valid"], json!(false));
        assert_eq!(v["next_word"], json!(null));
        assert!(v["message"].as_str().unwrap().contains("2 đến 4"));
    }

    #[test]
    fn reply_serializes_with_null_message() {
        let outcome = MoveOutcome::EngineReplies {
            word: "nghệ sĩ".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({ "valid": true, "next_word": "nghệ sĩ", "message": null })
        );
    }

    #[test]
    fn concede_serializes_with_message() {
        assert_eq!(
            serde_json::to_value(MoveOutcome::EngineConcedes).unwrap(),
            json!({ "valid": true, "next_word": null, "message": CONCEDE_MESSAGE })
        );
    }

    #[test]
    fn accessors() {
        let rejected = MoveOutcome::Rejected {
            reason: RejectReason::AlreadyUsed,
            word: "x y".to_string(),
        };
        assert!(!rejected.is_valid());
        assert_eq!(rejected.rejection(), Some(RejectReason::AlreadyUsed));
        assert_eq!(rejected.reply(), None);

        assert!(MoveOutcome::EngineConcedes.is_valid());
        assert_eq!(MoveOutcome::EngineConcedes.rejection(), None);
    }
}
