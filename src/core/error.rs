//! Errors for the only fallible surface of the engine: loading content and
//! configuration. Everything that happens during play is recoverable locally
//! and expressed with `Option` or a no-op instead.

use crate::cards::CardId;

/// Failure while building the content registry or reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Card {0} is defined more than once")]
    DuplicateCardId(CardId),

    #[error("Card {result} fuses from unknown card {missing}")]
    UnknownFusionIngredient { result: CardId, missing: CardId },

    #[error("Cards {a} and {b} fuse into both {first} and {second}")]
    ConflictingRecipe {
        a: CardId,
        b: CardId,
        first: CardId,
        second: CardId,
    },

    #[error("Content defines no base cards to build a deck from")]
    EmptyContent,
}
