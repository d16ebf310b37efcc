//! Error types for deck operations and configuration loading.

use thiserror::Error;

use super::entity::{CardId, PileId};

/// Failure of a single deck operation.
///
/// None of these leave the deck in an inconsistent state: every operation
/// validates before it mutates.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The id was never issued, or the card has been deleted.
    #[error("card not found: {0}")]
    CardNotFound(CardId),

    /// The pile id was not issued by this deck.
    #[error("pile not found: {0}")]
    PileNotFound(PileId),

    /// A pile was asked to remove a card it does not hold.
    #[error("card {card} is not in {pile}")]
    CardNotInPile { card: CardId, pile: PileId },

    /// A command argument is missing or has the wrong shape.
    #[error("malformed argument: {0}")]
    MalformedArgument(String),

    /// A dotted path that cannot address a pile.
    #[error("invalid pile path: {0:?}")]
    PathConflict(String),
}

impl DeckError {
    /// Short text shown to the player when a command fails.
    #[must_use]
    pub fn reply_text(&self) -> &'static str {
        match self {
            DeckError::CardNotFound(_) | DeckError::CardNotInPile { .. } => "Error: card not found",
            DeckError::PileNotFound(_) => "Error: pile not found",
            DeckError::MalformedArgument(_) => "Error: invalid input",
            DeckError::PathConflict(_) => "Error: invalid pile path",
        }
    }
}

/// Failure while loading a `TableConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("command prefix must not be empty")]
    EmptyPrefix,
}
