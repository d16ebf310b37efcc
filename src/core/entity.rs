//! Identifiers for cards and piles.
//!
//! ## ID Layout
//!
//! - `CardId`: assigned by the deck from a counter starting at 1. Ids are
//!   never reused, even after the card is deleted.
//! - `PileId`: index into the deck's pile arena. Piles are never removed,
//!   so a `PileId` stays valid for the lifetime of the deck that issued it.
//!
//! ```
//! use dvorak_table::core::CardId;
//!
//! let id: CardId = "7".parse().unwrap();
//! assert_eq!(id, CardId::new(7));
//! assert_eq!(id.to_string(), "7");
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DeckError;

/// Unique identifier for a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// The first id a fresh deck hands out.
    pub const FIRST: CardId = CardId(1);

    /// Create a card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for CardId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a card id typed by a player.
///
/// Surrounding whitespace is ignored; anything else that is not a
/// non-negative integer is a malformed argument.
impl FromStr for CardId {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(CardId)
            .map_err(|_| DeckError::MalformedArgument(format!("not a card id: {s:?}")))
    }
}

/// Index of a pile in the deck's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PileId(pub u32);

impl PileId {
    /// Create a pile ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Pile({})", self.0)
    }
}
