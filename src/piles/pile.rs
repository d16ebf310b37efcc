//! Ordered pile of cards.
//!
//! Index 0 is the bottom, the last index is the top. New cards are
//! appended on top. A pile only stores card ids; it never touches the
//! cards' back-references, that is `Deck::move_card`'s job.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, PileId};
use crate::core::error::DeckError;
use crate::core::rng::DeckRng;

/// A named, ordered collection of card ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pile {
    id: PileId,
    name: String,
    cards: Vec<CardId>,
}

impl Pile {
    /// Create an empty pile.
    pub(crate) fn new(id: PileId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            cards: Vec::new(),
        }
    }

    /// Arena id of this pile.
    #[must_use]
    pub fn id(&self) -> PileId {
        self.id
    }

    /// Display name: the dotted path, `"Draw pile"`, `"<nick>'s hand"`...
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards from bottom to top.
    #[must_use]
    pub fn cards(&self) -> &[CardId] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The top card (last appended, unless shuffled since).
    #[must_use]
    pub fn top(&self) -> Option<CardId> {
        self.cards.last().copied()
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// Put a card on top.
    pub(crate) fn append(&mut self, card: CardId) {
        self.cards.push(card);
    }

    /// Take a card out, keeping the order of the rest.
    pub(crate) fn remove(&mut self, card: CardId) -> Result<(), DeckError> {
        let index = self
            .cards
            .iter()
            .position(|&c| c == card)
            .ok_or(DeckError::CardNotInPile { card, pile: self.id })?;
        self.cards.remove(index);
        Ok(())
    }

    /// Uniformly permute the pile in place.
    pub fn shuffle(&mut self, rng: &mut DeckRng) {
        rng.shuffle(&mut self.cards);
    }
}
