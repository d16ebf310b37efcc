//! A single card on the table.
//!
//! A card knows its id, its title and the pile it currently sits in.
//! The pile is stored as a `PileId` into the deck's arena; the pile in turn
//! lists the card's id. `Deck::move_card` is the only place that changes
//! either side, which keeps the two in agreement.

use serde::{Deserialize, Serialize};

use crate::core::entity::{CardId, PileId};

/// A card instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique id, assigned by the deck.
    pub id: CardId,

    /// Free text given to `newcard`.
    pub title: String,

    /// Current pile. `None` while unplaced.
    pile: Option<PileId>,
}

impl Card {
    /// Create an unplaced card.
    pub(crate) fn new(id: CardId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            pile: None,
        }
    }

    /// The pile this card is in, if any.
    #[must_use]
    pub fn pile(&self) -> Option<PileId> {
        self.pile
    }

    /// Is the card outside every pile?
    #[must_use]
    pub fn is_unplaced(&self) -> bool {
        self.pile.is_none()
    }

    /// Only the deck updates this, in step with pile membership.
    pub(crate) fn set_pile(&mut self, pile: Option<PileId>) {
        self.pile = pile;
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card {}: {}", self.id, self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_card_is_unplaced() {
        let card = Card::new(CardId(1), "Ace");
        assert_eq!(card.title, "Ace");
        assert!(card.is_unplaced());
        assert_eq!(card.pile(), None);
    }

    #[test]
    fn test_display() {
        let card = Card::new(CardId(12), "Queen of Hearts");
        assert_eq!(card.to_string(), "Card 12: Queen of Hearts");
    }

    #[test]
    fn test_set_pile() {
        let mut card = Card::new(CardId(1), "Ace");
        card.set_pile(Some(PileId(2)));
        assert_eq!(card.pile(), Some(PileId(2)));
        card.set_pile(None);
        assert!(card.is_unplaced());
    }
}
