//! Command handlers.
//!
//! Each handler turns one invocation into deck operations and a reply
//! text. Errors are turned into replies by `CommandTable::execute`.

use crate::core::entity::PileId;
use crate::core::error::DeckError;
use crate::deck::Deck;

use super::args;
use super::invocation::Invocation;

fn pile_name(deck: &Deck, pile: PileId) -> Result<String, DeckError> {
    deck.pile(pile)
        .map(|p| p.name().to_string())
        .ok_or(DeckError::PileNotFound(pile))
}

/// `newcard <title...>`
pub fn new_card(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let title = args::required(invocation)?;
    let id = deck.create_card(title);
    Ok(deck.card(id)?.to_string())
}

/// `cardtitle <id>`
pub fn card_title(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let id = args::card_id(invocation)?;
    Ok(deck.card(id)?.to_string())
}

/// `where <id>`
pub fn where_card(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let id = args::card_id(invocation)?;
    deck.card_location(id)
}

/// `move <id> <pilePath>`
pub fn move_card(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let (id, path) = args::pair(invocation)?;
    let id = id.parse()?;
    let pile = deck.pile_at(path)?;
    deck.move_card(id, Some(pile))?;
    Ok(format!("Card moved to pile: {}.", pile_name(deck, pile)?))
}

/// `list <pilePath>`
pub fn list_pile(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let pile = deck.pile_at(args::required(invocation)?)?;
    Ok(deck.describe_pile(pile))
}

/// `listhand`
pub fn list_hand(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let hand = deck.hand(invocation.player)?;
    Ok(deck.describe_pile(hand))
}

/// `shuffle <pilePath>`
pub fn shuffle_pile(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let pile = deck.pile_at(args::required(invocation)?)?;
    deck.shuffle_pile(pile)?;
    Ok(format!("Pile shuffled: {}.", pile_name(deck, pile)?))
}

/// `draw`
pub fn draw_card(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let reply = match deck.draw(invocation.player)? {
        Some(_) => "Card drawn.",
        None => "No cards in draw pile.",
    };
    Ok(reply.to_string())
}

/// `moveallto <pilePath>`
pub fn move_all_to(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    deck.move_all_to(args::required(invocation)?)?;
    Ok("Cards moved.".to_string())
}

/// `delete <id>`
pub fn delete_card(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    deck.delete_card(args::card_id(invocation)?)?;
    Ok("Card deleted.".to_string())
}

/// `placeon <pilePathA> <pilePathB>`: put all of A on top of B.
pub fn place_on(deck: &mut Deck, invocation: &Invocation<'_>) -> Result<String, DeckError> {
    let (from, to) = args::pair(invocation)?;
    let (from, to) = deck.pile_pair(from, to)?;
    deck.transfer_all(from, to)?;
    Ok("Cards moved.".to_string())
}

/// `printallpiles`
pub fn print_all_piles(deck: &mut Deck, _invocation: &Invocation<'_>) -> Result<String, DeckError> {
    Ok(deck.describe_namespace())
}

/// `reset`
pub fn reset_deck(deck: &mut Deck, _invocation: &Invocation<'_>) -> Result<String, DeckError> {
    deck.reset();
    Ok("Deck reset.".to_string())
}
