//! The deck: every card and pile of one game session.
//!
//! ## Layout
//!
//! - `cards`: registry of live cards by id
//! - `piles`: arena of piles, indexed by `PileId`; piles are never removed
//! - `root`: the dotted-path namespace, pointing into `piles`
//!
//! ## Location Invariant
//!
//! For every card `c`, `c.pile() == Some(p)` iff `c.id` appears exactly once
//! in pile `p` and in no other pile. `move_card` is the only mutation of
//! either side. `check_integrity` verifies this.

use log::{debug, info};
use rustc_hash::FxHashMap;

use crate::cards::Card;
use crate::core::config::HANDS_NAMESPACE;
use crate::core::entity::{CardId, PileId};
use crate::core::error::DeckError;
use crate::core::rng::DeckRng;
use crate::piles::{Namespace, Node, Pile, PilePath};

/// Complete table state.
///
/// ## Example
///
/// ```
/// use dvorak_table::deck::Deck;
///
/// let mut deck = Deck::with_seed(42);
/// let ace = deck.create_card("Ace");
/// let draw = deck.draw_pile();
///
/// deck.move_card(ace, Some(draw)).unwrap();
/// assert_eq!(deck.card_location(ace).unwrap(), "In pile: Draw pile");
///
/// let drawn = deck.draw("alice").unwrap();
/// assert_eq!(drawn, Some(ace));
/// assert_eq!(deck.card_location(ace).unwrap(), "In pile: alice's hand");
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    cards: FxHashMap<CardId, Card>,
    piles: Vec<Pile>,
    root: Namespace,
    next_id: CardId,
    draw: PileId,
    discard: PileId,
    rng: DeckRng,
}

impl Deck {
    /// Create an empty deck with the built-in piles and the hands namespace.
    #[must_use]
    pub fn new(rng: DeckRng) -> Self {
        let draw = PileId::new(0);
        let discard = PileId::new(1);

        Self {
            cards: FxHashMap::default(),
            piles: vec![Pile::new(draw, "Draw pile"), Pile::new(discard, "Discard pile")],
            root: Namespace::root(draw, discard),
            next_id: CardId::FIRST,
            draw,
            discard,
            rng,
        }
    }

    /// Create an empty deck with a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::new(DeckRng::new(seed))
    }

    /// Replace everything with a fresh empty deck.
    ///
    /// Card ids start again at 1. The new deck shuffles with a fork of
    /// this deck's RNG.
    pub fn reset(&mut self) {
        let rng = self.rng.fork();
        let dropped = self.cards.len();
        *self = Self::new(rng);
        info!("deck reset, {dropped} cards discarded");
    }

    // === Cards ===

    /// Create an unplaced card and return its id.
    pub fn create_card(&mut self, title: impl Into<String>) -> CardId {
        let id = self.next_id;
        self.next_id = id.next();
        let card = Card::new(id, title);
        debug!("created {card}");
        self.cards.insert(id, card);
        id
    }

    /// Look up a live card.
    pub fn card(&self, id: CardId) -> Result<&Card, DeckError> {
        self.cards.get(&id).ok_or(DeckError::CardNotFound(id))
    }

    /// Delete a card: detach it from its pile, then forget its id.
    ///
    /// The id is never issued again by this deck.
    pub fn delete_card(&mut self, id: CardId) -> Result<Card, DeckError> {
        self.move_card(id, None)?;
        let card = self.cards.remove(&id).ok_or(DeckError::CardNotFound(id))?;
        debug!("deleted {card}");
        Ok(card)
    }

    /// Move a card to the top of `target`, or out of every pile with `None`.
    ///
    /// Moving a card onto the pile it is already in puts it on top.
    pub fn move_card(&mut self, id: CardId, target: Option<PileId>) -> Result<(), DeckError> {
        let current = self.card(id)?.pile();
        if let Some(target) = target {
            self.check_pile(target)?;
        }

        if let Some(current) = current {
            self.piles[current.index()].remove(id)?;
        }
        if let Some(card) = self.cards.get_mut(&id) {
            card.set_pile(target);
        }
        if let Some(target) = target {
            self.piles[target.index()].append(id);
        }

        debug!(
            "card {id} moved from {} to {}",
            self.location_name(current),
            self.location_name(target)
        );
        Ok(())
    }

    /// Human-readable location: `"In pile: <name>"` or `"Nowhere"`.
    pub fn card_location(&self, id: CardId) -> Result<String, DeckError> {
        let card = self.card(id)?;
        Ok(match card.pile() {
            Some(pile) => format!("In pile: {}", self.piles[pile.index()].name()),
            None => "Nowhere".to_string(),
        })
    }

    /// Iterate over live cards (arbitrary order).
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Live card ids in ascending order.
    #[must_use]
    pub fn card_ids(&self) -> Vec<CardId> {
        let mut ids: Vec<_> = self.cards.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.cards.len()
    }

    /// The id the next `create_card` will return.
    #[must_use]
    pub fn next_id(&self) -> CardId {
        self.next_id
    }

    // === Piles ===

    fn check_pile(&self, id: PileId) -> Result<(), DeckError> {
        if id.index() < self.piles.len() {
            Ok(())
        } else {
            Err(DeckError::PileNotFound(id))
        }
    }

    fn location_name(&self, pile: Option<PileId>) -> &str {
        pile.and_then(|p| self.piles.get(p.index()))
            .map_or("nowhere", Pile::name)
    }

    fn push_pile(&mut self, id: PileId, name: String) {
        debug!("created pile {name:?}");
        self.piles.push(Pile::new(id, name));
    }

    fn next_pile_id(&self) -> PileId {
        PileId::new(self.piles.len() as u32)
    }

    /// Look up a pile by id.
    #[must_use]
    pub fn pile(&self, id: PileId) -> Option<&Pile> {
        self.piles.get(id.index())
    }

    /// All piles in creation order.
    #[must_use]
    pub fn piles(&self) -> &[Pile] {
        &self.piles
    }

    /// The built-in `draw` pile.
    #[must_use]
    pub fn draw_pile(&self) -> PileId {
        self.draw
    }

    /// The built-in `discard` pile.
    #[must_use]
    pub fn discard_pile(&self) -> PileId {
        self.discard
    }

    /// Resolve a dotted path, creating namespaces and the pile as needed.
    ///
    /// A new pile is named after its full path. The same path always
    /// returns the same pile. Empty segments are ordinary keys, so `""`
    /// and `a..b` are valid paths. Nothing is created when the path
    /// conflicts.
    pub fn pile_at(&mut self, path: &str) -> Result<PileId, DeckError> {
        let parsed = PilePath::parse(path);
        let candidate = self.next_pile_id();

        let mut namespace = &mut self.root;
        for segment in parsed.parents() {
            namespace = namespace.namespace_entry(segment, path)?;
        }
        let (id, created) = namespace.pile_entry(parsed.leaf(), path, candidate)?;

        if created {
            self.push_pile(id, path.to_string());
        }
        Ok(id)
    }

    /// Resolve a dotted path without creating anything.
    #[must_use]
    pub fn find_pile(&self, path: &str) -> Option<PileId> {
        self.root.resolve(&PilePath::parse(path))
    }

    /// Resolve two paths, creating nothing unless both can be resolved.
    ///
    /// Fails if either path conflicts with the namespace, or if one path
    /// runs through the pile the other would name.
    pub fn pile_pair(&mut self, first: &str, second: &str) -> Result<(PileId, PileId), DeckError> {
        let a = PilePath::parse(first);
        let b = PilePath::parse(second);
        self.root.check(&a)?;
        self.root.check(&b)?;
        if a.is_strict_prefix_of(&b) {
            return Err(DeckError::PathConflict(second.to_string()));
        }
        if b.is_strict_prefix_of(&a) {
            return Err(DeckError::PathConflict(first.to_string()));
        }
        Ok((self.pile_at(first)?, self.pile_at(second)?))
    }

    /// A player's hand, created on first use as `"<player>'s hand"`.
    ///
    /// Hands live under the `hands` namespace, so `hands.<player>` is the
    /// same pile.
    pub fn hand(&mut self, player: &str) -> Result<PileId, DeckError> {
        let candidate = self.next_pile_id();
        let hands = self.root.namespace_entry(HANDS_NAMESPACE, HANDS_NAMESPACE)?;
        let (id, created) = hands.pile_entry(player, player, candidate)?;

        if created {
            self.push_pile(id, format!("{player}'s hand"));
        }
        Ok(id)
    }

    /// Move every card of `from`, bottom to top, onto `to`.
    ///
    /// The moved cards keep their relative order and land above the cards
    /// already in `to`.
    pub fn transfer_all(&mut self, from: PileId, to: PileId) -> Result<(), DeckError> {
        self.check_pile(from)?;
        self.check_pile(to)?;

        let snapshot = self.piles[from.index()].cards().to_vec();
        for id in snapshot {
            self.move_card(id, Some(to))?;
        }
        Ok(())
    }

    /// Move every live card, in id order, onto the pile at `path`.
    ///
    /// With no live cards nothing moves and no pile is created; the path
    /// is still checked for conflicts.
    pub fn move_all_to(&mut self, path: &str) -> Result<Option<PileId>, DeckError> {
        let ids = self.card_ids();
        if ids.is_empty() {
            self.root.check(&PilePath::parse(path))?;
            return Ok(None);
        }
        let target = self.pile_at(path)?;
        for id in ids {
            self.move_card(id, Some(target))?;
        }
        Ok(Some(target))
    }

    /// Shuffle a pile in place.
    pub fn shuffle_pile(&mut self, id: PileId) -> Result<(), DeckError> {
        self.check_pile(id)?;
        self.piles[id.index()].shuffle(&mut self.rng);
        Ok(())
    }

    /// Move the top card of the draw pile into `player`'s hand.
    ///
    /// Returns `None` when the draw pile is empty.
    pub fn draw(&mut self, player: &str) -> Result<Option<CardId>, DeckError> {
        let Some(top) = self.piles[self.draw.index()].top() else {
            return Ok(None);
        };
        let hand = self.hand(player)?;
        self.move_card(top, Some(hand))?;
        Ok(Some(top))
    }

    // === Display ===

    /// Comma-joined card descriptions, or `"empty"`.
    #[must_use]
    pub fn describe_pile(&self, id: PileId) -> String {
        let Some(pile) = self.pile(id) else {
            return "empty".to_string();
        };
        if pile.is_empty() {
            return "empty".to_string();
        }
        self.card_list(pile)
    }

    fn card_list(&self, pile: &Pile) -> String {
        pile.cards()
            .iter()
            .filter_map(|id| self.cards.get(id))
            .map(Card::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Dump of the whole pile tree.
    ///
    /// ```
    /// use dvorak_table::deck::Deck;
    ///
    /// let mut deck = Deck::with_seed(1);
    /// let ace = deck.create_card("Ace");
    /// let draw = deck.draw_pile();
    /// deck.move_card(ace, Some(draw)).unwrap();
    ///
    /// assert_eq!(deck.describe_namespace(), "{draw: [Card 1: Ace], discard: [], hands: {}}");
    /// ```
    #[must_use]
    pub fn describe_namespace(&self) -> String {
        let mut out = String::new();
        self.write_namespace(&self.root, &mut out);
        out
    }

    fn write_namespace(&self, namespace: &Namespace, out: &mut String) {
        out.push('{');
        for (i, (key, node)) in namespace.entries().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            out.push_str(key);
            out.push_str(": ");
            match node {
                Node::Namespace(inner) => self.write_namespace(inner, out),
                Node::Pile(id) => {
                    out.push('[');
                    if let Some(pile) = self.pile(*id) {
                        out.push_str(&self.card_list(pile));
                    }
                    out.push(']');
                }
            }
        }
        out.push('}');
    }

    // === Integrity ===

    /// Verify the location invariant and that every pile is reachable.
    pub fn check_integrity(&self) -> Result<(), String> {
        let mut seen: FxHashMap<CardId, PileId> = FxHashMap::default();

        for pile in &self.piles {
            for &id in pile.cards() {
                let card = self
                    .cards
                    .get(&id)
                    .ok_or_else(|| format!("{} holds unknown card {id}", pile.name()))?;
                if card.pile() != Some(pile.id()) {
                    return Err(format!("{card} listed in {} but points at {:?}", pile.name(), card.pile()));
                }
                if seen.insert(id, pile.id()).is_some() {
                    return Err(format!("{card} appears more than once"));
                }
            }
        }

        for card in self.cards.values() {
            match (card.pile(), seen.get(&card.id)) {
                (None, None) => {}
                (Some(p), Some(q)) if p == *q => {}
                (pile, listed) => {
                    return Err(format!("{card} points at {pile:?} but is listed in {listed:?}"));
                }
            }
        }

        let mut reachable = self.root.pile_ids();
        reachable.sort_unstable_by_key(|p| p.0);
        let all: Vec<_> = self.piles.iter().map(Pile::id).collect();
        if reachable != all {
            return Err(format!("namespace reaches {reachable:?}, arena holds {all:?}"));
        }

        Ok(())
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new(DeckRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck() -> Deck {
        Deck::with_seed(42)
    }

    #[test]
    fn test_new_deck() {
        let deck = deck();
        assert_eq!(deck.card_count(), 0);
        assert_eq!(deck.next_id(), CardId(1));
        assert_eq!(deck.pile(deck.draw_pile()).unwrap().name(), "Draw pile");
        assert_eq!(deck.pile(deck.discard_pile()).unwrap().name(), "Discard pile");
        deck.check_integrity().unwrap();
    }

    #[test]
    fn test_create_assigns_increasing_ids() {
        let mut deck = deck();
        assert_eq!(deck.create_card("Ace"), CardId(1));
        assert_eq!(deck.create_card("King"), CardId(2));
        assert!(deck.card(CardId(1)).unwrap().is_unplaced());
        assert_eq!(deck.card_location(CardId(1)).unwrap(), "Nowhere");
    }

    #[test]
    fn test_delete_retires_id() {
        let mut deck = deck();
        let ace = deck.create_card("Ace");
        let draw = deck.draw_pile();
        deck.move_card(ace, Some(draw)).unwrap();

        let removed = deck.delete_card(ace).unwrap();
        assert_eq!(removed.title, "Ace");
        assert_eq!(deck.card(ace).unwrap_err(), DeckError::CardNotFound(ace));
        assert!(deck.pile(draw).unwrap().is_empty());

        assert_eq!(deck.create_card("King"), CardId(2));
        deck.check_integrity().unwrap();
    }

    #[test]
    fn test_deleted_card_rejects_everything() {
        let mut deck = deck();
        let ace = deck.create_card("Ace");
        deck.delete_card(ace).unwrap();

        let err = DeckError::CardNotFound(ace);
        assert_eq!(deck.delete_card(ace).unwrap_err(), err);
        assert_eq!(deck.move_card(ace, None).unwrap_err(), err);
        assert_eq!(deck.card_location(ace).unwrap_err(), err);
    }

    #[test]
    fn test_move_to_same_pile_goes_on_top() {
        let mut deck = deck();
        let draw = deck.draw_pile();
        let a = deck.create_card("A");
        let b = deck.create_card("B");
        deck.move_card(a, Some(draw)).unwrap();
        deck.move_card(b, Some(draw)).unwrap();

        deck.move_card(a, Some(draw)).unwrap();
        assert_eq!(deck.pile(draw).unwrap().cards(), &[b, a]);
        deck.check_integrity().unwrap();
    }

    #[test]
    fn test_move_to_unknown_pile() {
        let mut deck = deck();
        let a = deck.create_card("A");
        let err = deck.move_card(a, Some(PileId(99))).unwrap_err();
        assert_eq!(err, DeckError::PileNotFound(PileId(99)));
        assert!(deck.card(a).unwrap().is_unplaced());
    }

    #[test]
    fn test_pile_at_is_idempotent() {
        let mut deck = deck();
        let first = deck.pile_at("a.b.c").unwrap();
        let second = deck.pile_at("a.b.c").unwrap();
        assert_eq!(first, second);
        assert_eq!(deck.pile(first).unwrap().name(), "a.b.c");
        assert_eq!(deck.pile_at("draw").unwrap(), deck.draw_pile());
        assert_eq!(deck.find_pile("a.b.c"), Some(first));
        assert_eq!(deck.find_pile("a.b"), None);
    }

    #[test]
    fn test_pile_at_conflicts() {
        let mut deck = deck();
        deck.pile_at("a.b").unwrap();
        let piles = deck.piles().len();

        for path in ["a", "a.b.c", "draw.top", "hands"] {
            assert_eq!(
                deck.pile_at(path).unwrap_err(),
                DeckError::PathConflict(path.to_string()),
                "{path:?}"
            );
        }
        assert_eq!(deck.piles().len(), piles);
    }

    #[test]
    fn test_empty_segments_resolve() {
        let mut deck = deck();
        for path in ["a..b", "table.", ""] {
            let first = deck.pile_at(path).unwrap();
            assert_eq!(deck.pile_at(path).unwrap(), first, "{path:?}");
            assert_eq!(deck.find_pile(path), Some(first));
            assert_eq!(deck.pile(first).unwrap().name(), path);
        }
        assert_eq!(deck.piles().len(), 5);
        deck.check_integrity().unwrap();
    }

    #[test]
    fn test_pile_pair_creates_nothing_on_conflict() {
        let mut deck = deck();
        let before = deck.describe_namespace();
        let piles = deck.piles().len();

        for (first, second) in [("fresh.pile", "hands"), ("hands", "fresh.pile"), ("x.y", "x.y.z"), ("x.y.z", "x.y")] {
            assert!(
                matches!(deck.pile_pair(first, second), Err(DeckError::PathConflict(_))),
                "{first:?} {second:?}"
            );
        }
        assert_eq!(deck.describe_namespace(), before);
        assert_eq!(deck.piles().len(), piles);
        assert_eq!(deck.find_pile("fresh.pile"), None);

        let (a, b) = deck.pile_pair("fresh.pile", "draw").unwrap();
        assert_eq!(deck.find_pile("fresh.pile"), Some(a));
        assert_eq!(b, deck.draw_pile());
        let (same, again) = deck.pile_pair("x.y", "x.y").unwrap();
        assert_eq!(same, again);
    }

    #[test]
    fn test_hand_shares_namespace() {
        let mut deck = deck();
        let hand = deck.hand("alice").unwrap();
        assert_eq!(deck.hand("alice").unwrap(), hand);
        assert_eq!(deck.pile(hand).unwrap().name(), "alice's hand");
        assert_eq!(deck.pile_at("hands.alice").unwrap(), hand);

        // Created by path first: the path name sticks.
        let bob = deck.pile_at("hands.bob").unwrap();
        assert_eq!(deck.hand("bob").unwrap(), bob);
        assert_eq!(deck.pile(bob).unwrap().name(), "hands.bob");
    }

    #[test]
    fn test_draw_takes_top() {
        let mut deck = deck();
        let draw = deck.draw_pile();
        let ace = deck.create_card("Ace");
        let king = deck.create_card("King");
        deck.move_card(ace, Some(draw)).unwrap();
        deck.move_card(king, Some(draw)).unwrap();

        assert_eq!(deck.draw("alice").unwrap(), Some(king));
        let hand = deck.hand("alice").unwrap();
        assert_eq!(deck.pile(hand).unwrap().cards(), &[king]);
        assert_eq!(deck.pile(draw).unwrap().cards(), &[ace]);
    }

    #[test]
    fn test_draw_from_empty_pile() {
        let mut deck = deck();
        assert_eq!(deck.draw("alice").unwrap(), None);
        assert_eq!(deck.find_pile("hands.alice"), None);
    }

    #[test]
    fn test_transfer_all_preserves_order() {
        let mut deck = deck();
        let alice = deck.hand("alice").unwrap();
        let bob = deck.hand("bob").unwrap();
        let ids: Vec<_> = (0..4).map(|i| deck.create_card(format!("c{i}"))).collect();
        deck.move_card(ids[0], Some(bob)).unwrap();
        for &id in &ids[1..] {
            deck.move_card(id, Some(alice)).unwrap();
        }

        deck.transfer_all(alice, bob).unwrap();
        assert_eq!(deck.pile(bob).unwrap().cards(), ids.as_slice());
        assert!(deck.pile(alice).unwrap().is_empty());
        deck.check_integrity().unwrap();
    }

    #[test]
    fn test_transfer_onto_itself() {
        let mut deck = deck();
        let draw = deck.draw_pile();
        let ids: Vec<_> = (0..3).map(|i| deck.create_card(format!("c{i}"))).collect();
        for &id in &ids {
            deck.move_card(id, Some(draw)).unwrap();
        }
        deck.transfer_all(draw, draw).unwrap();
        assert_eq!(deck.pile(draw).unwrap().cards(), ids.as_slice());
    }

    #[test]
    fn test_move_all_to() {
        let mut deck = deck();
        let draw = deck.draw_pile();
        for i in 0..5 {
            let id = deck.create_card(format!("c{i}"));
            deck.move_card(id, Some(draw)).unwrap();
        }
        let loose = deck.create_card("loose");

        let discard = deck.move_all_to("discard").unwrap().unwrap();
        assert_eq!(discard, deck.discard_pile());
        assert!(deck.pile(draw).unwrap().is_empty());
        assert_eq!(deck.pile(discard).unwrap().len(), 6);
        assert_eq!(deck.pile(discard).unwrap().top(), Some(loose));
        for card in deck.cards() {
            assert_eq!(deck.card_location(card.id).unwrap(), "In pile: Discard pile");
        }
    }

    #[test]
    fn test_move_all_to_without_cards() {
        let mut deck = deck();
        let before = deck.describe_namespace();

        assert_eq!(deck.move_all_to("ghost").unwrap(), None);
        assert_eq!(deck.find_pile("ghost"), None);
        assert_eq!(deck.describe_namespace(), before);
        assert_eq!(
            deck.move_all_to("hands").unwrap_err(),
            DeckError::PathConflict("hands".into())
        );
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut deck = deck();
        let draw = deck.draw_pile();
        for i in 0..10 {
            let id = deck.create_card(format!("c{i}"));
            deck.move_card(id, Some(draw)).unwrap();
        }
        let mut before = deck.pile(draw).unwrap().cards().to_vec();

        deck.shuffle_pile(draw).unwrap();

        let mut after = deck.pile(draw).unwrap().cards().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
        deck.check_integrity().unwrap();
    }

    #[test]
    fn test_describe_pile() {
        let mut deck = deck();
        let draw = deck.draw_pile();
        assert_eq!(deck.describe_pile(draw), "empty");

        let ace = deck.create_card("Ace");
        let king = deck.create_card("King");
        deck.move_card(ace, Some(draw)).unwrap();
        deck.move_card(king, Some(draw)).unwrap();
        assert_eq!(deck.describe_pile(draw), "Card 1: Ace, Card 2: King");
    }

    #[test]
    fn test_describe_namespace() {
        let mut deck = deck();
        let hand = deck.hand("alice").unwrap();
        let ace = deck.create_card("Ace");
        deck.move_card(ace, Some(hand)).unwrap();
        deck.pile_at("table.north").unwrap();

        assert_eq!(
            deck.describe_namespace(),
            "{draw: [], discard: [], hands: {alice: [Card 1: Ace]}, table: {north: []}}"
        );
    }

    #[test]
    fn test_reset() {
        let mut deck = deck();
        deck.create_card("Ace");
        deck.pile_at("a.b").unwrap();
        deck.hand("alice").unwrap();

        deck.reset();

        assert_eq!(deck.card_count(), 0);
        assert_eq!(deck.piles().len(), 2);
        assert_eq!(deck.find_pile("a.b"), None);
        assert_eq!(deck.create_card("Ace"), CardId(1));
        deck.check_integrity().unwrap();
    }
}
