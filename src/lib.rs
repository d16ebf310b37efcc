//! # dvorak-table
//!
//! A shared card table for chat games: a deck of uniquely numbered cards
//! sorted into named piles and per-player hands, driven by chat commands.
//!
//! ## Design Principles
//!
//! 1. **Arena Ownership**: The deck owns every card and pile. Cards refer
//!    to their pile by `PileId`, piles list `CardId`s; there are no
//!    reference cycles.
//!
//! 2. **One Mover**: `Deck::move_card` is the single place that changes a
//!    card's location, so a card is always in at most one pile and its
//!    back-reference agrees with that pile.
//!
//! 3. **Serialized Commands**: A `Table` holds the deck behind a lock for
//!    the full run of each command. Reset swaps the deck under that lock.
//!
//! ## Modules
//!
//! - `core`: ids, errors, RNG, configuration
//! - `cards`: the card type
//! - `piles`: piles, dotted paths, the pile namespace tree
//! - `deck`: the deck arena and its operations
//! - `commands`: command table, handlers, reply routing
//! - `session`: the lock-guarded table shared with a transport

pub mod core;
pub mod cards;
pub mod piles;
pub mod deck;
pub mod commands;
pub mod session;

// Re-export commonly used types
pub use crate::core::{CardId, ConfigError, DeckError, DeckRng, PileId, TableConfig};

pub use crate::cards::Card;

pub use crate::piles::{Namespace, Node, Pile, PilePath};

pub use crate::deck::Deck;

pub use crate::commands::{
    CommandLine, CommandSpec, CommandTable, Context, Invocation, Priority, Reply, Visibility,
};

pub use crate::session::Table;
