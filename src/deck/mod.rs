//! The deck: card registry, pile arena and pile namespace.
//!
//! ## Key Types
//!
//! - `Deck`: owns every card and pile of a session and enforces the
//!   location invariant
//!
//! Sharing a deck between command senders is `session::Table`'s job.

pub mod state;

pub use state::Deck;
