//! Core types: identifiers, errors, RNG, configuration.
//!
//! Everything here is independent of how cards and piles are stored.

pub mod entity;
pub mod error;
pub mod rng;
pub mod config;

pub use entity::{CardId, PileId};
pub use error::{ConfigError, DeckError};
pub use rng::DeckRng;
pub use config::{TableConfig, DEFAULT_PREFIX, DISCARD_PILE, DRAW_PILE, HANDS_NAMESPACE};
